//! Exercise and plan catalog queries.

use std::collections::HashMap;

use rusqlite::{params, OptionalExtension};

use super::id_column;
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Exercise, Plan, PlanItemRef},
    seed::{SeedSummary, DEFAULT_EXERCISES, DEFAULT_PLANS},
    store::PlanStore,
};

const SELECT_EXERCISE_SQL: &str = "SELECT id, name, instructions FROM exercises WHERE id = ?1";
const SELECT_ALL_EXERCISES_SQL: &str = "SELECT id, name, instructions FROM exercises ORDER BY name, id";
const INSERT_EXERCISE_SQL: &str = "INSERT INTO exercises (name, instructions) VALUES (?1, ?2)";
const CHECK_EXERCISE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM exercises WHERE id = ?1)";

const SELECT_PLAN_SQL: &str = "SELECT id, name, item_list FROM plans WHERE id = ?1";
const SELECT_ALL_PLANS_SQL: &str = "SELECT id, name, item_list FROM plans ORDER BY name, id";
const INSERT_PLAN_SQL: &str = "INSERT INTO plans (name, item_list) VALUES (?1, ?2)";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const CHECK_PLAN_NAME_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE name = ?1)";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

fn exercise_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Exercise> {
    let instructions: Option<String> = row.get(2)?;
    Ok(Exercise::from_stored(
        id_column(row, 0)?,
        row.get(1)?,
        instructions.as_deref(),
    ))
}

fn plan_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Plan> {
    Ok(Plan {
        id: id_column(row, 0)?,
        name: row.get(1)?,
        item_list: row.get(2)?,
    })
}

impl PlanStore for super::Database {
    fn get_plan(&self, plan_id: u64) -> Result<Option<Plan>> {
        self.connection
            .query_row(SELECT_PLAN_SQL, params![plan_id as i64], plan_from_row)
            .optional()
            .db_context("Failed to query plan")
    }

    fn get_exercise(&self, exercise_id: u64) -> Result<Option<Exercise>> {
        self.connection
            .query_row(
                SELECT_EXERCISE_SQL,
                params![exercise_id as i64],
                exercise_from_row,
            )
            .optional()
            .db_context("Failed to query exercise")
    }
}

impl super::Database {
    /// Lists all exercises ordered by name.
    pub fn list_exercises(&self) -> Result<Vec<Exercise>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_EXERCISES_SQL)
            .db_context("Failed to prepare query")?;

        let exercises = stmt
            .query_map([], exercise_from_row)
            .db_context("Failed to query exercises")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read exercise row")?;

        Ok(exercises)
    }

    /// Lists all plans ordered by name.
    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_PLANS_SQL)
            .db_context("Failed to prepare query")?;

        let plans = stmt
            .query_map([], plan_from_row)
            .db_context("Failed to query plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan row")?;

        Ok(plans)
    }

    /// Adds an exercise to the catalog.
    pub fn create_exercise(&mut self, name: &str, instructions: &[String]) -> Result<Exercise> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::invalid_input("name").with_reason("Name cannot be empty"));
        }

        let exercise = Exercise {
            id: 0,
            name: name.to_string(),
            instructions: instructions
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        };

        self.connection
            .execute(
                INSERT_EXERCISE_SQL,
                params![exercise.name, exercise.instructions_text()],
            )
            .db_context("Failed to insert exercise")?;

        Ok(Exercise {
            id: self.connection.last_insert_rowid() as u64,
            ..exercise
        })
    }

    /// Creates a plan from an ordered list of item references.
    ///
    /// The name must be non-empty and unused, the list must be non-empty, and
    /// every referenced exercise and nested plan must already exist.
    pub fn create_plan(&mut self, name: &str, items: &[PlanItemRef]) -> Result<Plan> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::invalid_input("name").with_reason("Name cannot be empty"));
        }
        if items.is_empty() {
            return Err(TrackerError::invalid_input("items")
                .with_reason("Please add at least one exercise or plan"));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let name_taken: bool = tx
            .query_row(CHECK_PLAN_NAME_SQL, params![name], |row| row.get(0))
            .db_context("Failed to check plan name")?;
        if name_taken {
            return Err(TrackerError::invalid_input("name")
                .with_reason(format!("The name '{name}' already exists")));
        }

        for item in items {
            match *item {
                PlanItemRef::Exercise(id) => {
                    let exists: bool = tx
                        .query_row(CHECK_EXERCISE_EXISTS_SQL, params![id as i64], |row| row.get(0))
                        .db_context("Failed to check exercise existence")?;
                    if !exists {
                        return Err(TrackerError::ExerciseNotFound { id });
                    }
                }
                PlanItemRef::NestedPlan(id) => {
                    let exists: bool = tx
                        .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
                        .db_context("Failed to check plan existence")?;
                    if !exists {
                        return Err(TrackerError::PlanNotFound { id });
                    }
                }
                PlanItemRef::Break => {}
            }
        }

        let item_list = PlanItemRef::join(items);
        tx.execute(INSERT_PLAN_SQL, params![name, item_list])
            .db_context("Failed to insert plan")?;
        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plan {
            id,
            name: name.to_string(),
            item_list,
        })
    }

    /// Deletes a plan.
    ///
    /// Plans that include it are left as they are; the dangling reference
    /// surfaces as a resolver warning.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if no plan has this ID.
    pub fn delete_plan(&mut self, plan_id: u64) -> Result<()> {
        let Ok(key) = i64::try_from(plan_id) else {
            return Err(TrackerError::PlanNotFound { id: plan_id });
        };

        let deleted = self
            .connection
            .execute(DELETE_PLAN_SQL, params![key])
            .db_context("Failed to delete plan")?;
        if deleted == 0 {
            return Err(TrackerError::PlanNotFound { id: plan_id });
        }

        log::info!("Deleted plan {plan_id}");
        Ok(())
    }

    /// Replaces the catalog with the built-in default exercises and plans.
    ///
    /// Existing exercises and plans are removed and ID sequences reset, so the
    /// defaults always receive the same IDs. History is untouched.
    pub fn seed_catalog(&mut self) -> Result<SeedSummary> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute_batch(
            "DELETE FROM exercises;
             DELETE FROM plans;
             DELETE FROM sqlite_sequence WHERE name IN ('exercises', 'plans');",
        )
        .db_context("Failed to clear catalog")?;

        let mut ids_by_name = HashMap::new();
        for (name, instructions) in DEFAULT_EXERCISES {
            tx.execute(INSERT_EXERCISE_SQL, params![name, instructions.join("\n")])
                .db_context("Failed to insert exercise")?;
            ids_by_name.insert(*name, tx.last_insert_rowid() as u64);
        }

        let mut plans = 0;
        for (plan_name, exercise_names) in DEFAULT_PLANS {
            let items = exercise_names
                .iter()
                .map(|key| ids_by_name.get(key).copied().map(PlanItemRef::Exercise))
                .collect::<Option<Vec<_>>>();

            let Some(items) = items else {
                log::warn!("Skipping default plan '{plan_name}': unknown exercise key");
                continue;
            };

            tx.execute(INSERT_PLAN_SQL, params![plan_name, PlanItemRef::join(&items)])
                .db_context("Failed to insert plan")?;
            plans += 1;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        log::info!(
            "Seeded catalog with {} exercises and {plans} plans",
            ids_by_name.len()
        );

        Ok(SeedSummary {
            exercises: ids_by_name.len(),
            plans,
        })
    }
}
