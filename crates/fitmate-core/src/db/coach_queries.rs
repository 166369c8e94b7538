//! Persistence of generated personalised plans.

use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, Result},
    models::GeneratedPlan,
};

const INSERT_GENERATED_PLAN_SQL: &str =
    "INSERT INTO generated_plans (plan_data, created_at) VALUES (?1, ?2)";
const SELECT_GENERATED_PLANS_SQL: &str =
    "SELECT id, plan_data FROM generated_plans ORDER BY created_at DESC, id DESC";

impl super::Database {
    /// Stores a generated plan as JSON and returns its row ID.
    pub fn save_generated_plan(&mut self, plan: &GeneratedPlan) -> Result<u64> {
        let plan_data = serde_json::to_string(plan)?;

        self.connection
            .execute(
                INSERT_GENERATED_PLAN_SQL,
                params![plan_data, plan.generated_at.to_string()],
            )
            .db_context("Failed to insert generated plan")?;

        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Lists saved plans, newest first. Rows that no longer deserialize are
    /// skipped.
    pub fn list_generated_plans(&self) -> Result<Vec<GeneratedPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_GENERATED_PLANS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))
            .db_context("Failed to query generated plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read generated plan row")?;

        let plans = rows
            .into_iter()
            .filter_map(|(id, data)| match serde_json::from_str(&data) {
                Ok(plan) => Some(plan),
                Err(e) => {
                    log::warn!("Skipping unreadable generated plan {id}: {e}");
                    None
                }
            })
            .collect();

        Ok(plans)
    }
}
