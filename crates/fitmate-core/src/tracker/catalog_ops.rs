//! Exercise and plan catalog operations for the Tracker.

use super::Tracker;
use crate::{
    error::Result,
    models::{Exercise, Plan},
    params::{CreateExercise, CreatePlan, Id},
    seed::SeedSummary,
    store::PlanStore,
};

impl Tracker {
    /// Lists all exercises ordered by name.
    pub async fn list_exercises(&self) -> Result<Vec<Exercise>> {
        self.with_database(|db| db.list_exercises()).await
    }

    /// Retrieves an exercise by its ID.
    pub async fn get_exercise(&self, params: &Id) -> Result<Option<Exercise>> {
        let exercise_id = params.id;
        self.with_database(move |db| db.get_exercise(exercise_id))
            .await
    }

    /// Adds an exercise to the catalog.
    pub async fn create_exercise(&self, params: &CreateExercise) -> Result<Exercise> {
        let name = params.name.clone();
        let instructions = params.instructions.clone();

        self.with_database(move |db| db.create_exercise(&name, &instructions))
            .await
    }

    /// Lists all plans ordered by name.
    pub async fn list_plans(&self) -> Result<Vec<Plan>> {
        self.with_database(|db| db.list_plans()).await
    }

    /// Retrieves a plan by its ID, unresolved.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let plan_id = params.id;
        self.with_database(move |db| db.get_plan(plan_id)).await
    }

    /// Creates a plan after checking its name and every referenced row.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        let name = params.name.clone();
        let items = params.items.clone();

        self.with_database(move |db| db.create_plan(&name, &items))
            .await
    }

    /// Deletes a plan by its ID.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if the plan does not exist.
    pub async fn delete_plan(&self, params: &Id) -> Result<()> {
        let plan_id = params.id;
        self.with_database(move |db| db.delete_plan(plan_id)).await
    }

    /// Replaces the catalog with the built-in defaults.
    pub async fn seed_catalog(&self) -> Result<SeedSummary> {
        self.with_database(|db| db.seed_catalog()).await
    }
}
