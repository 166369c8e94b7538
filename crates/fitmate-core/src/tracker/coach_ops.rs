//! Personalised plan operations for the Tracker.

use std::sync::Arc;

use super::Tracker;
use crate::{
    coach::{spawn_generation, PlanGenerator},
    error::{Result, TrackerError},
    models::{GeneratedPlan, UserProfile},
};

impl Tracker {
    /// Generates a plan off the caller's thread and saves it.
    ///
    /// A failing generator is replaced by the fallback plan; only an invalid
    /// profile or a storage failure is an error.
    pub async fn generate_plan(
        &self,
        generator: Arc<dyn PlanGenerator>,
        profile: UserProfile,
    ) -> Result<GeneratedPlan> {
        let plan = spawn_generation(generator, profile)
            .await
            .map_err(|e| TrackerError::Generation {
                message: format!("Generation task ended without a result: {e}"),
            })??;

        let to_save = plan.clone();
        let id = self
            .with_database(move |db| db.save_generated_plan(&to_save))
            .await?;
        log::info!("Saved generated plan {id}");

        Ok(plan)
    }

    /// Saved plans, newest first.
    pub async fn list_generated_plans(&self) -> Result<Vec<GeneratedPlan>> {
        self.with_database(|db| db.list_generated_plans()).await
    }
}
