//! Storage seams consumed by resolution and session logging.
//!
//! [`PlanStore`] is the read-only view of the catalog that the resolver
//! walks; [`HistoryStore`] is the append-only workout log. [`crate::Database`]
//! implements both against SQLite.

use std::collections::BTreeSet;

use jiff::civil::Date;

use crate::{
    error::Result,
    history::workout_from_result,
    models::{Exercise, NewWorkout, Plan, WorkoutRecord},
    session::SessionResult,
};

/// Read-only access to exercise and plan definitions.
///
/// A missing row is `Ok(None)`; only storage failures are errors.
pub trait PlanStore {
    /// Look up a plan by ID.
    fn get_plan(&self, plan_id: u64) -> Result<Option<Plan>>;

    /// Look up an exercise by ID.
    fn get_exercise(&self, exercise_id: u64) -> Result<Option<Exercise>>;
}

/// Append-only persistence of finished workouts.
pub trait HistoryStore {
    /// Append one workout row and return its ID. Never merges rows.
    fn record_workout(&mut self, workout: &NewWorkout) -> Result<u64>;

    /// Record a finished session for `user_id` on `date`.
    ///
    /// Returns `None` without writing when the session ended before any time
    /// elapsed.
    fn record(
        &mut self,
        result: &SessionResult,
        user_id: u64,
        date: Date,
    ) -> Result<Option<WorkoutRecord>> {
        let Some(workout) = workout_from_result(user_id, result, date) else {
            return Ok(None);
        };

        let id = self.record_workout(&workout)?;
        Ok(Some(WorkoutRecord {
            id,
            user_id: workout.user_id,
            kind: workout.kind,
            duration_minutes: workout.duration_minutes,
            calories: workout.calories,
            date: workout.date,
        }))
    }

    /// Distinct dates on which the user logged at least one workout.
    fn dates_with_activity(&self, user_id: u64) -> Result<BTreeSet<Date>>;

    /// The user's workouts, most recent first.
    fn recent_workouts(&self, user_id: u64, limit: usize) -> Result<Vec<WorkoutRecord>>;
}
