//! Workout and weight history operations for the Tracker.

use std::collections::BTreeSet;

use jiff::{civil::Date, Zoned};

use super::Tracker;
use crate::{
    error::Result,
    models::{DailyTotals, WeightRecord, WorkoutRecord},
    params::{AddWeight, History},
    store::HistoryStore,
};

impl Tracker {
    /// The user's most recent workouts.
    pub async fn recent_workouts(&self, params: &History) -> Result<Vec<WorkoutRecord>> {
        let History { user_id, limit } = *params;
        self.with_database(move |db| db.recent_workouts(user_id, limit))
            .await
    }

    /// Dates on which the user logged at least one workout.
    pub async fn activity_dates(&self, user_id: u64) -> Result<BTreeSet<Date>> {
        self.with_database(move |db| db.dates_with_activity(user_id))
            .await
    }

    /// Calories and minutes per day, most recent first.
    pub async fn daily_totals(&self, params: &History) -> Result<Vec<DailyTotals>> {
        let History { user_id, limit } = *params;
        self.with_database(move |db| db.daily_totals(user_id, limit))
            .await
    }

    /// Records a body-weight sample, dated today unless a date is given.
    pub async fn add_weight(&self, params: &AddWeight) -> Result<WeightRecord> {
        let user_id = params.user_id;
        let weight_kg = params.weight_kg;
        let date = params.date.unwrap_or_else(|| Zoned::now().date());

        self.with_database(move |db| db.add_weight(user_id, weight_kg, date))
            .await
    }

    /// The user's most recent weight samples.
    pub async fn recent_weights(&self, params: &History) -> Result<Vec<WeightRecord>> {
        let History { user_id, limit } = *params;
        self.with_database(move |db| db.recent_weights(user_id, limit))
            .await
    }
}
