//! Workout and body-weight history records.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A persisted workout, one row per terminated session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRecord {
    /// Unique identifier for the record
    pub id: u64,

    /// Owner of the record
    pub user_id: u64,

    /// Workout type, the name of the plan that was run
    #[serde(rename = "type")]
    pub kind: String,

    /// Credited duration in whole minutes
    pub duration_minutes: u32,

    /// Estimated calories burned
    pub calories: u32,

    /// Calendar date the workout was logged on
    pub date: Date,
}

/// A workout row that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewWorkout {
    pub user_id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration_minutes: u32,
    pub calories: u32,
    pub date: Date,
}

/// A body-weight sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightRecord {
    pub id: u64,
    pub user_id: u64,
    pub weight_kg: f64,
    pub date: Date,
}

/// Calories and minutes summed over one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyTotals {
    pub date: Date,
    pub calories: u64,
    pub duration_minutes: u64,
}
