//! Workout and weight history queries.

use std::collections::BTreeSet;

use jiff::civil::Date;
use rusqlite::{params, Transaction};

use super::{date_column, id_column, DEFAULT_USER_NAME};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{DailyTotals, NewWorkout, WeightRecord, WorkoutRecord},
    store::HistoryStore,
};

const ENSURE_USER_SQL: &str = "INSERT OR IGNORE INTO users (user_id, name) VALUES (?1, ?2)";
const INSERT_WORKOUT_SQL: &str = "INSERT INTO workouts (user_id, type, duration_minutes, calories, date) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_WORKOUT_DATES_SQL: &str = "SELECT DISTINCT date FROM workouts WHERE user_id = ?1";
const SELECT_RECENT_WORKOUTS_SQL: &str = "SELECT id, user_id, type, duration_minutes, calories, date FROM workouts WHERE user_id = ?1 ORDER BY date DESC, id DESC LIMIT ?2";
const SELECT_DAILY_TOTALS_SQL: &str = "SELECT date, SUM(calories), SUM(duration_minutes) FROM workouts WHERE user_id = ?1 GROUP BY date ORDER BY date DESC LIMIT ?2";
const INSERT_WEIGHT_SQL: &str = "INSERT INTO weights (user_id, weight, date) VALUES (?1, ?2, ?3)";
const SELECT_RECENT_WEIGHTS_SQL: &str = "SELECT id, user_id, weight, date FROM weights WHERE user_id = ?1 ORDER BY date DESC, id DESC LIMIT ?2";

/// Upper bound accepted for a body-weight sample.
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// SQLite stores user IDs as signed integers; reject IDs that would wrap.
fn user_param(user_id: u64) -> Result<i64> {
    i64::try_from(user_id).map_err(|_| {
        TrackerError::invalid_input("user_id")
            .with_reason(format!("must be at most {}", i64::MAX))
    })
}

/// Create the user row on first write so foreign keys hold.
fn ensure_user(tx: &Transaction<'_>, user_id: i64) -> Result<()> {
    tx.execute(ENSURE_USER_SQL, params![user_id, DEFAULT_USER_NAME])
        .db_context("Failed to ensure user")?;
    Ok(())
}

fn limit_param(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

impl HistoryStore for super::Database {
    fn record_workout(&mut self, workout: &NewWorkout) -> Result<u64> {
        let user_key = user_param(workout.user_id)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        ensure_user(&tx, user_key)?;
        tx.execute(
            INSERT_WORKOUT_SQL,
            params![
                user_key,
                workout.kind,
                workout.duration_minutes,
                workout.calories,
                workout.date.to_string(),
            ],
        )
        .db_context("Failed to insert workout")?;
        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(id)
    }

    fn dates_with_activity(&self, user_id: u64) -> Result<BTreeSet<Date>> {
        let user_key = user_param(user_id)?;
        let mut stmt = self
            .connection
            .prepare(SELECT_WORKOUT_DATES_SQL)
            .db_context("Failed to prepare query")?;

        let dates = stmt
            .query_map(params![user_key], |row| date_column(row, 0))
            .db_context("Failed to query workout dates")?
            .collect::<rusqlite::Result<BTreeSet<_>>>()
            .db_context("Failed to read workout date")?;

        Ok(dates)
    }

    fn recent_workouts(&self, user_id: u64, limit: usize) -> Result<Vec<WorkoutRecord>> {
        let user_key = user_param(user_id)?;
        let mut stmt = self
            .connection
            .prepare(SELECT_RECENT_WORKOUTS_SQL)
            .db_context("Failed to prepare query")?;

        let records = stmt
            .query_map(params![user_key, limit_param(limit)], |row| {
                Ok(WorkoutRecord {
                    id: id_column(row, 0)?,
                    user_id: id_column(row, 1)?,
                    kind: row.get(2)?,
                    duration_minutes: row.get(3)?,
                    calories: row.get(4)?,
                    date: date_column(row, 5)?,
                })
            })
            .db_context("Failed to query workouts")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read workout row")?;

        Ok(records)
    }
}

impl super::Database {
    /// Per-date calorie and minute sums, most recent date first.
    pub fn daily_totals(&self, user_id: u64, limit: usize) -> Result<Vec<DailyTotals>> {
        let user_key = user_param(user_id)?;
        let mut stmt = self
            .connection
            .prepare(SELECT_DAILY_TOTALS_SQL)
            .db_context("Failed to prepare query")?;

        let totals = stmt
            .query_map(params![user_key, limit_param(limit)], |row| {
                Ok(DailyTotals {
                    date: date_column(row, 0)?,
                    calories: id_column(row, 1)?,
                    duration_minutes: id_column(row, 2)?,
                })
            })
            .db_context("Failed to query daily totals")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read daily totals row")?;

        Ok(totals)
    }

    /// Records a body-weight sample.
    pub fn add_weight(&mut self, user_id: u64, weight_kg: f64, date: Date) -> Result<WeightRecord> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > MAX_WEIGHT_KG {
            return Err(TrackerError::invalid_input("weight")
                .with_reason(format!("must be greater than 0 and at most {MAX_WEIGHT_KG} kg")));
        }

        let user_key = user_param(user_id)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        ensure_user(&tx, user_key)?;
        tx.execute(
            INSERT_WEIGHT_SQL,
            params![user_key, weight_kg, date.to_string()],
        )
        .db_context("Failed to insert weight")?;
        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(WeightRecord {
            id,
            user_id,
            weight_kg,
            date,
        })
    }

    /// The user's weight samples, most recent first.
    pub fn recent_weights(&self, user_id: u64, limit: usize) -> Result<Vec<WeightRecord>> {
        let user_key = user_param(user_id)?;
        let mut stmt = self
            .connection
            .prepare(SELECT_RECENT_WEIGHTS_SQL)
            .db_context("Failed to prepare query")?;

        let records = stmt
            .query_map(params![user_key, limit_param(limit)], |row| {
                Ok(WeightRecord {
                    id: id_column(row, 0)?,
                    user_id: id_column(row, 1)?,
                    weight_kg: row.get(2)?,
                    date: date_column(row, 3)?,
                })
            })
            .db_context("Failed to query weights")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read weight row")?;

        Ok(records)
    }
}
