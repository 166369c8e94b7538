//! Database operations and SQLite management for the tracker.
//!
//! This module owns the SQLite connection, schema management and the query
//! interfaces for the exercise/plan catalog, workout and weight history, and
//! saved personalised plans. Every [`Database`] value is meant to be short
//! lived: open, act, drop.

use std::path::Path;

use rusqlite::{types::Type, Connection};

use crate::error::{DatabaseResultExt, Result};

pub mod catalog_queries;
pub mod coach_queries;
pub mod history_queries;
pub mod schema;

/// Name given to users created implicitly on first write.
pub const DEFAULT_USER_NAME: &str = "Default User";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Read a `YYYY-MM-DD` text column as a civil date.
pub(crate) fn date_column(row: &rusqlite::Row<'_>, index: usize) -> rusqlite::Result<jiff::civil::Date> {
    row.get::<_, String>(index)?
        .parse::<jiff::civil::Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Read a non-negative integer column as `u64`.
pub(crate) fn id_column(row: &rusqlite::Row<'_>, index: usize) -> rusqlite::Result<u64> {
    let value: i64 = row.get(index)?;
    u64::try_from(value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Integer, Box::new(e)))
}
