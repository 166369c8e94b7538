//! High-level tracker API.
//!
//! [`Tracker`] is the async entry point used by the CLI. Every operation runs
//! on tokio's blocking pool with its own short-lived [`Database`]
//! connection, so no transaction outlives the call that opened it and
//! sessions never hold the database.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Tracker     │    │  Resolver and   │    │    Database     │
//! │  (async ops)    │───▶│ history helpers │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fitmate_core::{params::Id, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("fitmate.db"))
//!     .build()
//!     .await?;
//!
//! tracker.seed_catalog().await?;
//! let resolution = tracker.resolve_plan(&Id { id: 1 }).await?;
//! println!("{}", resolution.plan);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TrackerError},
};

pub mod builder;
pub mod catalog_ops;
pub mod coach_ops;
pub mod history_ops;
pub mod session_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

/// Main tracker interface.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite file this tracker operates on.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Open a connection on the blocking pool and run `op` against it.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(TrackerError::join)?
    }
}
