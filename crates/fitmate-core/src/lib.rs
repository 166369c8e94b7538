//! Core library for the FitMate fitness tracker.
//!
//! The crate stores an exercise and plan catalog, flattens nested training
//! plans into timed steps, runs those steps as a session and keeps workout,
//! weight and personalised-plan history.
//!
//! # Layout
//!
//! - [`models`]: plain data types (exercises, plans, steps, history rows)
//! - [`store`]: the storage seams the resolver and session logging use
//! - [`resolver`]: cycle-safe expansion of nested plans
//! - [`session`]: the tick-driven session state machine
//! - [`history`]: minute credit and calorie estimates for finished sessions
//! - [`coach`]: personalised plan generation with a local fallback
//! - [`db`]: SQLite implementation of the stores
//! - [`tracker`]: async facade used by the CLI
//! - [`display`]: markdown `Display` implementations and wrappers
//!
//! # Quick Start
//!
//! ```rust
//! use fitmate_core::{params::Id, session::TickOutcome, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("fitmate.db"))
//!     .build()
//!     .await?;
//! tracker.seed_catalog().await?;
//!
//! let mut session = tracker.start_session(&Id { id: 1 }).await?;
//! let result = loop {
//!     // A real host ticks once per second
//!     if let TickOutcome::Completed(result) = session.tick() {
//!         break result;
//!     }
//! };
//!
//! if let Some(record) = tracker.log_session(1, &result).await? {
//!     println!("{record}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod coach;
pub mod db;
pub mod display;
pub mod error;
pub mod history;
pub mod models;
pub mod params;
pub mod resolver;
pub mod seed;
pub mod session;
pub mod store;
pub mod tracker;

pub use db::Database;
pub use error::{Result, TrackerError};
pub use models::{Exercise, Plan, PlanItemRef, ResolvedPlan, Step, StepKind};
pub use resolver::{resolve, Resolution, ResolveWarning};
pub use session::{Progress, Session, SessionResult, SessionStatus, TickOutcome};
pub use store::{HistoryStore, PlanStore};
pub use tracker::{Tracker, TrackerBuilder};
