//! Markdown formatting for domain models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Groups of models are wrapped in newtypes from [`collections`] so empty
//! lists get a consistent message, and operation outcomes use the wrappers
//! in [`results`] and [`status`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers and   │    │    Markdown     │
//! │ (Plan, Session) │───▶│  Result Types   │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use fitmate_core::display::{Clock, OperationStatus};
//!
//! assert_eq!(Clock(90).to_string(), "01:30");
//! assert_eq!(
//!     OperationStatus::success("Catalog reset").to_string(),
//!     "Success: Catalog reset\n"
//! );
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{
    ActivityCalendar, DailyReport, Exercises, GeneratedPlans, Plans, Weights, Workouts,
};
pub use datetime::{Clock, LocalDateTime};
pub use results::CreateResult;
pub use status::OperationStatus;
