//! Data models for the catalog, resolved plans and history.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures stay free of
//! presentation logic.
//!
//! - [`exercise`]: catalog exercises
//! - [`plan`]: stored plans and their item references
//! - [`step`]: flattened steps and [`ResolvedPlan`]
//! - [`history`]: workout and weight records
//! - [`profile`]: personalisation input and generated plans
//!
//! # Examples
//!
//! ```rust
//! use fitmate_core::models::{Plan, PlanItemRef};
//!
//! let plan = Plan {
//!     id: 1,
//!     name: "Warmup".to_string(),
//!     item_list: "E1,-1,P2".to_string(),
//! };
//! let items: Vec<PlanItemRef> = plan.items().filter_map(Result::ok).collect();
//! assert_eq!(
//!     items,
//!     vec![
//!         PlanItemRef::Exercise(1),
//!         PlanItemRef::Break,
//!         PlanItemRef::NestedPlan(2),
//!     ]
//! );
//! ```

pub mod exercise;
pub mod history;
pub mod plan;
pub mod profile;
pub mod step;


pub use exercise::Exercise;
pub use history::{DailyTotals, NewWorkout, WeightRecord, WorkoutRecord};
pub use plan::{Plan, PlanItemRef, BREAK_TOKEN};
pub use profile::{GeneratedPlan, UserProfile};
pub use step::{ResolvedPlan, Step, StepKind, BREAK_INSTRUCTION, BREAK_NAME, DEFAULT_STEP_MINUTES};
