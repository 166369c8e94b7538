//! Parameter structures for tracker operations.
//!
//! These carry no interface-specific derives. The CLI defines its own clap
//! argument structs and converts them with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    CLI Args     │    │  Core Params    │    │     Tracker     │
//! │ (clap derives)  │───▶│ (serde derives) │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::PlanItemRef;

/// User the CLI acts for when none is given.
pub const DEFAULT_USER_ID: u64 = 1;

/// Number of history rows returned when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

fn default_user_id() -> u64 {
    DEFAULT_USER_ID
}

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    pub id: u64,
}

/// Parameters for adding an exercise to the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateExercise {
    pub name: String,
    /// Instruction lines, in order
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// Parameters for creating a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Unique plan name
    pub name: String,
    /// Exercises, breaks and nested plans, in order
    pub items: Vec<PlanItemRef>,
}

/// Parameters for reading a user's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    #[serde(default = "default_user_id")]
    pub user_id: u64,
    /// Maximum number of rows to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID,
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Parameters for recording a body-weight sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddWeight {
    #[serde(default = "default_user_id")]
    pub user_id: u64,
    pub weight_kg: f64,
    /// Date of the sample; today when absent
    #[serde(default)]
    pub date: Option<Date>,
}
