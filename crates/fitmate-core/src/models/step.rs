//! Resolved steps and the flattened plan a session runs through.

use serde::{Deserialize, Serialize};

use super::Exercise;

/// Minutes assigned to every step under the uniform pacing policy.
pub const DEFAULT_STEP_MINUTES: u32 = 1;

/// Display name of a break step.
pub const BREAK_NAME: &str = "Break Time";

/// Single instruction line shown during a break.
pub const BREAK_INSTRUCTION: &str = "Rest for 1 minute.";

/// Whether a step is work or rest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Exercise,
    Break,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Exercise => "exercise",
            StepKind::Break => "break",
        }
    }
}

/// One flattened, timed unit of a resolved plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    pub kind: StepKind,
    pub name: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Always greater than zero
    pub duration_minutes: u32,
}

impl Step {
    /// Step for a catalog exercise.
    pub fn exercise(exercise: &Exercise) -> Self {
        Self {
            kind: StepKind::Exercise,
            name: exercise.name.clone(),
            instructions: exercise.instructions.clone(),
            duration_minutes: DEFAULT_STEP_MINUTES,
        }
    }

    /// The fixed one-minute rest step.
    pub fn break_time() -> Self {
        Self {
            kind: StepKind::Break,
            name: BREAK_NAME.to_string(),
            instructions: vec![BREAK_INSTRUCTION.to_string()],
            duration_minutes: DEFAULT_STEP_MINUTES,
        }
    }

    pub fn duration_seconds(&self) -> u64 {
        u64::from(self.duration_minutes) * 60
    }
}

/// A plan with all nesting flattened into an ordered list of steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedPlan {
    /// ID of the plan resolution started from
    pub source_plan_id: u64,

    /// Name of the root plan
    pub name: String,

    /// Steps in execution order
    pub steps: Vec<Step>,
}

impl ResolvedPlan {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of step durations in minutes.
    pub fn total_minutes(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.duration_minutes)).sum()
    }

    /// Sum of step durations in seconds.
    pub fn total_seconds(&self) -> u64 {
        self.steps.iter().map(Step::duration_seconds).sum()
    }
}
