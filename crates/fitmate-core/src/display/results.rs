//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{
    models::{Exercise, Plan, WeightRecord, WorkoutRecord},
    seed::SeedSummary,
};

/// Wrapper type for displaying the result of create operations.
///
/// ```rust
/// use fitmate_core::{display::CreateResult, models::Plan};
///
/// let plan = Plan {
///     id: 4,
///     name: "Evening Stretch".to_string(),
///     item_list: "7,-1,8".to_string(),
/// };
///
/// let output = CreateResult::new(plan).to_string();
/// assert!(output.starts_with("Created plan with ID: 4"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Exercise> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created exercise with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<WeightRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recorded weight with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<WorkoutRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Logged workout with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Catalog seeded with {} exercises and {} plans.",
            self.exercises, self.plans
        )
    }
}
