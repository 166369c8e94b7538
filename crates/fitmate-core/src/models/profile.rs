//! Personalisation input and the generated plan it produces.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Everything a plan generator needs to know about the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub gender: String,
    pub height_cm: f64,
    pub current_weight_kg: f64,
    pub goal_weight_kg: f64,
    pub goal_time_weeks: u32,
    pub activity_level: String,
    pub primary_goal: String,
    pub diet_preference: String,
    pub budget_level: String,
    #[serde(default)]
    pub health_conditions: Vec<String>,
}

impl UserProfile {
    /// Check every field against the accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("gender", &self.gender),
            ("activity_level", &self.activity_level),
            ("primary_goal", &self.primary_goal),
            ("diet_preference", &self.diet_preference),
            ("budget_level", &self.budget_level),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(TrackerError::invalid_input(field).with_reason("must not be empty"));
            }
        }

        if !(10..=100).contains(&self.age) {
            return Err(TrackerError::invalid_input("age").with_reason("must be between 10 and 100"));
        }
        if !(100.0..=250.0).contains(&self.height_cm) {
            return Err(TrackerError::invalid_input("height_cm")
                .with_reason("must be between 100 and 250 cm"));
        }
        for (field, weight) in [
            ("current_weight_kg", self.current_weight_kg),
            ("goal_weight_kg", self.goal_weight_kg),
        ] {
            if !(30.0..=300.0).contains(&weight) {
                return Err(
                    TrackerError::invalid_input(field).with_reason("must be between 30 and 300 kg")
                );
            }
        }
        if !(1..=104).contains(&self.goal_time_weeks) {
            return Err(TrackerError::invalid_input("goal_time_weeks")
                .with_reason("must be between 1 and 104 weeks"));
        }

        Ok(())
    }

    /// Body-mass index from height and current weight.
    pub fn bmi(&self) -> f64 {
        let meters = self.height_cm / 100.0;
        self.current_weight_kg / (meters * meters)
    }

    /// Kilograms to lose (positive) or gain (negative) to reach the goal.
    pub fn weight_to_change(&self) -> f64 {
        self.current_weight_kg - self.goal_weight_kg
    }
}

/// A personalised nutrition and workout plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedPlan {
    pub profile: UserProfile,
    pub nutrition_plan: String,
    pub workout_plan: String,
    pub important_notes: String,
    pub generated_at: Timestamp,
    /// False when the local fallback produced the plan
    pub ai_generated: bool,
}
