//! Display implementations for domain models.
//!
//! Output is markdown, rendered by the CLI's terminal renderer.

use std::fmt;

use super::datetime::{Clock, LocalDateTime};
use crate::{
    models::{
        DailyTotals, Exercise, GeneratedPlan, Plan, ResolvedPlan, Step, StepKind, WeightRecord,
        WorkoutRecord,
    },
    resolver::{Resolution, ResolveWarning},
    session::{Progress, SessionResult, SessionStatus},
};

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveWarning::MissingExercise {
                plan_id,
                exercise_id,
            } => write!(
                f,
                "Plan {plan_id} references missing exercise {exercise_id}"
            ),
            ResolveWarning::MissingPlan {
                plan_id,
                nested_plan_id,
            } => write!(f, "Plan {plan_id} references missing plan {nested_plan_id}"),
            ResolveWarning::CycleDetected {
                plan_id,
                nested_plan_id,
            } => write!(
                f,
                "Plan {plan_id} includes plan {nested_plan_id} which is already being expanded; skipped"
            ),
            ResolveWarning::MalformedToken { plan_id, token } => {
                write!(f, "Plan {plan_id} has malformed item '{token}'")
            }
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.name)?;
        writeln!(f)?;

        if self.instructions.is_empty() {
            writeln!(f, "_No instructions._")?;
        } else {
            for (i, line) in self.instructions.iter().enumerate() {
                writeln!(f, "{}. {line}", i + 1)?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {}", self.id, self.name)?;
        writeln!(f)?;

        let items = self.item_list.trim();
        if items.is_empty() {
            writeln!(f, "- Items: (none)")?;
        } else {
            writeln!(f, "- Items: `{items}`")?;
        }
        writeln!(f)
    }
}

impl Step {
    fn fmt_step(&self, f: &mut fmt::Formatter<'_>, position: Option<usize>) -> fmt::Result {
        match position {
            Some(n) => write!(f, "### {n}. {}", self.name)?,
            None => write!(f, "### {}", self.name)?,
        }
        writeln!(f, " ({} min)", self.duration_minutes)?;
        writeln!(f)?;

        for line in &self.instructions {
            writeln!(f, "- {line}")?;
        }
        if !self.instructions.is_empty() {
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_step(f, None)
    }
}

impl fmt::Display for ResolvedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Plan ID: {}", self.source_plan_id)?;
        writeln!(f, "- Steps: {}", self.steps.len())?;
        writeln!(f, "- Total time: {}", Clock(self.total_seconds()))?;
        writeln!(f)?;

        if self.steps.is_empty() {
            writeln!(f, "No steps in this plan.")?;
        } else {
            for (i, step) in self.steps.iter().enumerate() {
                step.fmt_step(f, Some(i + 1))?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plan)?;

        if !self.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Warnings")?;
            writeln!(f)?;
            for warning in &self.warnings {
                writeln!(f, "- {warning}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for WorkoutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {}: {} min, {} kcal",
            self.date, self.kind, self.duration_minutes, self.calories
        )
    }
}

impl fmt::Display for WeightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}** {:.1} kg", self.date, self.weight_kg)
    }
}

impl fmt::Display for DailyTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {} kcal over {} min",
            self.date, self.calories, self.duration_minutes
        )
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}/{}] {} {} left, total {} / {} ({:.0}%)",
            self.step_index + 1,
            self.step_count,
            self.step_name,
            Clock(self.step_time_remaining),
            Clock(self.total_time_elapsed),
            Clock(self.total_time),
            self.total_fraction_complete * 100.0
        )?;
        if self.status == SessionStatus::Paused {
            write!(f, " (paused)")?;
        }
        Ok(())
    }
}

impl fmt::Display for SessionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.completed {
            "completed"
        } else {
            "stopped"
        };
        writeln!(
            f,
            "Workout '{}' {outcome} after {} ({} min credited)",
            self.plan_name,
            Clock(self.total_elapsed_seconds),
            self.credited_minutes()
        )
    }
}

impl fmt::Display for GeneratedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Personalised plan")?;
        writeln!(f)?;
        writeln!(f, "- Generated: {}", LocalDateTime(&self.generated_at))?;
        writeln!(
            f,
            "- Source: {}",
            if self.ai_generated {
                "generator"
            } else {
                "fallback"
            }
        )?;
        writeln!(
            f,
            "- Goal: {} ({:.1} kg to {:.1} kg in {} weeks)",
            self.profile.primary_goal,
            self.profile.current_weight_kg,
            self.profile.goal_weight_kg,
            self.profile.goal_time_weeks
        )?;
        writeln!(f, "- BMI: {:.1}", self.profile.bmi())?;
        let change = self.profile.weight_to_change();
        if change > 0.0 {
            writeln!(f, "- To lose: {change:.1} kg")?;
        } else if change < 0.0 {
            writeln!(f, "- To gain: {:.1} kg", -change)?;
        }

        for (heading, body) in [
            ("Nutrition", &self.nutrition_plan),
            ("Workout", &self.workout_plan),
            ("Notes", &self.important_notes),
        ] {
            writeln!(f)?;
            writeln!(f, "## {heading}")?;
            writeln!(f)?;
            writeln!(f, "{}", body.trim())?;
        }

        Ok(())
    }
}
