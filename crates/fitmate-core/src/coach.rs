//! Personalised plan generation.
//!
//! Generation is delegated to a [`PlanGenerator`], typically a slow remote
//! service. Callers never block on it directly: [`spawn_generation`] runs the
//! generator on the blocking pool and hands the finished plan back over a
//! one-shot channel.

use std::sync::Arc;

use jiff::Timestamp;
use tokio::{sync::oneshot, task};

use crate::{
    error::Result,
    models::{GeneratedPlan, UserProfile},
};

/// Text used for every section of a plan the fallback produces.
pub const FALLBACK_MESSAGE: &str = "Plan generation is unavailable. Please try again later.";

/// Produces a personalised plan for a validated profile.
///
/// Implementations may block; [`spawn_generation`] keeps them off the
/// caller's thread.
pub trait PlanGenerator: Send + Sync {
    fn generate(&self, profile: &UserProfile) -> Result<GeneratedPlan>;
}

/// Local generator used when no service is configured or the service fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackGenerator;

impl PlanGenerator for FallbackGenerator {
    fn generate(&self, profile: &UserProfile) -> Result<GeneratedPlan> {
        Ok(GeneratedPlan {
            profile: profile.clone(),
            nutrition_plan: FALLBACK_MESSAGE.to_string(),
            workout_plan: FALLBACK_MESSAGE.to_string(),
            important_notes: FALLBACK_MESSAGE.to_string(),
            generated_at: Timestamp::now(),
            ai_generated: false,
        })
    }
}

/// Validate the profile, then run `generator`, substituting the fallback plan
/// if it fails.
///
/// # Errors
///
/// Only profile validation errors are returned.
pub fn generate_with_fallback(
    generator: &dyn PlanGenerator,
    profile: &UserProfile,
) -> Result<GeneratedPlan> {
    profile.validate()?;

    match generator.generate(profile) {
        Ok(plan) => Ok(plan),
        Err(e) => {
            log::warn!("Plan generation failed, using fallback: {e}");
            FallbackGenerator.generate(profile)
        }
    }
}

/// Run generation on tokio's blocking pool.
///
/// The receiver yields exactly one result. Must be called from within a tokio
/// runtime.
pub fn spawn_generation(
    generator: Arc<dyn PlanGenerator>,
    profile: UserProfile,
) -> oneshot::Receiver<Result<GeneratedPlan>> {
    let (tx, rx) = oneshot::channel();

    task::spawn_blocking(move || {
        let outcome = generate_with_fallback(generator.as_ref(), &profile);
        if tx.send(outcome).is_err() {
            log::debug!("Generation finished after the receiver was dropped");
        }
    });

    rx
}
