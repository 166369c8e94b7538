//! Turning finished sessions into history rows.

use jiff::civil::Date;
use rand::Rng;

use crate::{models::NewWorkout, session::SessionResult};

/// Lowest calories-per-minute factor used by [`estimate_calories`].
pub const MIN_CALORIES_PER_MINUTE: u32 = 5;
/// Highest calories-per-minute factor used by [`estimate_calories`].
pub const MAX_CALORIES_PER_MINUTE: u32 = 10;

/// Rough calorie estimate: minutes times a random factor in
/// `MIN_CALORIES_PER_MINUTE..=MAX_CALORIES_PER_MINUTE`.
pub fn estimate_calories(duration_minutes: u32) -> u32 {
    estimate_calories_with(&mut rand::thread_rng(), duration_minutes)
}

/// Like [`estimate_calories`] with a caller-supplied generator.
pub fn estimate_calories_with<R: Rng + ?Sized>(rng: &mut R, duration_minutes: u32) -> u32 {
    let factor = rng.gen_range(MIN_CALORIES_PER_MINUTE..=MAX_CALORIES_PER_MINUTE);
    duration_minutes.saturating_mul(factor)
}

/// Build the workout row for a finished session.
///
/// Returns `None` for a session that ended before any time elapsed; nothing
/// is worth recording.
pub fn workout_from_result(user_id: u64, result: &SessionResult, date: Date) -> Option<NewWorkout> {
    if result.total_elapsed_seconds == 0 {
        return None;
    }

    let duration_minutes = result.credited_minutes();
    Some(NewWorkout {
        user_id,
        kind: result.plan_name.clone(),
        duration_minutes,
        calories: estimate_calories(duration_minutes),
        date,
    })
}
