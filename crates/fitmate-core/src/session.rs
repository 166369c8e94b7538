//! Timed execution of a resolved plan.
//!
//! A [`Session`] is a plain value: it owns no clock and spawns nothing. The
//! host calls [`Session::tick`] once per second from whatever timer it has
//! and reads [`Session::progress`] for display. Two countdowns advance
//! together: the active step's remaining time and the elapsed time of the
//! whole session.
//!
//! ```text
//! start ──▶ Running ⇄ Paused
//!              │         │
//!              ├─────────┴──▶ Stopped    (stop)
//!              └────────────▶ Completed  (last step ran out)
//! ```
//!
//! Each session yields at most one [`SessionResult`], either from the tick
//! that completes it or from the first `stop()`.
//!
//! # Examples
//!
//! ```rust
//! use fitmate_core::{
//!     models::{ResolvedPlan, Step},
//!     session::{Session, SessionStatus, TickOutcome},
//! };
//!
//! let plan = ResolvedPlan {
//!     source_plan_id: 1,
//!     name: "Quick rest".to_string(),
//!     steps: vec![Step::break_time()],
//! };
//!
//! let mut session = Session::start(plan).unwrap();
//! while let TickOutcome::Running | TickOutcome::StepAdvanced { .. } = session.tick() {}
//! assert_eq!(session.status(), SessionStatus::Completed);
//! assert!(session.stop().is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{ResolvedPlan, Step},
};

/// Run-time state of a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Running,
    Paused,
    /// Every step ran to the end
    Completed,
    /// Ended early by the user
    Stopped,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Running => "running",
            SessionStatus::Paused => "paused",
            SessionStatus::Completed => "completed",
            SessionStatus::Stopped => "stopped",
        }
    }

    /// Completed and Stopped accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Stopped)
    }
}

/// What a finished session reports for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionResult {
    pub plan_name: String,
    pub total_elapsed_seconds: u64,
    /// True when the plan ran to the end, false when stopped early
    pub completed: bool,
}

impl SessionResult {
    /// Whole minutes to credit for this session.
    ///
    /// Rounds down, except that any activity shorter than a minute is still
    /// credited as one minute.
    pub fn credited_minutes(&self) -> u32 {
        let minutes = self.total_elapsed_seconds / 60;
        let minutes = if minutes == 0 && self.total_elapsed_seconds > 0 {
            1
        } else {
            minutes
        };
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }
}

/// Result of one call to [`Session::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or already finished; nothing changed
    Idle,
    /// Time advanced within the current step
    Running,
    /// The previous step ran out and the step at `index` is now active
    StepAdvanced { index: usize },
    /// This tick completed the session
    Completed(SessionResult),
}

/// Derived display state of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub status: SessionStatus,
    pub step_index: usize,
    pub step_count: usize,
    pub step_name: String,
    pub step_fraction_complete: f64,
    pub step_time_remaining: u64,
    pub total_fraction_complete: f64,
    pub total_time_elapsed: u64,
    pub total_time: u64,
}

/// One live run of a resolved plan.
#[derive(Debug, Clone)]
pub struct Session {
    plan: ResolvedPlan,
    total_seconds: u64,
    current_step_index: usize,
    step_seconds_remaining: u64,
    elapsed_total_seconds: u64,
    status: SessionStatus,
    result_emitted: bool,
}

impl Session {
    /// Begin a session on the first step with both countdowns running.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::EmptyPlan` if the plan has no steps.
    pub fn start(plan: ResolvedPlan) -> Result<Self> {
        let Some(first) = plan.steps.first() else {
            return Err(TrackerError::EmptyPlan {
                plan_id: plan.source_plan_id,
            });
        };

        log::debug!(
            "Starting session for '{}' with {} steps",
            plan.name,
            plan.steps.len()
        );

        Ok(Self {
            step_seconds_remaining: first.duration_seconds(),
            total_seconds: plan.total_seconds(),
            plan,
            current_step_index: 0,
            elapsed_total_seconds: 0,
            status: SessionStatus::Running,
            result_emitted: false,
        })
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn plan(&self) -> &ResolvedPlan {
        &self.plan
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// The active step, or the last one once the session has completed.
    pub fn current_step(&self) -> &Step {
        &self.plan.steps[self.current_step_index]
    }

    pub fn step_seconds_remaining(&self) -> u64 {
        self.step_seconds_remaining
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_total_seconds
    }

    /// Advance both countdowns by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != SessionStatus::Running {
            return TickOutcome::Idle;
        }

        self.elapsed_total_seconds = (self.elapsed_total_seconds + 1).min(self.total_seconds);
        self.step_seconds_remaining = self.step_seconds_remaining.saturating_sub(1);

        let mut advanced = None;
        if self.step_seconds_remaining == 0 {
            if self.current_step_index + 1 < self.plan.steps.len() {
                self.current_step_index += 1;
                self.step_seconds_remaining = self.current_step().duration_seconds();
                advanced = Some(self.current_step_index);
            } else {
                return self.complete();
            }
        }

        // The session clock can finish the run on its own
        if self.elapsed_total_seconds >= self.total_seconds {
            return self.complete();
        }

        match advanced {
            Some(index) => TickOutcome::StepAdvanced { index },
            None => TickOutcome::Running,
        }
    }

    /// Freeze both countdowns. Returns false unless the session was running.
    pub fn pause(&mut self) -> bool {
        if self.status == SessionStatus::Running {
            self.status = SessionStatus::Paused;
            true
        } else {
            false
        }
    }

    /// Continue after a pause. Returns false unless the session was paused.
    pub fn resume(&mut self) -> bool {
        if self.status == SessionStatus::Paused {
            self.status = SessionStatus::Running;
            true
        } else {
            false
        }
    }

    /// End the session early.
    ///
    /// Returns the result the first time a running or paused session is
    /// stopped; on a finished session this is a no-op returning `None`.
    pub fn stop(&mut self) -> Option<SessionResult> {
        if self.status.is_terminal() {
            return None;
        }
        log::info!(
            "Session for '{}' stopped after {}s",
            self.plan.name,
            self.elapsed_total_seconds
        );
        self.finish(SessionStatus::Stopped)
    }

    /// Snapshot of the derived display state.
    pub fn progress(&self) -> Progress {
        let step_initial = self.current_step().duration_seconds();
        let step_fraction_complete = if step_initial > 0 {
            1.0 - self.step_seconds_remaining as f64 / step_initial as f64
        } else {
            0.0
        };
        let total_fraction_complete = if self.total_seconds > 0 {
            self.elapsed_total_seconds as f64 / self.total_seconds as f64
        } else {
            0.0
        };

        Progress {
            status: self.status,
            step_index: self.current_step_index,
            step_count: self.plan.steps.len(),
            step_name: self.current_step().name.clone(),
            step_fraction_complete,
            step_time_remaining: self.step_seconds_remaining,
            total_fraction_complete,
            total_time_elapsed: self.elapsed_total_seconds,
            total_time: self.total_seconds,
        }
    }

    fn complete(&mut self) -> TickOutcome {
        self.step_seconds_remaining = 0;
        log::info!(
            "Session for '{}' completed after {}s",
            self.plan.name,
            self.elapsed_total_seconds
        );
        match self.finish(SessionStatus::Completed) {
            Some(result) => TickOutcome::Completed(result),
            None => TickOutcome::Idle,
        }
    }

    fn finish(&mut self, status: SessionStatus) -> Option<SessionResult> {
        self.status = status;
        if self.result_emitted {
            return None;
        }
        self.result_emitted = true;

        Some(SessionResult {
            plan_name: self.plan.name.clone(),
            total_elapsed_seconds: self.elapsed_total_seconds,
            completed: status == SessionStatus::Completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exercise, StepKind};

    fn create_test_plan(minutes: &[u32]) -> ResolvedPlan {
        let steps = minutes
            .iter()
            .enumerate()
            .map(|(i, &duration_minutes)| Step {
                kind: StepKind::Exercise,
                name: format!("Step {}", i + 1),
                instructions: vec![],
                duration_minutes,
            })
            .collect();

        ResolvedPlan {
            source_plan_id: 1,
            name: "Test Plan".to_string(),
            steps,
        }
    }

    fn run_ticks(session: &mut Session, ticks: usize) -> Vec<SessionResult> {
        (0..ticks)
            .filter_map(|_| match session.tick() {
                TickOutcome::Completed(result) => Some(result),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_start_rejects_empty_plan() {
        let err = Session::start(create_test_plan(&[])).unwrap_err();
        assert!(matches!(err, TrackerError::EmptyPlan { plan_id: 1 }));
    }

    #[test]
    fn test_start_initializes_first_step() {
        let session = Session::start(create_test_plan(&[1, 2])).expect("Failed to start");

        assert_eq!(session.status(), SessionStatus::Running);
        assert_eq!(session.current_step_index(), 0);
        assert_eq!(session.step_seconds_remaining(), 60);
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn test_completion_after_exact_total_ticks() {
        let mut session = Session::start(create_test_plan(&[1, 1, 1])).expect("Failed to start");

        let results = run_ticks(&mut session, 180);

        assert_eq!(session.status(), SessionStatus::Completed);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].total_elapsed_seconds, 180);
        assert!(results[0].completed);
        assert_eq!(results[0].plan_name, "Test Plan");
        assert_eq!(session.progress().total_time_elapsed, 180);
    }

    #[test]
    fn test_not_completed_one_tick_early() {
        let mut session = Session::start(create_test_plan(&[1, 1, 1])).expect("Failed to start");

        assert!(run_ticks(&mut session, 179).is_empty());
        assert_eq!(session.status(), SessionStatus::Running);
        assert_eq!(session.current_step_index(), 2);
        assert_eq!(session.step_seconds_remaining(), 1);
    }

    #[test]
    fn test_ticks_after_completion_are_ignored() {
        let mut session = Session::start(create_test_plan(&[1])).expect("Failed to start");

        let results = run_ticks(&mut session, 500);

        assert_eq!(results.len(), 1);
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.elapsed_seconds(), 60);
        assert!(session.stop().is_none());
        assert_eq!(session.status(), SessionStatus::Completed);
    }

    #[test]
    fn test_step_advance_is_reported() {
        let mut session = Session::start(create_test_plan(&[1, 2])).expect("Failed to start");

        for _ in 0..59 {
            assert_eq!(session.tick(), TickOutcome::Running);
        }
        assert_eq!(session.tick(), TickOutcome::StepAdvanced { index: 1 });
        assert_eq!(session.step_seconds_remaining(), 120);
        assert_eq!(session.current_step().name, "Step 2");
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut session = Session::start(create_test_plan(&[1, 1])).expect("Failed to start");
        run_ticks(&mut session, 30);

        let first = session.stop().expect("First stop should emit a result");
        assert!(!first.completed);
        assert_eq!(first.total_elapsed_seconds, 30);
        assert_eq!(session.status(), SessionStatus::Stopped);

        assert!(session.stop().is_none());
        assert_eq!(session.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_pause_freezes_countdowns() {
        let mut session = Session::start(create_test_plan(&[1])).expect("Failed to start");
        run_ticks(&mut session, 10);

        assert!(session.pause());
        assert!(!session.pause());
        run_ticks(&mut session, 20);
        assert_eq!(session.elapsed_seconds(), 10);
        assert_eq!(session.status(), SessionStatus::Paused);

        assert!(session.resume());
        assert!(!session.resume());
        run_ticks(&mut session, 5);
        assert_eq!(session.elapsed_seconds(), 15);
    }

    #[test]
    fn test_stop_while_paused() {
        let mut session = Session::start(create_test_plan(&[1])).expect("Failed to start");
        run_ticks(&mut session, 5);
        session.pause();

        let result = session.stop().expect("Stop should emit a result");
        assert_eq!(result.total_elapsed_seconds, 5);
        assert!(!session.resume());
    }

    #[test]
    fn test_progress_fractions() {
        let mut session = Session::start(create_test_plan(&[1, 1])).expect("Failed to start");
        run_ticks(&mut session, 15);

        let progress = session.progress();
        assert_eq!(progress.step_index, 0);
        assert_eq!(progress.step_count, 2);
        assert_eq!(progress.step_time_remaining, 45);
        assert!((progress.step_fraction_complete - 0.25).abs() < 1e-9);
        assert!((progress.total_fraction_complete - 0.125).abs() < 1e-9);
        assert_eq!(progress.total_time, 120);
    }

    #[test]
    fn test_progress_guards_zero_durations() {
        let mut plan = create_test_plan(&[0]);
        plan.steps[0].duration_minutes = 0;
        let session = Session::start(plan).expect("Failed to start");

        let progress = session.progress();
        assert_eq!(progress.step_fraction_complete, 0.0);
        assert_eq!(progress.total_fraction_complete, 0.0);
    }

    #[test]
    fn test_credited_minutes_rounding() {
        let result = |secs| SessionResult {
            plan_name: "p".to_string(),
            total_elapsed_seconds: secs,
            completed: false,
        };

        assert_eq!(result(0).credited_minutes(), 0);
        assert_eq!(result(30).credited_minutes(), 1);
        assert_eq!(result(59).credited_minutes(), 1);
        assert_eq!(result(60).credited_minutes(), 1);
        assert_eq!(result(119).credited_minutes(), 1);
        assert_eq!(result(180).credited_minutes(), 3);
    }

    #[test]
    fn test_independent_sessions_coexist() {
        let exercise = Exercise {
            id: 1,
            name: "Squats".to_string(),
            instructions: vec![],
        };
        let plan = ResolvedPlan {
            source_plan_id: 3,
            name: "Shared".to_string(),
            steps: vec![Step::exercise(&exercise)],
        };

        let mut a = Session::start(plan.clone()).expect("Failed to start");
        let mut b = Session::start(plan).expect("Failed to start");
        run_ticks(&mut a, 20);
        run_ticks(&mut b, 5);

        assert_eq!(a.elapsed_seconds(), 20);
        assert_eq!(b.elapsed_seconds(), 5);
    }
}
