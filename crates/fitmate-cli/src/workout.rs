//! The clock that drives a live session.
//!
//! The session itself has no notion of time; this loop ticks it from a
//! `tokio::time::interval` and maps Ctrl-C to `stop()`.

use std::time::Duration;

use anyhow::{Context, Result};
use fitmate_core::{
    display::{CreateResult, OperationStatus},
    params::Id,
    Session, SessionResult, TickOutcome, Tracker,
};
use log::{debug, info};
use tokio::{signal, time};

use crate::renderer::TerminalRenderer;

/// Session seconds between progress lines.
const PROGRESS_EVERY_SECONDS: u64 = 15;

pub struct WorkoutRunner<'a> {
    tracker: &'a Tracker,
    renderer: &'a TerminalRenderer,
    tick: Duration,
}

impl<'a> WorkoutRunner<'a> {
    pub fn new(tracker: &'a Tracker, renderer: &'a TerminalRenderer, tick: Duration) -> Self {
        Self {
            tracker,
            renderer,
            tick,
        }
    }

    /// Run `plan_id` to completion or Ctrl-C, then log the result for
    /// `user_id`.
    pub async fn run(&self, plan_id: u64, user_id: u64) -> Result<()> {
        let mut session = self
            .tracker
            .start_session(&Id { id: plan_id })
            .await
            .with_context(|| format!("Failed to start plan {plan_id}"))?;

        info!(
            "Running '{}' with a {}ms tick",
            session.plan().name,
            self.tick.as_millis()
        );
        self.renderer.render(&session.plan().to_string())?;
        self.announce_step(&session)?;

        let Some(result) = self.drive(&mut session).await? else {
            return Ok(());
        };

        self.renderer.render(&format!("\n{result}"))?;
        self.log(user_id, &result).await
    }

    async fn drive(&self, session: &mut Session) -> Result<Option<SessionResult>> {
        let mut interval = time::interval(self.tick);
        // The first tick of an interval fires immediately
        interval.tick().await;

        let ctrl_c = signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = interval.tick() => match session.tick() {
                    TickOutcome::Completed(result) => return Ok(Some(result)),
                    TickOutcome::StepAdvanced { index } => {
                        debug!("Advanced to step {index}");
                        self.announce_step(session)?;
                    }
                    TickOutcome::Running => {
                        if session.elapsed_seconds() % PROGRESS_EVERY_SECONDS == 0 {
                            self.renderer.render_progress(&session.progress())?;
                        }
                    }
                    TickOutcome::Idle => {}
                },
                signal = &mut ctrl_c => {
                    signal.context("Failed to listen for Ctrl-C")?;
                    info!("Interrupted; stopping session");
                    return Ok(session.stop());
                }
            }
        }
    }

    fn announce_step(&self, session: &Session) -> Result<()> {
        let progress = session.progress();
        self.renderer.render(&format!(
            "\n## Step {}/{}\n\n{}",
            progress.step_index + 1,
            progress.step_count,
            session.current_step()
        ))
    }

    async fn log(&self, user_id: u64, result: &SessionResult) -> Result<()> {
        let logged = self
            .tracker
            .log_session(user_id, result)
            .await
            .context("Failed to log workout")?;

        match logged {
            Some(record) => self.renderer.render(&CreateResult::new(record).to_string()),
            None => self.renderer.render(
                &OperationStatus::failure("Session ended before any time elapsed; not logged")
                    .to_string(),
            ),
        }
    }
}
