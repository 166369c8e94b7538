//! Plan resolution and session bookkeeping for the Tracker.

use jiff::Zoned;

use super::Tracker;
use crate::{
    error::Result,
    models::WorkoutRecord,
    params::Id,
    resolver::{self, Resolution},
    session::{Session, SessionResult},
    store::HistoryStore,
};

impl Tracker {
    /// Flattens a plan into its timed steps.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if the plan does not exist.
    pub async fn resolve_plan(&self, params: &Id) -> Result<Resolution> {
        let plan_id = params.id;
        self.with_database(move |db| resolver::resolve(&*db, plan_id))
            .await
    }

    /// Resolves a plan and starts a session on it.
    ///
    /// The returned session holds no database handle; the caller drives it
    /// and hands its result to [`Tracker::log_session`].
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if the plan does not exist and
    /// `TrackerError::EmptyPlan` if it resolved to no steps.
    pub async fn start_session(&self, params: &Id) -> Result<Session> {
        let resolution = self.resolve_plan(params).await?;
        Session::start(resolution.plan)
    }

    /// Appends the workout for a finished session, dated today.
    ///
    /// Returns `None` when the session ended before any time elapsed.
    pub async fn log_session(
        &self,
        user_id: u64,
        result: &SessionResult,
    ) -> Result<Option<WorkoutRecord>> {
        let result = result.clone();
        let today = Zoned::now().date();

        self.with_database(move |db| {
            let Some(record) = db.record(&result, user_id, today)? else {
                log::info!(
                    "Session for '{}' ended before any time elapsed; not logged",
                    result.plan_name
                );
                return Ok(None);
            };

            log::info!(
                "Logged workout {}: '{}' {} min, {} kcal",
                record.id,
                record.kind,
                record.duration_minutes,
                record.calories
            );
            Ok(Some(record))
        })
        .await
    }
}
