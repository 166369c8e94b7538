//! Command handlers.
//!
//! Each handler converts its clap arguments into core parameters, calls the
//! tracker, and renders the result as markdown.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use fitmate_core::{
    coach::FallbackGenerator,
    display::{
        ActivityCalendar, CreateResult, DailyReport, Exercises, GeneratedPlans, OperationStatus,
        Plans, Weights, Workouts,
    },
    params::Id,
    Tracker,
};

use crate::{
    args::{
        CatalogCommands, CoachCommands, ExerciseCommands, HistoryCommands, PlanCommands,
        WeightCommands, WorkoutCommands,
    },
    renderer::TerminalRenderer,
    workout::WorkoutRunner,
};

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
    user_id: u64,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer, user_id: u64) -> Self {
        Self {
            tracker,
            renderer,
            user_id,
        }
    }

    pub async fn list_plans(&self) -> Result<()> {
        let plans = self
            .tracker
            .list_plans()
            .await
            .context("Failed to list plans")?;

        self.renderer
            .render(&format!("# Plans\n\n{}", Plans(plans)))
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => {
                let id: Id = args.into();
                let resolution = self
                    .tracker
                    .resolve_plan(&id)
                    .await
                    .with_context(|| format!("Failed to show plan {}", id.id))?;
                self.renderer.render(&resolution.to_string())
            }
            PlanCommands::Create(args) => {
                let plan = self
                    .tracker
                    .create_plan(&args.into())
                    .await
                    .context("Failed to create plan")?;
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            PlanCommands::Delete(args) => {
                let id: Id = args.into();
                self.tracker
                    .delete_plan(&id)
                    .await
                    .with_context(|| format!("Failed to delete plan {}", id.id))?;
                self.renderer.render(
                    &OperationStatus::success(format!("Deleted plan with ID: {}", id.id))
                        .to_string(),
                )
            }
        }
    }

    pub async fn handle_exercise_command(&self, command: ExerciseCommands) -> Result<()> {
        match command {
            ExerciseCommands::List => {
                let exercises = self
                    .tracker
                    .list_exercises()
                    .await
                    .context("Failed to list exercises")?;
                self.renderer
                    .render(&format!("# Exercises\n\n{}", Exercises(exercises)))
            }
            ExerciseCommands::Add(args) => {
                let exercise = self
                    .tracker
                    .create_exercise(&args.into())
                    .await
                    .context("Failed to add exercise")?;
                self.renderer
                    .render(&CreateResult::new(exercise).to_string())
            }
        }
    }

    pub async fn handle_catalog_command(&self, command: CatalogCommands) -> Result<()> {
        match command {
            CatalogCommands::Seed => {
                let summary = self
                    .tracker
                    .seed_catalog()
                    .await
                    .context("Failed to seed catalog")?;
                self.renderer.render(&summary.to_string())
            }
        }
    }

    pub async fn handle_workout_command(&self, command: WorkoutCommands) -> Result<()> {
        match command {
            WorkoutCommands::Start(args) => {
                WorkoutRunner::new(
                    &self.tracker,
                    &self.renderer,
                    Duration::from_millis(args.tick_ms),
                )
                .run(args.plan_id, self.user_id)
                .await
            }
        }
    }

    pub async fn handle_history_command(&self, command: HistoryCommands) -> Result<()> {
        match command {
            HistoryCommands::List(args) => {
                let workouts = self
                    .tracker
                    .recent_workouts(&args.for_user(self.user_id))
                    .await
                    .context("Failed to read workout history")?;
                self.renderer
                    .render(&format!("# Recent Workouts\n\n{}", Workouts(workouts)))
            }
            HistoryCommands::Calendar => {
                let dates = self
                    .tracker
                    .activity_dates(self.user_id)
                    .await
                    .context("Failed to read activity dates")?;
                self.renderer
                    .render(&format!("# Activity\n\n{}", ActivityCalendar(dates)))
            }
            HistoryCommands::Daily(args) => {
                let totals = self
                    .tracker
                    .daily_totals(&args.for_user(self.user_id))
                    .await
                    .context("Failed to read daily totals")?;
                self.renderer
                    .render(&format!("# Daily Totals\n\n{}", DailyReport(totals)))
            }
        }
    }

    pub async fn handle_weight_command(&self, command: WeightCommands) -> Result<()> {
        match command {
            WeightCommands::Add(args) => {
                let record = self
                    .tracker
                    .add_weight(&args.for_user(self.user_id))
                    .await
                    .context("Failed to record weight")?;
                self.renderer.render(&CreateResult::new(record).to_string())
            }
            WeightCommands::List(args) => {
                let weights = self
                    .tracker
                    .recent_weights(&args.for_user(self.user_id))
                    .await
                    .context("Failed to read weights")?;
                self.renderer
                    .render(&format!("# Weight\n\n{}", Weights(weights)))
            }
        }
    }

    pub async fn handle_coach_command(&self, command: CoachCommands) -> Result<()> {
        match command {
            CoachCommands::Generate(args) => {
                // No remote generator is bundled; the fallback always answers
                let plan = self
                    .tracker
                    .generate_plan(Arc::new(FallbackGenerator), args.into())
                    .await
                    .context("Failed to generate plan")?;
                self.renderer.render(&plan.to_string())
            }
            CoachCommands::List => {
                let plans = self
                    .tracker
                    .list_generated_plans()
                    .await
                    .context("Failed to list generated plans")?;
                self.renderer.render(&GeneratedPlans(plans).to_string())
            }
        }
    }
}
