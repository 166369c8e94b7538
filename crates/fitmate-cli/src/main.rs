//! FitMate CLI Application
//!
//! Command-line host for the fitness tracker: catalog management, live
//! training sessions and history.

mod args;
mod cli;
mod renderer;
mod workout;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use fitmate_core::TrackerBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color), user);

    info!("FitMate started");

    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Exercise { command }) => cli.handle_exercise_command(command).await,
        Some(Catalog { command }) => cli.handle_catalog_command(command).await,
        Some(Workout { command }) => cli.handle_workout_command(command).await,
        Some(History { command }) => cli.handle_history_command(command).await,
        Some(Weight { command }) => cli.handle_weight_command(command).await,
        Some(Coach { command }) => cli.handle_coach_command(command).await,
        None => cli.list_plans().await,
    }
}
