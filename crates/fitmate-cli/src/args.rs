//! Command-line argument definitions.
//!
//! Argument structs carry the clap attributes and convert into the core
//! parameter types with `From`, keeping `fitmate_core::params` free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use fitmate_core::{
    models::{PlanItemRef, UserProfile},
    params::{
        AddWeight, CreateExercise, CreatePlan, History, Id, DEFAULT_HISTORY_LIMIT,
        DEFAULT_USER_ID,
    },
};
use jiff::civil::Date;

/// Personal fitness tracker with timed training sessions
///
/// FitMate keeps a catalog of exercises and training plans, walks you through
/// a plan step by step with timers, and records your workouts and weight.
#[derive(Parser)]
#[command(version, about, name = "fitmate")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/fitmate/fitmate.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// User the history commands act for
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_USER_ID,
        value_parser = clap::value_parser!(u64).range(1..=i64::MAX as u64)
    )]
    pub user: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage training plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage the exercise catalog
    #[command(alias = "e")]
    Exercise {
        #[command(subcommand)]
        command: ExerciseCommands,
    },
    /// Manage the built-in default catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Run a training session
    #[command(alias = "w")]
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },
    /// Review logged workouts
    #[command(alias = "h")]
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Record and review body weight
    Weight {
        #[command(subcommand)]
        command: WeightCommands,
    },
    /// Generate personalised nutrition and workout plans
    Coach {
        #[command(subcommand)]
        command: CoachCommands,
    },
}

// ============================================================================
// Plans
// ============================================================================

/// Create a plan from a comma-separated item list
///
/// Items are exercise IDs (`3` or `E3`), `-1` for a one-minute break, or
/// `P<id>` to include another plan.
#[derive(ClapArgs)]
pub struct CreatePlanArgs {
    /// Unique name of the plan
    pub name: String,
    /// Items, e.g. `1,-1,P2`
    #[arg(
        value_delimiter = ',',
        allow_hyphen_values = true,
        required = true,
        num_args = 1..
    )]
    pub items: Vec<PlanItemRef>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            name: val.name,
            items: val.items,
        }
    }
}

/// Show a plan with its resolved steps
#[derive(ClapArgs)]
pub struct ShowPlanArgs {
    #[arg(help = "Unique identifier of the plan to show")]
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a plan
///
/// Plans that include the deleted plan keep their reference; it is reported
/// as missing when they are resolved.
#[derive(ClapArgs)]
pub struct DeletePlanArgs {
    #[arg(help = "Unique identifier of the plan to delete")]
    pub id: u64,
}

impl From<DeletePlanArgs> for Id {
    fn from(val: DeletePlanArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a plan with its resolved steps
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Delete a plan
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

// ============================================================================
// Exercises and catalog
// ============================================================================

/// Add an exercise to the catalog
#[derive(ClapArgs)]
pub struct AddExerciseArgs {
    /// Name of the exercise
    pub name: String,
    /// Instruction line; repeat for several lines
    #[arg(short, long = "instruction")]
    pub instructions: Vec<String>,
}

impl From<AddExerciseArgs> for CreateExercise {
    fn from(val: AddExerciseArgs) -> Self {
        CreateExercise {
            name: val.name,
            instructions: val.instructions,
        }
    }
}

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// List all exercises
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add an exercise
    #[command(alias = "a")]
    Add(AddExerciseArgs),
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Replace all exercises and plans with the built-in defaults
    Seed,
}

// ============================================================================
// Workouts and history
// ============================================================================

/// Run a plan with live timers
///
/// Press Ctrl-C to stop early; the partial session is still logged.
#[derive(ClapArgs)]
pub struct StartWorkoutArgs {
    /// ID of the plan to run
    pub plan_id: u64,
    /// Milliseconds per session second
    #[arg(
        long,
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,
}

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// Run a plan
    #[command(alias = "s")]
    Start(StartWorkoutArgs),
}

/// Limit for history listings
#[derive(ClapArgs)]
pub struct LimitArgs {
    /// Maximum number of entries to show
    #[arg(short, long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub limit: usize,
}

impl LimitArgs {
    pub fn for_user(self, user_id: u64) -> History {
        History {
            user_id,
            limit: self.limit,
        }
    }
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Most recent workouts
    #[command(aliases = ["l", "ls"])]
    List(LimitArgs),
    /// Days with at least one workout
    Calendar,
    /// Calories and minutes per day
    Daily(LimitArgs),
}

/// Record a body-weight sample
#[derive(ClapArgs)]
pub struct AddWeightArgs {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Date of the sample (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<Date>,
}

impl AddWeightArgs {
    pub fn for_user(self, user_id: u64) -> AddWeight {
        AddWeight {
            user_id,
            weight_kg: self.weight_kg,
            date: self.date,
        }
    }
}

#[derive(Subcommand)]
pub enum WeightCommands {
    /// Record a weight sample
    #[command(alias = "a")]
    Add(AddWeightArgs),
    /// Most recent weight samples
    #[command(aliases = ["l", "ls"])]
    List(LimitArgs),
}

// ============================================================================
// Coach
// ============================================================================

/// Profile used to personalise a plan
#[derive(ClapArgs)]
pub struct GeneratePlanArgs {
    #[arg(long)]
    pub age: u32,
    #[arg(long)]
    pub gender: String,
    /// Height in centimetres
    #[arg(long)]
    pub height: f64,
    /// Current weight in kilograms
    #[arg(long)]
    pub weight: f64,
    /// Goal weight in kilograms
    #[arg(long)]
    pub goal_weight: f64,
    /// Weeks to reach the goal
    #[arg(long)]
    pub weeks: u32,
    #[arg(long, default_value = "Moderate")]
    pub activity: String,
    #[arg(long, default_value = "Weight loss")]
    pub goal: String,
    #[arg(long, default_value = "No preference")]
    pub diet: String,
    #[arg(long, default_value = "Medium")]
    pub budget: String,
    /// Health condition; repeat for several
    #[arg(long = "condition")]
    pub conditions: Vec<String>,
}

impl From<GeneratePlanArgs> for UserProfile {
    fn from(val: GeneratePlanArgs) -> Self {
        UserProfile {
            age: val.age,
            gender: val.gender,
            height_cm: val.height,
            current_weight_kg: val.weight,
            goal_weight_kg: val.goal_weight,
            goal_time_weeks: val.weeks,
            activity_level: val.activity,
            primary_goal: val.goal,
            diet_preference: val.diet,
            budget_level: val.budget,
            health_conditions: val.conditions,
        }
    }
}

#[derive(Subcommand)]
pub enum CoachCommands {
    /// Generate and save a personalised plan
    #[command(alias = "g")]
    Generate(GeneratePlanArgs),
    /// List saved plans
    #[command(aliases = ["l", "ls"])]
    List,
}
