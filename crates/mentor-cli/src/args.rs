//! Command-line interface definitions using clap
//!
//! This module defines the complete CLI structure using clap's derive API,
//! following the parameter wrapper pattern: clap-specific argument structs
//! convert into core parameter types via `From` impls, so the core stays
//! free of CLI framework concerns.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use mentor_core::params::{DayNumber, GeneratePlan, PlanId, RefinePlan, UpdateNotes};
use uuid::Uuid;

/// Main command-line interface for the Mentor study-plan organizer
///
/// Mentor turns a topic into a day-by-day study plan via a generative-AI
/// service, then tracks task completion, study notes, and time spent, shows
/// the plan on a calendar, and quizzes you on each day's material.
#[derive(Parser)]
#[command(version, about, name = "mentor")]
pub struct Args {
    /// Path to the JSON state file. Defaults to
    /// $XDG_DATA_HOME/mentor/plans.json
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Mentor CLI
///
/// The CLI is organized into four command categories:
/// - `plan`: generate, list, refine, and manage plans
/// - `day`: work with a single day (tasks, notes, stopwatch)
/// - `calendar`: the month view of the active plan
/// - `quiz`: AI-generated quizzes on a day's material
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Work with a single day of the active plan
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Show the active plan's calendar
    #[command(alias = "c")]
    Calendar(CalendarArgs),
    /// Take an AI-generated quiz on a day's material
    #[command(alias = "q")]
    Quiz(QuizArgs),
}

/// Generate a new study plan for a topic
///
/// Asks the AI service for a day-by-day curriculum, stores it, and makes it
/// the active plan. Requires OPENAI_API_KEY in the environment.
#[derive(ClapArgs)]
pub struct GeneratePlanArgs {
    /// Topic to learn (e.g. "rust async programming")
    pub topic: String,
    /// Plan length in days
    #[arg(short = 'n', long, default_value_t = 7)]
    pub days: u32,
    /// Daily time budget, free text (e.g. "45 minutes", "2 hours")
    #[arg(short = 't', long, default_value = "1 hour")]
    pub daily_time: String,
}

impl From<GeneratePlanArgs> for GeneratePlan {
    fn from(val: GeneratePlanArgs) -> Self {
        GeneratePlan {
            topic: val.topic,
            duration_days: val.days,
            daily_time: val.daily_time,
        }
    }
}

/// Show details of a plan
///
/// Without an ID, shows the active plan. When today falls inside the plan's
/// date window, the matching day is pointed out.
#[derive(ClapArgs)]
pub struct ShowPlanArgs {
    /// ID of the plan to display (defaults to the active plan)
    pub id: Option<Uuid>,
}

/// Make an existing plan the active one
#[derive(ClapArgs)]
pub struct UsePlanArgs {
    /// ID of the plan to activate
    pub id: Uuid,
}

impl From<UsePlanArgs> for PlanId {
    fn from(val: UsePlanArgs) -> Self {
        PlanId { id: val.id }
    }
}

/// Delete a plan permanently
#[derive(ClapArgs)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    pub id: Uuid,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Refine the active plan with a free-text instruction
///
/// Sends a simplified outline of the plan to the AI service and replaces
/// the whole day sequence with the revision. Notes and tracked sessions on
/// existing days are not carried over, since the revised plan may reshape
/// its days arbitrarily.
#[derive(ClapArgs)]
pub struct RefinePlanArgs {
    /// What to change (e.g. "add a revision day after each week")
    pub instruction: String,
}

impl From<RefinePlanArgs> for RefinePlan {
    fn from(val: RefinePlanArgs) -> Self {
        RefinePlan {
            instruction: val.instruction,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a new study plan for a topic
    #[command(alias = "g")]
    Generate(GeneratePlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Make an existing plan the active one
    #[command(alias = "u")]
    Use(UsePlanArgs),
    /// Refine the active plan with an instruction
    #[command(alias = "r")]
    Refine(RefinePlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

/// Address one day of the active plan
#[derive(ClapArgs)]
pub struct DayArgs {
    /// 1-based day number
    pub number: u32,
}

impl From<DayArgs> for DayNumber {
    fn from(val: DayArgs) -> Self {
        DayNumber { number: val.number }
    }
}

/// Replace the notes of a day
#[derive(ClapArgs)]
pub struct NotesArgs {
    /// 1-based day number
    pub number: u32,
    /// Replacement notes text (empty clears the notes)
    pub text: String,
}

impl From<NotesArgs> for UpdateNotes {
    fn from(val: NotesArgs) -> Self {
        UpdateNotes {
            day_number: val.number,
            notes: val.text,
        }
    }
}

/// Toggle a task's completion by position
#[derive(ClapArgs)]
pub struct TaskArgs {
    /// 1-based day number
    pub number: u32,
    /// 1-based task position within the day, as shown by `day show`
    pub position: usize,
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Show a day's tasks, notes, and tracked time
    #[command(alias = "s")]
    Show(DayArgs),
    /// Toggle a task's completion flag
    #[command(alias = "t")]
    Task(TaskArgs),
    /// Replace the day's notes
    #[command(alias = "n")]
    Notes(NotesArgs),
    /// Start or stop the day's study stopwatch
    #[command(alias = "w")]
    Session(DayArgs),
}

/// Show the active plan's calendar month view
#[derive(ClapArgs)]
pub struct CalendarArgs {
    /// Month to show as YYYY-MM (defaults to the current month, clamped to
    /// the plan's range)
    #[arg(long)]
    pub month: Option<String>,
}

/// Quiz settings
#[derive(ClapArgs)]
pub struct QuizArgs {
    /// 1-based day number to be quizzed on
    pub number: u32,
    /// Number of questions to generate
    #[arg(long, default_value_t = mentor_core::ai::generator::DEFAULT_QUIZ_COUNT)]
    pub count: usize,
}
