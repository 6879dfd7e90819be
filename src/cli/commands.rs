use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{ConceptStage, Level};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "studytrack",
    version = VERSION,
    about = "Learning plan tracker: steps, topics and quizzes",
    after_help = "\
NOTE:
  Data lives in --data-dir, $STUDYTRACK_HOME, or ./.studytrack (first one set wins).
  Run `studytrack init` before any other command.

EXIT CODES:
  0  Success
  1  Error (validation, unknown plan, incomplete practice, etc.)

PROGRESS RULES:
  Completing a step records max(current, step). Completing an earlier step
  after a later one never lowers progress.
  Each topic has three stages: concept -> exercise -> quiz.
  Only the last quiz submission per plan is kept.

LOGGING:
  Set STUDYTRACK_LOG (e.g. `debug`) to log to stderr."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Specify plan by ID
    #[arg(long, global = true)]
    pub plan: Option<String>,

    /// Data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory
    Init {
        /// Seed the demo plans when no plans exist
        #[arg(long)]
        demo: bool,
    },

    /// Plan management
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Overall step progress of a plan
    #[command(subcommand)]
    Study(StudyCommands),

    /// Per-topic progress (concept -> exercise -> quiz)
    #[command(subcommand)]
    Concept(ConceptCommands),

    /// Take the plan's quiz
    #[command(subcommand)]
    Quiz(QuizCommands),

    /// Graded results of the last quiz submission
    #[command(subcommand)]
    Report(ReportCommands),

    /// Resolve a navigation fragment and show its view
    #[command(after_help = "\
EXAMPLES:
  studytrack open '#/concept?id=prob&topic=%ED%99%95%EB%A5%A0'
  studytrack open '/study?id=prob'

NOTE:
  Unknown paths show the dashboard. An empty fragment means /dashboard.")]
    Open {
        /// Fragment such as `/study?id=prob`
        #[arg(default_value = "")]
        fragment: String,
    },

    /// Dashboard of all plans
    Status,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    Create {
        /// Plan title
        title: String,
        /// Plan ID (slug: lowercase alphanumeric with hyphens); generated when omitted
        #[arg(long)]
        id: Option<String>,
        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<String>,
        /// End date (YYYY-MM-DD), defaults to a week after start
        #[arg(long)]
        end: Option<String>,
        #[arg(long, value_enum, default_value = "beginner")]
        level: Level,
        /// Number of sequential steps
        #[arg(long, default_value = "3")]
        steps: u32,
        /// Plan without a quiz
        #[arg(long)]
        no_quiz: bool,
        /// Topic (repeatable, order is kept)
        #[arg(long = "topic")]
        topics: Vec<String>,
        /// Resource URL (repeatable)
        #[arg(long = "resource")]
        resources: Vec<String>,
    },
    /// List all plans
    List,
    /// Show plan details
    Show {
        /// Plan ID
        id: String,
    },
    /// Set active plan
    Activate {
        /// Plan ID
        id: String,
    },
    /// Mark a plan completed
    Complete {
        /// Plan ID
        id: String,
    },
    /// Move a completed plan back to active
    Reopen {
        /// Plan ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum StudyCommands {
    /// Show the plan's steps and overall progress
    Show,
    /// Complete a step (1-based)
    Complete {
        step: usize,
    },
}

#[derive(Subcommand)]
pub enum ConceptCommands {
    /// List the plan's topics with their progress
    List,
    /// Show a topic's stages
    Show {
        topic: String,
    },
    /// Show the concept summary for a topic
    Detail {
        topic: String,
    },
    /// Complete a stage of a topic
    Complete {
        topic: String,
        #[arg(value_enum)]
        stage: ConceptStage,
    },
    /// Submit a practice (completes the exercise stage)
    #[command(after_help = "\
NOTE:
  All three checklist items (--check 1 --check 2 --check 3) and an answer
  of at least 10 characters are required. Otherwise nothing is recorded.")]
    Practice {
        topic: String,
        /// Checked checklist item (1-3, repeatable)
        #[arg(long = "check")]
        checks: Vec<usize>,
        /// Short written answer
        #[arg(long)]
        answer: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum QuizCommands {
    /// Show the questions
    Show {
        /// Question file (JSON list); built-in questions when omitted
        #[arg(long)]
        questions: Option<PathBuf>,
    },
    /// Start the quiz timer
    Start,
    /// Grade and store answers
    #[command(after_help = "\
STDIN FORMAT (when no --answer is given):
  {\"1\": 0, \"2\": \"text answer\", \"3\": \"longer text\"}

NOTE:
  Multiple-choice answers are option indexes; other answers are text.
  Elapsed time runs from `quiz start` (or `open '#/quiz'`); without a
  pending attempt it is recorded as 0.
  Replaces any earlier submission for the plan.")]
    Submit {
        /// Answer as `<question id>=<value>` (repeatable)
        #[arg(long = "answer")]
        answers: Vec<String>,
        /// Question file (JSON list); built-in questions when omitted
        #[arg(long)]
        questions: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show the graded result
    Show {
        #[arg(long)]
        questions: Option<PathBuf>,
    },
    /// Write report-<planId>.json
    Export {
        /// Target directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Print the plain-text score summary
    Summary {
        #[arg(long)]
        questions: Option<PathBuf>,
    },
}
