use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized,
    NoActivePlan,
    PlanNotFound,
    PlanIdConflict,
    TopicNotFound,
    StepOutOfRange,
    PracticeIncomplete,
    ValidationError,
    DatabaseError,
    IoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::NoActivePlan => "NO_ACTIVE_PLAN",
            Self::PlanNotFound => "PLAN_NOT_FOUND",
            Self::PlanIdConflict => "PLAN_ID_CONFLICT",
            Self::TopicNotFound => "TOPIC_NOT_FOUND",
            Self::StepOutOfRange => "STEP_OUT_OF_RANGE",
            Self::PracticeIncomplete => "PRACTICE_INCOMPLETE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::IoError => "IO_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct StudyError {
    pub code: ErrorCode,
    pub message: String,
}

impl StudyError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_initialized() -> Self {
        Self::new(
            ErrorCode::NotInitialized,
            "studytrack is not initialized. Run `studytrack init` first.",
        )
    }

    pub fn no_active_plan() -> Self {
        Self::new(
            ErrorCode::NoActivePlan,
            "No active plan. Use `studytrack plan activate <id>` or `--plan <id>`.",
        )
    }

    pub fn plan_not_found(reference: &str) -> Self {
        Self::new(
            ErrorCode::PlanNotFound,
            format!("Plan not found: {reference}"),
        )
    }

    pub fn plan_id_conflict(id: &str) -> Self {
        Self::new(
            ErrorCode::PlanIdConflict,
            format!("Plan with id '{id}' already exists"),
        )
    }

    pub fn topic_not_found(plan_id: &str, topic: &str) -> Self {
        Self::new(
            ErrorCode::TopicNotFound,
            format!("Topic '{topic}' is not part of plan {plan_id}"),
        )
    }

    pub fn step_out_of_range(step: usize, total: u32) -> Self {
        Self::new(
            ErrorCode::StepOutOfRange,
            format!("Step {} is out of range (plan has {total} steps)", step + 1),
        )
    }

    pub fn practice_incomplete() -> Self {
        Self::new(
            ErrorCode::PracticeIncomplete,
            "Complete every checklist item and write a short answer of at least 10 characters.",
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }
}

impl From<rusqlite::Error> for StudyError {
    fn from(e: rusqlite::Error) -> Self {
        Self::database(e.to_string())
    }
}

impl From<std::io::Error> for StudyError {
    fn from(e: std::io::Error) -> Self {
        Self::io(e.to_string())
    }
}
