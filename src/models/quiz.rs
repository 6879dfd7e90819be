use serde::{Deserialize, Serialize};

/// A learner's answer: an option index for multiple choice, free text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Choice(i64),
    Text(String),
}

impl Answer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Choice(_) => None,
        }
    }

    /// Read a raw value as an answer to `kind`: only multiple choice takes an
    /// option index, every other kind keeps the text as given.
    pub fn for_kind(kind: &QuestionKind, raw: &str) -> Self {
        match kind {
            QuestionKind::Multiple { .. } => match raw.trim().parse::<i64>() {
                Ok(n) => Self::Choice(n),
                Err(_) => Self::Text(raw.to_string()),
            },
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Coerce an already-typed answer to the shape `kind` expects.
    pub fn fit_to(self, kind: &QuestionKind) -> Self {
        match (self, kind) {
            (Self::Choice(n), QuestionKind::Short { .. } | QuestionKind::Descriptive { .. }) => {
                Self::Text(n.to_string())
            }
            (answer, _) => answer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    Multiple {
        options: Vec<String>,
        correct: i64,
    },
    Short {
        #[serde(rename = "correctAnswer")]
        correct_answer: String,
    },
    Descriptive {
        rubric: String,
    },
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Multiple { .. } => "multiple",
            Self::Short { .. } => "short",
            Self::Descriptive { .. } => "descriptive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub id: u32,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    pub correct_count: u32,
    pub total: u32,
    pub per: Vec<QuestionResult>,
}

impl GradingResult {
    /// Placeholder shown before anything has been submitted.
    pub fn empty(total: u32) -> Self {
        Self {
            correct_count: 0,
            total,
            per: Vec::new(),
        }
    }
}
