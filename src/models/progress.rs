use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::quiz::{Answer, GradingResult};

/// Number of stages every topic goes through: concept, exercise, quiz.
pub const CONCEPT_STAGES: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallProgress {
    #[serde(default)]
    pub plan_id: String,
    pub steps_done: u32,
    pub total_steps: u32,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptProgress {
    #[serde(default)]
    pub plan_id: String,
    #[serde(default)]
    pub topic: String,
    pub done: u32,
    pub total: u32,
    pub updated_at: i64,
}

impl OverallProgress {
    pub fn new(plan_id: &str, steps_done: u32, total_steps: u32, updated_at: i64) -> Self {
        Self {
            plan_id: plan_id.to_string(),
            steps_done,
            total_steps,
            updated_at,
        }
    }
}

impl ConceptProgress {
    /// Progress over the fixed three stages of a topic.
    pub fn new(plan_id: &str, topic: &str, done: u32, updated_at: i64) -> Self {
        Self {
            plan_id: plan_id.to_string(),
            topic: topic.to_string(),
            done,
            total: CONCEPT_STAGES,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConceptStage {
    Concept,
    Exercise,
    Quiz,
}

impl ConceptStage {
    pub const ALL: [ConceptStage; 3] = [Self::Concept, Self::Exercise, Self::Quiz];

    pub fn index(&self) -> usize {
        match self {
            Self::Concept => 0,
            Self::Exercise => 1,
            Self::Quiz => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concept => "concept",
            Self::Exercise => "exercise",
            Self::Quiz => "quiz",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Concept => "개념 정리",
            Self::Exercise => "실습 과제",
            Self::Quiz => "형성평가",
        }
    }
}

/// Pending quiz attempt, written when a learner opens the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub started_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub plan_id: String,
    pub answers: BTreeMap<u32, Answer>,
    pub started_at: i64,
    pub submitted_at: i64,
    pub elapsed_ms: i64,
    pub grading: GradingResult,
}

/// Result of completing a step or stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutcome {
    pub done: u32,
    pub total: u32,
    pub active_index: u32,
    pub percent: u8,
}
