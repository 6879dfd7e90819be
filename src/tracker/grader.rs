use std::collections::BTreeMap;
use std::path::Path;

use crate::error::StudyError;
use crate::models::{Answer, GradingResult, Question, QuestionKind, QuestionResult};

/// Minimum trimmed length (exclusive) for a descriptive answer to count.
const DESCRIPTIVE_MIN_CHARS: usize = 30;
/// Leading characters of a short answer that must appear in the model answer.
const SHORT_MATCH_CHARS: usize = 2;

/// Score answers against question definitions. Pure and deterministic.
pub fn grade(answers: &BTreeMap<u32, Answer>, questions: &[Question]) -> GradingResult {
    let per: Vec<QuestionResult> = questions
        .iter()
        .map(|q| QuestionResult {
            id: q.id,
            correct: is_correct(answers.get(&q.id), &q.kind),
        })
        .collect();
    let correct_count = per.iter().filter(|r| r.correct).count() as u32;
    GradingResult {
        correct_count,
        total: questions.len() as u32,
        per,
    }
}

fn is_correct(answer: Option<&Answer>, kind: &QuestionKind) -> bool {
    match kind {
        QuestionKind::Multiple { correct, .. } => answer == Some(&Answer::Choice(*correct)),
        // Loose heuristic: only the first two characters of the answer are compared.
        // Kept until answers are graded by something content-aware.
        QuestionKind::Short { correct_answer } => {
            let given = trimmed_text(answer);
            if given.is_empty() {
                return false;
            }
            let head: String = given.chars().take(SHORT_MATCH_CHARS).collect();
            correct_answer.contains(&head)
        }
        QuestionKind::Descriptive { .. } => {
            trimmed_text(answer).chars().count() > DESCRIPTIVE_MIN_CHARS
        }
    }
}

fn trimmed_text(answer: Option<&Answer>) -> &str {
    answer.and_then(Answer::as_text).map(str::trim).unwrap_or("")
}

/// Built-in question bank used when no question file is given.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            question: "확률의 정의로 옳은 것은?".into(),
            kind: QuestionKind::Multiple {
                options: vec![
                    "가능한 사건의 수를 전체 경우의 수로 나눈 값".into(),
                    "임의의 수를 더한 값".into(),
                    "항상 1보다 큰 값".into(),
                    "무작위로 결정되는 값".into(),
                ],
                correct: 0,
            },
        },
        Question {
            id: 2,
            question: "표준편차에서 루트를 씌우는 이유는?".into(),
            kind: QuestionKind::Short {
                correct_answer: "분산의 단위를 원래 데이터의 단위로 맞추기 위해".into(),
            },
        },
        Question {
            id: 3,
            question: "표본평균의 추정 성능을 설명하시오.".into(),
            kind: QuestionKind::Descriptive {
                rubric: "표준오차 또는 신뢰구간 관련 서술".into(),
            },
        },
    ]
}

/// Load a question list from a JSON file, or the built-in bank when `path` is `None`.
pub fn load_questions(path: Option<&Path>) -> Result<Vec<Question>, StudyError> {
    let Some(path) = path else {
        return Ok(default_questions());
    };
    let content = std::fs::read_to_string(path)?;
    let questions: Vec<Question> = serde_json::from_str(&content)
        .map_err(|e| StudyError::validation(format!("Invalid question file: {e}")))?;
    if questions.is_empty() {
        return Err(StudyError::validation("Question file contains no questions"));
    }
    let mut seen = std::collections::HashSet::new();
    for q in &questions {
        if !seen.insert(q.id) {
            return Err(StudyError::validation(format!("Duplicate question id: {}", q.id)));
        }
    }
    Ok(questions)
}
