//! Static study content shown until a content service provides the real thing.

use serde::Serialize;

const STEP_TITLES: [&str; 4] = ["개념 정리", "실습 과제", "형성평가", "응용 문제"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub index: u32,
    pub title: String,
    pub description: String,
    pub done: bool,
}

/// The plan's steps with completion flags for the first `done` of them.
pub fn plan_steps(steps: u32, done: u32) -> Vec<StepInfo> {
    (0..steps)
        .map(|i| StepInfo {
            index: i,
            title: format!("Step {}", i + 1),
            description: STEP_TITLES
                .get(i as usize)
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("단계 {}", i + 1)),
            done: i < done,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptContent {
    pub summary: String,
    pub key_points: Vec<String>,
    pub formula: String,
    pub example: String,
}

pub fn concept_content(topic: &str) -> ConceptContent {
    ConceptContent {
        summary: format!("{topic}의 핵심 개념을 직관적으로 정리합니다."),
        key_points: vec![
            format!("{topic}의 정의와 직관"),
            format!("{topic}을(를) 사용하는 상황/문제 유형"),
            "자주 하는 실수와 주의점".to_string(),
        ],
        formula: format!("{topic} 관련 기본 공식/표현을 한 눈에: e.g., P(A)=|A|/|Ω|"),
        example: format!("{topic}을(를) 적용한 간단 예시 문제와 풀이 스케치"),
    }
}
