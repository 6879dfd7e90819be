use serde_json::{json, Value};

use crate::error::StudyError;
use crate::models::{
    ConceptProgress, ConceptStage, OverallProgress, Plan, Question, QuestionKind, QuizSubmission,
    StepOutcome,
};
use crate::tracker::compute_progress_percent;
use crate::tracker::content::StepInfo;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &StudyError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

/// Pretty-print a JSON envelope on stdout.
pub fn print(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}

pub fn plan_json(p: &Plan) -> Value {
    json!({
        "id": p.id,
        "title": p.title,
        "start": p.start.to_string(),
        "end": p.end.to_string(),
        "level": p.level.as_str(),
        "steps": p.steps,
        "with_quiz": p.with_quiz,
        "topics": p.topics,
        "resources": p.resources,
        "created_at": p.created_at,
        "status": p.status.as_str()
    })
}

pub fn overall_json(p: &OverallProgress) -> Value {
    json!({
        "steps_done": p.steps_done,
        "total_steps": p.total_steps,
        "percent": compute_progress_percent(p.steps_done, p.total_steps),
        "updated_at": p.updated_at
    })
}

pub fn concept_json(topic: &str, p: &ConceptProgress) -> Value {
    json!({
        "topic": topic,
        "done": p.done,
        "total": p.total,
        "percent": compute_progress_percent(p.done, p.total),
        "updated_at": p.updated_at
    })
}

pub fn outcome_json(o: &StepOutcome) -> Value {
    json!({
        "done": o.done,
        "total": o.total,
        "active_index": o.active_index,
        "percent": o.percent
    })
}

pub fn steps_json(steps: &[StepInfo]) -> Value {
    json!(steps)
}

pub fn stages_json(p: &ConceptProgress) -> Value {
    let stages: Vec<Value> = ConceptStage::ALL
        .iter()
        .map(|s| {
            json!({
                "stage": s.as_str(),
                "title": s.title(),
                "done": (s.index() as u32) < p.done
            })
        })
        .collect();
    json!(stages)
}

/// Question as shown to a learner: no correct answers or rubrics.
pub fn question_json(q: &Question) -> Value {
    let mut v = json!({
        "id": q.id,
        "type": q.kind.as_str(),
        "question": q.question
    });
    if let QuestionKind::Multiple { options, .. } = &q.kind {
        v["options"] = json!(options);
    }
    v
}

pub fn submission_json(s: &QuizSubmission) -> Value {
    json!({
        "plan_id": s.plan_id,
        "answers": s.answers,
        "started_at": s.started_at,
        "submitted_at": s.submitted_at,
        "elapsed_ms": s.elapsed_ms,
        "grading": s.grading,
        "percent": compute_progress_percent(s.grading.correct_count, s.grading.total)
    })
}
