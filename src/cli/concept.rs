use serde_json::json;

use crate::cli::commands::ConceptCommands;
use crate::cli::{finish, Ctx};
use crate::error::StudyError;
use crate::models::{ConceptStage, Plan, StepOutcome};
use crate::output;
use crate::tracker::content;
use crate::tracker::progress::{active_index, PRACTICE_CHECKLIST};
use crate::tracker::{Practice, ProgressTracker, Route};

pub fn run(cmd: ConceptCommands, ctx: &Ctx) -> i32 {
    let result = match cmd {
        ConceptCommands::List => run_list(None, ctx),
        ConceptCommands::Show { topic } => run_show(None, Some(&topic), ctx),
        ConceptCommands::Detail { topic } => run_detail(None, Some(&topic), ctx),
        ConceptCommands::Complete { topic, stage } => run_complete(&topic, stage, ctx),
        ConceptCommands::Practice { topic, checks, answer } => {
            run_practice(&topic, &checks, answer.as_deref(), ctx)
        }
    };
    finish(result, ctx.json)
}

/// The requested topic, or the plan's first topic when none is given.
fn resolve_topic(plan: &Plan, topic: Option<&str>) -> Result<String, StudyError> {
    match topic {
        Some(t) if plan.has_topic(t) => Ok(t.to_string()),
        Some(t) => Err(StudyError::topic_not_found(&plan.id, t)),
        None => plan
            .topics
            .first()
            .cloned()
            .ok_or_else(|| StudyError::validation(format!("Plan {} has no topics", plan.id))),
    }
}

pub fn run_list(plan_id: Option<&str>, ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, plan_id)?;
    let tracker = ProgressTracker::new(&repo);

    if ctx.json {
        let topics: Vec<_> = plan
            .topics
            .iter()
            .map(|t| output::json::concept_json(t, &tracker.concept_for(&plan.id, t)))
            .collect();
        output::json::print(&output::json::success(json!({
            "view": "concepts",
            "plan": output::json::plan_json(&plan),
            "topics": topics
        })));
    } else {
        println!("Topics of {} ({})", plan.title, plan.id);
        for t in &plan.topics {
            let p = tracker.concept_for(&plan.id, t);
            println!("  {t}: {}% ({}/{})", tracker.concept_percent(&plan.id, t), p.done, p.total);
        }
    }
    Ok(0)
}

pub fn run_show(plan_id: Option<&str>, topic: Option<&str>, ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, plan_id)?;
    let topic = resolve_topic(&plan, topic)?;
    let progress = ProgressTracker::new(&repo).concept_for(&plan.id, &topic);

    if ctx.json {
        output::json::print(&output::json::success(json!({
            "view": "concept",
            "plan_id": plan.id,
            "progress": output::json::concept_json(&topic, &progress),
            "stages": output::json::stages_json(&progress),
            "active_index": active_index(progress.done, progress.total)
        })));
    } else {
        output::text::print_stages(&topic, &progress);
    }
    Ok(0)
}

pub fn run_detail(plan_id: Option<&str>, topic: Option<&str>, ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, plan_id)?;
    let topic = resolve_topic(&plan, topic)?;
    let body = content::concept_content(&topic);

    if ctx.json {
        output::json::print(&output::json::success(json!({
            "view": "concept-detail",
            "plan_id": plan.id,
            "topic": topic,
            "content": body
        })));
    } else {
        println!("개념 정리 · {topic}");
        println!("\n{}", body.summary);
        for point in &body.key_points {
            println!("  - {point}");
        }
        println!("\n{}", body.formula);
        println!("{}", body.example);
    }
    Ok(0)
}

/// Practice view: the checklist and the topic's current progress.
pub fn run_practice_view(plan_id: Option<&str>, topic: Option<&str>, ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, plan_id)?;
    let topic = resolve_topic(&plan, topic)?;
    let progress = ProgressTracker::new(&repo).concept_for(&plan.id, &topic);

    if ctx.json {
        output::json::print(&output::json::success(json!({
            "view": "concept-practice",
            "plan_id": plan.id,
            "checklist": PRACTICE_CHECKLIST,
            "progress": output::json::concept_json(&topic, &progress)
        })));
    } else {
        println!("실습 과제 · {topic}");
        for (i, item) in PRACTICE_CHECKLIST.iter().enumerate() {
            println!("  {}. {item}", i + 1);
        }
    }
    Ok(0)
}

fn run_complete(topic: &str, stage: ConceptStage, ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, None)?;
    let topic = resolve_topic(&plan, Some(topic))?;
    let outcome = ProgressTracker::new(&repo).complete_concept_stage(&plan.id, &topic, stage);
    print_outcome(&plan, &topic, stage, &outcome, ctx.json);
    Ok(0)
}

fn run_practice(topic: &str, checks: &[usize], answer: Option<&str>, ctx: &Ctx) -> Result<i32, StudyError> {
    let mut practice = Practice {
        short_answer: answer.unwrap_or_default().to_string(),
        ..Practice::default()
    };
    for &n in checks {
        if n == 0 || n > practice.checks.len() {
            return Err(StudyError::validation(format!(
                "Checklist item must be between 1 and {}",
                practice.checks.len()
            )));
        }
        practice.checks[n - 1] = true;
    }

    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, None)?;
    let topic = resolve_topic(&plan, Some(topic))?;
    let outcome = ProgressTracker::new(&repo).submit_practice(&plan.id, &topic, &practice)?;
    print_outcome(&plan, &topic, ConceptStage::Exercise, &outcome, ctx.json);
    Ok(0)
}

fn print_outcome(
    plan: &Plan,
    topic: &str,
    stage: ConceptStage,
    outcome: &StepOutcome,
    json_output: bool,
) {
    if json_output {
        let next = Route::Concept {
            plan_id: Some(plan.id.clone()),
            topic: Some(topic.to_string()),
        };
        output::json::print(&output::json::success(json!({
            "plan_id": plan.id,
            "topic": topic,
            "completed_stage": stage.as_str(),
            "progress": output::json::outcome_json(outcome),
            "next": next.to_fragment()
        })));
    } else {
        println!(
            "Completed {} of {topic}. Progress: {}% ({}/{})",
            stage.title(),
            outcome.percent,
            outcome.done,
            outcome.total
        );
    }
}
