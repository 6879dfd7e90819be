use std::path::Path;

use serde_json::json;

use crate::cli::commands::ReportCommands;
use crate::cli::{finish, Ctx};
use crate::error::StudyError;
use crate::output;
use crate::output::report;
use crate::tracker::{compute_progress_percent, grader, ProgressTracker};

pub fn run(cmd: ReportCommands, ctx: &Ctx) -> i32 {
    let result = match cmd {
        ReportCommands::Show { questions } => run_show(None, questions.as_deref(), ctx),
        ReportCommands::Export { out } => run_export(&out, ctx),
        ReportCommands::Summary { questions } => run_summary(questions.as_deref(), ctx),
    };
    finish(result, ctx.json)
}

pub fn run_show(plan_id: Option<&str>, questions: Option<&Path>, ctx: &Ctx) -> Result<i32, StudyError> {
    let questions = grader::load_questions(questions)?;
    let question_count = questions.len() as u32;
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, plan_id)?;
    let submission = ProgressTracker::new(&repo).load_quiz_submission(&plan.id);
    let grading = report::report_grading(submission.as_ref(), question_count);
    let percent = compute_progress_percent(grading.correct_count, grading.total);

    if ctx.json {
        output::json::print(&output::json::success(json!({
            "view": "report",
            "plan": output::json::plan_json(&plan),
            "grading": grading,
            "percent": percent,
            "elapsed_ms": submission.as_ref().map_or(0, |s| s.elapsed_ms),
            "submitted_at": submission.as_ref().map(|s| s.submitted_at)
        })));
    } else {
        println!("학습 리포트 · {}", plan.title);
        match &submission {
            Some(s) => output::text::print_submission(s, &questions),
            None => println!(
                "No quiz submitted yet. Score: {percent}% ({}/{})",
                grading.correct_count, grading.total
            ),
        }
    }
    Ok(0)
}

fn run_export(out: &Path, ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, None)?;
    let submission = ProgressTracker::new(&repo).load_quiz_submission(&plan.id);
    let path = report::export_report(out, &plan.id, submission.as_ref())?;

    if ctx.json {
        output::json::print(&output::json::success(json!({
            "path": path.to_string_lossy(),
            "has_submission": submission.is_some()
        })));
    } else {
        println!("Exported report to {}", path.display());
    }
    Ok(0)
}

fn run_summary(questions: Option<&Path>, ctx: &Ctx) -> Result<i32, StudyError> {
    let question_count = grader::load_questions(questions)?.len() as u32;
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, None)?;
    let submission = ProgressTracker::new(&repo).load_quiz_submission(&plan.id);
    let grading = report::report_grading(submission.as_ref(), question_count);
    let title = if plan.title.is_empty() { &plan.id } else { &plan.title };
    let text = report::summary_text(title, &grading);

    if ctx.json {
        output::json::print(&output::json::success(json!({ "summary": text })));
    } else {
        println!("{text}");
    }
    Ok(0)
}
