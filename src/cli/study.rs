use serde_json::json;

use crate::cli::commands::StudyCommands;
use crate::cli::{finish, Ctx};
use crate::db::StudyRepository;
use crate::error::StudyError;
use crate::models::Plan;
use crate::output;
use crate::tracker::content;
use crate::tracker::progress::active_index;
use crate::tracker::ProgressTracker;

pub fn run(cmd: StudyCommands, ctx: &Ctx) -> i32 {
    let result = match cmd {
        StudyCommands::Show => run_show(None, ctx),
        StudyCommands::Complete { step } => run_complete(step, ctx),
    };
    finish(result, ctx.json)
}

pub fn run_show(plan_id: Option<&str>, ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, plan_id)?;
    show(&repo, &plan, ctx.json);
    Ok(0)
}

fn show<R: StudyRepository + ?Sized>(repo: &R, plan: &Plan, json_output: bool) {
    let overall = ProgressTracker::new(repo).overall_for(plan);
    let steps = content::plan_steps(plan.steps, overall.steps_done);
    let focus = active_index(overall.steps_done, plan.steps);

    if json_output {
        output::json::print(&output::json::success(json!({
            "view": "study",
            "plan": output::json::plan_json(plan),
            "progress": output::json::overall_json(&overall),
            "steps": output::json::steps_json(&steps),
            "active_index": focus
        })));
    } else {
        println!("{} ({})", plan.title, plan.id);
        output::text::print_overall(&overall);
        output::text::print_steps(&steps, focus);
    }
}

fn run_complete(step: usize, ctx: &Ctx) -> Result<i32, StudyError> {
    if step == 0 {
        return Err(StudyError::validation("Steps are numbered from 1"));
    }
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, None)?;
    let outcome = ProgressTracker::new(&repo).complete_plan_step(&plan, step - 1)?;

    if ctx.json {
        output::json::print(&output::json::success(json!({
            "plan_id": plan.id,
            "completed_step": step,
            "progress": output::json::outcome_json(&outcome)
        })));
    } else {
        println!(
            "Completed step {step} of {}. Progress: {}% ({}/{})",
            plan.title, outcome.percent, outcome.done, outcome.total
        );
        if outcome.done < outcome.total {
            println!("Next: step {}", outcome.active_index + 1);
        }
    }
    Ok(0)
}
