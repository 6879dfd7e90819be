use serde_json::json;

use crate::cli::{finish, Ctx};
use crate::error::StudyError;
use crate::output;
use crate::tracker::{dashboard, PlanRegistry, ProgressTracker};

pub fn run(ctx: &Ctx) -> i32 {
    finish(run_dashboard(ctx), ctx.json)
}

pub fn run_dashboard(ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plans = PlanRegistry::new(&repo).load_plans();
    let tracker = ProgressTracker::new(&repo);
    let dash = dashboard::build(&tracker, &plans);

    if ctx.json {
        let mut data = json!(dash);
        data["view"] = json!("dashboard");
        output::json::print(&output::json::success(data));
    } else {
        output::text::print_dashboard(&dash);
    }
    Ok(0)
}
