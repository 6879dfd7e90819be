use crate::cli::{concept, finish, quiz, report, status, study, Ctx};
use crate::tracker::{parse_location, Route};

pub fn run(fragment: &str, ctx: &Ctx) -> i32 {
    let location = parse_location(fragment);
    let route = Route::resolve(&location);
    tracing::debug!(path = %location.path, view = route.path(), "resolved fragment");

    let plan_id = route.plan_id();
    let topic = route.topic();
    let result = match &route {
        Route::Dashboard => status::run_dashboard(ctx),
        Route::Concepts { .. } => concept::run_list(plan_id, ctx),
        Route::Concept { .. } => concept::run_show(plan_id, topic, ctx),
        Route::ConceptDetail { .. } => concept::run_detail(plan_id, topic, ctx),
        Route::ConceptPractice { .. } => concept::run_practice_view(plan_id, topic, ctx),
        Route::Study { .. } => study::run_show(plan_id, ctx),
        Route::Quiz { .. } => quiz::run_open(plan_id, ctx),
        Route::Report { .. } => report::run_show(plan_id, None, ctx),
    };
    finish(result, ctx.json)
}
