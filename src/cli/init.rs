use serde_json::json;

use crate::cli::{finish, Ctx};
use crate::config::Config;
use crate::db::{connection, SqliteStore, StoreRepository};
use crate::error::StudyError;
use crate::output;
use crate::time::Clock;
use crate::tracker::PlanRegistry;

const DEMO_ACTIVE_PLAN: &str = "vector";

pub fn run(demo: bool, ctx: &Ctx) -> i32 {
    finish(run_inner(demo, ctx), ctx.json)
}

fn run_inner(demo: bool, ctx: &Ctx) -> Result<i32, StudyError> {
    let dir = ctx.dir()?;
    let path = connection::init_db(&dir)?;
    let seeded = if demo {
        let repo = StoreRepository::new(SqliteStore::open(&dir)?);
        PlanRegistry::new(&repo).seed_demo_plans(Clock::default().now_millis())
    } else {
        0
    };

    // Seeded plans follow the same rule as created ones: the first becomes active.
    if seeded > 0 {
        let mut config = Config::load(&dir);
        if config.active_plan_id.is_none() {
            config.active_plan_id = Some(DEMO_ACTIVE_PLAN.to_string());
            config.save(&dir)?;
        }
    }

    if ctx.json {
        output::json::print(&output::json::success(json!({
            "path": path.to_string_lossy(),
            "seeded": seeded
        })));
    } else {
        println!("Initialized studytrack at {}", path.display());
        if seeded > 0 {
            println!("Seeded {seeded} demo plans.");
        }
    }
    Ok(0)
}
