use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use serde_json::json;

use crate::cli::commands::PlanCommands;
use crate::cli::{finish, Ctx};
use crate::config::Config;
use crate::error::StudyError;
use crate::models::{Level, Plan, PlanStatus};
use crate::output;
use crate::time::Clock;
use crate::tracker::{PlanRegistry, ProgressTracker};

const DEFAULT_PERIOD_DAYS: u64 = 7;

pub fn run(cmd: PlanCommands, ctx: &Ctx) -> i32 {
    let result = match cmd {
        PlanCommands::Create {
            title,
            id,
            start,
            end,
            level,
            steps,
            no_quiz,
            topics,
            resources,
        } => {
            let input = PlanInput {
                title,
                id,
                start,
                end,
                level,
                steps,
                with_quiz: !no_quiz,
                topics,
                resources,
            };
            run_create(input, ctx)
        }
        PlanCommands::List => run_list(ctx),
        PlanCommands::Show { id } => run_show(&id, ctx),
        PlanCommands::Activate { id } => run_activate(&id, ctx),
        PlanCommands::Complete { id } => run_set_status(&id, PlanStatus::Completed, ctx),
        PlanCommands::Reopen { id } => run_set_status(&id, PlanStatus::Active, ctx),
    };
    finish(result, ctx.json)
}

pub struct PlanInput {
    pub title: String,
    pub id: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub level: Level,
    pub steps: u32,
    pub with_quiz: bool,
    pub topics: Vec<String>,
    pub resources: Vec<String>,
}

fn validate_plan_id(id: &str) -> Result<(), StudyError> {
    if !is_slug(id) {
        return Err(StudyError::validation(
            "Plan id must match ^[a-z0-9][a-z0-9-]*[a-z0-9]$ (or single char [a-z0-9])",
        ));
    }
    Ok(())
}

fn is_slug(id: &str) -> bool {
    let valid_edge = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    let (Some(first), Some(last)) = (id.chars().next(), id.chars().last()) else {
        return false;
    };
    valid_edge(first) && valid_edge(last) && id.chars().all(|c| valid_edge(c) || c == '-')
}

fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, StudyError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| StudyError::validation(format!("Invalid {field} date '{raw}' (expected YYYY-MM-DD)")))
}

/// Check a create request and turn it into a plan. Nothing is written on failure.
pub fn build_plan(input: PlanInput, clock: Clock) -> Result<Plan, StudyError> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(StudyError::validation("Plan title is required"));
    }
    if input.steps == 0 {
        return Err(StudyError::validation("Steps must be at least 1"));
    }

    let id = match input.id {
        Some(id) => id,
        None => ulid::Ulid::new().to_string().to_lowercase(),
    };
    validate_plan_id(&id)?;

    let start = match input.start.as_deref() {
        Some(raw) => parse_date(raw, "start")?,
        None => clock.today(),
    };
    let end = match input.end.as_deref() {
        Some(raw) => parse_date(raw, "end")?,
        None => start
            .checked_add_days(Days::new(DEFAULT_PERIOD_DAYS))
            .unwrap_or(start),
    };
    if end < start {
        return Err(StudyError::validation("End date must not be before start date"));
    }

    let topics: Vec<String> = input.topics.iter().map(|t| t.trim().to_string()).collect();
    if topics.is_empty() {
        return Err(StudyError::validation("At least one topic is required (--topic)"));
    }
    let mut seen = HashSet::new();
    for t in &topics {
        if t.is_empty() {
            return Err(StudyError::validation("Topic must not be empty"));
        }
        if !seen.insert(t.as_str()) {
            return Err(StudyError::validation(format!("Duplicate topic: {t}")));
        }
    }

    for r in &input.resources {
        url::Url::parse(r)
            .map_err(|e| StudyError::validation(format!("Invalid resource URL '{r}': {e}")))?;
    }

    Ok(Plan {
        id,
        title,
        start,
        end,
        level: input.level,
        steps: input.steps,
        with_quiz: input.with_quiz,
        topics,
        resources: input.resources,
        created_at: clock.now_millis(),
        status: PlanStatus::Active,
    })
}

fn run_create(input: PlanInput, ctx: &Ctx) -> Result<i32, StudyError> {
    let plan = build_plan(input, Clock::default())?;
    let repo = ctx.open_repo()?;
    let registry = PlanRegistry::new(&repo);
    if registry.find_plan(&plan.id).is_some() {
        return Err(StudyError::plan_id_conflict(&plan.id));
    }
    registry.upsert_plan(plan.clone());
    tracing::info!(plan_id = %plan.id, "plan created");

    // First plan becomes the active one.
    let dir = ctx.dir()?;
    let mut config = Config::load(&dir);
    let activated = config.active_plan_id.is_none();
    if activated {
        config.active_plan_id = Some(plan.id.clone());
        config.save(&dir)?;
    }

    if ctx.json {
        let mut v = output::json::plan_json(&plan);
        v["active"] = json!(activated);
        output::json::print(&output::json::success(v));
    } else {
        println!("Created plan: {} ({})", plan.title, plan.id);
    }
    Ok(0)
}

fn run_list(ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plans = PlanRegistry::new(&repo).load_plans();
    let active_id = Config::load(&ctx.dir()?).active_plan_id;

    if ctx.json {
        let tracker = ProgressTracker::new(&repo);
        let plans_json: Vec<_> = plans
            .iter()
            .map(|p| {
                let mut v = output::json::plan_json(p);
                v["percent"] = json!(tracker.plan_percent(p));
                if Some(&p.id) == active_id.as_ref() {
                    v["active"] = json!(true);
                }
                v
            })
            .collect();
        output::json::print(&output::json::success(json!({ "plans": plans_json })));
    } else {
        output::text::print_plan_list(&plans, active_id.as_deref());
    }
    Ok(0)
}

fn run_show(id: &str, ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, Some(id))?;
    let tracker = ProgressTracker::new(&repo);
    let overall = tracker.overall_for(&plan);

    if ctx.json {
        let topics: Vec<_> = plan
            .topics
            .iter()
            .map(|t| output::json::concept_json(t, &tracker.concept_for(&plan.id, t)))
            .collect();
        output::json::print(&output::json::success(json!({
            "plan": output::json::plan_json(&plan),
            "progress": output::json::overall_json(&overall),
            "topics": topics
        })));
    } else {
        output::text::print_plan(&plan);
        println!();
        output::text::print_overall(&overall);
    }
    Ok(0)
}

fn run_activate(id: &str, ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plan = ctx.resolve_plan(&repo, Some(id))?;

    let dir = ctx.dir()?;
    let mut config = Config::load(&dir);
    config.active_plan_id = Some(plan.id.clone());
    config.save(&dir)?;

    if ctx.json {
        output::json::print(&output::json::success(json!({
            "activated": { "id": plan.id, "title": plan.title }
        })));
    } else {
        println!("Activated plan: {} ({})", plan.title, plan.id);
    }
    Ok(0)
}

fn run_set_status(id: &str, status: PlanStatus, ctx: &Ctx) -> Result<i32, StudyError> {
    let repo = ctx.open_repo()?;
    let plan = PlanRegistry::new(&repo)
        .set_status(id, status)
        .ok_or_else(|| StudyError::plan_not_found(id))?;

    if ctx.json {
        output::json::print(&output::json::success(output::json::plan_json(&plan)));
    } else {
        println!("Plan {} is now {}", plan.id, plan.status.as_str());
    }
    Ok(0)
}
