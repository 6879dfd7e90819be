pub mod commands;
pub mod concept;
pub mod init;
pub mod open;
pub mod plan;
pub mod quiz;
pub mod report;
pub mod status;
pub mod study;

pub use commands::*;

use std::path::PathBuf;

use crate::config::Config;
use crate::db::{connection, SqliteStore, StoreRepository, StudyRepository};
use crate::error::StudyError;
use crate::models::Plan;
use crate::output;
use crate::tracker::PlanRegistry;

/// Global flags shared by every command.
pub struct Ctx {
    pub json: bool,
    pub plan: Option<String>,
    pub data_dir: Option<PathBuf>,
}

impl Ctx {
    pub fn dir(&self) -> Result<PathBuf, StudyError> {
        connection::data_dir(self.data_dir.as_deref())
    }

    pub fn open_repo(&self) -> Result<StoreRepository<SqliteStore>, StudyError> {
        let store = SqliteStore::open(&self.dir()?)?;
        Ok(StoreRepository::new(store))
    }

    /// Plan from `explicit`, then `--plan`, then the active plan in the config.
    pub fn resolve_plan<R: StudyRepository + ?Sized>(
        &self,
        repo: &R,
        explicit: Option<&str>,
    ) -> Result<Plan, StudyError> {
        let id = match explicit.or(self.plan.as_deref()) {
            Some(id) => id.to_string(),
            None => Config::load(&self.dir()?)
                .active_plan_id
                .ok_or_else(StudyError::no_active_plan)?,
        };
        PlanRegistry::new(repo)
            .find_plan(&id)
            .ok_or_else(|| StudyError::plan_not_found(&id))
    }
}

/// Map a command result to an exit code, printing errors in the requested format.
pub fn finish(result: Result<i32, StudyError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(code = e.code.as_str(), "command failed");
            if json_output {
                output::json::print(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}
