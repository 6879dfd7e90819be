use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::db::connection;
use crate::error::StudyError;

/// Settings kept next to the database in `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_plan_id: Option<String>,
}

impl Config {
    /// Missing or unreadable config means defaults.
    pub fn load(dir: &Path) -> Self {
        let path = connection::config_path(dir);
        let Ok(content) = fs::read_to_string(&path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
            Self::default()
        })
    }

    pub fn save(&self, dir: &Path) -> Result<(), StudyError> {
        fs::create_dir_all(dir)?;
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StudyError::io(format!("Failed to encode config: {e}")))?;
        fs::write(connection::config_path(dir), content)?;
        Ok(())
    }
}
