use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::StudyError;

use super::migrations;

pub const HOME_ENV: &str = "STUDYTRACK_HOME";
const DEFAULT_DIR: &str = ".studytrack";

/// Resolve the data directory: explicit flag, then `STUDYTRACK_HOME`, then `./.studytrack`.
pub fn data_dir(flag: Option<&Path>) -> Result<PathBuf, StudyError> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let cwd = env::current_dir()?;
    Ok(cwd.join(DEFAULT_DIR))
}

/// Get the path to the studytrack database.
pub fn db_path(dir: &Path) -> PathBuf {
    dir.join("studytrack.db")
}

/// Get the config file path.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join("config.json")
}

/// Open a connection to the database. Returns error if not initialized.
pub fn open_db(dir: &Path) -> Result<Connection, StudyError> {
    let path = db_path(dir);
    if !path.exists() {
        return Err(StudyError::not_initialized());
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    tracing::debug!(path = %path.display(), "opened database");
    Ok(conn)
}

/// Initialize the database: create directories, database, and run migrations.
pub fn init_db(dir: &Path) -> Result<PathBuf, StudyError> {
    let path = db_path(dir);
    fs::create_dir_all(dir)?;
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    tracing::info!(path = %path.display(), "initialized database");
    Ok(path)
}

fn configure_connection(conn: &Connection) -> Result<(), StudyError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}
