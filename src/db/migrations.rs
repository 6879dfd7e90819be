use rusqlite::Connection;

use crate::error::StudyError;

pub fn run_migrations(conn: &Connection) -> Result<(), StudyError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;
    Ok(())
}
