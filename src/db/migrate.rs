use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};
use tracing::info;

/// Schema steps, applied in order. `PRAGMA user_version` stores how many
/// of them already ran.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "create time_entries table",
        r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            year         INTEGER NOT NULL,
            month        INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
            day          INTEGER NOT NULL CHECK(day BETWEEN 1 AND 31),
            clock_in_1   TEXT,
            clock_out_1  TEXT,
            clock_in_2   TEXT,
            clock_out_2  TEXT,
            total_hours  TEXT,
            balance      TEXT,
            note         TEXT,
            reason       TEXT NOT NULL DEFAULT 'normal',
            weekday      TEXT NOT NULL,
            created_at   TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_time_entries_day
            ON time_entries(year, month, day);
        "#,
    ),
    (
        "add is_holiday to time_entries",
        r#"
        ALTER TABLE time_entries ADD COLUMN is_holiday INTEGER NOT NULL DEFAULT 0;
        "#,
    ),
];

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn schema_version(conn: &Connection) -> rusqlite::Result<usize> {
    let v: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    Ok(usize::try_from(v).unwrap_or(0))
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = schema_version(conn)?;

    if current > MIGRATIONS.len() {
        return Err(AppError::Migration(format!(
            "database schema version {} is newer than this build ({})",
            current,
            MIGRATIONS.len()
        )));
    }

    for (idx, (name, sql)) in MIGRATIONS.iter().enumerate().skip(current) {
        let version = idx + 1;

        conn.execute_batch(&format!(
            "BEGIN;\n{}\nPRAGMA user_version = {};\nCOMMIT;",
            sql, version
        ))
        .map_err(|e| {
            let _ = conn.execute_batch("ROLLBACK;");
            AppError::Migration(format!("{} (v{}): {}", name, version, e))
        })?;

        info!(version, name, "migration applied");
    }

    Ok(())
}
