use crate::errors::{AppError, AppResult};
use crate::models::Period;
use crate::store::wire::{EntryRecord, EntryRow};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_COLUMNS: &str = "id, year, month, day, clock_in_1, clock_out_1, clock_in_2, clock_out_2,
     total_hours, balance, note, reason, weekday, is_holiday";

pub fn map_row(row: &Row) -> Result<EntryRow> {
    let id: i64 = row.get("id")?;
    let is_holiday: i64 = row.get("is_holiday")?;

    Ok(EntryRow {
        id: id.to_string(),
        record: EntryRecord {
            year: row.get("year")?,
            month: row.get("month")?,
            day: row.get("day")?,
            clock_in_1: row.get("clock_in_1")?,
            clock_out_1: row.get("clock_out_1")?,
            clock_in_2: row.get("clock_in_2")?,
            clock_out_2: row.get("clock_out_2")?,
            total_hours: row.get("total_hours")?,
            balance: row.get("balance")?,
            note: row.get("note")?,
            reason: row.get("reason")?,
            weekday: row.get::<_, Option<String>>("weekday")?,
            is_holiday: Some(is_holiday != 0),
        },
    })
}

/// SQLite ids are integers; anything else cannot match a row.
fn parse_id(id: &str) -> AppResult<i64> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| AppError::NotFound(id.to_string()))
}

/// Translate a UNIQUE(year, month, day) violation into a store error.
fn map_write_error(e: rusqlite::Error, record: &EntryRecord) -> AppError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::DuplicateDay(format!(
                "{:04}-{:02}-{:02}",
                record.year, record.month, record.day
            ))
        }
        _ => AppError::Db(e),
    }
}

pub fn load_entries_by_month(conn: &Connection, period: Period) -> AppResult<Vec<EntryRow>> {
    let sql = format!(
        "SELECT {} FROM time_entries
         WHERE year = ?1 AND month = ?2
         ORDER BY day ASC",
        SELECT_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![period.year, period.month], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<EntryRow>> {
    let sql = format!("SELECT {} FROM time_entries WHERE id = ?1", SELECT_COLUMNS);
    let row = conn.query_row(&sql, [id], map_row).optional()?;
    Ok(row)
}

pub fn insert_entry(conn: &Connection, record: &EntryRecord) -> AppResult<EntryRow> {
    conn.execute(
        "INSERT INTO time_entries (year, month, day, clock_in_1, clock_out_1, clock_in_2, clock_out_2,
                                   total_hours, balance, note, reason, weekday, is_holiday, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            record.year,
            record.month,
            record.day,
            record.clock_in_1,
            record.clock_out_1,
            record.clock_in_2,
            record.clock_out_2,
            record.total_hours,
            record.balance,
            record.note,
            record.reason.as_deref().unwrap_or("normal"),
            record.weekday,
            record.is_holiday.unwrap_or(false),
            Local::now().to_rfc3339(),
        ],
    )
    .map_err(|e| map_write_error(e, record))?;

    let id = conn.last_insert_rowid();
    load_entry(conn, id)?.ok_or_else(|| AppError::NotFound(id.to_string()))
}

/// Update an entry (all fields except id)
pub fn update_entry(conn: &Connection, id: &str, record: &EntryRecord) -> AppResult<EntryRow> {
    let row_id = parse_id(id)?;

    let changed = conn
        .execute(
            "UPDATE time_entries
             SET year = ?1, month = ?2, day = ?3,
                 clock_in_1 = ?4, clock_out_1 = ?5, clock_in_2 = ?6, clock_out_2 = ?7,
                 total_hours = ?8, balance = ?9, note = ?10,
                 reason = ?11, weekday = ?12, is_holiday = ?13
             WHERE id = ?14",
            params![
                record.year,
                record.month,
                record.day,
                record.clock_in_1,
                record.clock_out_1,
                record.clock_in_2,
                record.clock_out_2,
                record.total_hours,
                record.balance,
                record.note,
                record.reason.as_deref().unwrap_or("normal"),
                record.weekday,
                record.is_holiday.unwrap_or(false),
                row_id,
            ],
        )
        .map_err(|e| map_write_error(e, record))?;

    if changed == 0 {
        return Err(AppError::NotFound(id.to_string()));
    }

    load_entry(conn, row_id)?.ok_or_else(|| AppError::NotFound(id.to_string()))
}

pub fn delete_entry(conn: &Connection, id: &str) -> AppResult<()> {
    let row_id = parse_id(id)?;
    let changed = conn.execute("DELETE FROM time_entries WHERE id = ?1", [row_id])?;
    if changed == 0 {
        return Err(AppError::NotFound(id.to_string()));
    }
    Ok(())
}
