use crate::db::migrate::table_exists;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::Period;
use crate::store::table::EntryTable;
use crate::store::wire::{EntryRecord, EntryRow};

pub const TABLE_NAME: &str = "time_entries";

/// `time_entries` stored in a SQLite file.
pub struct SqliteTable {
    pool: DbPool,
    location: String,
}

impl SqliteTable {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
            location: path.to_string(),
        })
    }

    pub fn from_pool(pool: DbPool, location: impl Into<String>) -> Self {
        Self {
            pool,
            location: location.into(),
        }
    }

    fn ensure_table(&self) -> AppResult<()> {
        if table_exists(&self.pool.conn, TABLE_NAME)? {
            Ok(())
        } else {
            Err(AppError::RemoteUnavailable(format!(
                "table '{}' not found in {}. Run `rtimebank init` to create it",
                TABLE_NAME, self.location
            )))
        }
    }
}

impl EntryTable for SqliteTable {
    fn describe(&self) -> String {
        format!("sqlite:{}", self.location)
    }

    fn select_month(&mut self, period: Period) -> AppResult<Vec<EntryRow>> {
        self.ensure_table()?;
        queries::load_entries_by_month(&self.pool.conn, period)
    }

    fn select_one(&mut self, id: &str) -> AppResult<Option<EntryRow>> {
        self.ensure_table()?;
        match id.trim().parse::<i64>() {
            Ok(row_id) => queries::load_entry(&self.pool.conn, row_id),
            Err(_) => Ok(None),
        }
    }

    fn insert(&mut self, record: &EntryRecord) -> AppResult<EntryRow> {
        queries::insert_entry(&self.pool.conn, record)
    }

    fn update(&mut self, id: &str, record: &EntryRecord) -> AppResult<EntryRow> {
        queries::update_entry(&self.pool.conn, id, record)
    }

    fn delete(&mut self, id: &str) -> AppResult<()> {
        queries::delete_entry(&self.pool.conn, id)
    }
}
