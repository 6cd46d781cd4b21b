use super::wire::{EntryRecord, EntryRow};
use crate::errors::AppResult;
use crate::models::Period;

/// A persistent table of time entries keyed by an opaque id.
///
/// Implementations report a missing table (or endpoint) as
/// `AppError::RemoteUnavailable`; anything else is an operation error.
pub trait EntryTable {
    /// Human readable location, for logs and banners.
    fn describe(&self) -> String;

    /// Rows of one month, ordered by day.
    fn select_month(&mut self, period: Period) -> AppResult<Vec<EntryRow>>;

    /// One row by id, wherever its month is.
    fn select_one(&mut self, id: &str) -> AppResult<Option<EntryRow>>;

    fn insert(&mut self, record: &EntryRecord) -> AppResult<EntryRow>;

    /// Fails with `AppError::NotFound` when no row has `id`.
    fn update(&mut self, id: &str, record: &EntryRecord) -> AppResult<EntryRow>;

    /// Fails with `AppError::NotFound` when no row has `id`.
    fn delete(&mut self, id: &str) -> AppResult<()>;
}
