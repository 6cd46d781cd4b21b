//! Unified application error type.
//! All modules (store, db, remote, core, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Table backends
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Remote table error: {0}")]
    Remote(String),

    /// The table (or the whole endpoint) is not there. The store turns this
    /// into local mode instead of failing.
    #[error("Remote table unavailable: {0}")]
    RemoteUnavailable(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid time span: {0}")]
    InvalidSpan(String),

    #[error("Invalid reason: {0}")]
    InvalidReason(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("No entry found with id {0}")]
    NotFound(String),

    #[error("An entry for {0} already exists")]
    DuplicateDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),
}

pub type AppResult<T> = Result<T, AppError>;
