//! SQLite table backend: the `time_entries` table in a local file.

pub mod initialize;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod table;

pub use table::SqliteTable;
