pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod edit;
pub mod form;
pub mod logic;

use crate::config::{Backend, Config, RemoteSettings};
use crate::core::calculator::BalancePolicy;
use crate::db::SqliteTable;
use crate::errors::AppResult;
use crate::remote::RestTable;
use crate::store::EntryStore;
use crate::store::table::EntryTable;
use tracing::{info, warn};

/// Where the store should read and write.
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    /// Explicit SQLite file; wins over the configured backend.
    pub db: Option<String>,
    /// Skip every backend and keep entries in memory.
    pub local: bool,
}

/// Build the entry store for this run.
///
/// Missing REST settings are a configuration error. A SQLite file that cannot
/// be opened only puts the store in local mode.
pub fn open_store(cfg: &Config, opts: &StoreOptions) -> AppResult<EntryStore> {
    let policy = BalancePolicy::from_work_duration(&cfg.min_work_duration)?;

    if opts.local {
        info!("local mode requested");
        return Ok(EntryStore::local(
            policy,
            "started with --local, no backend is used.",
        ));
    }

    let table: Box<dyn EntryTable> = match (&opts.db, cfg.backend) {
        (Some(path), _) => match SqliteTable::open(path) {
            Ok(t) => Box::new(t),
            Err(e) => return Ok(local_after(policy, e.to_string())),
        },
        (None, Backend::Sqlite) => match SqliteTable::open(&cfg.database) {
            Ok(t) => Box::new(t),
            Err(e) => return Ok(local_after(policy, e.to_string())),
        },
        (None, Backend::Rest) => {
            let settings = RemoteSettings::from_env()?;
            Box::new(RestTable::new(&settings, &cfg.table)?)
        }
    };

    Ok(EntryStore::connected(table, policy))
}

fn local_after(policy: BalancePolicy, reason: String) -> EntryStore {
    warn!(%reason, "cannot open database, using local mode");
    EntryStore::local(policy, reason)
}
