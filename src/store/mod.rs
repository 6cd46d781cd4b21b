//! Entry store: the authoritative list of day entries for a session.
//!
//! The store starts connected to a table backend. The first failed fetch
//! (missing table, unreachable endpoint) switches it to local mode for the
//! rest of the session: entries then live only in memory and a warning is
//! exposed for the UI to show.

pub mod table;
pub mod wire;

use crate::core::calculator::BalancePolicy;
use crate::errors::{AppError, AppResult};
use crate::models::{DayEntry, DayEntryData, Period};
use table::EntryTable;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    Connected,
    Local,
}

pub struct EntryStore {
    table: Option<Box<dyn EntryTable>>,
    mode: StoreMode,
    period: Period,
    loaded: bool,
    entries: Vec<DayEntry>,
    warning: Option<String>,
    policy: BalancePolicy,
    next_local_id: u64,
}

impl EntryStore {
    pub fn connected(table: Box<dyn EntryTable>, policy: BalancePolicy) -> Self {
        info!(table = %table.describe(), "entry store connected");
        Self {
            table: Some(table),
            mode: StoreMode::Connected,
            period: Period::current(),
            loaded: false,
            entries: Vec::new(),
            warning: None,
            policy,
            next_local_id: 1,
        }
    }

    /// A store that never talks to a backend. `reason` is shown as the
    /// local mode warning.
    pub fn local(policy: BalancePolicy, reason: impl Into<String>) -> Self {
        Self {
            table: None,
            mode: StoreMode::Local,
            period: Period::current(),
            loaded: false,
            entries: Vec::new(),
            warning: Some(reason.into()),
            policy,
            next_local_id: 1,
        }
    }

    pub fn mode(&self) -> StoreMode {
        self.mode
    }

    pub fn is_local(&self) -> bool {
        self.mode == StoreMode::Local
    }

    /// Why the store is in local mode, if it is.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn policy(&self) -> &BalancePolicy {
        &self.policy
    }

    /// Make `period` the active one and load it.
    ///
    /// Never fails: a backend error switches the store to local mode.
    pub fn fetch(&mut self, period: Period) -> &[DayEntry] {
        self.period = period;
        self.loaded = true;

        if let Some(table) = self.table.as_mut()
            && self.mode == StoreMode::Connected
        {
            debug!(%period, "fetching entries");
            let loaded = table.select_month(period).map(|rows| {
                rows.into_iter()
                    .filter_map(|row| {
                        let id = row.id.clone();
                        wire::from_row(row)
                            .map_err(|e| warn!(%id, error = %e, "skipping undecodable row"))
                            .ok()
                    })
                    .collect::<Vec<_>>()
            });

            match loaded {
                Ok(entries) => {
                    debug!(%period, count = entries.len(), "entries loaded");
                    self.entries = entries;
                    self.sort();
                }
                Err(e) => {
                    warn!(error = %e, "fetch failed, switching to local mode");
                    self.mode = StoreMode::Local;
                    self.warning = Some(e.to_string());
                    self.entries.clear();
                }
            }
        }

        self.list()
    }

    /// Fetch `period` unless it is already the loaded one.
    pub fn activate(&mut self, period: Period) -> &[DayEntry] {
        if self.loaded && self.period == period {
            self.list()
        } else {
            self.fetch(period)
        }
    }

    /// Find an entry by id, loading its month when it is not cached.
    pub fn locate(&mut self, id: &str) -> AppResult<DayEntry> {
        if let Some(entry) = self.get(id) {
            return Ok(entry.clone());
        }

        let row = match self.connected_table() {
            Some(table) => table.select_one(id)?,
            None => None,
        };
        let entry = row
            .map(wire::from_row)
            .transpose()?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        self.fetch(entry.data.period());
        self.get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Entries of the active period, ordered by day.
    pub fn list(&self) -> &[DayEntry] {
        // Kept sorted on every write; in local mode entries of other
        // periods sit before/after the active ones.
        let start = self
            .entries
            .partition_point(|e| e.data.period() < self.period);
        let end = self
            .entries
            .partition_point(|e| e.data.period() <= self.period);
        self.entries.get(start..end).unwrap_or(&[])
    }

    pub fn get(&self, id: &str) -> Option<&DayEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn sort(&mut self) {
        self.entries
            .sort_by_key(|e| (e.data.period(), e.data.day));
    }

    fn ensure_free_day(&self, data: &DayEntryData, except: Option<&str>) -> AppResult<()> {
        let taken = self.entries.iter().any(|e| {
            Some(e.id.as_str()) != except
                && e.data.period() == data.period()
                && e.data.day == data.day
        });
        if taken {
            return Err(duplicate_day(data));
        }
        Ok(())
    }

    /// The cache only holds the active month; a day moved into another
    /// month is checked against the backend's rows for that month.
    fn ensure_free_day_in_table(&mut self, data: &DayEntryData, id: &str) -> AppResult<()> {
        let target = data.period();
        if target == self.period {
            return Ok(());
        }
        let Some(table) = self.connected_table() else {
            return Ok(());
        };

        let taken = table
            .select_month(target)?
            .iter()
            .any(|row| row.id != id && row.record.day == data.day);
        if taken {
            return Err(duplicate_day(data));
        }
        Ok(())
    }

    fn connected_table(&mut self) -> Option<&mut Box<dyn EntryTable>> {
        match self.mode {
            StoreMode::Connected => self.table.as_mut(),
            StoreMode::Local => None,
        }
    }

    pub fn create(&mut self, data: DayEntryData) -> AppResult<DayEntry> {
        let data = data.validate()?;

        if data.period() != self.period {
            return Err(AppError::InvalidDate(format!(
                "{:04}-{:02}-{:02} is outside the active period {}",
                data.year, data.month, data.day, self.period
            )));
        }
        self.ensure_free_day(&data, None)?;

        let policy = self.policy;
        let entry = match self.connected_table() {
            Some(table) => {
                let row = table.insert(&wire::to_record(&data, &policy))?;
                wire::from_row(row)?
            }
            None => {
                let id = format!("local-{}", self.next_local_id);
                self.next_local_id += 1;
                DayEntry::new(id, data)
            }
        };

        info!(id = %entry.id, day = entry.data.day, "entry created");
        self.entries.push(entry.clone());
        self.sort();
        Ok(entry)
    }

    pub fn update(&mut self, id: &str, data: DayEntryData) -> AppResult<DayEntry> {
        if self.get(id).is_none() {
            return Err(AppError::NotFound(id.to_string()));
        }
        let data = data.validate()?;
        self.ensure_free_day(&data, Some(id))?;
        self.ensure_free_day_in_table(&data, id)?;

        let policy = self.policy;
        let entry = match self.connected_table() {
            Some(table) => {
                let row = table.update(id, &wire::to_record(&data, &policy))?;
                wire::from_row(row)?
            }
            None => DayEntry::new(id, data),
        };

        self.entries.retain(|e| e.id != id);
        // A connected store only caches the active period.
        if self.is_local() || entry.data.period() == self.period {
            self.entries.push(entry.clone());
            self.sort();
        }

        info!(%id, "entry updated");
        Ok(entry)
    }

    pub fn delete(&mut self, id: &str) -> AppResult<()> {
        if self.get(id).is_none() {
            return Err(AppError::NotFound(id.to_string()));
        }

        if let Some(table) = self.connected_table() {
            table.delete(id)?;
        }

        self.entries.retain(|e| e.id != id);
        info!(%id, "entry deleted");
        Ok(())
    }
}

fn duplicate_day(data: &DayEntryData) -> AppError {
    AppError::DuplicateDay(format!(
        "{:04}-{:02}-{:02}",
        data.year, data.month, data.day
    ))
}
