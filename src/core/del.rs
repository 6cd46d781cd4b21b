use crate::errors::AppResult;
use crate::models::DayEntry;
use crate::store::EntryStore;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Return the entry behind `id` so the caller can show it before asking
    /// for confirmation.
    pub fn target(store: &mut EntryStore, id: &str) -> AppResult<DayEntry> {
        store.locate(id)
    }

    pub fn apply(store: &mut EntryStore, id: &str) -> AppResult<()> {
        store.delete(id)
    }
}
