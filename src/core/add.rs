use crate::core::form::EntryForm;
use crate::errors::AppResult;
use crate::models::{DayEntry, Period};
use crate::store::EntryStore;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Record `date`, moving the store to its month first.
    pub fn apply(store: &mut EntryStore, date: NaiveDate, form: &EntryForm) -> AppResult<DayEntry> {
        //
        // 1. load the month the new day belongs to
        //
        store.activate(Period::of(date));

        //
        // 2. validate the form and write
        //
        let data = form.build(date)?;
        store.create(data)
    }
}
