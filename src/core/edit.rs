use crate::core::form::EntryForm;
use crate::errors::AppResult;
use crate::models::DayEntry;
use crate::store::EntryStore;
use chrono::NaiveDate;

/// Apply an edit form to an existing entry.
pub struct EditLogic;

impl EditLogic {
    pub fn apply(
        store: &mut EntryStore,
        id: &str,
        date: Option<NaiveDate>,
        form: &EntryForm,
    ) -> AppResult<DayEntry> {
        let current = store.locate(id)?;
        let data = form.apply_to(current.data, date)?;
        store.update(id, data)
    }
}
