//! The create/edit form: raw user input turned into a validated day record.

use crate::errors::{AppError, AppResult};
use crate::models::{DayEntryData, Period, Reason};
use crate::utils::time::parse_clock;
use chrono::{Datelike, NaiveDate, NaiveTime};

/// Schedule filled in for holidays and optional holidays: 07-12, 13-16.
pub fn standard_schedule() -> [(Option<NaiveTime>, Option<NaiveTime>); 2] {
    [
        (
            NaiveTime::from_hms_opt(7, 0, 0),
            NaiveTime::from_hms_opt(12, 0, 0),
        ),
        (
            NaiveTime::from_hms_opt(13, 0, 0),
            NaiveTime::from_hms_opt(16, 0, 0),
        ),
    ]
}

/// Raw form fields. `None` means "not touched": on create the default is
/// used, on edit the stored value is kept.
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub clock_in_1: Option<String>,
    pub clock_out_1: Option<String>,
    pub clock_in_2: Option<String>,
    pub clock_out_2: Option<String>,
    pub holiday: Option<bool>,
    pub reason: Option<String>,
    pub note: Option<String>,
    /// Drop every stored time before applying the four time fields.
    pub clear_times: bool,
}

impl EntryForm {
    /// Record for a new entry on `date`.
    pub fn build(&self, date: NaiveDate) -> AppResult<DayEntryData> {
        self.apply_to(DayEntryData::for_date(date), None)
    }

    /// Merge the form into `base`, optionally moving it to another date.
    pub fn apply_to(
        &self,
        mut base: DayEntryData,
        date: Option<NaiveDate>,
    ) -> AppResult<DayEntryData> {
        if let Some(d) = date {
            let p = Period::of(d);
            base.year = p.year;
            base.month = p.month;
            base.day = d.day();
        }

        if self.clear_times {
            base.clock_in_1 = None;
            base.clock_out_1 = None;
            base.clock_in_2 = None;
            base.clock_out_2 = None;
        }

        if self.clock_in_1.is_some() {
            base.clock_in_1 = parse_clock(self.clock_in_1.as_deref())?;
        }
        if self.clock_out_1.is_some() {
            base.clock_out_1 = parse_clock(self.clock_out_1.as_deref())?;
        }
        if self.clock_in_2.is_some() {
            base.clock_in_2 = parse_clock(self.clock_in_2.as_deref())?;
        }
        if self.clock_out_2.is_some() {
            base.clock_out_2 = parse_clock(self.clock_out_2.as_deref())?;
        }

        if let Some(code) = &self.reason {
            base.reason = Reason::from_code(code).ok_or_else(|| {
                AppError::InvalidReason(format!(
                    "'{}'. Use one of: normal, absence, compensation, vacation, medical, optional, other",
                    code
                ))
            })?;
        }

        if let Some(h) = self.holiday {
            base.is_holiday = h;
        }

        if let Some(n) = &self.note {
            base.note = n.trim().to_string();
        }

        // Holidays and optional holidays count as a full standard day:
        // fill the pairs the user left empty.
        let prefill =
            self.holiday == Some(true) || (self.reason.is_some() && base.reason == Reason::OptionalHoliday);
        if prefill {
            let [(in1, out1), (in2, out2)] = standard_schedule();
            if base.clock_in_1.is_none() && base.clock_out_1.is_none() {
                base.clock_in_1 = in1;
                base.clock_out_1 = out1;
            }
            if base.clock_in_2.is_none() && base.clock_out_2.is_none() {
                base.clock_in_2 = in2;
                base.clock_out_2 = out2;
            }
        }

        base.validate()
    }
}
