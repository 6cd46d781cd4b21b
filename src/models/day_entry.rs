use super::{period::Period, reason::Reason, weekday::Weekday};
use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_clock, serialize_clock};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One calendar day's record, without its id (what the form produces).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntryData {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub weekday: Weekday,
    #[serde(rename = "clockIn1", serialize_with = "serialize_clock")]
    pub clock_in_1: Option<NaiveTime>,
    #[serde(rename = "clockOut1", serialize_with = "serialize_clock")]
    pub clock_out_1: Option<NaiveTime>,
    #[serde(rename = "clockIn2", serialize_with = "serialize_clock")]
    pub clock_in_2: Option<NaiveTime>,
    #[serde(rename = "clockOut2", serialize_with = "serialize_clock")]
    pub clock_out_2: Option<NaiveTime>,
    pub reason: Reason,
    pub is_holiday: bool,
    pub note: String,
}

/// A stored day: id + data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEntry {
    pub id: String,
    #[serde(flatten)]
    pub data: DayEntryData,
}

impl DayEntryData {
    /// Empty `Normal` day for `date`, weekday derived from the calendar.
    pub fn for_date(date: NaiveDate) -> Self {
        let period = Period::of(date);
        Self {
            year: period.year,
            month: period.month,
            day: chrono::Datelike::day(&date),
            weekday: Weekday::from_date(date),
            clock_in_1: None,
            clock_out_1: None,
            clock_in_2: None,
            clock_out_2: None,
            reason: Reason::Normal,
            is_holiday: false,
            note: String::new(),
        }
    }

    pub fn period(&self) -> Period {
        Period {
            year: self.year,
            month: self.month,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.period().date(self.day)
    }

    /// Both clock pairs, first then second.
    pub fn pairs(&self) -> [(Option<NaiveTime>, Option<NaiveTime>); 2] {
        [
            (self.clock_in_1, self.clock_out_1),
            (self.clock_in_2, self.clock_out_2),
        ]
    }

    pub fn has_times(&self) -> bool {
        self.pairs()
            .iter()
            .any(|(i, o)| i.is_some() || o.is_some())
    }

    /// Check the record before it reaches the store:
    /// - the day must exist in the month
    /// - a complete pair must not end before it starts
    ///
    /// The weekday is re-derived from the date so it can never drift.
    pub fn validate(mut self) -> AppResult<Self> {
        let date = self.date().ok_or_else(|| {
            AppError::InvalidDate(format!(
                "{:04}-{:02}-{:02}",
                self.year, self.month, self.day
            ))
        })?;
        self.weekday = Weekday::from_date(date);

        for (idx, (clock_in, clock_out)) in self.pairs().iter().enumerate() {
            if let (Some(i), Some(o)) = (clock_in, clock_out)
                && o < i
            {
                return Err(AppError::InvalidSpan(format!(
                    "pair {}: clock-out {} is before clock-in {}",
                    idx + 1,
                    format_clock(Some(*o)),
                    format_clock(Some(*i))
                )));
            }
        }

        Ok(self)
    }
}

impl DayEntry {
    pub fn new(id: impl Into<String>, data: DayEntryData) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}
