//! Wire shape of the `time_entries` table and the mapping to [`DayEntry`].
//!
//! Rows are snake_case with unset fields as `null`. The computed
//! `total_hours` and `balance` columns are written for readers of the table
//! but never read back: balances are always recomputed.

use crate::core::calculator::BalancePolicy;
use crate::core::calculator::balance::day_balance;
use crate::errors::{AppError, AppResult};
use crate::models::{DayEntry, DayEntryData, Reason, Weekday};
use crate::utils::time::{minutes_to_time, parse_clock};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub clock_in_1: Option<String>,
    pub clock_out_1: Option<String>,
    pub clock_in_2: Option<String>,
    pub clock_out_2: Option<String>,
    pub total_hours: Option<String>,
    pub balance: Option<String>,
    pub note: Option<String>,
    pub reason: Option<String>,
    /// Informational: the weekday is always recomputed from the date.
    #[serde(default)]
    pub weekday: Option<String>,
    #[serde(default)]
    pub is_holiday: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRow {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(flatten)]
    pub record: EntryRecord,
}

/// Ids are integers in SQLite and may be uuids or bigints on a REST table.
fn deserialize_id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(d)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

fn clock_field(t: Option<chrono::NaiveTime>) -> Option<String> {
    t.map(|t| t.format("%H:%M").to_string())
}

fn non_empty(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// In-memory → wire.
pub fn to_record(data: &DayEntryData, policy: &BalancePolicy) -> EntryRecord {
    let day = day_balance(data, policy);

    let DayEntryData {
        year,
        month,
        day: day_of_month,
        weekday,
        clock_in_1,
        clock_out_1,
        clock_in_2,
        clock_out_2,
        reason,
        is_holiday,
        note,
    } = data;

    EntryRecord {
        year: *year,
        month: *month,
        day: *day_of_month,
        clock_in_1: clock_field(*clock_in_1),
        clock_out_1: clock_field(*clock_out_1),
        clock_in_2: clock_field(*clock_in_2),
        clock_out_2: clock_field(*clock_out_2),
        total_hours: Some(minutes_to_time(day.worked)),
        balance: Some(minutes_to_time(day.balance)),
        note: non_empty(note),
        reason: Some(reason.to_db_str().to_string()),
        weekday: Some(weekday.to_db_str().to_string()),
        is_holiday: Some(*is_holiday),
    }
}

/// Wire → in-memory. Malformed times, reasons or dates are rejected.
pub fn from_row(row: EntryRow) -> AppResult<DayEntry> {
    let EntryRow { id, record } = row;
    let EntryRecord {
        year,
        month,
        day,
        clock_in_1,
        clock_out_1,
        clock_in_2,
        clock_out_2,
        total_hours: _,
        balance: _,
        note,
        reason,
        weekday,
        is_holiday,
    } = record;

    let reason = match reason.as_deref().map(str::trim) {
        None | Some("") => Reason::Normal,
        Some(r) => Reason::from_db_str(r).ok_or_else(|| AppError::InvalidReason(r.to_string()))?,
    };

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        AppError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day))
    })?;
    let derived = Weekday::from_date(date);

    // The calendar is the source of truth for the weekday.
    if let Some(stored) = weekday.as_deref().and_then(Weekday::from_db_str)
        && stored != derived
    {
        debug!(
            %id,
            stored = stored.code(),
            derived = derived.code(),
            "stored weekday disagrees with the date"
        );
    }

    let data = DayEntryData {
        year,
        month,
        day,
        weekday: derived,
        clock_in_1: parse_clock(clock_in_1.as_deref())?,
        clock_out_1: parse_clock(clock_out_1.as_deref())?,
        clock_in_2: parse_clock(clock_in_2.as_deref())?,
        clock_out_2: parse_clock(clock_out_2.as_deref())?,
        reason,
        is_holiday: is_holiday.unwrap_or(false),
        note: note.unwrap_or_default(),
    };

    Ok(DayEntry::new(id, data))
}

/// Decode a JSON array of rows one by one. Rows that do not match the
/// wire shape are skipped so one bad row cannot hide the rest of the month.
pub fn decode_rows(values: Vec<serde_json::Value>) -> Vec<EntryRow> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            serde_json::from_value::<EntryRow>(value)
                .map_err(|e| warn!(row = idx, error = %e, "skipping malformed row"))
                .ok()
        })
        .collect()
}

/// JSON view of an entry in the camelCase in-memory shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView<'a> {
    #[serde(flatten)]
    pub entry: &'a DayEntry,
    #[serde(serialize_with = "serialize_minutes")]
    pub total_hours: i64,
    #[serde(serialize_with = "serialize_minutes")]
    pub balance: i64,
}

fn serialize_minutes<S: serde::Serializer>(m: &i64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&minutes_to_time(*m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn sample() -> DayEntryData {
        let mut d = DayEntryData::for_date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        d.clock_in_1 = NaiveTime::from_hms_opt(7, 0, 0);
        d.clock_out_1 = NaiveTime::from_hms_opt(12, 0, 0);
        d.clock_in_2 = NaiveTime::from_hms_opt(13, 0, 0);
        d.clock_out_2 = NaiveTime::from_hms_opt(16, 30, 0);
        d.reason = Reason::CompensationUsed;
        d.note = "doctor in the morning".into();
        d
    }

    #[test]
    fn record_round_trips_every_field() {
        let data = sample();
        let record = to_record(&data, &BalancePolicy::default());
        let entry = from_row(EntryRow {
            id: "42".into(),
            record,
        })
        .unwrap();

        assert_eq!(entry, DayEntry::new("42", data));
    }

    #[test]
    fn record_carries_computed_columns_and_nulls() {
        let mut data = DayEntryData::for_date(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
        data.clock_in_1 = NaiveTime::from_hms_opt(9, 0, 0);
        data.clock_out_1 = NaiveTime::from_hms_opt(11, 0, 0);

        let record = to_record(&data, &BalancePolicy::default());
        assert_eq!(record.weekday.as_deref(), Some("Sat"));
        assert_eq!(record.total_hours.as_deref(), Some("02:00"));
        assert_eq!(record.balance.as_deref(), Some("02:00"));
        assert_eq!(record.clock_in_2, None);
        assert_eq!(record.note, None);

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["clock_out_2"].is_null());
        assert_eq!(json["reason"], "normal");
    }

    #[test]
    fn legacy_rows_decode() {
        let json = r#"{
            "id": 7, "year": 2026, "month": 1, "day": 6,
            "clock_in_1": "--:--", "clock_out_1": "", "clock_in_2": null, "clock_out_2": null,
            "total_hours": null, "balance": "-08:00", "note": null,
            "reason": "Falta", "weekday": "Ter", "is_holiday": null
        }"#;
        let row: EntryRow = serde_json::from_str(json).unwrap();
        let entry = from_row(row).unwrap();

        assert_eq!(entry.id, "7");
        assert_eq!(entry.data.reason, Reason::Absence);
        assert_eq!(entry.data.weekday, Weekday::Tue);
        assert!(!entry.data.has_times());
        assert!(!entry.data.is_holiday);
    }

    #[test]
    fn malformed_time_is_rejected() {
        let mut record = to_record(&sample(), &BalancePolicy::default());
        record.clock_in_1 = Some("7h".into());
        let err = from_row(EntryRow {
            id: "1".into(),
            record,
        })
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidTime(_)));
    }

    #[test]
    fn weekday_is_rederived_from_the_date() {
        let mut record = to_record(&sample(), &BalancePolicy::default());
        record.weekday = Some("Fri".into());
        let entry = from_row(EntryRow {
            id: "1".into(),
            record: record.clone(),
        })
        .unwrap();
        assert_eq!(entry.data.weekday, Weekday::Mon);

        // unknown or missing labels are not an error either
        for weekday in [Some("Lundi".to_string()), None] {
            let entry = from_row(EntryRow {
                id: "1".into(),
                record: EntryRecord {
                    weekday,
                    ..record.clone()
                },
            })
            .unwrap();
            assert_eq!(entry.data.weekday, Weekday::Mon);
        }
    }

    #[test]
    fn one_bad_row_does_not_hide_the_others() {
        let json = r#"[
            {"id": 1, "year": 2026, "month": 1, "day": 5, "clock_in_1": "08:00",
             "clock_out_1": "12:00", "clock_in_2": null, "clock_out_2": null,
             "total_hours": "04:00", "balance": "-04:00", "note": null,
             "reason": "normal", "weekday": "Mon", "is_holiday": false},
            {"id": 2, "year": 2026, "month": 1, "day": 6, "clock_in_1": null,
             "clock_out_1": null, "clock_in_2": null, "clock_out_2": null,
             "total_hours": null, "balance": null, "note": null,
             "reason": "absence", "weekday": null, "is_holiday": null},
            {"id": 3, "year": "2026", "month": 1, "day": 7}
        ]"#;
        let values: Vec<serde_json::Value> = serde_json::from_str(json).unwrap();
        let rows = decode_rows(values);

        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(rows[1].record.weekday, None);
        assert_eq!(from_row(rows[1].clone()).unwrap().data.weekday, Weekday::Tue);
    }
}
