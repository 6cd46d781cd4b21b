//! Time utilities: parsing HH:MM clock times, signed `[-]HH:MM` durations,
//! formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use serde::Serializer;
use std::sync::OnceLock;

/// Placeholder shown (and accepted) for a time that was not recorded.
pub const EMPTY_CLOCK: &str = "--:--";

fn duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-)?(\d+):([0-5]\d)$").expect("valid duration regex"))
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse an optional wall-clock field.
/// Empty strings and `--:--` are "not recorded"; anything else must be `HH:MM`.
pub fn parse_clock(input: Option<&str>) -> AppResult<Option<NaiveTime>> {
    match input.map(str::trim) {
        None | Some("") | Some(EMPTY_CLOCK) => Ok(None),
        Some(s) => parse_time(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidTime(s.to_string())),
    }
}

pub fn format_clock(t: Option<NaiveTime>) -> String {
    match t {
        Some(t) => t.format("%H:%M").to_string(),
        None => EMPTY_CLOCK.to_string(),
    }
}

/// Minutes since midnight.
pub fn clock_minutes(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

/// `[-]HH:MM` → signed minutes. Empty input is zero.
pub fn time_to_minutes(s: &str) -> AppResult<i64> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let caps = duration_re()
        .captures(s)
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    let hours: i64 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidTime(s.to_string()))?;
    let minutes: i64 = caps[3]
        .parse()
        .map_err(|_| AppError::InvalidTime(s.to_string()))?;

    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    Ok(if caps.get(1).is_some() { -total } else { total })
}

/// Signed minutes → `[-]HH:MM`. The sign is only shown for negative values.
///
/// `time_to_minutes` reads the result back for every value but `i64::MIN`,
/// whose magnitude does not fit in an `i64`.
pub fn minutes_to_time(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.unsigned_abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// serde helper: `Option<NaiveTime>` as `"HH:MM"` or `null`.
pub fn serialize_clock<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
    match t {
        Some(t) => s.serialize_str(&t.format("%H:%M").to_string()),
        None => s.serialize_none(),
    }
}
