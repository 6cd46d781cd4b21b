//! Balance calculator: pure functions from day entries to signed minutes.

pub mod balance;
pub mod totals;
pub mod worked;

use crate::errors::{AppError, AppResult};

/// Minutes in the standard working day.
pub const DAILY_WORK_MINUTES: i64 = 8 * 60;

/// Baseline the per-day balance is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancePolicy {
    pub daily_minutes: i64,
}

impl Default for BalancePolicy {
    fn default() -> Self {
        Self {
            daily_minutes: DAILY_WORK_MINUTES,
        }
    }
}

impl BalancePolicy {
    pub fn from_work_duration(s: &str) -> AppResult<Self> {
        Ok(Self {
            daily_minutes: parse_work_duration(s)?,
        })
    }
}

/// Parse a configured working day: `8h`, `7h30m`, `450m` or `07:30`.
pub fn parse_work_duration(s: &str) -> AppResult<i64> {
    let t = s.trim().to_lowercase();
    let invalid = || AppError::Config(format!("invalid min_work_duration '{}'", s));

    if t.contains(':') {
        let mins = crate::utils::time::time_to_minutes(&t).map_err(|_| invalid())?;
        return if mins > 0 { Ok(mins) } else { Err(invalid()) };
    }

    let (hours, rest) = match t.split_once('h') {
        Some((h, rest)) => (h.trim().parse::<i64>().map_err(|_| invalid())?, rest.trim()),
        None => (0, t.as_str()),
    };

    let minutes = if rest.is_empty() {
        0
    } else {
        rest.trim_end_matches('m')
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid())?
    };

    let total = hours * 60 + minutes;
    if total <= 0 || minutes < 0 || hours < 0 {
        return Err(invalid());
    }
    Ok(total)
}
