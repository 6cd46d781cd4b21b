use super::BalancePolicy;
use super::worked::worked_minutes;
use crate::models::{DayEntryData, Reason};

/// What one day contributes to the period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayBalance {
    pub worked: i64,
    /// Signed minutes relative to the baseline.
    pub balance: i64,
    /// Deficit of a compensation day, paid from the positive pool.
    pub compensation_used: i64,
}

/// Per-day balance. Rules are checked in order, first match wins:
/// absence, vacation/medical leave/holiday, optional holiday,
/// compensation, weekend, normal weekday.
pub fn day_balance(entry: &DayEntryData, policy: &BalancePolicy) -> DayBalance {
    let worked = worked_minutes(entry);
    let daily = policy.daily_minutes;

    let (balance, compensation_used) = match entry.reason {
        Reason::Absence => (-daily, 0),
        Reason::Vacation | Reason::MedicalLeave => (0, 0),
        _ if entry.is_holiday => (0, 0),
        Reason::OptionalHoliday => (0, 0),
        Reason::CompensationUsed => {
            let deficit = daily - worked;
            if deficit > 0 {
                (0, deficit)
            } else {
                (worked - daily, 0)
            }
        }
        _ if entry.weekday.is_weekend() => (worked, 0),
        _ => (worked - daily, 0),
    };

    DayBalance {
        worked,
        balance,
        compensation_used,
    }
}
