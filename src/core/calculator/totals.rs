use super::BalancePolicy;
use super::balance::day_balance;
use crate::models::DayEntryData;

/// Aggregate figures for a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodTotals {
    /// Positive hours left after compensation days were paid.
    pub positive: i64,
    /// Sum of the absolute values of the negative days.
    pub negative: i64,
    /// Deficits covered by compensation days.
    pub compensation_used: i64,
    /// `positive - negative`
    pub balance: i64,
    pub worked: i64,
}

pub fn aggregate<'a, I>(entries: I, policy: &BalancePolicy) -> PeriodTotals
where
    I: IntoIterator<Item = &'a DayEntryData>,
{
    let mut raw_positive = 0;
    let mut negative = 0;
    let mut compensation_used = 0;
    let mut worked = 0;

    for entry in entries {
        let day = day_balance(entry, policy);

        worked += day.worked;
        compensation_used += day.compensation_used;

        if day.balance > 0 {
            raw_positive += day.balance;
        } else if day.balance < 0 {
            negative += day.balance.abs();
        }
    }

    let positive = (raw_positive - compensation_used).max(0);

    PeriodTotals {
        positive,
        negative,
        compensation_used,
        balance: positive - negative,
        worked,
    }
}
