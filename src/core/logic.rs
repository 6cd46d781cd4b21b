use crate::core::calculator::balance::{DayBalance, day_balance};
use crate::core::calculator::totals::{PeriodTotals, aggregate};
use crate::core::calculator::BalancePolicy;
use crate::models::{DayEntry, Period, Weekday};
use chrono::{Datelike, NaiveDate};

/// One row of the monthly table: a calendar day, with its entry if any.
#[derive(Debug, Clone)]
pub struct DayRow {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub entry: Option<DayEntry>,
    pub balance: Option<DayBalance>,
}

#[derive(Debug, Clone)]
pub struct MonthSummary {
    pub period: Period,
    pub rows: Vec<DayRow>,
    pub totals: PeriodTotals,
}

pub struct Core;

impl Core {
    /// Build the monthly view: every calendar day of `period`, the balance of
    /// each recorded day and the period totals.
    pub fn build_month_summary(
        period: Period,
        entries: &[DayEntry],
        policy: &BalancePolicy,
    ) -> MonthSummary {
        let totals = aggregate(entries.iter().map(|e| &e.data), policy);

        let rows = period
            .days()
            .into_iter()
            .map(|date| {
                let entry = entries
                    .iter()
                    .find(|e| e.data.day == date.day() && e.data.period() == period)
                    .cloned();
                let balance = entry.as_ref().map(|e| day_balance(&e.data, policy));
                DayRow {
                    date,
                    weekday: Weekday::from_date(date),
                    entry,
                    balance,
                }
            })
            .collect();

        MonthSummary {
            period,
            rows,
            totals,
        }
    }
}
