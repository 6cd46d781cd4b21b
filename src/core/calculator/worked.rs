use crate::models::DayEntryData;
use crate::utils::time::clock_minutes;
use chrono::NaiveTime;

/// Minutes between a clock-in and a clock-out.
/// Incomplete pairs and spans that end before they start count zero.
pub fn pair_minutes(clock_in: Option<NaiveTime>, clock_out: Option<NaiveTime>) -> i64 {
    match (clock_in, clock_out) {
        (Some(i), Some(o)) => (clock_minutes(o) - clock_minutes(i)).max(0),
        _ => 0,
    }
}

/// Total minutes worked in the day, both pairs.
pub fn worked_minutes(entry: &DayEntryData) -> i64 {
    entry
        .pairs()
        .iter()
        .map(|(i, o)| pair_minutes(*i, *o))
        .sum()
}
