pub mod day_entry;
pub mod period;
pub mod reason;
pub mod weekday;

pub use day_entry::{DayEntry, DayEntryData};
pub use period::Period;
pub use reason::Reason;
pub use weekday::Weekday;
