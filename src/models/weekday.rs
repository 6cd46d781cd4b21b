use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Sun => Weekday::Sun,
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }

    /// Convert enum → table string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert table string → enum (the Portuguese short names are accepted too)
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Sun" | "Dom" => Some(Weekday::Sun),
            "Mon" | "Seg" => Some(Weekday::Mon),
            "Tue" | "Ter" => Some(Weekday::Tue),
            "Wed" | "Qua" => Some(Weekday::Wed),
            "Thu" | "Qui" => Some(Weekday::Thu),
            "Fri" | "Sex" => Some(Weekday::Fri),
            "Sat" | "Sab" | "Sáb" => Some(Weekday::Sat),
            _ => None,
        }
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Sat | Weekday::Sun)
    }
}
