pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod shell;

use crate::cli::parser::Cli;
use crate::core::StoreOptions;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::{DayEntry, Period};
use crate::store::EntryStore;
use crate::ui::render;
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::time::format_clock;
use chrono::NaiveDate;

pub(crate) fn store_options(cli: &Cli) -> StoreOptions {
    StoreOptions {
        db: cli.db.clone(),
        local: cli.local,
    }
}

pub(crate) fn parse_day(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(format!("'{}', expected YYYY-MM-DD", s)))
}

/// `--month`, then the `--prev`/`--next` step.
pub(crate) fn resolve_period(month: Option<&str>, prev: bool, next: bool) -> AppResult<Period> {
    let base = match month {
        Some(m) => Period::parse(m)?,
        None => Period::current(),
    };
    Ok(match (prev, next) {
        (true, _) => base.prev(),
        (false, true) => base.next(),
        (false, false) => base,
    })
}

pub(crate) fn print_month(store: &EntryStore, separator: char) {
    let summary = Core::build_month_summary(store.period(), store.list(), store.policy());
    print!("{}", render::render_month(store, &summary, separator));
}

/// One line describing an entry, used in messages and prompts.
pub(crate) fn describe(entry: &DayEntry) -> String {
    let d = &entry.data;
    format!(
        "{:04}-{:02}-{:02} ({}) {}-{} {}-{} {} [{}]",
        d.year,
        d.month,
        d.day,
        d.weekday.code(),
        format_clock(d.clock_in_1),
        format_clock(d.clock_out_1),
        format_clock(d.clock_in_2),
        format_clock(d.clock_out_2),
        d.reason.label(),
        entry.id
    )
}

pub(crate) fn describe_balance(store: &EntryStore, entry: &DayEntry) -> String {
    let b = crate::core::calculator::balance::day_balance(&entry.data, store.policy());
    format!(
        "Worked {}, balance {}",
        mins2readable(b.worked, false, false),
        mins2readable(b.balance, true, false)
    )
}
