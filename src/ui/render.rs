//! Month view: summary figures, optional local-mode banner and the table of
//! calendar days.

use crate::core::logic::{DayRow, MonthSummary};
use crate::errors::AppResult;
use crate::models::{Period, Reason};
use crate::store::wire::EntryView;
use crate::store::EntryStore;
use crate::utils::colors::{GREEN, GREY, MAGENTA, RED, RESET, YELLOW, color_for_balance, paint};
use crate::utils::formatting::bold;
use crate::utils::table::{Cell, Column, Table};
use crate::utils::time::{format_clock, minutes_to_time};

pub fn render_header(period: Period) -> String {
    format!("◀  📅 {}  ▶\n", bold(&period.label()))
}

/// The three summary figures.
pub fn render_totals(summary: &MonthSummary) -> String {
    let t = &summary.totals;
    let mut out = String::new();

    out.push_str(&format!(
        "{}  {}   available for compensation\n",
        paint(&format!("{:<16}", "Positive hours"), GREEN),
        paint(&format!("{:>7}", minutes_to_time(t.positive)), GREEN),
    ));
    out.push_str(&format!(
        "{}  {}   to compensate or deduct\n",
        paint(&format!("{:<16}", "Negative hours"), RED),
        paint(&format!("{:>7}", minutes_to_time(t.negative)), RED),
    ));
    out.push_str(&format!(
        "{:<16}  {}   period balance\n",
        "Balance",
        paint(
            &format!("{:>7}", minutes_to_time(t.balance)),
            color_for_balance(t.balance)
        ),
    ));

    if t.compensation_used > 0 {
        out.push_str(&format!(
            "{}\n",
            paint(
                &format!(
                    "{:<16}  {:>7}   paid from positive hours",
                    "Compensated",
                    minutes_to_time(t.compensation_used)
                ),
                GREY
            )
        ));
    }

    out
}

fn row_cells(row: &DayRow) -> Vec<Cell> {
    let day = Cell::plain(format!("{:02}", chrono::Datelike::day(&row.date)));
    let weekday = if row.weekday.is_weekend() {
        Cell::colored(row.weekday.code(), MAGENTA)
    } else {
        Cell::plain(row.weekday.code())
    };

    let (Some(entry), Some(balance)) = (&row.entry, &row.balance) else {
        let mut cells = vec![day, weekday];
        cells.extend((0..4).map(|_| Cell::colored(format_clock(None), GREY)));
        return cells;
    };

    let clock = |t: Option<chrono::NaiveTime>| match t {
        Some(_) => Cell::plain(format_clock(t)),
        None => Cell::colored(format_clock(None), GREY),
    };

    let d = &entry.data;
    vec![
        day,
        weekday,
        clock(d.clock_in_1),
        clock(d.clock_out_1),
        clock(d.clock_in_2),
        clock(d.clock_out_2),
        Cell::plain(minutes_to_time(balance.worked)),
        Cell::colored(minutes_to_time(balance.balance), color_for_balance(balance.balance)),
        match d.reason {
            Reason::Normal => Cell::plain(d.reason.label()),
            _ => Cell::colored(d.reason.label(), YELLOW),
        },
        Cell::plain(if d.is_holiday { "yes" } else { "" }),
        Cell::plain(d.note.clone()),
        Cell::colored(entry.id.clone(), GREY),
    ]
}

/// Table with one row per calendar day of the month.
pub fn render_table(summary: &MonthSummary, separator: char) -> String {
    let mut table = Table::new(vec![
        Column::new("Day", 3),
        Column::new("Wd", 3),
        Column::new("In", 5),
        Column::new("Out", 5),
        Column::new("In", 5),
        Column::new("Out", 5),
        Column::right("Worked", 7),
        Column::right("Balance", 7),
        Column::new("Reason", 16),
        Column::new("Hol", 3),
        Column::new("Note", 24),
        Column::new("Id", 10),
    ])
    .with_separator(separator);

    for row in &summary.rows {
        table.add_row(row_cells(row));
    }

    table.render()
}

/// Everything `list` prints for the active period.
pub fn render_month(store: &EntryStore, summary: &MonthSummary, separator: char) -> String {
    let mut out = String::new();

    if let Some(reason) = store.warning() {
        out.push_str(&crate::ui::messages::local_mode_banner(reason));
        out.push('\n');
    }

    out.push_str(&render_totals(summary));
    out.push('\n');
    out.push_str(&render_header(summary.period));
    out.push('\n');
    out.push_str(&render_table(summary, separator));
    out.push_str(RESET);
    out
}

/// JSON document for `list --json`: camelCase entries plus totals.
pub fn render_json(store: &EntryStore, summary: &MonthSummary) -> AppResult<String> {
    let entries: Vec<EntryView> = summary
        .rows
        .iter()
        .filter_map(|r| match (&r.entry, &r.balance) {
            (Some(entry), Some(b)) => Some(EntryView {
                entry,
                total_hours: b.worked,
                balance: b.balance,
            }),
            _ => None,
        })
        .collect();

    let doc = serde_json::json!({
        "period": summary.period.to_string(),
        "mode": if store.is_local() { "local" } else { "connected" },
        "warning": store.warning(),
        "entries": entries,
        "positiveHours": minutes_to_time(summary.totals.positive),
        "negativeHours": minutes_to_time(summary.totals.negative),
        "balance": minutes_to_time(summary.totals.balance),
        "compensationUsed": minutes_to_time(summary.totals.compensation_used),
    });

    Ok(serde_json::to_string_pretty(&doc)?)
}
