use std::fmt;
use std::io::{self, BufRead, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Local mode banner: shown above the month, never blocks the session.
pub fn local_mode_banner(reason: &str) -> String {
    let body = format!(
        "Local mode: {} Entries are kept in memory only and are lost when the session ends. \
         Run `rtimebank init` (SQLite) or check TIMEBANK_URL / TIMEBANK_KEY (REST) to persist them.",
        reason.trim_end_matches('.').to_string() + "."
    );

    let mut out = String::new();
    for (i, line) in textwrap::wrap(&body, 78).iter().enumerate() {
        let lead = if i == 0 { ICON_WARN } else { "  " };
        out.push_str(&format!("{}{}{} {}{}\n", FG_YELLOW, BOLD, lead, line, RESET));
    }
    out
}

/// Ask a yes/no confirmation on `input`. Anything but y/yes is a no.
pub fn ask_confirmation<R: BufRead>(input: &mut R, prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    match input.read_line(&mut s) {
        Ok(n) if n > 0 => matches!(s.trim().to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}
