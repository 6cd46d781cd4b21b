//! Interactive session: one store for the whole run, so local mode entries
//! survive between commands until the session ends.

use crate::cli::commands::del::confirm_and_delete;
use crate::cli::commands::{describe, print_month, resolve_period, store_options};
use crate::cli::parser::{Cli, Commands, ShellCommand, ShellLine};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::edit::EditLogic;
use crate::core::open_store;
use crate::errors::{AppError, AppResult};
use crate::models::Period;
use crate::store::EntryStore;
use crate::ui::messages::{error, success};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "rtimebank> ";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Shell { month } = &cli.command {
        let period = resolve_period(month.as_deref(), false, false)?;
        let mut store = open_store(cfg, &store_options(cli))?;
        store.fetch(period);

        let stdin = io::stdin();
        run_session(&mut store, cfg.separator(), &mut stdin.lock())?;
    }
    Ok(())
}

/// Read commands from `input` until `quit` or end of input.
pub fn run_session<R: BufRead>(
    store: &mut EntryStore,
    separator: char,
    input: &mut R,
) -> AppResult<()> {
    print_month(store, separator);
    println!("Type `help` for the list of commands.");

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let tokens = match split_line(&line) {
            Ok(t) if t.is_empty() => continue,
            Ok(t) => t,
            Err(e) => {
                error(e);
                continue;
            }
        };
        debug!(?tokens, "shell command");

        let parsed = match ShellLine::try_parse_from(&tokens) {
            Ok(p) => p,
            Err(e) => {
                // Help and usage errors alike.
                print!("{}", e.render());
                continue;
            }
        };

        match execute(store, parsed.command, separator, input) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => error(e),
        }
    }

    Ok(())
}

fn step(store: &mut EntryStore, period: Period, separator: char) {
    store.fetch(period);
    print_month(store, separator);
}

fn execute<R: BufRead>(
    store: &mut EntryStore,
    command: ShellCommand,
    separator: char,
    input: &mut R,
) -> AppResult<Flow> {
    match command {
        ShellCommand::List => print_month(store, separator),
        ShellCommand::Prev => {
            let p = store.period().prev();
            step(store, p, separator);
        }
        ShellCommand::Next => {
            let p = store.period().next();
            step(store, p, separator);
        }
        ShellCommand::Goto { month } => step(store, Period::parse(&month)?, separator),
        ShellCommand::Add { date, fields } => {
            let d = super::parse_day(&date)?;
            let entry = AddLogic::apply(store, d, &fields.to_form(false))?;
            success(format!("Entry added: {}", describe(&entry)));
            print_month(store, separator);
        }
        ShellCommand::Edit {
            id,
            date,
            fields,
            clear_times,
        } => {
            let new_date = date.as_deref().map(super::parse_day).transpose()?;
            let entry = EditLogic::apply(store, &id, new_date, &fields.to_form(clear_times))?;
            success(format!("Entry updated: {}", describe(&entry)));
            print_month(store, separator);
        }
        ShellCommand::Del { id, yes } => {
            if confirm_and_delete(store, &id, yes, input)? {
                print_month(store, separator);
            }
        }
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Split a command line on whitespace, honoring single and double quotes.
/// `""` yields an empty argument.
fn split_line(line: &str) -> AppResult<Vec<String>> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    out.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(AppError::InvalidInput(format!("unterminated {} quote", q)));
    }
    if in_token {
        out.push(current);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::BalancePolicy;

    #[test]
    fn split_line_handles_quotes_and_empty_arguments() {
        let t = split_line("add 2026-01-05 --note \"long day\" --in2 ''\n").unwrap();
        assert_eq!(t, vec!["add", "2026-01-05", "--note", "long day", "--in2", ""]);
        assert!(split_line("add \"oops").is_err());
        assert!(split_line("   \n").unwrap().is_empty());
    }

    #[test]
    fn local_entries_survive_between_commands() {
        let mut store = EntryStore::local(BalancePolicy::default(), "test");
        store.fetch(Period::new(2026, 1).unwrap());

        let mut input = io::Cursor::new(
            "add 2026-01-05 --in1 08:00 --out1 12:00 --in2 13:00 --out2 17:30\n\
             next\n\
             prev\n\
             quit\n",
        );
        run_session(&mut store, '-', &mut input).unwrap();

        assert_eq!(store.period(), Period::new(2026, 1).unwrap());
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].id, "local-1");
    }

    #[test]
    fn declined_delete_keeps_the_entry() {
        let mut store = EntryStore::local(BalancePolicy::default(), "test");
        store.fetch(Period::new(2026, 1).unwrap());

        let mut input = io::Cursor::new(
            "add 2026-01-06 --reason absence\n\
             del local-1\n\
             n\n",
        );
        run_session(&mut store, '-', &mut input).unwrap();
        assert_eq!(store.list().len(), 1);

        let mut input = io::Cursor::new("del local-1\ny\n");
        run_session(&mut store, '-', &mut input).unwrap();
        assert!(store.list().is_empty());
    }
}
