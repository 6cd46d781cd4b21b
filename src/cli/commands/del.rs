use crate::cli::commands::{describe, store_options};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::open_store;
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::ui::messages::{ask_confirmation, info, success};
use std::io::BufRead;

/// Ask, then delete. Nothing is sent to the store when the answer is no.
pub(crate) fn confirm_and_delete<R: BufRead>(
    store: &mut EntryStore,
    id: &str,
    yes: bool,
    input: &mut R,
) -> AppResult<bool> {
    let entry = DeleteLogic::target(store, id)?;

    if !yes {
        let prompt = format!(
            "Delete the entry {}? This action is irreversible.",
            describe(&entry)
        );
        if !ask_confirmation(input, &prompt) {
            info("Operation cancelled.");
            return Ok(false);
        }
    }

    DeleteLogic::apply(store, id)?;
    success(format!("Entry {} has been deleted.", id));
    Ok(true)
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = &cli.command {
        let mut store = open_store(cfg, &store_options(cli))?;
        let stdin = std::io::stdin();
        confirm_and_delete(&mut store, id, *yes, &mut stdin.lock())?;
    }
    Ok(())
}
