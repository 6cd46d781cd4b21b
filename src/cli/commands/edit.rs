use crate::cli::commands::{describe, describe_balance, parse_day, store_options};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::core::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        fields,
        clear_times,
    } = &cli.command
    {
        let new_date = date.as_deref().map(parse_day).transpose()?;
        let mut store = open_store(cfg, &store_options(cli))?;

        let entry = EditLogic::apply(&mut store, id, new_date, &fields.to_form(*clear_times))?;

        success(format!("Entry updated: {}", describe(&entry)));
        info(describe_balance(&store, &entry));
    }
    Ok(())
}
