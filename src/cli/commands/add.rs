use crate::cli::commands::{describe, describe_balance, parse_day, store_options};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, fields } = &cli.command {
        let d = parse_day(date)?;
        let mut store = open_store(cfg, &store_options(cli))?;

        let entry = AddLogic::apply(&mut store, d, &fields.to_form(false))?;

        if let Some(reason) = store.warning() {
            print!("{}", crate::ui::messages::local_mode_banner(reason));
        }
        success(format!("Entry added: {}", describe(&entry)));
        info(describe_balance(&store, &entry));
    }
    Ok(())
}
