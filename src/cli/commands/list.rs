use crate::cli::commands::{print_month, resolve_period, store_options};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::open_store;
use crate::errors::AppResult;
use crate::ui::render;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        month,
        prev,
        next,
        json,
    } = &cli.command
    {
        let period = resolve_period(month.as_deref(), *prev, *next)?;
        let mut store = open_store(cfg, &store_options(cli))?;
        store.fetch(period);

        if *json {
            let summary = Core::build_month_summary(store.period(), store.list(), store.policy());
            println!("{}", render::render_json(&store, &summary)?);
        } else {
            print_month(&store, cfg.separator());
        }
    }
    Ok(())
}
