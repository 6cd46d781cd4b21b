use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", ConfigLogic::print(cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = ConfigLogic::default_editor();
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match ConfigLogic::edit(&path, &editor_to_use) {
                Ok(()) => success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                )),
                Err(e) if editor_to_use != default_editor => {
                    warning(format!("{}, falling back to '{}'", e, default_editor));
                    ConfigLogic::edit(&path, &default_editor)?;
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}
