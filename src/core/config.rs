use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration as YAML.
    pub fn print(cfg: &Config) -> AppResult<String> {
        serde_yaml::to_string(cfg).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    /// Editor to use: `--editor`, then `$EDITOR`/`$VISUAL`, then a platform
    /// default.
    pub fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in `editor`. Returns an error if it did not exit cleanly.
    pub fn edit(path: &Path, editor: &str) -> AppResult<()> {
        let status = Command::new(editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot run '{}': {}", editor, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                editor, status
            )));
        }
        Ok(())
    }
}
