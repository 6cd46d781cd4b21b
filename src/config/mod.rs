use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable holding the REST backend base URL.
pub const URL_VAR: &str = "TIMEBANK_URL";
/// Environment variable holding the publishable access key.
pub const KEY_VAR: &str = "TIMEBANK_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Rest,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_min_work_duration")]
    pub min_work_duration: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_table() -> String {
    "time_entries".to_string()
}
fn default_min_work_duration() -> String {
    "8h".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            database: default_database(),
            table: default_table(),
            min_work_duration: default_min_work_duration(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimebank")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rtimebank")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimebank.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimebank.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing fields take their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Separator used for table rules; first char of `separator_char`.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Initialize configuration and database directory.
    /// Returns the database path written to the configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml =
                serde_yaml::to_string(&config).map_err(|e| AppError::ConfigSave(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config.database)
    }
}

/// Connection settings of the REST backend, read from the environment.
#[derive(Debug, Clone)]
pub struct RemoteSettings {
    pub url: reqwest::Url,
    pub key: String,
}

impl RemoteSettings {
    /// Read `TIMEBANK_URL` / `TIMEBANK_KEY` (a `.env` file is honored).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_values(env::var(URL_VAR).ok(), env::var(KEY_VAR).ok())
    }

    pub fn from_values(url: Option<String>, key: Option<String>) -> AppResult<Self> {
        let url = url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AppError::Config(format!("{} is required", URL_VAR)))?;

        let parsed = reqwest::Url::parse(url.trim()).map_err(|e| {
            AppError::Config(format!(
                "{} must be a valid URL (e.g. https://xxx.supabase.co): {}",
                URL_VAR, e
            ))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(AppError::Config(format!(
                "{} must be an http(s) URL, got '{}'",
                URL_VAR, url
            )));
        }

        let key = key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AppError::Config(format!("{} is required", KEY_VAR)))?;

        Ok(Self { url: parsed, key })
    }
}
