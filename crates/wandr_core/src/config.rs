//! Core configuration supplied by the host shell.
//!
//! The host passes TOML text (bundled app config plus build extras); every
//! field is optional and falls back to a default.

use crate::logging::{default_log_level, normalize_level};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_DB_FILE_NAME: &str = "wandr.sqlite3";
const DEFAULT_USERNAME_DEBOUNCE_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Database file name, relative to the host data directory.
    pub db_file_name: String,
    pub log_level: &'static str,
    /// Quiet period before a typed username is persisted.
    pub username_debounce: Duration,
    /// Push project identifier; push registration is skipped without it.
    pub push_project_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    db_file_name: Option<String>,
    log_level: Option<String>,
    username_debounce_ms: Option<u64>,
    push_project_id: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            log_level: default_log_level(),
            username_debounce: Duration::from_millis(DEFAULT_USERNAME_DEBOUNCE_MS),
            push_project_id: None,
        }
    }
}

impl AppConfig {
    /// Parses TOML text and applies defaults for absent fields.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(text).map_err(ConfigError::Parse)?;
        let defaults = Self::default();

        let db_file_name = match file.db_file_name {
            Some(name) if name.trim().is_empty() => {
                return Err(ConfigError::Invalid("db_file_name must not be empty".to_string()));
            }
            Some(name) => name.trim().to_string(),
            None => defaults.db_file_name,
        };

        let log_level = match file.log_level {
            Some(level) => normalize_level(&level).map_err(ConfigError::Invalid)?,
            None => defaults.log_level,
        };

        let push_project_id = file
            .push_project_id
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(Self {
            db_file_name,
            log_level,
            username_debounce: file
                .username_debounce_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.username_debounce),
            push_project_id,
        })
    }

    /// Joins the database file name onto the host data directory.
    pub fn db_path(&self, data_dir: impl AsRef<Path>) -> PathBuf {
        data_dir.as_ref().join(&self.db_file_name)
    }
}
