//! Application settings loaded from config.toml
//!
//! Every field has a default, so an absent or partial config file still yields
//! usable settings. Settings are passed explicitly to every ledger call.

use crate::errors::{Error, Result};
use chrono::Locale;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// What to do with a stored entry whose `entry_date` cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFallback {
    /// Fail the query with [`Error::InvalidDate`]
    #[default]
    Reject,
    /// Substitute the current UTC date
    Today,
}

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Database URL; `DATABASE_URL` takes precedence when set
    pub database_url: Option<String>,
    /// Locale used for weekday names, e.g. `es_ES`
    pub locale: String,
    /// Symbol appended to formatted amounts
    pub currency_symbol: String,
    /// Policy for malformed entry dates
    pub date_fallback: DateFallback,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: None,
            locale: "es_ES".to_string(),
            currency_symbol: "€".to_string(),
            date_fallback: DateFallback::default(),
        }
    }
}

impl Settings {
    /// Resolves the configured locale name.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the name is not a known locale.
    pub fn locale(&self) -> Result<Locale> {
        Locale::try_from(self.locale.as_str()).map_err(|_| Error::Config {
            message: format!("Unknown locale '{}'", self.locale),
        })
    }
}

/// Loads settings from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - The configured locale is unknown
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading configuration from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    parse_config(&contents)
}

/// Loads settings from ./config.toml, falling back to defaults if it is missing
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<Settings> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if !path.exists() {
        tracing::info!("No {DEFAULT_CONFIG_PATH} found, using default settings");
        return Ok(Settings::default());
    }
    load_config(path)
}

fn parse_config(contents: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    settings.locale()?;
    Ok(settings)
}
