//! Race configuration loading.
//!
//! The organizer ships `config.json`; TOML is accepted as well. Loading
//! validates every field the engine interprets, so a bad config aborts the
//! run before any event is read.

use std::fs;
use std::path::Path;

use biathlon_types::RaceConfig;

use crate::error::ConfigError;
use crate::timing::{CLOCK_LAYOUT, DELTA_LAYOUT, parse_duration};

/// On-disk config formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension. Anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Load and validate a race config file.
pub fn load_config(path: &Path) -> Result<RaceConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = parse_config(&contents, ConfigFormat::from_path(path), path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Deserialize config text. `path` is only used for error context.
pub fn parse_config(
    contents: &str,
    format: ConfigFormat,
    path: &Path,
) -> Result<RaceConfig, ConfigError> {
    match format {
        ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| ConfigError::Json {
            path: path.to_path_buf(),
            source: e,
        }),
        ConfigFormat::Toml => toml::from_str(contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Check the fields the engine interprets.
pub fn validate_config(config: &RaceConfig) -> Result<(), ConfigError> {
    if config.laps == 0 {
        return Err(ConfigError::Invalid("laps must be at least 1".to_string()));
    }
    parse_duration(&config.start, CLOCK_LAYOUT)
        .map_err(|e| ConfigError::Invalid(format!("start: {e}")))?;
    parse_duration(&config.start_delta, DELTA_LAYOUT)
        .map_err(|e| ConfigError::Invalid(format!("startDelta: {e}")))?;
    Ok(())
}
