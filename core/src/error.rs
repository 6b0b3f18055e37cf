use std::path::PathBuf;

use thiserror::Error;

/// Malformed clock time or duration string.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid clock time {input:?}, expected HH:MM:SS.mmm")]
    ClockFormat { input: String },

    #[error("clock time {input:?} is out of range")]
    ClockRange { input: String },

    #[error("{input:?} does not match layout {layout:?}: {source}")]
    Layout {
        input: String,
        layout: String,
        source: chrono::ParseError,
    },
}

/// Errors that can occur during config loading. All of them are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("TOML error in {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors raised while reading the event log.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed event on line {line}: {reason}")]
    Malformed { line: u64, reason: String },
}

/// Errors raised while persisting the narrative or the results table.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error writing {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
