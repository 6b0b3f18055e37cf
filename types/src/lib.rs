//! Shared types for the biathlon race processor.
//!
//! Holds the race configuration as it appears on disk and the centralized
//! formatting helpers used by the engine and the report writer.

pub mod formatting;

use serde::{Deserialize, Serialize};

/// Race parameters supplied by the organizer.
///
/// Field names on disk follow the camelCase keys of the organizer's
/// `config.json` (`lapLen`, `penaltyLen`, `firingLines`, `startDelta`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceConfig {
    /// Number of main laps a competitor must complete.
    pub laps: u32,
    /// Length of one main lap in meters.
    pub lap_len: u32,
    /// Length of one penalty loop in meters.
    pub penalty_len: u32,
    /// Number of firing lines on the range. Reserved, not used by scoring.
    #[serde(default)]
    pub firing_lines: u32,
    /// Planned start of the race, `HH:MM:SS.mmm`.
    pub start: String,
    /// Allowed window after the drawn start time, `HH:MM:SS[.mmm]`.
    pub start_delta: String,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            laps: 2,
            lap_len: 3651,
            penalty_len: 50,
            firing_lines: 1,
            start: "09:30:00.000".to_string(),
            start_delta: "00:00:30".to_string(),
        }
    }
}
