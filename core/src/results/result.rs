use std::fmt;

use chrono::TimeDelta;

use crate::timing::{ClockTime, format_clock_time, zero_time};

/// Terminal status shown in the first column of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    /// Finish time of day. Competitors who neither finished nor dropped out
    /// keep the zero time.
    Finished(ClockTime),
    NotStarted,
    NotFinished,
}

impl ResultStatus {
    pub fn has_finish_time(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl Default for ResultStatus {
    fn default() -> Self {
        Self::Finished(zero_time())
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished(t) => f.write_str(&format_clock_time(*t)),
            Self::NotStarted => f.write_str("NotStarted"),
            Self::NotFinished => f.write_str("NotFinished"),
        }
    }
}

/// A formatted time and average speed for one lap or penalty segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub time: String,
    pub speed: String,
}

impl Split {
    pub fn new(time: impl Into<String>, speed: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            speed: speed.into(),
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.time, self.speed)
    }
}

/// Accumulated statistics for one competitor's report line.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceResult {
    pub competitor_id: u32,
    /// Configured lap count; the report always shows this many lap slots.
    pub laps: u32,
    pub lap_splits: Vec<Split>,
    pub penalty_splits: Vec<Split>,
    /// `"<hits>/<shots>"`, set by the finalizer.
    pub shooting_stats: String,
    pub status: ResultStatus,
    /// Every configured lap was completed; set by the finalizer.
    pub completed: bool,
    /// Time from the actual start to the latest lap boundary.
    pub total_time: TimeDelta,
}

impl RaceResult {
    /// Whether this result ranks in the finishers' group.
    pub fn is_finisher(&self) -> bool {
        self.completed && self.status.has_finish_time()
    }

    pub fn new(competitor_id: u32, laps: u32) -> Self {
        Self {
            competitor_id,
            laps,
            lap_splits: Vec::new(),
            penalty_splits: Vec::new(),
            shooting_stats: String::new(),
            status: ResultStatus::default(),
            completed: false,
            total_time: TimeDelta::zero(),
        }
    }
}
