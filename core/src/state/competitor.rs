use std::collections::BTreeMap;

use chrono::TimeDelta;

use crate::timing::ClockTime;

/// Mutable per-competitor race state, created on the first event that
/// references the competitor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Competitor {
    pub id: u32,
    pub registered: bool,
    pub planned_start: ClockTime,
    pub actual_start: ClockTime,
    pub penalty_start: ClockTime,
    pub finish_time: ClockTime,

    pub finished_completely: bool,
    pub disqualified: bool,
    pub not_finished: bool,
    /// Reason given with the "cannot continue" event.
    pub comment: String,

    /// Cumulative time from the actual start at each lap boundary.
    pub lap_times: Vec<TimeDelta>,
    pub penalty_times: Vec<TimeDelta>,
    /// Hits recorded per lap index (0-based lap in progress at the time).
    pub shooting_results: BTreeMap<usize, Vec<bool>>,

    pub current_lap: usize,
    pub on_firing_range: bool,
    pub on_penalty_loop: bool,
}

impl Competitor {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn record_hit(&mut self) {
        self.shooting_results
            .entry(self.current_lap)
            .or_default()
            .push(true);
    }

    pub fn total_hits(&self) -> usize {
        self.shooting_results
            .values()
            .map(|lap| lap.iter().filter(|hit| **hit).count())
            .sum()
    }

    /// Laps on which at least one shot was recorded.
    pub fn laps_with_shots(&self) -> usize {
        self.shooting_results.values().filter(|lap| !lap.is_empty()).count()
    }
}
