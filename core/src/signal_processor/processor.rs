use biathlon_types::RaceConfig;
use biathlon_types::formatting::format_speed;
use chrono::TimeDelta;

use super::{RaceSignal, SignalKind};
use crate::race_log::{EventKind, RaceEvent};
use crate::results::Split;
use crate::state::RaceCache;
use crate::timing::{
    DELTA_LAYOUT, duration_secs, format_duration, parse_clock_time_or_zero, parse_duration,
};

/// Applies race events to competitor state and emits signals.
///
/// Events must be fed in log order; the processor never re-sorts.
#[derive(Debug, Clone)]
pub struct EventProcessor {
    laps: usize,
    lap_len: u32,
    penalty_len: u32,
    start_delta: TimeDelta,
}

impl EventProcessor {
    /// Build a processor from the race config.
    ///
    /// A malformed `start_delta` falls back to a zero window, so every late
    /// arrival on the start line is disqualified.
    pub fn new(config: &RaceConfig) -> Self {
        let start_delta = parse_duration(&config.start_delta, DELTA_LAYOUT).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Unparsable start delta, using zero");
            TimeDelta::zero()
        });

        Self {
            laps: config.laps as usize,
            lap_len: config.lap_len,
            penalty_len: config.penalty_len,
            start_delta,
        }
    }

    pub fn start_delta(&self) -> TimeDelta {
        self.start_delta
    }

    /// Process a single event and return the signals it produced.
    ///
    /// Unknown event kinds change nothing and produce no signal.
    pub fn process_event(&self, event: &RaceEvent, cache: &mut RaceCache) -> Vec<RaceSignal> {
        let (competitor, result) = cache.entry(event.competitor_id);

        let Some(kind) = event.kind() else {
            tracing::debug!(
                kind_id = event.kind_id,
                line = event.line_number,
                "Ignoring unknown event kind"
            );
            return Vec::new();
        };

        let timestamp = parse_clock_time_or_zero(event.clock_str());
        let signal = |kind| RaceSignal::new(&event.raw_time, event.competitor_id, kind);

        match kind {
            EventKind::Registered => {
                competitor.registered = true;
                vec![signal(SignalKind::Registered)]
            }
            EventKind::StartTimeDrawn => {
                competitor.planned_start = parse_clock_time_or_zero(event.extra_param());
                vec![signal(SignalKind::StartTimeDrawn {
                    start: event.extra_param().to_string(),
                })]
            }
            EventKind::OnStartLine => {
                // A deadline past the representable range can never be missed.
                let late = competitor
                    .planned_start
                    .checked_add_signed(self.start_delta)
                    .is_some_and(|deadline| timestamp > deadline);
                if late {
                    competitor.disqualified = true;
                    vec![signal(SignalKind::Disqualified)]
                } else {
                    vec![signal(SignalKind::OnStartLine)]
                }
            }
            EventKind::Started => {
                competitor.actual_start = timestamp;
                vec![signal(SignalKind::Started)]
            }
            EventKind::EnteredFiringRange => {
                competitor.on_firing_range = true;
                vec![signal(SignalKind::OnFiringRange {
                    range: event.extra_param().to_string(),
                })]
            }
            EventKind::TargetHit => {
                competitor.record_hit();
                vec![signal(SignalKind::TargetHit {
                    target: event.extra_param().to_string(),
                })]
            }
            EventKind::LeftFiringRange => {
                competitor.on_firing_range = false;
                vec![signal(SignalKind::LeftFiringRange)]
            }
            EventKind::EnteredPenaltyLoop => {
                competitor.on_penalty_loop = true;
                competitor.penalty_start = timestamp;
                vec![signal(SignalKind::EnteredPenaltyLoop)]
            }
            EventKind::LeftPenaltyLoop => {
                competitor.on_penalty_loop = false;
                let penalty_time = timestamp - competitor.penalty_start;
                competitor.penalty_times.push(penalty_time);
                result.penalty_splits.push(Split::new(
                    format_duration(penalty_time),
                    format_speed(self.penalty_len, duration_secs(penalty_time)),
                ));
                vec![signal(SignalKind::LeftPenaltyLoop)]
            }
            EventKind::EndedMainLap => {
                let mut signals = vec![signal(SignalKind::EndedMainLap)];

                // Lap time is cumulative from the actual start, not a per-lap delta.
                // Boundaries past the configured lap count are narrated only.
                if competitor.current_lap < self.laps {
                    let lap_time = timestamp - competitor.actual_start;
                    competitor.lap_times.push(lap_time);
                    result.lap_splits.push(Split::new(
                        format_duration(lap_time),
                        format_speed(self.lap_len, duration_secs(lap_time)),
                    ));
                    result.total_time = lap_time;
                    competitor.current_lap += 1;

                    if competitor.current_lap == self.laps {
                        competitor.finished_completely = true;
                        competitor.finish_time = timestamp;
                    }
                }

                if competitor.finished_completely {
                    signals.push(signal(SignalKind::Finished));
                }
                signals
            }
            EventKind::CannotContinue => {
                competitor.not_finished = true;
                competitor.comment = event.extra_param().to_string();
                vec![signal(SignalKind::CannotContinue {
                    reason: event.extra_param().to_string(),
                })]
            }
        }
    }
}
