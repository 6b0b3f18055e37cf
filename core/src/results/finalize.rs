use hashbrown::HashMap;

use super::{RaceResult, ResultStatus};
use crate::state::Competitor;
use biathlon_types::formatting::format_ratio;

/// Targets on the range per firing lap.
const SHOTS_PER_LAP: usize = 5;

/// Derive each competitor's terminal status and shooting ratio.
///
/// Disqualification wins over dropping out. The shot denominator counts
/// only laps that saw at least one hit event, since misses are never logged.
pub fn finalize_results(
    competitors: &HashMap<u32, Competitor>,
    results: &mut HashMap<u32, RaceResult>,
) {
    for competitor in competitors.values() {
        let Some(result) = results.get_mut(&competitor.id) else {
            tracing::error!(competitor = competitor.id, "BUG: competitor without result");
            continue;
        };

        result.status = if competitor.disqualified {
            ResultStatus::NotStarted
        } else if competitor.not_finished {
            ResultStatus::NotFinished
        } else {
            ResultStatus::Finished(competitor.finish_time)
        };
        result.completed = competitor.finished_completely;

        let shots = competitor.laps_with_shots() * SHOTS_PER_LAP;
        result.shooting_stats = format_ratio(competitor.total_hits(), shots);
    }
}
