use super::RaceResult;

const EMPTY_SLOT: &str = "{,}";

/// Render a result as one report line:
/// `[<status>] <id> [<lap>, ...] [<penalty>, ...] <hits>/<shots>`.
///
/// The lap list always has exactly `laps` slots, unreached ones shown as
/// `{,}`. Penalty segments are listed as recorded, without padding.
pub fn format_result(result: &RaceResult) -> String {
    let laps = (0..result.laps as usize)
        .map(|i| {
            result
                .lap_splits
                .get(i)
                .map_or_else(|| EMPTY_SLOT.to_string(), |split| split.to_string())
        })
        .collect::<Vec<_>>()
        .join(", ");

    let penalties = result
        .penalty_splits
        .iter()
        .map(|split| split.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "[{}] {} [{}] [{}] {}",
        result.status, result.competitor_id, laps, penalties, result.shooting_stats
    )
}
