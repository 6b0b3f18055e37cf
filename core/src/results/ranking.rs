use hashbrown::HashMap;

use super::RaceResult;

/// Order competitor IDs for the final report.
///
/// Competitors who completed every lap come first, fastest total time
/// first. Everyone else follows, ordered by the same total time, including
/// competitors who simply never reached the finish. Competitor ID breaks any remaining tie so the order never
/// depends on map iteration.
pub fn rank_results(results: &HashMap<u32, RaceResult>) -> Vec<u32> {
    let mut ranked: Vec<&RaceResult> = results.values().collect();
    ranked.sort_by_key(|r| (!r.is_finisher(), r.total_time, r.competitor_id));
    ranked.into_iter().map(|r| r.competitor_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ResultStatus;
    use chrono::TimeDelta;

    fn result(id: u32, status: ResultStatus, secs: i64) -> (u32, RaceResult) {
        let mut r = RaceResult::new(id, 2);
        r.status = status;
        r.total_time = TimeDelta::seconds(secs);
        (id, r)
    }

    fn finished(id: u32, secs: i64) -> (u32, RaceResult) {
        let (id, mut r) = result(id, ResultStatus::default(), secs);
        r.completed = true;
        (id, r)
    }

    #[test]
    fn test_empty() {
        assert!(rank_results(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_single() {
        let results = HashMap::from([finished(1, 10)]);
        assert_eq!(rank_results(&results), vec![1]);
    }

    #[test]
    fn test_fastest_first() {
        let results = HashMap::from([finished(1, 30), finished(2, 20), finished(3, 10)]);
        assert_eq!(rank_results(&results), vec![3, 2, 1]);
    }

    #[test]
    fn test_unfinished_come_last() {
        let results = HashMap::from([
            result(1, ResultStatus::NotStarted, 10),
            finished(2, 20),
            result(3, ResultStatus::NotFinished, 30),
            finished(4, 40),
        ]);
        assert_eq!(rank_results(&results), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_unfinished_ordered_by_total_time() {
        let results = HashMap::from([
            result(1, ResultStatus::NotFinished, 50),
            result(2, ResultStatus::NotStarted, 0),
            result(3, ResultStatus::NotFinished, 20),
            finished(4, 100),
        ]);
        assert_eq!(rank_results(&results), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_incomplete_without_flags_ranks_after_finishers() {
        // Zero finish time from never completing, not a real finish.
        let results = HashMap::from([
            finished(1, 360),
            result(2, ResultStatus::default(), 0),
            result(3, ResultStatus::default(), 60),
        ]);
        assert_eq!(rank_results(&results), vec![1, 2, 3]);
    }

    #[test]
    fn test_ties_broken_by_id() {
        let results = HashMap::from([
            finished(3, 10),
            result(2, ResultStatus::NotStarted, 10),
            finished(1, 10),
            result(4, ResultStatus::NotFinished, 10),
        ]);
        assert_eq!(rank_results(&results), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_ranking_does_not_consume_results() {
        let results = HashMap::from([finished(1, 10), finished(2, 5)]);
        let order = rank_results(&results);
        assert_eq!(order, vec![2, 1]);
        assert_eq!(results.len(), 2);
    }
}
