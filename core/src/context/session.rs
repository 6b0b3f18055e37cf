use biathlon_types::RaceConfig;
use hashbrown::HashMap;

use crate::race_log::RaceEvent;
use crate::results::{RaceResult, finalize_results, format_result, rank_results};
use crate::signal_processor::{EventProcessor, NarrativeLog, RaceSignal, SignalHandler};
use crate::state::{Competitor, RaceCache};

/// One race being processed: the state machine, its storage, and the
/// handlers that receive its signals.
pub struct RaceSession {
    processor: EventProcessor,
    cache: RaceCache,
    narrative: NarrativeLog,
    signal_handlers: Vec<Box<dyn SignalHandler>>,
    events_processed: usize,
}

impl RaceSession {
    pub fn new(config: &RaceConfig) -> Self {
        Self {
            processor: EventProcessor::new(config),
            cache: RaceCache::new(config.laps),
            narrative: NarrativeLog::new(),
            signal_handlers: Vec::new(),
            events_processed: 0,
        }
    }

    /// Register a signal handler to receive race signals
    pub fn add_signal_handler(&mut self, handler: Box<dyn SignalHandler>) {
        self.signal_handlers.push(handler);
    }

    /// Process a single event through the processor and dispatch signals
    pub fn process_event(&mut self, event: &RaceEvent) {
        let signals = self.processor.process_event(event, &mut self.cache);
        self.events_processed += 1;
        self.dispatch_signals(&signals);
    }

    /// Process multiple events, in order
    pub fn process_events<'a>(&mut self, events: impl IntoIterator<Item = &'a RaceEvent>) {
        for event in events {
            self.process_event(event);
        }
    }

    fn dispatch_signals(&mut self, signals: &[RaceSignal]) {
        self.narrative.handle_signals(signals);
        for handler in &mut self.signal_handlers {
            handler.handle_signals(signals);
        }
    }

    pub fn cache(&self) -> &RaceCache {
        &self.cache
    }

    pub fn narrative(&self) -> &[String] {
        self.narrative.lines()
    }

    /// Finalize every result and rank the field.
    pub fn finish(self) -> RaceReport {
        let (competitors, mut results) = self.cache.into_parts();
        finalize_results(&competitors, &mut results);
        let order = rank_results(&results);

        tracing::info!(
            events = self.events_processed,
            competitors = competitors.len(),
            narrative_lines = self.narrative.lines().len(),
            "Race processed"
        );

        RaceReport {
            narrative: self.narrative.into_lines(),
            competitors,
            results,
            order,
        }
    }
}

/// Everything a race run produces.
#[derive(Debug, Clone)]
pub struct RaceReport {
    /// One line per signal, in event order.
    pub narrative: Vec<String>,
    pub competitors: HashMap<u32, Competitor>,
    pub results: HashMap<u32, RaceResult>,
    /// Competitor IDs in final ranking order.
    pub order: Vec<u32>,
}

impl RaceReport {
    /// Results in ranking order.
    pub fn ranked_results(&self) -> impl Iterator<Item = &RaceResult> {
        self.order.iter().filter_map(|id| self.results.get(id))
    }

    /// Formatted report lines in ranking order.
    pub fn result_lines(&self) -> Vec<String> {
        self.ranked_results().map(format_result).collect()
    }
}

/// Run a whole race log through a fresh session.
pub fn process_events(config: &RaceConfig, events: &[RaceEvent]) -> RaceReport {
    let mut session = RaceSession::new(config);
    session.process_events(events);
    session.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn config() -> RaceConfig {
        RaceConfig {
            laps: 2,
            lap_len: 4000,
            penalty_len: 150,
            firing_lines: 1,
            start: "10:00:00.000".to_string(),
            start_delta: "00:00:30.000".to_string(),
        }
    }

    struct Counter(Rc<RefCell<usize>>);

    impl SignalHandler for Counter {
        fn handle_signal(&mut self, _signal: &RaceSignal) {
            *self.0.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_handlers_see_every_signal() {
        let count = Rc::new(RefCell::new(0));
        let mut session = RaceSession::new(&config());
        session.add_signal_handler(Box::new(Counter(Rc::clone(&count))));

        session.process_events(&[
            RaceEvent::new("[10:00:00.000]", 1, 1),
            RaceEvent::new("[10:00:01.000]", 99, 1),
            RaceEvent::new("[10:00:02.000]", 4, 1),
        ]);

        assert_eq!(*count.borrow(), 2);
        assert_eq!(session.narrative().len(), 2);
    }

    #[test]
    fn test_shooting_ratio_over_two_laps() {
        let events = [
            RaceEvent::new("[10:00:30.000]", 4, 1),
            RaceEvent::new("[10:02:31.000]", 6, 1).with_extra("1"),
            RaceEvent::new("[10:02:32.000]", 6, 1).with_extra("2"),
            RaceEvent::new("[10:02:33.000]", 6, 1).with_extra("3"),
            RaceEvent::new("[10:03:30.000]", 10, 1),
            RaceEvent::new("[10:05:31.000]", 6, 1).with_extra("1"),
            RaceEvent::new("[10:06:30.000]", 10, 1),
        ];
        let report = process_events(&config(), &events);
        assert_eq!(report.results[&1].shooting_stats, "4/10");
    }

    #[test]
    fn test_competitors_short_of_the_finish_rank_last() {
        let events = [
            // 1: both laps
            RaceEvent::new("[10:00:30.000]", 4, 1),
            RaceEvent::new("[10:03:30.000]", 10, 1),
            RaceEvent::new("[10:06:30.000]", 10, 1),
            // 2: registered only
            RaceEvent::new("[10:00:00.000]", 1, 2),
            // 3: one lap, then the log ends
            RaceEvent::new("[10:00:30.000]", 4, 3),
            RaceEvent::new("[10:01:30.000]", 10, 3),
        ];
        let report = process_events(&config(), &events);

        assert_eq!(report.order, vec![1, 2, 3]);
        assert_eq!(
            report.result_lines()[0],
            "[10:06:30.000] 1 [{00:03:00.000, 22.222}, {00:06:00.000, 11.111}] [] 0/0"
        );
    }

    #[test]
    fn test_report_lines_in_ranked_order() {
        let events = [
            // 1: finishes in 6 minutes
            RaceEvent::new("[10:00:30.000]", 4, 1),
            RaceEvent::new("[10:03:30.000]", 10, 1),
            RaceEvent::new("[10:06:30.000]", 10, 1),
            // 2: disqualified
            RaceEvent::new("[10:00:00.000]", 2, 2).with_extra("10:00:30.000"),
            RaceEvent::new("[10:05:00.000]", 3, 2),
            // 3: finishes in 5 minutes
            RaceEvent::new("[10:01:00.000]", 4, 3),
            RaceEvent::new("[10:03:00.000]", 10, 3),
            RaceEvent::new("[10:06:00.000]", 10, 3),
        ];
        let report = process_events(&config(), &events);

        assert_eq!(report.order, vec![3, 1, 2]);
        assert_eq!(report.result_lines(), [
            "[10:06:00.000] 3 [{00:02:00.000, 33.333}, {00:05:00.000, 13.333}] [] 0/0",
            "[10:06:30.000] 1 [{00:03:00.000, 22.222}, {00:06:00.000, 11.111}] [] 0/0",
            "[NotStarted] 2 [{,}, {,}] [] 0/0",
        ]);
    }
}
