use hashbrown::HashMap;

use super::Competitor;
use crate::results::RaceResult;

/// Pure storage for race state: one competitor and one result per ID.
/// Routing logic lives in EventProcessor.
#[derive(Debug, Clone, Default)]
pub struct RaceCache {
    laps: u32,
    competitors: HashMap<u32, Competitor>,
    results: HashMap<u32, RaceResult>,
}

impl RaceCache {
    pub fn new(laps: u32) -> Self {
        Self {
            laps,
            ..Default::default()
        }
    }

    /// Look up a competitor and its result, creating both on first sight.
    pub fn entry(&mut self, id: u32) -> (&mut Competitor, &mut RaceResult) {
        let laps = self.laps;
        let competitor = self
            .competitors
            .entry(id)
            .or_insert_with(|| Competitor::new(id));
        let result = self
            .results
            .entry(id)
            .or_insert_with(|| RaceResult::new(id, laps));
        (competitor, result)
    }

    // --- Accessors ---

    pub fn competitor(&self, id: u32) -> Option<&Competitor> {
        self.competitors.get(&id)
    }

    pub fn result(&self, id: u32) -> Option<&RaceResult> {
        self.results.get(&id)
    }

    pub fn competitors(&self) -> &HashMap<u32, Competitor> {
        &self.competitors
    }

    pub fn results(&self) -> &HashMap<u32, RaceResult> {
        &self.results
    }

    #[cfg(test)]
    pub fn competitor_count(&self) -> usize {
        self.competitors.len()
    }

    pub fn into_parts(self) -> (HashMap<u32, Competitor>, HashMap<u32, RaceResult>) {
        (self.competitors, self.results)
    }
}
