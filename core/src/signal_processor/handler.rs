use super::RaceSignal;

/// Receives signals emitted by the EventProcessor.
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: &RaceSignal);

    fn handle_signals(&mut self, signals: &[RaceSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}

/// Collects the human-readable narrative, one line per signal, in the
/// order signals were emitted.
#[derive(Debug, Clone, Default)]
pub struct NarrativeLog {
    lines: Vec<String>,
}

impl NarrativeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl SignalHandler for NarrativeLog {
    fn handle_signal(&mut self, signal: &RaceSignal) {
        self.lines.push(signal.to_string());
    }
}

/// Mirrors every signal into the tracing log at debug level.
#[derive(Debug, Default)]
pub struct SignalLogger;

impl SignalHandler for SignalLogger {
    fn handle_signal(&mut self, signal: &RaceSignal) {
        tracing::debug!(competitor = signal.competitor_id, kind = ?signal.kind, "{signal}");
    }
}
