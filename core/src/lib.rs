pub mod context;
pub mod error;
pub mod race_log;
pub mod results;
pub mod signal_processor;
pub mod state;
pub mod storage;
pub mod timing;

// Re-exports for convenience
pub use context::{RaceReport, RaceSession, load_config, process_events};
pub use error::{ConfigError, OutputError, ParseError, ReadError};
pub use race_log::{EventKind, RaceEvent, parse_line, read_log_file};
pub use signal_processor::{EventProcessor, NarrativeLog, RaceSignal, SignalHandler, SignalKind};
pub use state::{Competitor, RaceCache};
pub use results::{RaceResult, ResultStatus, Split};
