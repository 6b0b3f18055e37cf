mod config;
mod session;

pub use config::{ConfigFormat, load_config, parse_config, validate_config};
pub use session::{RaceReport, RaceSession, process_events};
