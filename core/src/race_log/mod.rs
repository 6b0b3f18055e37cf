mod event;
mod parser;
mod reader;

pub use event::{EventKind, RaceEvent};
pub use parser::parse_line;
pub use reader::read_log_file;
