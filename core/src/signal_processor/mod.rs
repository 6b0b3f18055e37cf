//! Competitor state machine.
//!
//! The [`EventProcessor`] applies each incoming [`RaceEvent`](crate::RaceEvent)
//! to the [`RaceCache`](crate::RaceCache) in stream order and emits
//! [`RaceSignal`]s describing what happened. Handlers turn signals into the
//! narrative log or any other side channel.

mod handler;
mod processor;
mod signal;


pub use handler::{NarrativeLog, SignalHandler, SignalLogger};
pub use processor::EventProcessor;
pub use signal::{RaceSignal, SignalKind};
