//! biathlon - process a race event log into a narrative and a results table.
//!
//! Usage: biathlon [--config config.json] [--events events] [--output output.log] [--results result.txt]

use biathlon_core::signal_processor::SignalLogger;
use biathlon_core::storage::write_lines;
use biathlon_core::{RaceSession, load_config, read_log_file};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Parser)]
#[command(version, about = "Biathlon race log processor")]
struct Cli {
    /// Race config, JSON or TOML
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Incoming event log
    #[arg(short, long, default_value = "events")]
    events: PathBuf,

    /// Narrative output, one line per event
    #[arg(short, long, default_value = "output.log")]
    output: PathBuf,

    /// Final results table, ranked
    #[arg(short, long, default_value = "result.txt")]
    results: PathBuf,
}

/// Log to the file named by BIATHLON_LOG_PATH, or to stderr when unset or unopenable.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let log_file = std::env::var_os("BIATHLON_LOG_PATH")
        .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());
    let ansi = log_file.is_none();
    let writer = match log_file {
        Some(file) => BoxMakeWriter::new(file),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(writer)
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = load_config(&cli.config).map_err(|e| e.to_string())?;
    tracing::info!(?config, "Config loaded");

    let timer = Instant::now();
    let events = read_log_file(&cli.events).map_err(|e| e.to_string())?;
    tracing::info!(
        count = events.len(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Events read"
    );

    let mut session = RaceSession::new(&config);
    session.add_signal_handler(Box::new(SignalLogger));
    session.process_events(&events);
    let report = session.finish();

    let lines = write_lines(&cli.output, &report.narrative).map_err(|e| e.to_string())?;
    tracing::info!(path = %cli.output.display(), lines, "Narrative written");

    let lines = write_lines(&cli.results, report.result_lines()).map_err(|e| e.to_string())?;
    tracing::info!(path = %cli.results.display(), lines, "Results written");

    Ok(())
}

fn main() -> Result<(), String> {
    init_logging();
    let cli = Cli::parse();

    run(&cli).inspect_err(|e| tracing::error!(error = %e, "Race processing failed"))?;
    tracing::info!("Finished processing events");
    Ok(())
}
