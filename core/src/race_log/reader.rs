use super::{RaceEvent, parse_line};
use crate::error::ReadError;
use encoding_rs::UTF_8;
use memchr::memchr_iter;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Read every event from a race log in file order.
///
/// Lines are parsed sequentially; the processor relies on stream order.
pub fn read_log_file<P: AsRef<Path>>(path: P) -> Result<Vec<RaceEvent>, ReadError> {
    let path = path.as_ref();
    let io_err = |source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    if file.metadata().map_err(io_err)?.len() == 0 {
        return Ok(Vec::new());
    }
    // SAFETY: the log is read once and not expected to be truncated while mapped.
    let mmap = unsafe { Mmap::map(&file).map_err(io_err)? };
    let (text, _, had_errors) = UTF_8.decode(mmap.as_ref());
    if had_errors {
        tracing::warn!(path = %path.display(), "Event log contains invalid UTF-8, replaced lossily");
    }
    let bytes = text.as_bytes();

    // Find all line boundaries
    let mut line_ranges: Vec<(usize, usize)> = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', bytes) {
        line_ranges.push((start, end));
        start = end + 1;
    }
    if start < bytes.len() {
        line_ranges.push((start, bytes.len()));
    }

    let mut events = Vec::with_capacity(line_ranges.len());
    for (idx, &(start, end)) in line_ranges.iter().enumerate() {
        if let Some(event) = parse_line(idx as u64 + 1, &text[start..end])? {
            events.push(event);
        }
    }

    tracing::debug!(count = events.len(), path = %path.display(), "Read event log");
    Ok(events)
}
