//! Clock-of-day and duration codec.
//!
//! Race timestamps carry no calendar date. They are anchored to a single
//! fixed day so that `deadline = planned + delta` never wraps at midnight
//! and subtraction always yields a signed span.

use biathlon_types::formatting::format_hms_millis;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::error::ParseError;

/// Layout of a clock time in the log and in the config (`HH:MM:SS.mmm`).
pub const CLOCK_LAYOUT: &str = "%H:%M:%S%.3f";

/// Layout accepted for the start window, fraction optional (`HH:MM:SS[.fff]`).
pub const DELTA_LAYOUT: &str = "%H:%M:%S%.f";

/// A time-of-day on the fixed race day.
pub type ClockTime = NaiveDateTime;

/// The day every clock time is anchored to.
pub fn race_day() -> NaiveDate {
    NaiveDateTime::default().date()
}

/// The zero value substituted for clock times that fail to parse.
pub fn zero_time() -> ClockTime {
    NaiveDateTime::default()
}

/// Parse a strict `HH:MM:SS.mmm` clock time.
///
/// Every field must be zero-padded and the fraction must have exactly three
/// digits. Anything else is a [`ParseError`].
pub fn parse_clock_time(input: &str) -> Result<ClockTime, ParseError> {
    let b = input.as_bytes();
    let well_formed = b.len() == 12
        && b[2] == b':'
        && b[5] == b':'
        && b[8] == b'.'
        && b.iter()
            .enumerate()
            .all(|(i, c)| matches!(i, 2 | 5 | 8) || c.is_ascii_digit());
    if !well_formed {
        return Err(ParseError::ClockFormat {
            input: input.to_string(),
        });
    }

    let two = |i: usize| (b[i] - b'0') as u32 * 10 + (b[i + 1] - b'0') as u32;
    let millis = (b[9] - b'0') as u32 * 100 + (b[10] - b'0') as u32 * 10 + (b[11] - b'0') as u32;

    NaiveTime::from_hms_milli_opt(two(0), two(3), two(6), millis)
        .map(|time| race_day().and_time(time))
        .ok_or_else(|| ParseError::ClockRange {
            input: input.to_string(),
        })
}

/// Parse a clock time, substituting [`zero_time`] when it is malformed.
///
/// Event processing is best-effort: a bad timestamp produces visibly wrong
/// timing rather than aborting the run.
pub fn parse_clock_time_or_zero(input: &str) -> ClockTime {
    parse_clock_time(input).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Substituting zero time for unparsable clock time");
        zero_time()
    })
}

/// Parse `input` against a chrono time-of-day `layout` and reinterpret the
/// wall-clock fields as a span: `h*3600 + m*60 + s` plus the fraction.
pub fn parse_duration(input: &str, layout: &str) -> Result<TimeDelta, ParseError> {
    let time = NaiveTime::parse_from_str(input, layout).map_err(|source| ParseError::Layout {
        input: input.to_string(),
        layout: layout.to_string(),
        source,
    })?;

    Ok(TimeDelta::seconds(time.num_seconds_from_midnight() as i64)
        + TimeDelta::nanoseconds(time.nanosecond() as i64))
}

/// Render a span as `HH:MM:SS.mmm`, truncating anything finer than a millisecond.
pub fn format_duration(d: TimeDelta) -> String {
    format_hms_millis(d.num_milliseconds())
}

/// Render a clock time as `HH:MM:SS.mmm`.
pub fn format_clock_time(t: ClockTime) -> String {
    t.format(CLOCK_LAYOUT).to_string()
}

/// Seconds in a span, as used for average speeds.
pub fn duration_secs(d: TimeDelta) -> f64 {
    d.num_milliseconds() as f64 / 1_000.0
}
