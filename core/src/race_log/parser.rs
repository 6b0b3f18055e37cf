use super::{EventKind, RaceEvent};
use crate::error::ReadError;

/// Split off the next whitespace-delimited token.
fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], &input[end..])),
        None => Some((input, "")),
    }
}

fn parse_u32(line_number: u64, field: &str, token: &str) -> Result<u32, ReadError> {
    token.parse::<u32>().map_err(|e| ReadError::Malformed {
        line: line_number,
        reason: format!("{field} {token:?}: {e}"),
    })
}

/// Parse one log line: `[HH:MM:SS.mmm] <kind> <competitor> [extra]`.
///
/// Returns `Ok(None)` for blank lines and for incomplete records, which are
/// dropped. Non-numeric kind or competitor fields are errors. The timestamp
/// is kept verbatim and only interpreted by the processor.
pub fn parse_line(line_number: u64, line: &str) -> Result<Option<RaceEvent>, ReadError> {
    let Some((raw_time, rest)) = next_token(line) else {
        return Ok(None);
    };
    let Some((kind_token, rest)) = next_token(rest) else {
        tracing::warn!(line = line_number, "Dropping event without kind");
        return Ok(None);
    };
    let kind_id = parse_u32(line_number, "event kind", kind_token)?;
    let Some((competitor_token, rest)) = next_token(rest) else {
        tracing::warn!(line = line_number, "Dropping event without competitor");
        return Ok(None);
    };
    let competitor_id = parse_u32(line_number, "competitor id", competitor_token)?;

    let mut event = RaceEvent {
        line_number,
        raw_time: raw_time.to_string(),
        kind_id,
        competitor_id,
        extra: None,
    };

    if let Some(kind) = EventKind::from_id(kind_id)
        && kind.takes_extra()
    {
        let extra = if kind.extra_is_free_text() {
            Some(rest.trim()).filter(|s| !s.is_empty())
        } else {
            next_token(rest).map(|(token, _)| token)
        };
        let Some(extra) = extra else {
            tracing::warn!(line = line_number, kind_id, "Dropping event missing its extra parameter");
            return Ok(None);
        };
        event.extra = Some(extra.to_string());
    }

    Ok(Some(event))
}
