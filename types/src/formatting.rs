//! Centralized number formatting utilities.
//!
//! All numeric display formatting for the narrative and the results table
//! goes through this module so every report line renders the same way.

/// Format a millisecond count as `HH:MM:SS.mmm`.
///
/// The hour field is zero-padded to two digits but has no upper bound, so
/// spans longer than a day render as `25:...`, `100:...` and so on.
/// Negative spans keep their sign in front of the absolute value.
///
/// # Examples
/// ```
/// use biathlon_types::formatting::format_hms_millis;
/// assert_eq!(format_hms_millis(0), "00:00:00.000");
/// assert_eq!(format_hms_millis(3_723_004), "01:02:03.004");
/// assert_eq!(format_hms_millis(90_000_000), "25:00:00.000");
/// assert_eq!(format_hms_millis(-1_500), "-00:00:01.500");
/// ```
pub fn format_hms_millis(millis: i64) -> String {
    let sign = if millis < 0 { "-" } else { "" };
    let abs = millis.unsigned_abs();
    let hours = abs / 3_600_000;
    let minutes = abs / 60_000 % 60;
    let seconds = abs / 1_000 % 60;
    let ms = abs % 1_000;
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}.{ms:03}")
}

/// Format a decimal f64 number with the specified precision.
///
/// Non-finite values keep Rust's rendering (`inf`, `NaN`).
///
/// # Examples
/// ```
/// use biathlon_types::formatting::format_decimal_f64;
/// assert_eq!(format_decimal_f64(1.2345, 3), "1.234");
/// assert_eq!(format_decimal_f64(15.0, 3), "15.000");
/// ```
pub fn format_decimal_f64(n: f64, precision: usize) -> String {
    format!("{:.prec$}", n, prec = precision)
}

/// Format an average speed in meters per second with 3 decimal places.
///
/// # Examples
/// ```
/// use biathlon_types::formatting::format_speed;
/// assert_eq!(format_speed(150, 10.0), "15.000");
/// assert_eq!(format_speed(3651, 1_800.0), "2.028");
/// ```
pub fn format_speed(meters: u32, secs: f64) -> String {
    format_decimal_f64(meters as f64 / secs, 3)
}

/// Format a count/total ratio as `count/total`.
///
/// # Examples
/// ```
/// use biathlon_types::formatting::format_ratio;
/// assert_eq!(format_ratio(4, 10), "4/10");
/// assert_eq!(format_ratio(0, 0), "0/0");
/// ```
pub fn format_ratio(count: usize, total: usize) -> String {
    format!("{}/{}", count, total)
}
