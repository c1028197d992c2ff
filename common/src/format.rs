//! Display and input formatting helpers.

use chrono::NaiveDate;

/// Longest phone number kept, country and area code included.
pub const MAX_PHONE_DIGITS: usize = 13;

/// Shortest digit string that gets grouped.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Reservations longer than this are shown in hours.
const HOURS_THRESHOLD_MINUTES: u32 = 120;

/// Formats arbitrary input as a phone number.
///
/// Non-digits are discarded. Fewer than [`MIN_PHONE_DIGITS`] digits are
/// returned as-is; otherwise the digits are clamped to [`MAX_PHONE_DIGITS`]
/// and grouped by length:
///
/// | digits | pattern              |
/// |--------|----------------------|
/// | 13     | `+CC C NNN NNN-NNNN` |
/// | 12     | `+CC NNN NNN-NNNN`   |
/// | 11     | `C NNN NNN-NNNN`     |
/// | 10     | `NNN NNN-NNNN`       |
///
/// Formatting is idempotent since the output's digits are its input's.
pub fn format_phone(input: &str) -> String {
    let mut digits = phone_digits(input);
    if digits.len() < MIN_PHONE_DIGITS {
        return digits;
    }
    digits.truncate(MAX_PHONE_DIGITS);

    let d = digits.as_str();
    match d.len() {
        13 => format!("+{} {} {} {}-{}", &d[..2], &d[2..3], &d[3..6], &d[6..9], &d[9..]),
        12 => format!("+{} {} {}-{}", &d[..2], &d[2..5], &d[5..8], &d[8..]),
        11 => format!("{} {} {}-{}", &d[..1], &d[1..4], &d[4..7], &d[7..]),
        10 => format!("{} {}-{}", &d[..3], &d[3..6], &d[6..]),
        _ => digits,
    }
}

/// The ASCII digits of `input`, in order.
pub fn phone_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Whether `input` formats into a complete, grouped phone number.
pub fn is_valid_phone(input: &str) -> bool {
    format_phone(input).contains('-')
}

/// Parses the date part of an ISO-8601 string (`YYYY-MM-DD`, anything after
/// the tenth character ignored).
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    let date_part = input.get(..10).unwrap_or(input);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
}

/// `2024-05-10` → `2024.05.10`
pub fn format_day(day: &NaiveDate) -> String {
    day.format("%Y.%m.%d").to_string()
}

/// `9` → `9:00`
pub fn format_hour(hour: u8) -> String {
    format!("{}:00", hour)
}

/// Short duration label: hours above two hours, minutes otherwise.
pub fn format_duration(minutes: u32) -> String {
    if minutes > HOURS_THRESHOLD_MINUTES {
        format!("{}h", f64::from(minutes) / 60.0)
    } else {
        format!("{}min", minutes)
    }
}

/// Rounds a numeric input and clamps it into `[min, max]`.
pub fn clamp_int(value: f64, min: i64, max: i64) -> i64 {
    if value.is_nan() {
        return min;
    }
    (value.round() as i64).clamp(min, max)
}
