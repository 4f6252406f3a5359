//! Calendar date parsing for source timestamps.
//!
//! Accepted shapes, all in extended format:
//!
//! - `YYYY-MM-DD`
//! - `YYYY-MM-DD` + `T` or space + `HH:MM:SS[.fraction]`
//! - either of the above with a trailing `Z` or `±HH:MM` offset
//!
//! Only the calendar date is kept. The time of day and the zone designator
//! are validated and then discarded, so two timestamps on the same date
//! compare equal.

use chrono::{NaiveDate, NaiveTime};

/// Parses a timestamp and returns its calendar date.
///
/// Returns `None` for empty, partial or malformed values.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.get(..10)?;
    let date = parse_date_part(date_part)?;

    let rest = &trimmed[10..];
    if rest.is_empty() {
        return Some(date);
    }
    let time_part = rest.strip_prefix('T').or_else(|| rest.strip_prefix(' '))?;
    parse_time_part(time_part)?;
    Some(date)
}

/// Formats a date as ISO 8601 `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_date_part(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, b)| idx == 4 || idx == 7 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    let year = value[..4].parse().ok()?;
    let month = value[5..7].parse().ok()?;
    let day = value[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_time_part(value: &str) -> Option<NaiveTime> {
    let (clock, zone) = split_zone(value);
    if let Some(zone) = zone {
        parse_zone(zone)?;
    }
    let (hms, fraction) = match clock.split_once('.') {
        Some((hms, fraction)) => (hms, Some(fraction)),
        None => (clock, None),
    };
    if let Some(fraction) = fraction
        && (fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    if hms.len() != 8 {
        return None;
    }
    NaiveTime::parse_from_str(hms, "%H:%M:%S").ok()
}

/// Splits `HH:MM:SS[.f]` from a trailing `Z` or `±HH:MM`.
fn split_zone(value: &str) -> (&str, Option<&str>) {
    if let Some(clock) = value.strip_suffix('Z') {
        return (clock, Some("Z"));
    }
    match value.rfind(['+', '-']) {
        Some(pos) => (&value[..pos], Some(&value[pos..])),
        None => (value, None),
    }
}

/// Validates a zone designator, returning its offset in minutes.
fn parse_zone(zone: &str) -> Option<i32> {
    if zone == "Z" {
        return Some(0);
    }
    let (sign, body) = match zone.split_at_checked(1)? {
        ("+", body) => (1, body),
        ("-", body) => (-1, body),
        _ => return None,
    };
    let (hours, minutes) = body.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 60 + minutes))
}
