//! Integer parsing for numeric source fields.

/// Parses a base-10 integer, ignoring surrounding whitespace.
///
/// Decimal notation (`"62.0"`) is rejected; the source fields are counts.
pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
