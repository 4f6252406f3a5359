//! Type-safe enumerations for the categorical appointment fields.
//!
//! Each enum owns the single substitution table for its column. Decoding
//! a code outside the table returns `None`; callers turn that into an
//! `UnmappedCategory` error rather than passing the raw value through.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary categorical label used by flags, the outcome and the collapsed
/// handicap field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    /// Returns the label written into the cleaned table.
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::No => "No",
            YesNo::Yes => "Yes",
        }
    }

    /// Decodes a 0/1 flag code.
    pub fn from_flag_code(code: &str) -> Option<Self> {
        match code.trim() {
            "0" => Some(YesNo::No),
            "1" => Some(YesNo::Yes),
            _ => None,
        }
    }

    /// Validates an outcome label. Matching is exact after trimming.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "No" => Some(YesNo::No),
            "Yes" => Some(YesNo::Yes),
            _ => None,
        }
    }

    /// Collapses an ordinal severity count: `Yes` iff the count is positive.
    ///
    /// Negative counts are rejected with `None`.
    pub fn from_severity(severity: i64) -> Option<Self> {
        match severity {
            s if s < 0 => None,
            0 => Some(YesNo::No),
            _ => Some(YesNo::Yes),
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for YesNo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YesNo::from_label(s).ok_or_else(|| format!("Unknown yes/no label: {s}"))
    }
}

/// Patient gender after remapping the single-letter source codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }

    /// Returns the source code as it appears in the raw dataset.
    pub fn as_code(&self) -> &'static str {
        match self {
            Gender::Female => "F",
            Gender::Male => "M",
        }
    }

    /// Decodes a source code (`M`/`F`). Matching is exact after trimming.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "F" => Some(Gender::Female),
            "M" => Some(Gender::Male),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day of the week, in calendar order starting on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// Zero-based position in the week (Monday = 0).
    pub fn calendar_index(&self) -> u8 {
        *self as u8
    }

    /// Builds a day from the number of days since Monday (0..=6).
    pub fn from_days_from_monday(days: u32) -> Option<Self> {
        DayOfWeek::ALL.get(days as usize).copied()
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    /// Parses a full English day name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Unknown day of week: {s}"))
    }
}
