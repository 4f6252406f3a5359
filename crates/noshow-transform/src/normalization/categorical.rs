//! Substitution tables for coded categorical columns.

use noshow_model::{Gender, YesNo};

/// A total code-to-label mapping for one kind of categorical column.
///
/// Codes outside the table decode to `None`; the normalizer reports those
/// as `UnmappedCategory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemapTable {
    /// `0`/`1` → `No`/`Yes`.
    BinaryFlag,
    /// `F`/`M` → `Female`/`Male`.
    Gender,
    /// `No`/`Yes`, validated and passed through.
    Outcome,
}

impl RemapTable {
    /// Maps a raw code to its clean label.
    pub fn remap(&self, code: &str) -> Option<&'static str> {
        match self {
            RemapTable::BinaryFlag => YesNo::from_flag_code(code).map(|v| v.as_str()),
            RemapTable::Gender => Gender::from_code(code).map(|v| v.as_str()),
            RemapTable::Outcome => YesNo::from_label(code).map(|v| v.as_str()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RemapTable::BinaryFlag => "binary flag",
            RemapTable::Gender => "gender",
            RemapTable::Outcome => "outcome",
        }
    }
}
