//! Field normalization and validity filtering.
//!
//! [`normalize_appointments`] turns the loader's all-text table into the
//! typed cleaned table; [`apply_validity_filter`] then removes rows with a
//! non-positive waiting time or an implausible age.

pub mod filter;
pub mod normalization;
pub mod normalizer;

pub use filter::{FilterResult, FilterStats, apply_validity_filter};
pub use normalizer::{
    collapse_severity, copy_text_column, date_column, derive_day_of_week, derive_waiting_days,
    drop_identifiers, normalize_appointments, parse_date_column, parse_integer_column,
    remap_categorical,
};
