//! Per-value normalization rules.
//!
//! - **datetime**: calendar date parsing and ISO formatting
//! - **calendar**: weekday and elapsed-day derivation
//! - **categorical**: code-to-label substitution tables
//! - **numeric**: integer parsing

pub mod calendar;
pub mod categorical;
pub mod datetime;
pub mod numeric;

pub use calendar::{day_of_week, waiting_days};
pub use categorical::RemapTable;
pub use datetime::{format_iso_date, parse_calendar_date};
pub use numeric::parse_integer;
