//! Weekday and elapsed-day derivation.

use chrono::{Datelike, NaiveDate, Weekday};
use noshow_model::DayOfWeek;

/// Weekday of a calendar date.
pub fn day_of_week(date: NaiveDate) -> DayOfWeek {
    match date.weekday() {
        Weekday::Mon => DayOfWeek::Monday,
        Weekday::Tue => DayOfWeek::Tuesday,
        Weekday::Wed => DayOfWeek::Wednesday,
        Weekday::Thu => DayOfWeek::Thursday,
        Weekday::Fri => DayOfWeek::Friday,
        Weekday::Sat => DayOfWeek::Saturday,
        Weekday::Sun => DayOfWeek::Sunday,
    }
}

/// Whole days from `scheduled` to `appointment`.
///
/// Negative when the appointment precedes the booking; same-day is 0.
pub fn waiting_days(scheduled: NaiveDate, appointment: NaiveDate) -> i64 {
    (appointment - scheduled).num_days()
}
