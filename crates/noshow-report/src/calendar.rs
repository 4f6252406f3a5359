//! Month and weekday distributions of the booking and appointment dates.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use noshow_model::columns::clean;
use noshow_model::{DayOfWeek, PipelineError, Result};
use polars::prelude::{Column, DataFrame};
use serde::Serialize;

use crate::common::str_column;
use crate::table::AggregateTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    /// 1 = January.
    pub month: u32,
    pub count: u64,
}

/// Appointments per calendar month, pooled across years.
///
/// Sparse: months with no rows are absent. Ascending by month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthDistribution {
    pub column: String,
    pub months: Vec<MonthCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub day: DayOfWeek,
    pub count: u64,
}

/// Appointments per weekday, most frequent first.
///
/// Equal counts keep calendar order (Monday first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayDistribution {
    pub column: String,
    pub days: Vec<WeekdayCount>,
}

/// The four calendar views of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDistributions {
    pub scheduled_months: MonthDistribution,
    pub appointment_months: MonthDistribution,
    pub scheduled_weekdays: WeekdayDistribution,
    pub appointment_weekdays: WeekdayDistribution,
}

/// Counts rows per month of an ISO date column.
pub fn month_distribution(df: &DataFrame, date_column: &str) -> Result<MonthDistribution> {
    let values = str_column(df, date_column)?;
    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    for (row, value) in values.into_iter().enumerate() {
        let Some(value) = value else { continue };
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
            PipelineError::format(format!(
                "invalid stored date '{value}' in column {date_column} at row {row}"
            ))
        })?;
        *counts.entry(date.month()).or_insert(0) += 1;
    }
    Ok(MonthDistribution {
        column: date_column.to_string(),
        months: counts
            .into_iter()
            .map(|(month, count)| MonthCount { month, count })
            .collect(),
    })
}

/// Counts rows per weekday of a day-name column.
pub fn weekday_distribution(df: &DataFrame, day_column: &str) -> Result<WeekdayDistribution> {
    let values = str_column(df, day_column)?;
    let mut counts: BTreeMap<DayOfWeek, u64> = BTreeMap::new();
    for (row, value) in values.into_iter().enumerate() {
        let Some(value) = value else { continue };
        let day = DayOfWeek::from_str(value).map_err(|_| PipelineError::UnmappedCategory {
            column: day_column.to_string(),
            value: value.to_string(),
            row,
        })?;
        *counts.entry(day).or_insert(0) += 1;
    }

    // BTreeMap iteration is calendar order, and the sort is stable.
    let mut days: Vec<WeekdayCount> = counts
        .into_iter()
        .map(|(day, count)| WeekdayCount { day, count })
        .collect();
    days.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(WeekdayDistribution {
        column: day_column.to_string(),
        days,
    })
}

pub fn calendar_distributions(df: &DataFrame) -> Result<CalendarDistributions> {
    Ok(CalendarDistributions {
        scheduled_months: month_distribution(df, clean::SCHEDULED_AT)?,
        appointment_months: month_distribution(df, clean::APPOINTMENT_AT)?,
        scheduled_weekdays: weekday_distribution(df, clean::SCHEDULED_DAY_OF_WEEK)?,
        appointment_weekdays: weekday_distribution(df, clean::APPOINTMENT_DAY_OF_WEEK)?,
    })
}

impl AggregateTable for MonthDistribution {
    fn to_frame(&self) -> Result<DataFrame> {
        let months: Vec<i64> = self.months.iter().map(|m| i64::from(m.month)).collect();
        let counts: Vec<u64> = self.months.iter().map(|m| m.count).collect();
        Ok(DataFrame::new(vec![
            Column::new("month".into(), months),
            Column::new("count".into(), counts),
        ])?)
    }
}

impl AggregateTable for WeekdayDistribution {
    fn to_frame(&self) -> Result<DataFrame> {
        let days: Vec<&str> = self.days.iter().map(|d| d.day.as_str()).collect();
        let counts: Vec<u64> = self.days.iter().map(|d| d.count).collect();
        Ok(DataFrame::new(vec![
            Column::new("day_of_week".into(), days),
            Column::new("count".into(), counts),
        ])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_are_sparse_and_ascending() {
        let df = DataFrame::new(vec![Column::new(
            "appointment_at".into(),
            vec!["2016-06-01", "2016-04-29", "2016-06-08", "2015-04-02"],
        )])
        .unwrap();
        let dist = month_distribution(&df, "appointment_at").unwrap();
        assert_eq!(
            dist.months,
            vec![
                MonthCount { month: 4, count: 2 },
                MonthCount { month: 6, count: 2 },
            ]
        );
    }

    #[test]
    fn test_weekday_ties_follow_calendar() {
        let df = DataFrame::new(vec![Column::new(
            "appointment_day_of_week".into(),
            vec!["Friday", "Tuesday", "Monday", "Tuesday", "Friday", "Saturday"],
        )])
        .unwrap();
        let dist = weekday_distribution(&df, "appointment_day_of_week").unwrap();
        let order: Vec<DayOfWeek> = dist.days.iter().map(|d| d.day).collect();
        assert_eq!(
            order,
            vec![
                DayOfWeek::Tuesday,
                DayOfWeek::Friday,
                DayOfWeek::Monday,
                DayOfWeek::Saturday,
            ]
        );
    }

    #[test]
    fn test_unknown_weekday_label() {
        let df = DataFrame::new(vec![Column::new(
            "scheduled_day_of_week".into(),
            vec!["Monday", "Caturday"],
        )])
        .unwrap();
        let err = weekday_distribution(&df, "scheduled_day_of_week").unwrap_err();
        assert!(matches!(err, PipelineError::UnmappedCategory { row: 1, .. }));
    }

    #[test]
    fn test_unparseable_stored_date() {
        let df = DataFrame::new(vec![Column::new("scheduled_at".into(), vec!["29/04/2016"])])
            .unwrap();
        assert!(month_distribution(&df, "scheduled_at").is_err());
    }
}
