//! Headline numbers for the dashboard cards.

use noshow_model::columns::clean;
use noshow_model::{Result, YesNo};
use polars::prelude::{ChunkAgg, Column, DataFrame};
use serde::Serialize;

use crate::common::{i64_column, ratio, str_column};
use crate::table::AggregateTable;

/// Scalar summaries of a cleaned table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_appointments: u64,
    pub no_show_count: u64,
    /// `no_show_count / total_appointments`; 0.0 on an empty table.
    pub no_show_rate: f64,
    /// `None` on an empty table.
    pub mean_waiting_days: Option<f64>,
}

pub fn summarize(df: &DataFrame) -> Result<SummaryStats> {
    let outcomes = str_column(df, clean::NO_SHOW)?;
    let waiting = i64_column(df, clean::WAITING_DAYS)?;

    let total_appointments = df.height() as u64;
    let no_show_count = outcomes
        .into_iter()
        .flatten()
        .filter(|label| *label == YesNo::Yes.as_str())
        .count() as u64;
    let mean_waiting_days = if total_appointments == 0 {
        None
    } else {
        waiting.mean()
    };

    Ok(SummaryStats {
        total_appointments,
        no_show_count,
        no_show_rate: ratio(no_show_count, total_appointments),
        mean_waiting_days,
    })
}

impl AggregateTable for SummaryStats {
    fn to_frame(&self) -> Result<DataFrame> {
        Ok(DataFrame::new(vec![
            Column::new("total_appointments".into(), [self.total_appointments]),
            Column::new("no_show_count".into(), [self.no_show_count]),
            Column::new("no_show_rate".into(), [self.no_show_rate]),
            Column::new("mean_waiting_days".into(), [self.mean_waiting_days]),
        ])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(outcomes: &[&str], waiting: &[i64]) -> DataFrame {
        DataFrame::new(vec![
            Column::new(clean::NO_SHOW.into(), outcomes.to_vec()),
            Column::new(clean::WAITING_DAYS.into(), waiting.to_vec()),
        ])
        .unwrap()
    }

    #[test]
    fn test_summary_values() {
        let stats = summarize(&frame(&["No", "Yes", "No", "No"], &[1, 2, 3, 10])).unwrap();
        assert_eq!(stats.total_appointments, 4);
        assert_eq!(stats.no_show_count, 1);
        assert_eq!(stats.no_show_rate, 0.25);
        assert_eq!(stats.mean_waiting_days, Some(4.0));
    }

    #[test]
    fn test_empty_table_sentinels() {
        let stats = summarize(&frame(&[], &[])).unwrap();
        assert_eq!(stats.total_appointments, 0);
        assert_eq!(stats.no_show_rate, 0.0);
        assert_eq!(stats.mean_waiting_days, None);
    }

    #[test]
    fn test_summary_frame_shape() {
        let stats = summarize(&frame(&["Yes"], &[7])).unwrap();
        let table = stats.to_frame().unwrap();
        assert_eq!(table.shape(), (1, 4));
    }
}
