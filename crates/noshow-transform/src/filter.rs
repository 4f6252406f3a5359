//! Validity filter: drops rows outside the plausible waiting-time and age
//! ranges.
//!
//! Both predicates are evaluated independently and combined into one
//! boolean mask, so the order in which they are listed has no effect.

use noshow_model::columns::clean;
use noshow_model::{FilterOptions, Result};
use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use serde::Serialize;
use tracing::info;

/// Row counts observed while filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub input_rows: usize,
    pub kept_rows: usize,
    /// Rows with `waiting_days <= 0` (or null).
    pub failed_waiting_days: usize,
    /// Rows with an age outside the configured range (or null).
    pub failed_age: usize,
}

impl FilterStats {
    pub fn removed_rows(&self) -> usize {
        self.input_rows - self.kept_rows
    }
}

/// Filtered table plus the counts behind it.
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub data: DataFrame,
    pub stats: FilterStats,
}

/// Keeps rows with `waiting_days > 0` and an age inside `options`.
///
/// Returns a `DomainViolation` if the age bounds are inverted and a
/// `Format` error if either column is absent or not Int64.
pub fn apply_validity_filter(df: &DataFrame, options: &FilterOptions) -> Result<FilterResult> {
    options.validate()?;

    let waiting = df.column(clean::WAITING_DAYS)?.i64()?;
    let ages = df.column(clean::AGE)?.i64()?;

    let mut stats = FilterStats {
        input_rows: df.height(),
        ..FilterStats::default()
    };
    let mut keep = Vec::with_capacity(df.height());
    for (days, age) in waiting.into_iter().zip(ages) {
        let waiting_ok = days.is_some_and(|days| days > 0);
        let age_ok = age.is_some_and(|age| options.accepts_age(age));
        if !waiting_ok {
            stats.failed_waiting_days += 1;
        }
        if !age_ok {
            stats.failed_age += 1;
        }
        keep.push(waiting_ok && age_ok);
    }

    let mask = BooleanChunked::from_slice("valid".into(), &keep);
    let data = df.filter(&mask)?;
    stats.kept_rows = data.height();

    info!(
        input = stats.input_rows,
        kept = stats.kept_rows,
        failed_waiting_days = stats.failed_waiting_days,
        failed_age = stats.failed_age,
        "applied validity filter"
    );
    Ok(FilterResult { data, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use noshow_model::ErrorKind;
    use polars::prelude::Column;

    fn frame(waiting: Vec<Option<i64>>, ages: Vec<Option<i64>>) -> DataFrame {
        DataFrame::new(vec![
            Column::new(clean::WAITING_DAYS.into(), waiting),
            Column::new(clean::AGE.into(), ages),
        ])
        .unwrap()
    }

    #[test]
    fn test_counts_each_predicate() {
        let df = frame(
            vec![Some(5), Some(0), Some(-2), Some(3), None],
            vec![Some(30), Some(30), Some(130), Some(-1), Some(10)],
        );
        let result = apply_validity_filter(&df, &FilterOptions::default()).unwrap();
        assert_eq!(result.stats.input_rows, 5);
        assert_eq!(result.stats.kept_rows, 1);
        assert_eq!(result.stats.failed_waiting_days, 3);
        assert_eq!(result.stats.failed_age, 2);
        assert_eq!(result.stats.removed_rows(), 4);
    }

    #[test]
    fn test_null_age_fails() {
        let df = frame(vec![Some(5)], vec![None]);
        let result = apply_validity_filter(&df, &FilterOptions::default()).unwrap();
        assert_eq!(result.data.height(), 0);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let df = frame(vec![Some(5)], vec![Some(30)]);
        let options = FilterOptions {
            min_age: 60,
            max_age: 18,
        };
        let err = apply_validity_filter(&df, &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainViolation);
    }

    #[test]
    fn test_wrong_dtype_is_format_error() {
        let df = DataFrame::new(vec![
            Column::new(clean::WAITING_DAYS.into(), vec!["5"]),
            Column::new(clean::AGE.into(), vec![30i64]),
        ])
        .unwrap();
        let err = apply_validity_filter(&df, &FilterOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}
