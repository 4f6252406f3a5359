//! Five-number summaries of a numeric column per group.

use std::collections::BTreeMap;

use noshow_model::Result;
use polars::prelude::{Column, DataFrame};
use serde::Serialize;

use crate::common::{i64_column, str_column};
use crate::table::AggregateTable;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub count: u64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Summarizes `values`; `None` when empty.
    pub fn from_values(values: &[i64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().map(|v| *v as f64).collect();
        sorted.sort_by(f64::total_cmp);
        let (&min, &max) = (sorted.first()?, sorted.last()?);
        Some(Self {
            count: sorted.len() as u64,
            min,
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max,
        })
    }
}

/// Linear interpolation between closest ranks: `h = (n - 1) p`.
///
/// `sorted` must be non-empty and ascending.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let lower = h.floor() as usize;
    let upper = h.ceil() as usize;
    sorted[lower] + (h - lower as f64) * (sorted[upper] - sorted[lower])
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub group: String,
    #[serde(flatten)]
    pub summary: FiveNumberSummary,
}

/// Box-plot statistics of `value_column` for each value of `group_column`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedSummary {
    pub value_column: String,
    pub group_column: String,
    pub groups: Vec<GroupSummary>,
}

/// Groups ascend by label; groups without values do not appear.
pub fn grouped_five_number_summary(
    df: &DataFrame,
    value_column: &str,
    group_column: &str,
) -> Result<GroupedSummary> {
    let values = i64_column(df, value_column)?;
    let groups = str_column(df, group_column)?;

    let mut grouped: BTreeMap<&str, Vec<i64>> = BTreeMap::new();
    for (value, group) in values.into_iter().zip(groups) {
        if let (Some(value), Some(group)) = (value, group) {
            grouped.entry(group).or_default().push(value);
        }
    }

    let groups = grouped
        .into_iter()
        .filter_map(|(group, values)| {
            FiveNumberSummary::from_values(&values).map(|summary| GroupSummary {
                group: group.to_string(),
                summary,
            })
        })
        .collect();
    Ok(GroupedSummary {
        value_column: value_column.to_string(),
        group_column: group_column.to_string(),
        groups,
    })
}

impl AggregateTable for GroupedSummary {
    fn to_frame(&self) -> Result<DataFrame> {
        let pick = |f: fn(&FiveNumberSummary) -> f64| -> Vec<f64> {
            self.groups.iter().map(|g| f(&g.summary)).collect()
        };
        let labels: Vec<&str> = self.groups.iter().map(|g| g.group.as_str()).collect();
        let counts: Vec<u64> = self.groups.iter().map(|g| g.summary.count).collect();
        Ok(DataFrame::new(vec![
            Column::new(self.group_column.as_str().into(), labels),
            Column::new("count".into(), counts),
            Column::new("min".into(), pick(|s| s.min)),
            Column::new("q1".into(), pick(|s| s.q1)),
            Column::new("median".into(), pick(|s| s.median)),
            Column::new("q3".into(), pick(|s| s.q3)),
            Column::new("max".into(), pick(|s| s.max)),
        ])?)
    }
}
