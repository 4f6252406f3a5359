//! Outcome proportions conditioned on a grouping column.

use std::collections::{BTreeMap, BTreeSet};

use noshow_model::Result;
use polars::prelude::{Column, DataFrame};
use serde::Serialize;

use crate::common::{ratio, str_column};
use crate::table::AggregateTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProportionRow {
    pub group: String,
    pub outcome: String,
    pub proportion: f64,
}

/// `P(outcome | group)` in long form.
///
/// Every group present in the data lists every outcome seen anywhere in
/// the table, with 0.0 for outcomes the group never has.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionalProportions {
    pub group_column: String,
    pub outcome_column: String,
    pub rows: Vec<ProportionRow>,
}

impl ConditionalProportions {
    /// Proportion for one `(group, outcome)` pair, if the group exists.
    pub fn get(&self, group: &str, outcome: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.group == group && row.outcome == outcome)
            .map(|row| row.proportion)
    }

    /// Distinct groups, in output order.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = self.rows.iter().map(|row| row.group.as_str()).collect();
        groups.dedup();
        groups
    }
}

/// Computes the outcome distribution within each group of `group`.
///
/// Rows with a null group or outcome are skipped.
pub fn conditional_proportions(
    df: &DataFrame,
    group: &str,
    outcome: &str,
) -> Result<ConditionalProportions> {
    let groups = str_column(df, group)?;
    let outcomes = str_column(df, outcome)?;

    let mut counts: BTreeMap<&str, BTreeMap<&str, u64>> = BTreeMap::new();
    let mut universe: BTreeSet<&str> = BTreeSet::new();
    for (group_value, outcome_value) in groups.into_iter().zip(outcomes) {
        let (Some(group_value), Some(outcome_value)) = (group_value, outcome_value) else {
            continue;
        };
        universe.insert(outcome_value);
        *counts
            .entry(group_value)
            .or_default()
            .entry(outcome_value)
            .or_insert(0) += 1;
    }

    let mut rows = Vec::with_capacity(counts.len() * universe.len());
    for (group_value, group_counts) in &counts {
        let group_total: u64 = group_counts.values().sum();
        for outcome_value in &universe {
            let count = group_counts.get(outcome_value).copied().unwrap_or(0);
            rows.push(ProportionRow {
                group: (*group_value).to_string(),
                outcome: (*outcome_value).to_string(),
                proportion: ratio(count, group_total),
            });
        }
    }

    Ok(ConditionalProportions {
        group_column: group.to_string(),
        outcome_column: outcome.to_string(),
        rows,
    })
}

impl AggregateTable for ConditionalProportions {
    fn to_frame(&self) -> Result<DataFrame> {
        let groups: Vec<&str> = self.rows.iter().map(|r| r.group.as_str()).collect();
        let outcomes: Vec<&str> = self.rows.iter().map(|r| r.outcome.as_str()).collect();
        let proportions: Vec<f64> = self.rows.iter().map(|r| r.proportion).collect();
        Ok(DataFrame::new(vec![
            Column::new(self.group_column.as_str().into(), groups),
            Column::new(self.outcome_column.as_str().into(), outcomes),
            Column::new("proportion".into(), proportions),
        ])?)
    }
}
