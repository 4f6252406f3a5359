//! Column access and counting helpers shared by the aggregates.

use std::collections::BTreeMap;

use noshow_model::{PipelineError, Result};
use polars::prelude::{DataFrame, Int64Chunked, StringChunked};

/// Borrows a String column, failing with `Format` if absent or mistyped.
pub(crate) fn str_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| PipelineError::format(format!("column {name} not found")))?;
    column
        .str()
        .map_err(|_| PipelineError::format(format!("column {name} is not a text column")))
}

/// Borrows an Int64 column, failing with `Format` if absent or mistyped.
pub(crate) fn i64_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Int64Chunked> {
    let column = df
        .column(name)
        .map_err(|_| PipelineError::format(format!("column {name} not found")))?;
    column
        .i64()
        .map_err(|_| PipelineError::format(format!("column {name} is not an Int64 column")))
}

/// Non-null values of an Int64 column.
pub(crate) fn i64_values(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    Ok(i64_column(df, name)?.into_iter().flatten().collect())
}

/// Counts non-null labels of a String column.
pub(crate) fn label_counts(values: &StringChunked) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for value in values.into_iter().flatten() {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Orders `(label, count)` pairs by count descending, then label ascending.
pub(crate) fn rank_by_count(counts: BTreeMap<String, u64>) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// `part / whole`, or 0.0 when `whole` is zero.
pub(crate) fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
