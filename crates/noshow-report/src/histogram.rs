//! Integer histograms.
//!
//! Bins are contiguous half-open ranges `[start, end)` of equal width,
//! beginning at the smallest value. Interior bins with no values are kept
//! so the layout reflects the value range.

use noshow_model::columns::clean;
use noshow_model::{BinningRule, Result};
use polars::prelude::{Column, DataFrame};
use serde::Serialize;

use crate::common::i64_values;
use crate::table::AggregateTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistogramBin {
    pub start: i64,
    /// Exclusive.
    pub end: i64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    pub rule: BinningRule,
    pub width: i64,
    pub bins: Vec<HistogramBin>,
}

/// `ceil(log2 n)` for `n >= 1`.
fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

fn div_ceil_positive(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator - 1) / denominator
}

/// Bin width for `n` values spanning `span` integers (`max - min + 1`).
fn bin_width(rule: BinningRule, n: usize, span: i64) -> i64 {
    let width = match rule {
        BinningRule::Sturges => {
            let bins = i64::from(ceil_log2(n)) + 1;
            div_ceil_positive(span, bins)
        }
        BinningRule::FixedWidth(width) => i64::from(width),
        BinningRule::FixedCount(count) => div_ceil_positive(span, i64::from(count.max(1))),
    };
    width.max(1)
}

/// Bins `values` according to `rule`. No values yields no bins.
pub fn histogram(values: &[i64], rule: BinningRule) -> Histogram {
    let (Some(min), Some(max)) = (values.iter().min(), values.iter().max()) else {
        return Histogram {
            rule,
            width: 0,
            bins: Vec::new(),
        };
    };
    let span = max - min + 1;
    let width = bin_width(rule, values.len(), span);
    let bin_count = div_ceil_positive(span, width);

    let mut counts = vec![0u64; bin_count as usize];
    for value in values {
        let index = ((value - min) / width) as usize;
        counts[index] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| {
            let start = min + index as i64 * width;
            HistogramBin {
                start,
                end: start + width,
                count,
            }
        })
        .collect();
    Histogram { rule, width, bins }
}

/// Histogram of the `waiting_days` column.
pub fn waiting_days_histogram(df: &DataFrame, rule: BinningRule) -> Result<Histogram> {
    let values = i64_values(df, clean::WAITING_DAYS)?;
    Ok(histogram(&values, rule))
}

impl AggregateTable for Histogram {
    fn to_frame(&self) -> Result<DataFrame> {
        let starts: Vec<i64> = self.bins.iter().map(|b| b.start).collect();
        let ends: Vec<i64> = self.bins.iter().map(|b| b.end).collect();
        let counts: Vec<u64> = self.bins.iter().map(|b| b.count).collect();
        Ok(DataFrame::new(vec![
            Column::new("bin_start".into(), starts),
            Column::new("bin_end".into(), ends),
            Column::new("count".into(), counts),
        ])?)
    }
}
