//! Category counts: distributions and top-K rankings.

use std::collections::BTreeMap;

use noshow_model::Result;
use polars::prelude::{Column, DataFrame};
use serde::Serialize;

use crate::common::{label_counts, rank_by_count, ratio, str_column};
use crate::table::AggregateTable;

/// One category with its share of the non-null values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueShare {
    pub label: String,
    pub count: u64,
    pub proportion: f64,
}

/// Count and proportion per distinct value of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueDistribution {
    pub column: String,
    pub values: Vec<ValueShare>,
}

/// Counts each distinct value of `column`, most frequent first.
pub fn value_distribution(df: &DataFrame, column: &str) -> Result<ValueDistribution> {
    let counts = label_counts(str_column(df, column)?);
    let total: u64 = counts.values().sum();
    let values = rank_by_count(counts)
        .into_iter()
        .map(|(label, count)| ValueShare {
            label,
            count,
            proportion: ratio(count, total),
        })
        .collect();
    Ok(ValueDistribution {
        column: column.to_string(),
        values,
    })
}

impl AggregateTable for ValueDistribution {
    fn to_frame(&self) -> Result<DataFrame> {
        let labels: Vec<&str> = self.values.iter().map(|v| v.label.as_str()).collect();
        let counts: Vec<u64> = self.values.iter().map(|v| v.count).collect();
        let proportions: Vec<f64> = self.values.iter().map(|v| v.proportion).collect();
        Ok(DataFrame::new(vec![
            Column::new(self.column.as_str().into(), labels),
            Column::new("count".into(), counts),
            Column::new("proportion".into(), proportions),
        ])?)
    }
}

/// Equality condition restricting which rows a ranking counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFilter {
    pub column: String,
    pub value: String,
}

impl CategoryFilter {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u64,
}

/// The `k` most frequent values of a column, optionally over a subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCategories {
    pub column: String,
    pub filter: Option<CategoryFilter>,
    pub limit: usize,
    pub categories: Vec<CategoryCount>,
}

/// Ranks the values of `column` by count (ties by label) and keeps `k`.
///
/// With a `filter`, only rows where `filter.column == filter.value` are
/// counted.
pub fn top_categories(
    df: &DataFrame,
    column: &str,
    filter: Option<&CategoryFilter>,
    k: usize,
) -> Result<TopCategories> {
    let values = str_column(df, column)?;
    let counts = match filter {
        None => label_counts(values),
        Some(filter) => {
            let condition = str_column(df, &filter.column)?;
            let mut counts = BTreeMap::new();
            for (value, matched) in values.into_iter().zip(condition) {
                if let Some(value) = value
                    && matched == Some(filter.value.as_str())
                {
                    *counts.entry(value.to_string()).or_insert(0) += 1;
                }
            }
            counts
        }
    };

    let categories = rank_by_count(counts)
        .into_iter()
        .take(k)
        .map(|(label, count)| CategoryCount { label, count })
        .collect();
    Ok(TopCategories {
        column: column.to_string(),
        filter: filter.cloned(),
        limit: k,
        categories,
    })
}

impl AggregateTable for TopCategories {
    fn to_frame(&self) -> Result<DataFrame> {
        let labels: Vec<&str> = self.categories.iter().map(|c| c.label.as_str()).collect();
        let counts: Vec<u64> = self.categories.iter().map(|c| c.count).collect();
        Ok(DataFrame::new(vec![
            Column::new(self.column.as_str().into(), labels),
            Column::new("count".into(), counts),
        ])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                "neighbourhood".into(),
                vec!["CENTRO", "JABOUR", "CENTRO", "ANDORINHAS", "JABOUR", "MARUÍPE"],
            ),
            Column::new("no_show".into(), vec!["Yes", "Yes", "No", "Yes", "Yes", "No"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_value_distribution_order_and_proportions() {
        let dist = value_distribution(&frame(), "no_show").unwrap();
        assert_eq!(dist.values.len(), 2);
        assert_eq!(dist.values[0].label, "Yes");
        assert_eq!(dist.values[0].count, 4);
        let total: f64 = dist.values.iter().map(|v| v.proportion).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_categories_with_filter() {
        let filter = CategoryFilter::new("no_show", "Yes");
        let top = top_categories(&frame(), "neighbourhood", Some(&filter), 2).unwrap();
        let labels: Vec<&str> = top.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["JABOUR", "ANDORINHAS"]);
        assert_eq!(top.categories[0].count, 2);
    }

    #[test]
    fn test_top_categories_tie_break_is_lexical() {
        let top = top_categories(&frame(), "neighbourhood", None, 5).unwrap();
        let labels: Vec<&str> = top.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["CENTRO", "JABOUR", "ANDORINHAS", "MARUÍPE"]);
    }

    #[test]
    fn test_top_categories_zero_k() {
        let top = top_categories(&frame(), "neighbourhood", None, 0).unwrap();
        assert!(top.categories.is_empty());
    }

    #[test]
    fn test_distribution_frame_columns() {
        let table = value_distribution(&frame(), "no_show")
            .unwrap()
            .to_frame()
            .unwrap();
        let names: Vec<&str> = table
            .get_column_names()
            .iter()
            .map(|n| n.as_str())
            .collect();
        assert_eq!(names, vec!["no_show", "count", "proportion"]);
    }
}
