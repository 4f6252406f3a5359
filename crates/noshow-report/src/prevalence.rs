//! Prevalence of the rare yes/no patient features.

use noshow_model::{PREVALENCE_FEATURES, Result, YesNo};
use polars::prelude::{Column, DataFrame};
use serde::Serialize;

use crate::common::{ratio, str_column};
use crate::table::AggregateTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturePrevalence {
    pub feature: String,
    pub yes_count: u64,
    pub proportion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrevalenceTable {
    pub features: Vec<FeaturePrevalence>,
}

/// Share of rows flagged `Yes` for each of `features`, in the given order.
pub fn prevalence_of(df: &DataFrame, features: &[&str]) -> Result<PrevalenceTable> {
    let total = df.height() as u64;
    let features = features
        .iter()
        .map(|feature| {
            let yes_count = str_column(df, feature)?
                .into_iter()
                .flatten()
                .filter(|label| *label == YesNo::Yes.as_str())
                .count() as u64;
            Ok(FeaturePrevalence {
                feature: (*feature).to_string(),
                yes_count,
                proportion: ratio(yes_count, total),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(PrevalenceTable { features })
}

/// Prevalence of scholarship, alcoholism, hypertension, diabetes and
/// handicap.
pub fn feature_prevalence(df: &DataFrame) -> Result<PrevalenceTable> {
    prevalence_of(df, &PREVALENCE_FEATURES)
}

impl AggregateTable for PrevalenceTable {
    fn to_frame(&self) -> Result<DataFrame> {
        let names: Vec<&str> = self.features.iter().map(|f| f.feature.as_str()).collect();
        let counts: Vec<u64> = self.features.iter().map(|f| f.yes_count).collect();
        let proportions: Vec<f64> = self.features.iter().map(|f| f.proportion).collect();
        Ok(DataFrame::new(vec![
            Column::new("feature".into(), names),
            Column::new("yes_count".into(), counts),
            Column::new("proportion".into(), proportions),
        ])?)
    }
}
