//! Configuration options for pipeline runs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::columns::clean;
use crate::error::{PipelineError, Result};

/// Default dataset file looked up when the source location is a directory.
pub const DEFAULT_DATASET_FILE: &str = "KaggleV2-May-2016.csv";

/// Maximum file size for CSV loading (500 MB default).
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 500 * 1024 * 1024;

/// Options for resolving and reading the source dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// File name looked up inside a directory source (case-insensitive).
    pub file_name: String,
    /// Files larger than this are rejected before parsing.
    pub max_file_size_bytes: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_DATASET_FILE.to_string(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

/// Row-level validity bounds.
///
/// The waiting-days predicate is fixed (`waiting_days > 0`); the age range
/// is inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub min_age: i64,
    pub max_age: i64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_age: 0,
            max_age: 120,
        }
    }
}

impl FilterOptions {
    pub fn validate(&self) -> Result<()> {
        if self.min_age > self.max_age {
            return Err(PipelineError::DomainViolation {
                column: clean::AGE.to_string(),
                row: None,
                message: format!(
                    "min_age {} exceeds max_age {}",
                    self.min_age, self.max_age
                ),
            });
        }
        Ok(())
    }

    /// Returns true when `age` lies inside the configured range.
    pub fn accepts_age(&self, age: i64) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

/// Bin-width policy for integer histograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinningRule {
    /// `ceil(log2 n) + 1` bins over the value range.
    #[default]
    Sturges,
    /// Every bin spans exactly this many units.
    FixedWidth(u32),
    /// Split the value range into (at most) this many bins.
    FixedCount(u32),
}

impl fmt::Display for BinningRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinningRule::Sturges => write!(f, "sturges"),
            BinningRule::FixedWidth(width) => write!(f, "width:{width}"),
            BinningRule::FixedCount(count) => write!(f, "count:{count}"),
        }
    }
}

impl FromStr for BinningRule {
    type Err = String;

    /// Parses `sturges`, `width:N` or `count:N` (N > 0).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "sturges" {
            return Ok(BinningRule::Sturges);
        }
        let Some((kind, value)) = normalized.split_once(':') else {
            return Err(format!("Unknown binning rule: {s}"));
        };
        let value: u32 = value
            .trim()
            .parse()
            .map_err(|_| format!("Invalid bin size in {s}"))?;
        if value == 0 {
            return Err(format!("Bin size must be positive: {s}"));
        }
        match kind.trim() {
            "width" => Ok(BinningRule::FixedWidth(value)),
            "count" => Ok(BinningRule::FixedCount(value)),
            _ => Err(format!("Unknown binning rule: {s}")),
        }
    }
}

/// Options for the aggregate views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Number of categories kept by the top-K rankings.
    pub top_k: usize,
    /// Histogram policy for waiting days.
    pub binning: BinningRule,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_k: 5,
            binning: BinningRule::default(),
        }
    }
}

/// Options for a complete pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub load: LoadOptions,
    pub filter: FilterOptions,
    pub report: ReportOptions,
}

impl PipelineOptions {
    pub fn with_filter(mut self, filter: FilterOptions) -> Self {
        self.filter = filter;
        self
    }
}
