//! CSV header reading and contract checks.

use std::path::Path;

use csv::ReaderBuilder;
use noshow_model::{PipelineError, RAW_COLUMNS, Result};

use super::source_error;

/// Header row of a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names, in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    /// Required columns absent from this header, in the order given.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.contains(name))
            .collect()
    }
}

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Reads the first row of a CSV file as its header.
pub fn read_csv_headers(path: &Path) -> Result<CsvHeaders> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| source_error(path, &e))?;

    let Some(first) = reader.records().next() else {
        return Err(PipelineError::format(format!(
            "CSV file is empty: {}",
            path.display()
        )));
    };
    let record = first.map_err(|e| {
        PipelineError::format(format!("read header of {}: {e}", path.display()))
    })?;

    let columns: Vec<String> = record.iter().map(normalize_header).collect();
    if columns.iter().all(String::is_empty) {
        return Err(PipelineError::format(format!(
            "could not detect header row in {}",
            path.display()
        )));
    }
    if columns.iter().any(String::is_empty) {
        return Err(PipelineError::format(format!(
            "empty column name in header of {}",
            path.display()
        )));
    }
    Ok(CsvHeaders::new(columns))
}

/// Checks that every raw appointment column is present.
pub fn validate_headers(headers: &CsvHeaders, path: &Path) -> Result<()> {
    let missing = headers.missing(&RAW_COLUMNS);
    if missing.is_empty() {
        return Ok(());
    }
    Err(PipelineError::format(format!(
        "required column(s) {} not found in {}",
        missing.join(", "),
        path.display()
    )))
}
