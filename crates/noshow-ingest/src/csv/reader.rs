//! CSV file reading into an untyped polars frame.

use std::path::Path;

use noshow_model::{PipelineError, RAW_COLUMNS, Result};
use polars::prelude::{Column, CsvReadOptions, DataFrame, DataType, SerReader};
use tracing::{debug, warn};

use super::header::CsvHeaders;
use super::source_error;

/// Check file size against a limit before loading.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = std::fs::metadata(path).map_err(|e| source_error(path, &e))?;
    if metadata.len() > max_size {
        return Err(PipelineError::SourceUnavailable {
            location: path.to_path_buf(),
            reason: format!(
                "file is {} bytes, larger than the {} byte limit",
                metadata.len(),
                max_size
            ),
        });
    }
    Ok(metadata.len())
}

/// Reads the raw appointment columns of a CSV file, every column as String.
///
/// The returned frame holds exactly [`RAW_COLUMNS`], in that order, with
/// header names normalized the same way as `headers`.
pub fn read_raw_table(path: &Path, headers: &CsvHeaders) -> Result<DataFrame> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| csv_parse_error(path, &e))?
        .finish()
        .map_err(|e| csv_parse_error(path, &e))?;

    if df.width() != headers.len() {
        return Err(PipelineError::format(format!(
            "{}: parsed {} columns but the header has {}",
            path.display(),
            df.width(),
            headers.len()
        )));
    }
    df.set_column_names(headers.columns.iter().map(String::as_str))?;

    let df = df.select(RAW_COLUMNS)?;
    let df = stringify_columns(df)?;
    if df.height() == 0 {
        warn!(path = %path.display(), "dataset has a header but no records");
    }
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read raw table"
    );
    Ok(df)
}

fn csv_parse_error(path: &Path, error: &impl std::fmt::Display) -> PipelineError {
    PipelineError::format(format!("failed to parse CSV {}: {error}", path.display()))
}

/// Casts any non-String column to String so downstream stages see raw text.
fn stringify_columns(df: DataFrame) -> Result<DataFrame> {
    if df
        .get_columns()
        .iter()
        .all(|column| column.dtype() == &DataType::String)
    {
        return Ok(df);
    }
    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .map(|column| column.cast(&DataType::String))
        .collect::<std::result::Result<_, _>>()?;
    Ok(DataFrame::new(columns)?)
}
