//! Loader stage: location in, raw appointment table out.

use std::path::{Path, PathBuf};

use noshow_model::{LoadOptions, Result};
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{debug, info};

use crate::csv::{check_file_size, read_csv_headers, read_raw_table, validate_headers};
use crate::discovery::resolve_source;
use crate::fingerprint::sha256_file;

/// Where a raw table came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    pub path: PathBuf,
    pub sha256: String,
    pub size_bytes: u64,
    pub rows: usize,
}

/// The raw appointment table plus its provenance.
#[derive(Debug, Clone)]
pub struct RawAppointments {
    /// Exactly the raw columns, every one typed as String.
    pub data: DataFrame,
    pub source: SourceInfo,
}

/// Retrieves the dataset at `location` as an untyped table.
///
/// Fails with `SourceUnavailable` when nothing can be read, and with
/// `Format` when the content is not a CSV carrying the expected header.
pub fn load_appointments(location: &Path, options: &LoadOptions) -> Result<RawAppointments> {
    let path = resolve_source(location, options)?;
    let size_bytes = check_file_size(&path, options.max_file_size_bytes)?;

    let headers = read_csv_headers(&path)?;
    validate_headers(&headers, &path)?;
    debug!(path = %path.display(), columns = headers.len(), "header validated");

    let data = read_raw_table(&path, &headers)?;
    let sha256 = sha256_file(&path)?;

    let source = SourceInfo {
        path,
        sha256,
        size_bytes,
        rows: data.height(),
    };
    info!(
        path = %source.path.display(),
        rows = source.rows,
        bytes = source.size_bytes,
        "loaded appointments"
    );
    Ok(RawAppointments { data, source })
}
