//! CSV reading utilities.

mod header;
mod reader;

use std::fmt::Display;
use std::path::Path;

use noshow_model::PipelineError;

pub use header::{CsvHeaders, normalize_header, read_csv_headers, validate_headers};
pub use reader::{check_file_size, read_raw_table};

/// Wraps a retrieval failure on `path` as `SourceUnavailable`.
pub(crate) fn source_error(path: &Path, error: &impl Display) -> PipelineError {
    PipelineError::SourceUnavailable {
        location: path.to_path_buf(),
        reason: error.to_string(),
    }
}
