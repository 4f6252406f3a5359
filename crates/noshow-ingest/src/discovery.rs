//! Dataset source resolution.

use std::path::{Path, PathBuf};

use noshow_model::{LoadOptions, PipelineError, Result};
use tracing::debug;

use crate::csv::source_error;

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(PipelineError::SourceUnavailable {
            location: dir.to_path_buf(),
            reason: "directory not found".to_string(),
        });
    }

    let mut files = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| source_error(dir, &e))?;
    for entry_result in entries {
        let entry = entry_result.map_err(|e| source_error(dir, &e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if is_csv_file(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_csv_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Resolves a source location to the CSV file to load.
///
/// - A file is used as is.
/// - A directory is searched for `options.file_name` (case-insensitive);
///   failing that, a directory holding exactly one CSV yields that file.
pub fn resolve_source(location: &Path, options: &LoadOptions) -> Result<PathBuf> {
    if location.is_file() {
        return Ok(location.to_path_buf());
    }
    if !location.exists() {
        return Err(PipelineError::SourceUnavailable {
            location: location.to_path_buf(),
            reason: "path does not exist".to_string(),
        });
    }

    let csv_files = list_csv_files(location)?;
    if let Some(named) = csv_files.iter().find(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.eq_ignore_ascii_case(&options.file_name))
    }) {
        debug!(path = %named.display(), "resolved dataset by file name");
        return Ok(named.clone());
    }

    match csv_files.as_slice() {
        [single] => {
            debug!(path = %single.display(), "resolved dataset as the only CSV file");
            Ok(single.clone())
        }
        [] => Err(PipelineError::SourceUnavailable {
            location: location.to_path_buf(),
            reason: format!("no CSV files found (expected {})", options.file_name),
        }),
        many => Err(PipelineError::SourceUnavailable {
            location: location.to_path_buf(),
            reason: format!(
                "{} not found and {} CSV files are ambiguous",
                options.file_name,
                many.len()
            ),
        }),
    }
}
