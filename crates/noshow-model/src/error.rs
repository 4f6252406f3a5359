//! Error taxonomy shared by every pipeline stage.

use std::fmt;
use std::path::PathBuf;

use polars::prelude::PolarsError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a pipeline run.
///
/// There is no partial-success mode: any of these stops the batch.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The dataset could not be retrieved from its location.
    #[error("dataset source unavailable: {location}: {reason}")]
    SourceUnavailable { location: PathBuf, reason: String },

    /// Unparseable structure, header, date, integer, or a missing value.
    #[error("format error: {0}")]
    Format(String),

    /// A coded value outside the known domain of its column.
    #[error("unmapped value '{value}' in column {column} at row {row}")]
    UnmappedCategory {
        column: String,
        value: String,
        row: usize,
    },

    /// A value that breaks a hard numeric precondition.
    #[error("domain violation in column {column}{}: {message}", row_suffix(.row))]
    DomainViolation {
        column: String,
        row: Option<usize>,
        message: String,
    },
}

fn row_suffix(row: &Option<usize>) -> String {
    row.map(|row| format!(" at row {row}")).unwrap_or_default()
}

impl PipelineError {
    /// Builds a [`PipelineError::Format`] from any displayable message.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Builds a missing-value format error for a column/row pair.
    pub fn missing_value(column: &str, row: usize) -> Self {
        Self::Format(format!("missing value in column {column} at row {row}"))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            Self::Format(_) => ErrorKind::Format,
            Self::UnmappedCategory { .. } => ErrorKind::UnmappedCategory,
            Self::DomainViolation { .. } => ErrorKind::DomainViolation,
        }
    }
}

impl From<PolarsError> for PipelineError {
    fn from(err: PolarsError) -> Self {
        Self::Format(err.to_string())
    }
}

/// Discriminant of [`PipelineError`], for callers that branch on the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    SourceUnavailable,
    Format,
    UnmappedCategory,
    DomainViolation,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::SourceUnavailable => "SourceUnavailable",
            ErrorKind::Format => "FormatError",
            ErrorKind::UnmappedCategory => "UnmappedCategory",
            ErrorKind::DomainViolation => "DomainViolation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
