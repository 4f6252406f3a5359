//! Shared model for the no-show appointments pipeline.
//!
//! - **columns**: raw and cleaned column contract
//! - **enums**: categorical substitution tables
//! - **options**: load, filter and report configuration
//! - **error**: the pipeline error taxonomy

pub mod columns;
pub mod enums;
pub mod error;
pub mod options;

pub use columns::{
    BINARY_FLAG_COLUMNS, CLEAN_COLUMNS, ColumnSpec, ColumnTreatment, IDENTIFIER_COLUMNS,
    PREVALENCE_FEATURES, RAW_COLUMNS, column_specs,
};
pub use enums::{DayOfWeek, Gender, YesNo};
pub use error::{ErrorKind, PipelineError, Result};
pub use options::{
    BinningRule, DEFAULT_DATASET_FILE, FilterOptions, LoadOptions, PipelineOptions, ReportOptions,
};
