//! Appointment data ingestion.
//!
//! Resolves a dataset location to a CSV file, checks its header against
//! the raw column contract, and loads it into a polars frame where every
//! column is still text. Typing happens in the normalizer.
//!
//! ```ignore
//! use std::path::Path;
//! use noshow_ingest::load_appointments;
//! use noshow_model::LoadOptions;
//!
//! let raw = load_appointments(Path::new("data/"), &LoadOptions::default())?;
//! println!("{} rows from {}", raw.source.rows, raw.source.path.display());
//! ```

mod csv;
mod discovery;
mod fingerprint;
mod loader;

// === CSV Reading ===
pub use csv::{
    CsvHeaders, check_file_size, normalize_header, read_csv_headers, read_raw_table,
    validate_headers,
};

// === Source Resolution ===
pub use discovery::{list_csv_files, resolve_source};
pub use fingerprint::{sha256_file, sha256_hex};

// === Loader Stage ===
pub use loader::{RawAppointments, SourceInfo, load_appointments};
