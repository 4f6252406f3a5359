//! Content fingerprints for loaded sources.

use std::fs::File;
use std::io;
use std::path::Path;

use noshow_model::Result;
use sha2::{Digest, Sha256};

use crate::csv::source_error;

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    hex::encode(digest)
}

/// SHA-256 of a file's contents, streamed from disk.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| source_error(path, &e))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(|e| source_error(path, &e))?;
    Ok(hex::encode(hasher.finalize()))
}
