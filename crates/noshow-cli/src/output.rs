//! Writers for the report JSON, the aggregate tables and the cleaned table.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use noshow_report::DashboardReport;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;

/// Writes the report as pretty JSON with a trailing newline.
pub fn write_report_json(report: &DashboardReport, path: &Path) -> Result<()> {
    let mut json = report.to_json()?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), "wrote report json");
    Ok(())
}

/// Writes a DataFrame as CSV with a header row.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut df = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Writes one `<name>.csv` per aggregate table into `dir`.
///
/// Returns the written paths in table order.
pub fn write_tables(report: &DashboardReport, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let mut written = Vec::new();
    for (name, table) in report.tables()? {
        let path = dir.join(format!("{name}.csv"));
        write_csv(&table, &path)?;
        written.push(path);
    }
    debug!(dir = %dir.display(), count = written.len(), "wrote aggregate tables");
    Ok(written)
}
