use std::fs;

use anyhow::{Context, Result};
use comfy_table::Table;
use noshow_cli::output::{write_csv, write_report_json, write_tables};
use noshow_cli::pipeline::{PipelineOutput, run_pipeline};
use noshow_model::{PipelineOptions, column_specs};
use tracing::info;

use crate::cli::ReportArgs;
use crate::summary::apply_table_style;

/// Builds run options: defaults, then the config file, then flags.
pub fn resolve_options(args: &ReportArgs) -> Result<PipelineOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?
        }
        None => PipelineOptions::default(),
    };
    if let Some(file_name) = &args.file_name {
        options.load.file_name = file_name.clone();
    }
    if let Some(min_age) = args.min_age {
        options.filter.min_age = min_age;
    }
    if let Some(max_age) = args.max_age {
        options.filter.max_age = max_age;
    }
    if let Some(top_k) = args.top_k {
        options.report.top_k = top_k;
    }
    if let Some(bins) = args.bins {
        options.report.binning = bins;
    }
    Ok(options)
}

pub fn run_report(args: &ReportArgs) -> Result<PipelineOutput> {
    let options = resolve_options(args)?;
    let output = run_pipeline(&args.source, &options)?;

    if let Some(path) = &args.output {
        write_report_json(&output.report, path)?;
        info!(path = %path.display(), "report written");
    }
    if let Some(dir) = &args.tables_dir {
        let written = write_tables(&output.report, dir)?;
        info!(dir = %dir.display(), tables = written.len(), "tables written");
    }
    if let Some(path) = &args.cleaned {
        write_csv(&output.cleaned, path)?;
        info!(path = %path.display(), rows = output.cleaned.height(), "cleaned table written");
    }
    Ok(output)
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Raw column", "Clean column(s)", "Treatment", "Description"]);
    apply_table_style(&mut table);
    for spec in column_specs() {
        let clean = if spec.clean.is_empty() {
            "-".to_string()
        } else {
            spec.clean.join(", ")
        };
        table.add_row(vec![
            spec.raw.to_string(),
            clean,
            spec.treatment.as_str().to_string(),
            spec.description.to_string(),
        ]);
    }
    table.add_row(vec![
        "-".to_string(),
        "waiting_days".to_string(),
        "derived".to_string(),
        "Days from booking to appointment".to_string(),
    ]);
    println!("{table}");
    Ok(())
}
