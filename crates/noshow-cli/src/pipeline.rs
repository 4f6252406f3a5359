//! End-to-end run: load, normalize, filter, aggregate.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use noshow_ingest::{SourceInfo, load_appointments};
use noshow_model::PipelineOptions;
use noshow_report::{DashboardReport, build_dashboard_report};
use noshow_transform::{apply_validity_filter, normalize_appointments};
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{info, info_span, trace};

use crate::logging::redact_value;

/// Row counts after each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageCounts {
    pub loaded: usize,
    pub normalized: usize,
    pub kept: usize,
    pub removed: usize,
    pub failed_waiting_days: usize,
    pub failed_age: usize,
}

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub source: SourceInfo,
    pub counts: StageCounts,
    /// The filtered cleaned table the report was computed from.
    pub cleaned: DataFrame,
    pub report: DashboardReport,
}

/// Runs every stage on the dataset at `location`.
///
/// Any stage error aborts the run; nothing is partially produced.
pub fn run_pipeline(location: &Path, options: &PipelineOptions) -> Result<PipelineOutput> {
    let run_span = info_span!("pipeline", source = %location.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    options.filter.validate().context("invalid filter options")?;

    let raw = info_span!("load").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let raw = load_appointments(location, &options.load)
            .with_context(|| format!("load {}", location.display()))?;
        info!(
            rows = raw.source.rows,
            sha256 = %raw.source.sha256,
            duration_ms = start.elapsed().as_millis(),
            "load complete"
        );
        Ok(raw)
    })?;

    let normalized = info_span!("normalize").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let normalized = normalize_appointments(&raw.data).context("normalize appointments")?;
        info!(
            rows = normalized.height(),
            duration_ms = start.elapsed().as_millis(),
            "normalize complete"
        );
        Ok(normalized)
    })?;

    let filtered = info_span!("filter").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let filtered =
            apply_validity_filter(&normalized, &options.filter).context("apply validity filter")?;
        info!(
            kept = filtered.stats.kept_rows,
            removed = filtered.stats.removed_rows(),
            duration_ms = start.elapsed().as_millis(),
            "filter complete"
        );
        Ok(filtered)
    })?;

    let report = info_span!("aggregate").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let report = build_dashboard_report(&filtered.data, &options.report)
            .context("build dashboard report")?;
        for category in &report.top_no_show_neighbourhoods.categories {
            trace!(
                neighbourhood = redact_value(&category.label),
                count = category.count,
                "top no-show neighbourhood"
            );
        }
        info!(
            no_show_rate = report.summary.no_show_rate,
            duration_ms = start.elapsed().as_millis(),
            "aggregate complete"
        );
        Ok(report)
    })?;

    let counts = StageCounts {
        loaded: raw.data.height(),
        normalized: normalized.height(),
        kept: filtered.stats.kept_rows,
        removed: filtered.stats.removed_rows(),
        failed_waiting_days: filtered.stats.failed_waiting_days,
        failed_age: filtered.stats.failed_age,
    };
    info!(
        loaded = counts.loaded,
        kept = counts.kept,
        duration_ms = run_start.elapsed().as_millis(),
        "pipeline complete"
    );

    Ok(PipelineOutput {
        source: raw.source,
        counts,
        cleaned: filtered.data,
        report,
    })
}
