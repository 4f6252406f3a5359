//! The full set of dashboard aggregates.

use std::time::Instant;

use noshow_model::columns::clean;
use noshow_model::{PipelineError, ReportOptions, Result, YesNo};
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{debug, info};

use crate::box_stats::{GroupedSummary, grouped_five_number_summary};
use crate::calendar::{CalendarDistributions, calendar_distributions};
use crate::distribution::{
    CategoryFilter, TopCategories, ValueDistribution, top_categories, value_distribution,
};
use crate::histogram::{Histogram, waiting_days_histogram};
use crate::prevalence::{PrevalenceTable, feature_prevalence};
use crate::proportions::{ConditionalProportions, conditional_proportions};
use crate::summary::{SummaryStats, summarize};
use crate::table::AggregateTable;

/// Everything the dashboard renders, computed from one cleaned table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub summary: SummaryStats,
    /// Outcome pie.
    pub outcome_distribution: ValueDistribution,
    pub waiting_days_histogram: Histogram,
    /// No-show proportions by SMS reminder.
    pub sms_no_show: ConditionalProportions,
    pub top_no_show_neighbourhoods: TopCategories,
    pub top_neighbourhoods: TopCategories,
    pub calendar: CalendarDistributions,
    pub waiting_days_by_outcome: GroupedSummary,
    pub feature_prevalence: PrevalenceTable,
}

/// Computes every dashboard aggregate over `df`.
pub fn build_dashboard_report(df: &DataFrame, options: &ReportOptions) -> Result<DashboardReport> {
    let start = Instant::now();
    let no_show_filter = CategoryFilter::new(clean::NO_SHOW, YesNo::Yes.as_str());

    let report = DashboardReport {
        summary: summarize(df)?,
        outcome_distribution: value_distribution(df, clean::NO_SHOW)?,
        waiting_days_histogram: waiting_days_histogram(df, options.binning)?,
        sms_no_show: conditional_proportions(df, clean::SMS_RECEIVED, clean::NO_SHOW)?,
        top_no_show_neighbourhoods: top_categories(
            df,
            clean::NEIGHBOURHOOD,
            Some(&no_show_filter),
            options.top_k,
        )?,
        top_neighbourhoods: top_categories(df, clean::NEIGHBOURHOOD, None, options.top_k)?,
        calendar: calendar_distributions(df)?,
        waiting_days_by_outcome: grouped_five_number_summary(
            df,
            clean::WAITING_DAYS,
            clean::NO_SHOW,
        )?,
        feature_prevalence: feature_prevalence(df)?,
    };

    info!(
        rows = df.height(),
        histogram_bins = report.waiting_days_histogram.bins.len(),
        duration_ms = start.elapsed().as_millis(),
        "built dashboard report"
    );
    Ok(report)
}

impl DashboardReport {
    /// Every aggregate as a named table, in a fixed order.
    pub fn tables(&self) -> Result<Vec<(&'static str, DataFrame)>> {
        let tables = vec![
            ("summary", self.summary.to_frame()?),
            ("outcome_distribution", self.outcome_distribution.to_frame()?),
            ("waiting_days_histogram", self.waiting_days_histogram.to_frame()?),
            ("sms_no_show", self.sms_no_show.to_frame()?),
            (
                "top_no_show_neighbourhoods",
                self.top_no_show_neighbourhoods.to_frame()?,
            ),
            ("top_neighbourhoods", self.top_neighbourhoods.to_frame()?),
            ("scheduled_months", self.calendar.scheduled_months.to_frame()?),
            (
                "appointment_months",
                self.calendar.appointment_months.to_frame()?,
            ),
            (
                "scheduled_weekdays",
                self.calendar.scheduled_weekdays.to_frame()?,
            ),
            (
                "appointment_weekdays",
                self.calendar.appointment_weekdays.to_frame()?,
            ),
            (
                "waiting_days_by_outcome",
                self.waiting_days_by_outcome.to_frame()?,
            ),
            ("feature_prevalence", self.feature_prevalence.to_frame()?),
        ];
        debug!(count = tables.len(), "rendered aggregate tables");
        Ok(tables)
    }

    /// Pretty-printed JSON. Identical input gives identical bytes.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PipelineError::format(format!("serialize report: {e}")))
    }
}
