//! Dashboard aggregates over the cleaned appointment table.
//!
//! Every function here is pure: it borrows a cleaned `DataFrame` and
//! returns an owned aggregate. Aggregates serialize with serde and render
//! as small tables through [`AggregateTable`].
//!
//! - **summary**: totals, no-show rate, mean waiting time
//! - **distribution**: value shares and top-K rankings
//! - **histogram**: integer binning
//! - **proportions**: outcome share per group
//! - **calendar**: month and weekday counts
//! - **box_stats**: per-group five-number summaries
//! - **prevalence**: rare yes/no features
//! - **report**: the bundled [`DashboardReport`]

mod common;

pub mod box_stats;
pub mod calendar;
pub mod distribution;
pub mod histogram;
pub mod prevalence;
pub mod proportions;
pub mod report;
pub mod summary;
pub mod table;

pub use box_stats::{FiveNumberSummary, GroupSummary, GroupedSummary, grouped_five_number_summary};
pub use calendar::{
    CalendarDistributions, MonthCount, MonthDistribution, WeekdayCount, WeekdayDistribution,
    calendar_distributions, month_distribution, weekday_distribution,
};
pub use distribution::{
    CategoryCount, CategoryFilter, TopCategories, ValueDistribution, ValueShare, top_categories,
    value_distribution,
};
pub use histogram::{Histogram, HistogramBin, histogram, waiting_days_histogram};
pub use prevalence::{FeaturePrevalence, PrevalenceTable, feature_prevalence, prevalence_of};
pub use proportions::{ConditionalProportions, ProportionRow, conditional_proportions};
pub use report::{DashboardReport, build_dashboard_report};
pub use summary::{SummaryStats, summarize};
pub use table::AggregateTable;
