//! Tabular rendering of aggregates.

use noshow_model::Result;
use polars::prelude::DataFrame;

/// An aggregate that can be rendered as a small ordered table.
///
/// Column names and order are fixed per aggregate so renderers and CSV
/// exports can rely on them.
pub trait AggregateTable {
    fn to_frame(&self) -> Result<DataFrame>;
}
