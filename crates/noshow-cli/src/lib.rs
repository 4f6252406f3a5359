//! CLI library components for the no-show pipeline.

pub mod logging;
pub mod output;
pub mod pipeline;
