//! CLI library components for the EPL match-data pipeline.

pub mod logging;
pub mod pipeline;
