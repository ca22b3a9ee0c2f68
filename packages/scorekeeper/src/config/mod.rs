//! Configuration for the statistics layer.

pub mod stats;

pub use stats::StatsConfig;
