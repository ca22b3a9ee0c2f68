//! Test support for the scorekeeper crates
//!
//! Shared logging initialization for integration test binaries and
//! builders that produce game history by running the real engines.

pub mod fixtures;
pub mod test_logging;

pub use fixtures::{base_time, DiceGameBuilder, TrickGameBuilder};
