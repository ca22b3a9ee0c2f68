//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Trick,
    Dice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One pretty-printed document.
    Json,
    /// One compact line per game, then one per player, then a summary.
    Jsonl,
}
