//! Statistics layer: read-only views folded from game history.
//!
//! Every function here borrows its history immutably, allocates only
//! call-local data and returns the same output for the same input. Empty
//! history yields zeroed views, never an error. Rates are percentages in
//! 0..=100 and default to 0 when their denominator is 0.

pub mod dice_global;
pub mod dice_player;
pub mod duration;
pub(crate) mod math;
pub mod trick;

#[cfg(test)]
mod tests_dice_global;
#[cfg(test)]
mod tests_trick;

pub use dice_global::{dice_global_stats, DiceGlobalStats};
pub use dice_player::{dice_player_stats, CategoryStats, DicePlayerStats};
pub use duration::DurationBucket;
pub use trick::{
    bid_breakdown, game_snapshot, player_stats, rankings, round_deltas, TrickPlayerStats,
};
