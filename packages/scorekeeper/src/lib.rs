#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Scoring engines and read-only statistics for two tabletop games:
//! a contract trick-taking card game for 3 to 5 players and a
//! five-dice category game.
//!
//! Everything here is pure computation over caller-supplied values.
//! Persistence, transport and rendering belong to the caller.

pub mod config;
pub mod domain;
pub mod errors;
pub mod stats;


// Re-exports for public API
pub use config::StatsConfig;
pub use domain::{
    compute_grand_total, compute_round_score, compute_upper_bonus, distribute, distribute_score,
    evaluate_category, points_needed, score_category, Bid, CategoryTotals, Contract,
    DiceCategory, DiceCategoryResult, DiceGameRecord, DicePlayerCard, GameId, HandBonus,
    LedgerEntry, PlayerId, Roll, RoundInput, RoundResult, ScoreDeltas, ScoreLedger, Scorecard,
    SlamState, TrickGameRecord, TrickRoundRecord,
};
pub use errors::{DomainError, ValidationKind};
pub use stats::{
    bid_breakdown, dice_global_stats, dice_player_stats, game_snapshot, player_stats, rankings,
    round_deltas, CategoryStats, DiceGlobalStats, DicePlayerStats, DurationBucket,
    TrickPlayerStats,
};

// Prelude for test convenience
pub mod prelude {
    pub use super::config::*;
    pub use super::domain::*;
    pub use super::errors::*;
    pub use super::stats::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
