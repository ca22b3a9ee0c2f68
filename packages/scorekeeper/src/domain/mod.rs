//! Domain layer: pure scoring rules for both games.

pub mod contract;
pub mod dice;
pub mod distribution;
pub mod history;
pub mod ledger;
pub mod rules;
pub mod scorecard;
pub mod scoring;

#[cfg(test)]
pub(crate) mod test_prelude;
#[cfg(test)]
mod tests_ledger;
#[cfg(test)]
mod tests_props_distribution;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use contract::{Bid, HandBonus, SlamState};
pub use dice::{evaluate_category, score_category, DiceCategory, DiceCategoryResult, Roll};
pub use distribution::{distribute, distribute_score, Contract, ScoreDeltas};
pub use history::{
    DiceGameRecord, DicePlayerCard, GameId, PlayerId, TrickGameRecord, TrickRoundRecord,
};
pub use ledger::{LedgerEntry, ScoreLedger};
pub use rules::points_needed;
pub use scorecard::{compute_grand_total, compute_upper_bonus, CategoryTotals, Scorecard};
pub use scoring::{compute_round_score, RoundInput, RoundResult};
