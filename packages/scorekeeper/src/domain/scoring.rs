use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::contract::{Bid, HandBonus, SlamState};
use crate::domain::rules::{points_needed, CONTRACT_BASE, LAST_TRICK_BONUS, MAX_CARD_POINTS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Everything needed to score one trick-game round from the taker's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInput {
    pub bid: Bid,
    /// Scoring cards captured by the taker (0..=3).
    pub scoring_cards: u8,
    /// Card points captured by the taker (0..=91).
    pub points_captured: u8,
    /// Last trick won with the lowest trump.
    pub last_trick_bonus: bool,
    pub hand_bonus: Option<HandBonus>,
    #[serde(default)]
    pub slam: SlamState,
}

impl RoundInput {
    /// Plain contract with no bonuses declared.
    pub fn new(bid: Bid, scoring_cards: u8, points_captured: u8) -> Self {
        Self {
            bid,
            scoring_cards,
            points_captured,
            last_trick_bonus: false,
            hand_bonus: None,
            slam: SlamState::None,
        }
    }

    pub fn with_last_trick_bonus(mut self) -> Self {
        self.last_trick_bonus = true;
        self
    }

    pub fn with_hand_bonus(mut self, bonus: HandBonus) -> Self {
        self.hand_bonus = Some(bonus);
        self
    }

    pub fn with_slam(mut self, slam: SlamState) -> Self {
        self.slam = slam;
        self
    }
}

/// Scored round. `total` is the sum of the four components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub bid: Bid,
    pub points_needed: u8,
    pub contract_made: bool,
    /// Signed `(25 + margin) * multiplier`.
    pub base: i32,
    /// Signed `10 * multiplier`, or 0 when no last-trick bonus.
    pub last_trick: i32,
    pub hand_bonus: i32,
    pub slam_bonus: i32,
    pub total: i32,
}

impl RoundResult {
    /// +1 when the contract was made, -1 otherwise.
    pub fn sign(&self) -> i32 {
        if self.contract_made {
            1
        } else {
            -1
        }
    }
}

/// Score a single round.
///
/// The contract is made when the captured points reach the threshold set by
/// the scoring cards (a tie goes to the taker). Base score and last-trick
/// bonus follow the contract's sign and the bid multiplier; the hand and slam
/// bonuses are added flat.
pub fn compute_round_score(input: &RoundInput) -> Result<RoundResult, DomainError> {
    if input.points_captured > MAX_CARD_POINTS {
        return Err(DomainError::validation(
            ValidationKind::PointsOutOfRange,
            format!(
                "captured points must be 0..={MAX_CARD_POINTS}, got {}",
                input.points_captured
            ),
        ));
    }
    let needed = points_needed(input.scoring_cards)?;

    let captured = i32::from(input.points_captured);
    let margin = (captured - i32::from(needed)).abs();
    let contract_made = input.points_captured >= needed;
    let sign = if contract_made { 1 } else { -1 };
    let multiplier = input.bid.multiplier();

    let base = sign * (CONTRACT_BASE + margin) * multiplier;
    let last_trick = if input.last_trick_bonus {
        sign * LAST_TRICK_BONUS * multiplier
    } else {
        0
    };
    let hand_bonus = input.hand_bonus.map_or(0, HandBonus::points);
    let slam_bonus = input.slam.points();
    let total = base + last_trick + hand_bonus + slam_bonus;

    debug!(
        bid = %input.bid,
        points_needed = needed,
        captured,
        total,
        made = contract_made,
        "Scored round"
    );

    Ok(RoundResult {
        bid: input.bid,
        points_needed: needed,
        contract_made,
        base,
        last_trick,
        hand_bonus,
        slam_bonus,
        total,
    })
}
