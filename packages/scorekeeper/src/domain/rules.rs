use std::ops::RangeInclusive;

use crate::errors::domain::{DomainError, ValidationKind};

// Trick game
pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 5;
/// Card points available in one deal.
pub const MAX_CARD_POINTS: u8 = 91;
pub const MAX_SCORING_CARDS: u8 = 3;
/// Flat part of every contract score, before the margin is added.
pub const CONTRACT_BASE: i32 = 25;
pub const LAST_TRICK_BONUS: i32 = 10;

// Dice game
pub const DICE_PER_ROLL: usize = 5;
pub const DIE_FACES: RangeInclusive<u8> = 1..=6;
pub const FULL_HOUSE_POINTS: u32 = 25;
pub const SMALL_STRAIGHT_POINTS: u32 = 30;
pub const LARGE_STRAIGHT_POINTS: u32 = 40;
pub const FIVE_OF_A_KIND_POINTS: u32 = 50;
pub const UPPER_BONUS_THRESHOLD: u32 = 63;
pub const UPPER_BONUS_POINTS: u32 = 35;
/// Paid for every five-of-a-kind rolled after the category already holds 50.
pub const EXTRA_FIVE_OF_A_KIND_BONUS: u32 = 100;

// Card points the taker must capture, indexed by scoring cards held (0..=3).
const POINTS_NEEDED: [u8; 4] = [56, 51, 41, 36];

/// Points the taker needs to make the contract given the scoring cards captured.
pub fn points_needed(scoring_cards: u8) -> Result<u8, DomainError> {
    POINTS_NEEDED
        .get(scoring_cards as usize)
        .copied()
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::ScoringCardsOutOfRange,
                format!("scoring cards must be 0..={MAX_SCORING_CARDS}, got {scoring_cards}"),
            )
        })
}

pub fn valid_player_count() -> RangeInclusive<usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}
