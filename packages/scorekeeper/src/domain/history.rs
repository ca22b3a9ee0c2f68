//! Historical game records handed to the statistics layer.
//!
//! Produced and owned by the persistence collaborator. Nothing in this crate
//! mutates them; aggregation borrows them read-only.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::warn;

use crate::domain::contract::Bid;
use crate::domain::distribution::{Contract, ScoreDeltas};
use crate::domain::scorecard::Scorecard;
use crate::domain::scoring::RoundResult;
use crate::errors::domain::DomainError;

pub type PlayerId = i64;
pub type GameId = i64;

/// One completed trick-game round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickRoundRecord {
    pub round_no: u32,
    pub bid: Bid,
    pub taker: PlayerId,
    #[serde(default)]
    pub partner: Option<PlayerId>,
    /// Signed round score from the taker's side.
    pub score: i32,
    pub contract_made: bool,
    /// Precomputed per-player attribution, when the ledger was stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deltas: Option<ScoreDeltas>,
}

impl TrickRoundRecord {
    pub fn from_result(
        round_no: u32,
        taker: PlayerId,
        partner: Option<PlayerId>,
        result: &RoundResult,
    ) -> Self {
        Self {
            round_no,
            bid: result.bid,
            taker,
            partner,
            score: result.total,
            contract_made: result.contract_made,
            deltas: None,
        }
    }

    pub fn with_deltas(mut self, deltas: ScoreDeltas) -> Self {
        self.deltas = Some(deltas);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickGameRecord {
    pub id: GameId,
    /// Seating order.
    pub participants: Vec<PlayerId>,
    pub rounds: Vec<TrickRoundRecord>,
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub completed_at: Option<OffsetDateTime>,
    pub finished: bool,
    #[serde(default)]
    pub winner: Option<PlayerId>,
}

impl TrickGameRecord {
    pub fn includes(&self, player: PlayerId) -> bool {
        self.participants.contains(&player)
    }

    pub fn seat_of(&self, player: PlayerId) -> Option<usize> {
        self.participants.iter().position(|&p| p == player)
    }

    /// Rebuild the contract side of a stored round from player ids.
    pub fn contract_for(&self, round: &TrickRoundRecord) -> Result<Contract, DomainError> {
        let taker = self.seat_of(round.taker).ok_or_else(|| {
            warn!(
                game_id = self.id,
                round = round.round_no,
                taker = round.taker,
                "Taker not seated"
            );
            DomainError::inconsistent(format!(
                "game {} round {}: taker {} is not a participant",
                self.id, round.round_no, round.taker
            ))
        })?;
        let partner = match round.partner {
            Some(partner) => Some(self.seat_of(partner).ok_or_else(|| {
                warn!(game_id = self.id, round = round.round_no, partner, "Partner not seated");
                DomainError::inconsistent(format!(
                    "game {} round {}: partner {} is not a participant",
                    self.id, round.round_no, partner
                ))
            })?),
            None => None,
        };
        Ok(Contract::from_indices(taker, partner))
    }
}

/// One player's card in a stored dice game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePlayerCard {
    pub player: PlayerId,
    pub card: Scorecard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceGameRecord {
    pub id: GameId,
    pub participants: Vec<PlayerId>,
    pub cards: Vec<DicePlayerCard>,
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub completed_at: Option<OffsetDateTime>,
    pub finished: bool,
    #[serde(default)]
    pub winner: Option<PlayerId>,
}

impl DiceGameRecord {
    pub fn includes(&self, player: PlayerId) -> bool {
        self.participants.contains(&player)
    }

    pub fn card_for(&self, player: PlayerId) -> Option<&Scorecard> {
        self.cards
            .iter()
            .find(|c| c.player == player)
            .map(|c| &c.card)
    }
}
