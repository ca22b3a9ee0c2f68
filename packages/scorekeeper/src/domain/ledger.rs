use serde::{Deserialize, Serialize};

use crate::domain::distribution::{distribute, validate_participants, Contract, ScoreDeltas};
use crate::domain::history::PlayerId;
use crate::domain::scoring::RoundResult;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub player: PlayerId,
    pub total: i64,
}

/// Running totals for one trick game, in seating order. Totals may go negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    entries: Vec<LedgerEntry>,
}

impl ScoreLedger {
    pub fn new(participants: &[PlayerId]) -> Result<Self, DomainError> {
        validate_participants(participants)?;
        Ok(Self {
            entries: participants
                .iter()
                .map(|&player| LedgerEntry { player, total: 0 })
                .collect(),
        })
    }

    pub fn participants(&self) -> Vec<PlayerId> {
        self.entries.iter().map(|e| e.player).collect()
    }

    pub fn total(&self, player: PlayerId) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.player == player)
            .map(|e| e.total)
    }

    /// Totals in seating order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Apply one round of deltas. Nothing is applied if any player is unknown.
    pub fn apply(&mut self, deltas: &ScoreDeltas) -> Result<(), DomainError> {
        if let Some(stranger) = deltas.keys().find(|p| self.total(**p).is_none()) {
            return Err(DomainError::validation(
                ValidationKind::UnknownParticipant,
                format!("delta for player {stranger} who is not in this game"),
            ));
        }
        for entry in &mut self.entries {
            if let Some(&delta) = deltas.get(&entry.player) {
                entry.total += i64::from(delta);
            }
        }
        Ok(())
    }

    /// Distribute a scored round and apply it. Returns the deltas applied.
    pub fn record_round(
        &mut self,
        result: &RoundResult,
        contract: Contract,
    ) -> Result<ScoreDeltas, DomainError> {
        let deltas = distribute(result, contract, &self.participants())?;
        self.apply(&deltas)?;
        Ok(deltas)
    }

    /// Highest total first; equal totals keep seating order.
    pub fn standings(&self) -> Vec<LedgerEntry> {
        let mut out = self.entries.clone();
        out.sort_by(|a, b| b.total.cmp(&a.total));
        out
    }
}
