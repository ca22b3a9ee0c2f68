//! Zero-sum redistribution of one round's score across the table.
//!
//! Three or four players: the taker plays alone against everybody.
//! Five players: the taker either calls a partner (2:1 split against three
//! defenders) or plays alone against four. Every branch sums to zero.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::history::PlayerId;
use crate::domain::rules::{valid_player_count, MAX_PLAYERS};
use crate::domain::scoring::RoundResult;
use crate::errors::domain::{DomainError, ValidationKind};

/// Signed points per player for one round.
pub type ScoreDeltas = BTreeMap<PlayerId, i32>;

/// Who plays the contract, as indices into the participant list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Contract {
    Solo { taker: usize },
    Partnered { taker: usize, partner: usize },
}

impl Contract {
    /// A called partner equal to the taker means the taker plays alone.
    pub fn from_indices(taker: usize, partner: Option<usize>) -> Self {
        match partner {
            Some(partner) if partner != taker => Contract::Partnered { taker, partner },
            _ => Contract::Solo { taker },
        }
    }

    pub fn taker(&self) -> usize {
        match *self {
            Contract::Solo { taker } | Contract::Partnered { taker, .. } => taker,
        }
    }

    pub fn partner(&self) -> Option<usize> {
        match *self {
            Contract::Solo { .. } => None,
            Contract::Partnered { partner, .. } => Some(partner),
        }
    }
}

/// A trick table has 3..=5 distinct participants.
pub fn validate_participants(participants: &[PlayerId]) -> Result<(), DomainError> {
    if !valid_player_count().contains(&participants.len()) {
        return Err(DomainError::validation(
            ValidationKind::ParticipantCount,
            format!("trick game needs 3..=5 players, got {}", participants.len()),
        ));
    }
    let mut seen = BTreeSet::new();
    for &p in participants {
        if !seen.insert(p) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateParticipant,
                format!("player {p} seated twice"),
            ));
        }
    }
    Ok(())
}

fn resolve(index: usize, participants: &[PlayerId], role: &str) -> Result<PlayerId, DomainError> {
    participants.get(index).copied().ok_or_else(|| {
        DomainError::validation(
            ValidationKind::UnknownParticipant,
            format!(
                "{role} index {index} out of range for {} players",
                participants.len()
            ),
        )
    })
}

/// Split a scored round across the participants.
pub fn distribute(
    result: &RoundResult,
    contract: Contract,
    participants: &[PlayerId],
) -> Result<ScoreDeltas, DomainError> {
    distribute_score(result.total, contract, participants)
}

/// Same as [`distribute`] for a bare round score (e.g. read back from history).
pub fn distribute_score(
    score: i32,
    contract: Contract,
    participants: &[PlayerId],
) -> Result<ScoreDeltas, DomainError> {
    validate_participants(participants)?;
    let players = participants.len() as i32;
    let taker = resolve(contract.taker(), participants, "taker")?;

    let out_of_range = || {
        DomainError::validation(
            ValidationKind::ScoreOutOfRange,
            format!("round score {score} cannot be split across {players} players"),
        )
    };
    let loss = score.checked_neg().ok_or_else(out_of_range)?;

    let mut deltas: ScoreDeltas = participants.iter().map(|&p| (p, loss)).collect();
    match contract {
        Contract::Partnered { taker: t, partner } if partner != t => {
            if participants.len() != MAX_PLAYERS {
                return Err(DomainError::validation(
                    ValidationKind::PartnerNotAllowed,
                    format!("called partner needs {MAX_PLAYERS} players, got {players}"),
                ));
            }
            let partner = resolve(partner, participants, "partner")?;
            deltas.insert(taker, score.checked_mul(2).ok_or_else(out_of_range)?);
            deltas.insert(partner, score);
        }
        _ => {
            deltas.insert(taker, score.checked_mul(players - 1).ok_or_else(out_of_range)?);
        }
    }

    debug!(players, score, taker, partnered = contract.partner().is_some(), "Distributed round");
    debug_assert_eq!(deltas.values().map(|&d| i64::from(d)).sum::<i64>(), 0);
    Ok(deltas)
}
