//! Domain-level error type shared by every engine.
//!
//! The engines are pure: nothing here describes I/O or storage failures.
//! Inputs that cannot be scored are rejected with a [`ValidationKind`];
//! historical records whose references do not line up are reported as
//! [`DomainError::Inconsistent`] instead of being silently reattributed.

use thiserror::Error;

/// Rejected-input kinds. Closed set; every boundary check maps to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    /// Captured card points outside 0..=91
    PointsOutOfRange,
    /// Scoring-card count outside 0..=3
    ScoringCardsOutOfRange,
    UnknownBid,
    UnknownHandBonus,
    UnknownSlamState,
    /// Die face outside 1..=6
    InvalidDie,
    /// Roll does not hold exactly five dice
    MalformedRoll,
    UnknownCategory,
    /// Trick game needs 3..=5 participants
    ParticipantCount,
    DuplicateParticipant,
    /// Taker/partner index or player id does not resolve to a participant
    UnknownParticipant,
    /// A called partner only exists in five-player games
    PartnerNotAllowed,
    CategoryAlreadyScored,
    /// Completion timestamp precedes creation
    InvalidTimeline,
    /// Round score too large to split into per-player deltas
    ScoreOutOfRange,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input validation or business rule violation
    #[error("validation error ({0:?}): {1}")]
    Validation(ValidationKind, String),
    /// Historical record that contradicts itself
    #[error("inconsistent history: {0}")]
    Inconsistent(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn inconsistent(detail: impl Into<String>) -> Self {
        Self::Inconsistent(detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            Self::Validation(kind, _) => Some(*kind),
            Self::Inconsistent(_) => None,
        }
    }
}
