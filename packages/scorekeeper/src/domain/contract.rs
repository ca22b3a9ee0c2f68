//! Contract enumerations for the trick game: Bid, HandBonus, SlamState.
//!
//! Each variant carries its own constant so that a bid without a multiplier
//! (or a slam without a bonus) cannot be expressed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// The four contract levels, weakest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bid {
    Small,
    Guard,
    GuardWithout,
    GuardAgainst,
}

impl Bid {
    pub const ALL: [Bid; 4] = [
        Bid::Small,
        Bid::Guard,
        Bid::GuardWithout,
        Bid::GuardAgainst,
    ];

    /// Score multiplier; strictly increasing with the rank.
    pub const fn multiplier(self) -> i32 {
        match self {
            Bid::Small => 1,
            Bid::Guard => 2,
            Bid::GuardWithout => 4,
            Bid::GuardAgainst => 6,
        }
    }

    /// 1-based rank.
    pub const fn rank(self) -> u8 {
        match self {
            Bid::Small => 1,
            Bid::Guard => 2,
            Bid::GuardWithout => 3,
            Bid::GuardAgainst => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Bid::Small => "small",
            Bid::Guard => "guard",
            Bid::GuardWithout => "guard_without",
            Bid::GuardAgainst => "guard_against",
        }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bid {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bid::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::UnknownBid, format!("unknown bid '{s}'"))
            })
    }
}

impl TryFrom<u8> for Bid {
    type Error = DomainError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Bid::ALL
            .into_iter()
            .find(|b| b.rank() == rank)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::UnknownBid,
                    format!("unknown bid rank {rank}"),
                )
            })
    }
}

/// Declared hand-strength bonus. Absence is `Option::None` at the call site.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandBonus {
    Single,
    Double,
    Triple,
}

impl HandBonus {
    pub const ALL: [HandBonus; 3] = [HandBonus::Single, HandBonus::Double, HandBonus::Triple];

    /// Flat bonus, never scaled by bid or outcome.
    pub const fn points(self) -> i32 {
        match self {
            HandBonus::Single => 20,
            HandBonus::Double => 30,
            HandBonus::Triple => 40,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HandBonus::Single => "single",
            HandBonus::Double => "double",
            HandBonus::Triple => "triple",
        }
    }
}

impl FromStr for HandBonus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandBonus::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::UnknownHandBonus,
                    format!("unknown hand bonus '{s}'"),
                )
            })
    }
}

/// Slam outcome. Mutually exclusive states, each with a fixed signed bonus.
#[derive(
    Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SlamState {
    #[default]
    None,
    AnnouncedMade,
    AnnouncedFailed,
    Unannounced,
}

impl SlamState {
    pub const ALL: [SlamState; 4] = [
        SlamState::None,
        SlamState::AnnouncedMade,
        SlamState::AnnouncedFailed,
        SlamState::Unannounced,
    ];

    pub const fn points(self) -> i32 {
        match self {
            SlamState::None => 0,
            SlamState::AnnouncedMade => 400,
            SlamState::AnnouncedFailed => -200,
            SlamState::Unannounced => 200,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SlamState::None => "none",
            SlamState::AnnouncedMade => "announced_made",
            SlamState::AnnouncedFailed => "announced_failed",
            SlamState::Unannounced => "unannounced",
        }
    }
}

impl FromStr for SlamState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlamState::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::UnknownSlamState,
                    format!("unknown slam state '{s}'"),
                )
            })
    }
}
