//! Dice categories and per-category scoring for a five-die roll.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{
    DICE_PER_ROLL, DIE_FACES, FIVE_OF_A_KIND_POINTS, FULL_HOUSE_POINTS, LARGE_STRAIGHT_POINTS,
    SMALL_STRAIGHT_POINTS,
};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiceCategory {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    FiveOfAKind,
    Chance,
}

impl DiceCategory {
    pub const ALL: [DiceCategory; 13] = [
        DiceCategory::Ones,
        DiceCategory::Twos,
        DiceCategory::Threes,
        DiceCategory::Fours,
        DiceCategory::Fives,
        DiceCategory::Sixes,
        DiceCategory::ThreeOfAKind,
        DiceCategory::FourOfAKind,
        DiceCategory::FullHouse,
        DiceCategory::SmallStraight,
        DiceCategory::LargeStraight,
        DiceCategory::FiveOfAKind,
        DiceCategory::Chance,
    ];

    /// The six number-matching categories.
    pub const UPPER: [DiceCategory; 6] = [
        DiceCategory::Ones,
        DiceCategory::Twos,
        DiceCategory::Threes,
        DiceCategory::Fours,
        DiceCategory::Fives,
        DiceCategory::Sixes,
    ];

    /// Face counted by an upper category.
    pub const fn face(self) -> Option<u8> {
        match self {
            DiceCategory::Ones => Some(1),
            DiceCategory::Twos => Some(2),
            DiceCategory::Threes => Some(3),
            DiceCategory::Fours => Some(4),
            DiceCategory::Fives => Some(5),
            DiceCategory::Sixes => Some(6),
            _ => None,
        }
    }

    pub const fn is_upper(self) -> bool {
        self.face().is_some()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DiceCategory::Ones => "ones",
            DiceCategory::Twos => "twos",
            DiceCategory::Threes => "threes",
            DiceCategory::Fours => "fours",
            DiceCategory::Fives => "fives",
            DiceCategory::Sixes => "sixes",
            DiceCategory::ThreeOfAKind => "three_of_a_kind",
            DiceCategory::FourOfAKind => "four_of_a_kind",
            DiceCategory::FullHouse => "full_house",
            DiceCategory::SmallStraight => "small_straight",
            DiceCategory::LargeStraight => "large_straight",
            DiceCategory::FiveOfAKind => "five_of_a_kind",
            DiceCategory::Chance => "chance",
        }
    }
}

impl fmt::Display for DiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiceCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::UnknownCategory,
                    format!("unknown category '{s}'"),
                )
            })
    }
}

/// Exactly five dice, each showing 1..=6. Order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Roll([u8; DICE_PER_ROLL]);

impl Roll {
    pub fn new(dice: [u8; DICE_PER_ROLL]) -> Result<Self, DomainError> {
        if let Some(bad) = dice.iter().find(|d| !DIE_FACES.contains(d)) {
            return Err(DomainError::validation(
                ValidationKind::InvalidDie,
                format!("die value must be 1..=6, got {bad}"),
            ));
        }
        Ok(Self(dice))
    }

    pub fn dice(&self) -> [u8; DICE_PER_ROLL] {
        self.0
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&d| u32::from(d)).sum()
    }

    /// Occurrences per face; index 0 is unused.
    pub fn counts(&self) -> [u8; 7] {
        let mut counts = [0u8; 7];
        for &d in &self.0 {
            counts[d as usize] += 1;
        }
        counts
    }

    pub fn is_five_of_a_kind(&self) -> bool {
        self.counts().contains(&5)
    }
}

impl TryFrom<&[u8]> for Roll {
    type Error = DomainError;

    fn try_from(dice: &[u8]) -> Result<Self, Self::Error> {
        let dice: [u8; DICE_PER_ROLL] = dice.try_into().map_err(|_| {
            DomainError::validation(
                ValidationKind::MalformedRoll,
                format!("roll needs {DICE_PER_ROLL} dice, got {}", dice.len()),
            )
        })?;
        Roll::new(dice)
    }
}

impl TryFrom<Vec<u8>> for Roll {
    type Error = DomainError;

    fn try_from(dice: Vec<u8>) -> Result<Self, Self::Error> {
        Roll::try_from(dice.as_slice())
    }
}

impl From<Roll> for Vec<u8> {
    fn from(roll: Roll) -> Self {
        roll.0.to_vec()
    }
}

/// Value of one category for one roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceCategoryResult {
    pub category: DiceCategory,
    pub value: u32,
    /// The category's pattern requirement is met.
    pub scored: bool,
}

fn has_run(counts: &[u8; 7], start: usize, len: usize) -> bool {
    (start..start + len).all(|face| counts[face] > 0)
}

/// Score `category` against `roll`, reporting whether the pattern was met.
pub fn evaluate_category(category: DiceCategory, roll: &Roll) -> DiceCategoryResult {
    let counts = roll.counts();
    let sum = roll.sum();
    let fixed = |met: bool, points: u32| (met, if met { points } else { 0 });

    let (scored, value) = match category {
        DiceCategory::Ones
        | DiceCategory::Twos
        | DiceCategory::Threes
        | DiceCategory::Fours
        | DiceCategory::Fives
        | DiceCategory::Sixes => {
            let face = category.face().unwrap_or_default();
            let n = counts[face as usize];
            (n > 0, u32::from(n) * u32::from(face))
        }
        DiceCategory::ThreeOfAKind => fixed(counts.iter().any(|&c| c >= 3), sum),
        DiceCategory::FourOfAKind => fixed(counts.iter().any(|&c| c >= 4), sum),
        DiceCategory::FullHouse => {
            let mut shape: Vec<u8> = counts.iter().copied().filter(|&c| c > 0).collect();
            shape.sort_unstable();
            fixed(shape == [2, 3], FULL_HOUSE_POINTS)
        }
        DiceCategory::SmallStraight => fixed(
            (1..=3).any(|start| has_run(&counts, start, 4)),
            SMALL_STRAIGHT_POINTS,
        ),
        DiceCategory::LargeStraight => fixed(
            (1..=2).any(|start| has_run(&counts, start, 5)),
            LARGE_STRAIGHT_POINTS,
        ),
        DiceCategory::FiveOfAKind => fixed(roll.is_five_of_a_kind(), FIVE_OF_A_KIND_POINTS),
        DiceCategory::Chance => (true, sum),
    };

    DiceCategoryResult {
        category,
        value,
        scored,
    }
}

/// Point value of `category` for `roll`; 0 when the pattern is not met.
pub fn score_category(category: DiceCategory, roll: &Roll) -> u32 {
    evaluate_category(category, roll).value
}
