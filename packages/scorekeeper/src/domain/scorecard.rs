use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::dice::{evaluate_category, DiceCategory, DiceCategoryResult, Roll};
use crate::domain::rules::{
    EXTRA_FIVE_OF_A_KIND_BONUS, FIVE_OF_A_KIND_POINTS, UPPER_BONUS_POINTS, UPPER_BONUS_THRESHOLD,
};
use crate::errors::domain::{DomainError, ValidationKind};

/// Filled categories and their values. A category absent from the map is unfilled.
pub type CategoryTotals = BTreeMap<DiceCategory, u32>;

pub fn upper_subtotal(totals: &CategoryTotals) -> u32 {
    DiceCategory::UPPER
        .iter()
        .filter_map(|c| totals.get(c))
        .sum()
}

/// Fixed bonus once the six upper categories reach the threshold.
pub fn compute_upper_bonus(totals: &CategoryTotals) -> u32 {
    if upper_subtotal(totals) >= UPPER_BONUS_THRESHOLD {
        UPPER_BONUS_POINTS
    } else {
        0
    }
}

/// All filled category values plus the upper bonus plus any caller-tracked bonus pool.
pub fn compute_grand_total(totals: &CategoryTotals, upper_bonus: u32, extra_bonus: u32) -> u32 {
    totals.values().sum::<u32>() + upper_bonus + extra_bonus
}

/// One player's dice scorecard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    categories: CategoryTotals,
    #[serde(default)]
    extra_five_of_a_kind: u32,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a card from stored values.
    pub fn from_parts(categories: CategoryTotals, extra_five_of_a_kind: u32) -> Self {
        Self {
            categories,
            extra_five_of_a_kind,
        }
    }

    /// Fill `category` with `roll`.
    ///
    /// A five-of-a-kind rolled while the five-of-a-kind category already holds
    /// its full value counts as an extra five-of-a-kind.
    pub fn record(
        &mut self,
        category: DiceCategory,
        roll: &Roll,
    ) -> Result<DiceCategoryResult, DomainError> {
        if self.categories.contains_key(&category) {
            return Err(DomainError::validation(
                ValidationKind::CategoryAlreadyScored,
                format!("{category} already filled"),
            ));
        }
        if roll.is_five_of_a_kind()
            && self.categories.get(&DiceCategory::FiveOfAKind) == Some(&FIVE_OF_A_KIND_POINTS)
        {
            self.extra_five_of_a_kind += 1;
        }
        let result = evaluate_category(category, roll);
        self.categories.insert(category, result.value);
        Ok(result)
    }

    pub fn value(&self, category: DiceCategory) -> Option<u32> {
        self.categories.get(&category).copied()
    }

    pub fn categories(&self) -> &CategoryTotals {
        &self.categories
    }

    pub fn remaining(&self) -> Vec<DiceCategory> {
        DiceCategory::ALL
            .into_iter()
            .filter(|c| !self.categories.contains_key(c))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        DiceCategory::ALL
            .iter()
            .all(|c| self.categories.contains_key(c))
    }

    pub fn extra_five_of_a_kind(&self) -> u32 {
        self.extra_five_of_a_kind
    }

    /// Five-of-a-kind events: the category itself (when scored) plus every extra one.
    pub fn five_of_a_kind_count(&self) -> u32 {
        let base = u32::from(self.value(DiceCategory::FiveOfAKind) == Some(FIVE_OF_A_KIND_POINTS));
        base + self.extra_five_of_a_kind
    }

    pub fn extra_bonus(&self) -> u32 {
        self.extra_five_of_a_kind * EXTRA_FIVE_OF_A_KIND_BONUS
    }

    pub fn upper_subtotal(&self) -> u32 {
        upper_subtotal(&self.categories)
    }

    pub fn upper_bonus(&self) -> u32 {
        compute_upper_bonus(&self.categories)
    }

    pub fn lower_subtotal(&self) -> u32 {
        self.categories
            .iter()
            .filter(|(c, _)| !c.is_upper())
            .map(|(_, v)| v)
            .sum()
    }

    pub fn grand_total(&self) -> u32 {
        compute_grand_total(&self.categories, self.upper_bonus(), self.extra_bonus())
    }
}
