//! Dice-game statistics for a single player.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use crate::config::StatsConfig;
use crate::domain::dice::DiceCategory;
use crate::domain::history::{DiceGameRecord, GameId, PlayerId};
use crate::domain::scorecard::Scorecard;
use crate::stats::math::{mean, newest_first, percentage};

/// How one category has been filled across a set of scorecards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: DiceCategory,
    pub times_scored: u32,
    pub times_zeroed: u32,
    pub zero_rate: f64,
    /// Mean value over every time the category was filled.
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentGame {
    pub game_id: GameId,
    pub completed_at: Option<OffsetDateTime>,
    pub score: u32,
    pub won: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DicePlayerStats {
    pub player: PlayerId,
    pub games_played: u32,
    pub games_finished: u32,
    pub wins: u32,
    /// Percent of finished games won.
    pub win_rate: f64,
    pub average_score: f64,
    pub high_score: u32,
    pub total_five_of_a_kind: u32,
    pub average_five_of_a_kind: f64,
    /// Percent of scored games that earned the upper bonus.
    pub upper_bonus_rate: f64,
    /// Every category, in scorecard order.
    pub categories: Vec<CategoryStats>,
    pub recent_games: Vec<RecentGame>,
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct CategoryTally {
    scored: u32,
    zeroed: u32,
    total: u64,
}

impl CategoryTally {
    pub(crate) fn add(&mut self, value: u32) {
        if value > 0 {
            self.scored += 1;
        } else {
            self.zeroed += 1;
        }
        self.total += u64::from(value);
    }

    pub(crate) fn filled(&self) -> u32 {
        self.scored + self.zeroed
    }

    pub(crate) fn into_stats(self, category: DiceCategory) -> CategoryStats {
        CategoryStats {
            category,
            times_scored: self.scored,
            times_zeroed: self.zeroed,
            zero_rate: percentage(self.zeroed, self.filled()),
            average: mean(self.total as f64, self.filled()),
        }
    }
}

/// Per-category tallies over a set of scorecards.
#[derive(Debug, Default, Clone)]
pub(crate) struct CategoryTallies(BTreeMap<DiceCategory, CategoryTally>);

impl CategoryTallies {
    pub(crate) fn add_card(&mut self, card: &Scorecard) {
        for (&category, &value) in card.categories() {
            self.0.entry(category).or_default().add(value);
        }
    }

    /// One entry per category, unfilled ones zeroed.
    pub(crate) fn into_stats(self) -> Vec<CategoryStats> {
        DiceCategory::ALL
            .into_iter()
            .map(|c| self.0.get(&c).copied().unwrap_or_default().into_stats(c))
            .collect()
    }
}

/// Lifetime dice-game aggregate for one player.
pub fn dice_player_stats(
    player: PlayerId,
    games: &[DiceGameRecord],
    config: &StatsConfig,
) -> DicePlayerStats {
    let mut games_played = 0u32;
    let mut games_finished = 0u32;
    let mut wins = 0u32;
    let mut scored_games = 0u32;
    let mut score_sum = 0u64;
    let mut high_score = 0u32;
    let mut total_five_of_a_kind = 0u32;
    let mut upper_bonus_games = 0u32;
    let mut tallies = CategoryTallies::default();
    let mut recent = Vec::new();

    for game in games.iter().filter(|g| g.includes(player)) {
        games_played += 1;
        if !game.finished {
            continue;
        }
        games_finished += 1;
        let won = game.winner == Some(player);
        if won {
            wins += 1;
        }
        let Some(card) = game.card_for(player) else {
            continue;
        };

        let score = card.grand_total();
        scored_games += 1;
        score_sum += u64::from(score);
        high_score = high_score.max(score);
        total_five_of_a_kind += card.five_of_a_kind_count();
        if card.upper_bonus() > 0 {
            upper_bonus_games += 1;
        }
        tallies.add_card(card);
        recent.push(RecentGame {
            game_id: game.id,
            completed_at: game.completed_at,
            score,
            won,
        });
    }

    recent.sort_by(|a, b| newest_first((a.completed_at, a.game_id), (b.completed_at, b.game_id)));
    recent.truncate(config.recent_games_limit);

    debug!(
        player,
        games = games.len(),
        games_played,
        games_finished,
        "Aggregated dice player stats"
    );

    DicePlayerStats {
        player,
        games_played,
        games_finished,
        wins,
        win_rate: percentage(wins, games_finished),
        average_score: mean(score_sum as f64, scored_games),
        high_score,
        total_five_of_a_kind,
        average_five_of_a_kind: mean(f64::from(total_five_of_a_kind), scored_games),
        upper_bonus_rate: percentage(upper_bonus_games, scored_games),
        categories: tallies.into_stats(),
        recent_games: recent,
    }
}
