//! Dice-game statistics across every player: records, leaderboards,
//! per-category figures and the two player awards.
//!
//! Only finished games are counted. Awards:
//! - luckiest: most five-of-a-kind events per finished game
//! - most consistent: lowest population standard deviation of final scores
//!   (needs at least two scored games)
//!
//! Both require `StatsConfig::min_games_for_awards` finished games.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use crate::config::StatsConfig;
use crate::domain::dice::DiceCategory;
use crate::domain::history::{DiceGameRecord, DicePlayerCard, GameId, PlayerId};
use crate::stats::dice_player::{CategoryStats, CategoryTallies};
use crate::stats::math::{mean, newest_first, oldest_first, std_dev};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGameCount {
    pub player: PlayerId,
    pub games: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub player: PlayerId,
    pub score: u32,
    pub game_id: GameId,
    pub completed_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiveOfAKindRecord {
    pub player: PlayerId,
    pub count: u32,
    pub game_id: GameId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based.
    pub position: u32,
    pub player: PlayerId,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub player: PlayerId,
    pub value: f64,
    pub games: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalRecentGame {
    pub game_id: GameId,
    pub completed_at: Option<OffsetDateTime>,
    pub players: Vec<PlayerId>,
    pub winner: Option<PlayerId>,
    pub top_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiceGlobalStats {
    pub total_games: u32,
    pub total_players: u32,
    pub total_points: u64,
    /// Mean final score per scorecard.
    pub average_score: f64,
    pub total_five_of_a_kind: u32,
    pub most_active: Option<PlayerGameCount>,
    pub high_score: Option<HighScoreRecord>,
    pub most_five_of_a_kind: Option<FiveOfAKindRecord>,
    pub categories: Vec<CategoryStats>,
    /// Category with the highest average, among those ever filled.
    pub best_category: Option<DiceCategory>,
    pub worst_category: Option<DiceCategory>,
    pub top_by_wins: Vec<LeaderboardEntry>,
    pub top_by_total_score: Vec<LeaderboardEntry>,
    pub top_by_five_of_a_kind: Vec<LeaderboardEntry>,
    pub luckiest: Option<Award>,
    pub most_consistent: Option<Award>,
    pub recent_games: Vec<GlobalRecentGame>,
}

#[derive(Debug, Default)]
struct PlayerTally {
    games: u32,
    wins: u32,
    total_score: u64,
    five_of_a_kind: u32,
    scores: Vec<f64>,
}

fn leaderboard(
    players: &BTreeMap<PlayerId, PlayerTally>,
    size: usize,
    value: impl Fn(&PlayerTally) -> u64,
) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<(PlayerId, u64)> = players
        .iter()
        .map(|(&p, t)| (p, value(t)))
        .filter(|&(_, v)| v > 0)
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    rows.into_iter()
        .take(size)
        .enumerate()
        .map(|(i, (player, value))| LeaderboardEntry {
            position: i as u32 + 1,
            player,
            value,
        })
        .collect()
}

fn luckiest(players: &BTreeMap<PlayerId, PlayerTally>, min_games: u32) -> Option<Award> {
    let mut best: Option<Award> = None;
    for (&player, t) in players {
        if t.games < min_games.max(1) || t.five_of_a_kind == 0 {
            continue;
        }
        let value = mean(f64::from(t.five_of_a_kind), t.games);
        if best.is_none_or(|b| value > b.value) {
            best = Some(Award {
                player,
                value,
                games: t.games,
            });
        }
    }
    best
}

fn most_consistent(players: &BTreeMap<PlayerId, PlayerTally>, min_games: u32) -> Option<Award> {
    let mut best: Option<Award> = None;
    for (&player, t) in players {
        if t.games < min_games || t.scores.len() < 2 {
            continue;
        }
        let value = std_dev(&t.scores);
        if best.is_none_or(|b| value < b.value) {
            best = Some(Award {
                player,
                value,
                games: t.games,
            });
        }
    }
    best
}

fn extreme_category(
    categories: &[CategoryStats],
    better: impl Fn(f64, f64) -> bool,
) -> Option<DiceCategory> {
    let mut pick: Option<&CategoryStats> = None;
    for c in categories
        .iter()
        .filter(|c| c.times_scored + c.times_zeroed > 0)
    {
        if pick.is_none_or(|p| better(c.average, p.average)) {
            pick = Some(c);
        }
    }
    pick.map(|c| c.category)
}

/// Global dice-game aggregate over every finished game.
pub fn dice_global_stats(games: &[DiceGameRecord], config: &StatsConfig) -> DiceGlobalStats {
    // Oldest first so that records keep their earliest holder; undated games go last.
    let mut finished: Vec<&DiceGameRecord> = games.iter().filter(|g| g.finished).collect();
    finished.sort_by(|a, b| oldest_first((a.completed_at, a.id), (b.completed_at, b.id)));

    let mut players: BTreeMap<PlayerId, PlayerTally> = BTreeMap::new();
    let mut tallies = CategoryTallies::default();
    let mut total_points = 0u64;
    let mut total_five_of_a_kind = 0u32;
    let mut cards_counted = 0u32;
    let mut high_score: Option<HighScoreRecord> = None;
    let mut most_five_of_a_kind: Option<FiveOfAKindRecord> = None;

    for game in &finished {
        for &p in &game.participants {
            let t = players.entry(p).or_default();
            t.games += 1;
            if game.winner == Some(p) {
                t.wins += 1;
            }
        }

        let mut cards: Vec<&DicePlayerCard> = game.cards.iter().collect();
        cards.sort_by_key(|c| c.player);
        for entry in cards {
            let score = entry.card.grand_total();
            let five = entry.card.five_of_a_kind_count();

            let t = players.entry(entry.player).or_default();
            t.total_score += u64::from(score);
            t.five_of_a_kind += five;
            t.scores.push(f64::from(score));

            cards_counted += 1;
            total_points += u64::from(score);
            total_five_of_a_kind += five;
            tallies.add_card(&entry.card);

            if high_score.is_none_or(|h| score > h.score) {
                high_score = Some(HighScoreRecord {
                    player: entry.player,
                    score,
                    game_id: game.id,
                    completed_at: game.completed_at,
                });
            }
            if five > 0 && most_five_of_a_kind.is_none_or(|r| five > r.count) {
                most_five_of_a_kind = Some(FiveOfAKindRecord {
                    player: entry.player,
                    count: five,
                    game_id: game.id,
                });
            }
        }
    }

    let mut most_active: Option<PlayerGameCount> = None;
    for (&player, t) in &players {
        if t.games > 0 && most_active.is_none_or(|m| t.games > m.games) {
            most_active = Some(PlayerGameCount {
                player,
                games: t.games,
            });
        }
    }

    let categories = tallies.into_stats();
    let best_category = extreme_category(&categories, |a, b| a > b);
    let worst_category = extreme_category(&categories, |a, b| a < b);

    let mut recent: Vec<&DiceGameRecord> = finished.clone();
    recent.sort_by(|a, b| newest_first((a.completed_at, a.id), (b.completed_at, b.id)));
    let recent_games = recent
        .into_iter()
        .take(config.recent_games_limit)
        .map(|g| GlobalRecentGame {
            game_id: g.id,
            completed_at: g.completed_at,
            players: g.participants.clone(),
            winner: g.winner,
            top_score: g.cards.iter().map(|c| c.card.grand_total()).max().unwrap_or(0),
        })
        .collect();

    debug!(
        games = games.len(),
        finished = finished.len(),
        players = players.len(),
        "Aggregated dice global stats"
    );

    DiceGlobalStats {
        total_games: finished.len() as u32,
        total_players: players.len() as u32,
        total_points,
        average_score: mean(total_points as f64, cards_counted),
        total_five_of_a_kind,
        most_active,
        high_score,
        most_five_of_a_kind,
        top_by_wins: leaderboard(&players, config.leaderboard_size, |t| u64::from(t.wins)),
        top_by_total_score: leaderboard(&players, config.leaderboard_size, |t| t.total_score),
        top_by_five_of_a_kind: leaderboard(&players, config.leaderboard_size, |t| {
            u64::from(t.five_of_a_kind)
        }),
        luckiest: luckiest(&players, config.min_games_for_awards),
        most_consistent: most_consistent(&players, config.min_games_for_awards),
        categories,
        best_category,
        worst_category,
        recent_games,
    }
}
