//! Aggregated views over a simulated history.

use std::collections::BTreeSet;

use scorekeeper::stats::trick::{BidStats, GameSnapshot};
use scorekeeper::{
    bid_breakdown, dice_global_stats, dice_player_stats, game_snapshot, player_stats,
    DiceGameRecord, DiceGlobalStats, DicePlayerStats, DomainError, GameId, PlayerId,
    StatsConfig, TrickGameRecord, TrickPlayerStats,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize)]
pub struct TrickPlayerReport {
    #[serde(flatten)]
    pub stats: TrickPlayerStats,
    pub bids: Vec<BidStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiceGameSummary {
    pub game_id: GameId,
    pub winner: Option<PlayerId>,
    pub scores: Vec<(PlayerId, u32)>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Report {
    Trick {
        seed: u64,
        games: Vec<GameSnapshot>,
        players: Vec<TrickPlayerReport>,
    },
    Dice {
        seed: u64,
        games: Vec<DiceGameSummary>,
        players: Vec<DicePlayerStats>,
        global: Box<DiceGlobalStats>,
    },
}

fn everyone<'a>(participants: impl Iterator<Item = &'a [PlayerId]>) -> BTreeSet<PlayerId> {
    participants.flatten().copied().collect()
}

pub fn build_trick_report(seed: u64, games: &[TrickGameRecord]) -> Result<Report, DomainError> {
    let snapshots = games
        .iter()
        .map(|g| game_snapshot(g, g.completed_at.unwrap_or(g.created_at)))
        .collect::<Result<Vec<_>, _>>()?;

    let players = everyone(games.iter().map(|g| g.participants.as_slice()))
        .into_iter()
        .map(|p| {
            Ok(TrickPlayerReport {
                stats: player_stats(p, games)?,
                bids: bid_breakdown(p, games),
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(Report::Trick {
        seed,
        games: snapshots,
        players,
    })
}

pub fn build_dice_report(seed: u64, games: &[DiceGameRecord], config: &StatsConfig) -> Report {
    let summaries = games
        .iter()
        .map(|g| DiceGameSummary {
            game_id: g.id,
            winner: g.winner,
            scores: g
                .cards
                .iter()
                .map(|c| (c.player, c.card.grand_total()))
                .collect(),
        })
        .collect();

    let players = everyone(games.iter().map(|g| g.participants.as_slice()))
        .into_iter()
        .map(|p| dice_player_stats(p, games, config))
        .collect();

    Report::Dice {
        seed,
        games: summaries,
        players,
        global: Box::new(dice_global_stats(games, config)),
    }
}

fn line(kind: &str, seed: u64, data: &impl Serialize) -> Result<Value, serde_json::Error> {
    Ok(json!({ "kind": kind, "seed": seed, "data": serde_json::to_value(data)? }))
}

impl Report {
    /// Flattened form for line-oriented output: games, then players, then
    /// the global view when there is one.
    pub fn lines(&self) -> Result<Vec<Value>, serde_json::Error> {
        let mut out = Vec::new();
        match self {
            Report::Trick {
                seed,
                games,
                players,
            } => {
                for g in games {
                    out.push(line("game", *seed, g)?);
                }
                for p in players {
                    out.push(line("player", *seed, p)?);
                }
            }
            Report::Dice {
                seed,
                games,
                players,
                global,
            } => {
                for g in games {
                    out.push(line("game", *seed, g)?);
                }
                for p in players {
                    out.push(line("player", *seed, p)?);
                }
                out.push(line("global", *seed, global)?);
            }
        }
        Ok(out)
    }

    pub fn game_count(&self) -> usize {
        match self {
            Report::Trick { games, .. } => games.len(),
            Report::Dice { games, .. } => games.len(),
        }
    }

    pub fn player_count(&self) -> usize {
        match self {
            Report::Trick { players, .. } => players.len(),
            Report::Dice { players, .. } => players.len(),
        }
    }
}
