//! Trick-game statistics: per-player aggregates, per-bid breakdown,
//! in-game rankings and the current-game snapshot.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use crate::domain::distribution::{distribute_score, ScoreDeltas};
use crate::domain::history::{GameId, PlayerId, TrickGameRecord, TrickRoundRecord};
use crate::domain::ledger::ScoreLedger;
use crate::domain::Bid;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::stats::duration::DurationBucket;
use crate::stats::math::{mean, percentage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrickPlayerStats {
    pub player: PlayerId,
    pub games_played: u32,
    pub games_won: u32,
    pub rounds_played: u32,
    pub taker_rounds: u32,
    pub taker_wins: u32,
    /// Contracts made as taker, percent of taker rounds.
    pub win_rate: f64,
    /// Mean round score over the rounds this player took.
    pub average_taker_score: f64,
    /// Sum of everything distributed to this player.
    pub total_score: i64,
    pub average_score_per_game: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidStats {
    pub bid: Bid,
    pub times_played: u32,
    pub wins: u32,
    pub win_rate: f64,
    pub average_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based.
    pub position: u32,
    pub player: PlayerId,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub total_rounds: u32,
    pub duration: DurationBucket,
    /// `None` until a round has been recorded.
    pub leader: Option<PlayerId>,
    pub rankings: Vec<RankingEntry>,
}

/// Per-player attribution of one stored round.
///
/// Uses the stored ledger when the record carries one, otherwise
/// redistributes the round score.
pub fn round_deltas(
    game: &TrickGameRecord,
    round: &TrickRoundRecord,
) -> Result<ScoreDeltas, DomainError> {
    match &round.deltas {
        Some(deltas) => Ok(deltas.clone()),
        None => {
            let contract = game.contract_for(round)?;
            distribute_score(round.score, contract, &game.participants)
        }
    }
}

/// Cumulative standings for one game, highest first. Ties keep seating order.
pub fn rankings(game: &TrickGameRecord) -> Result<Vec<RankingEntry>, DomainError> {
    let mut ledger = ScoreLedger::new(&game.participants)?;
    for round in &game.rounds {
        ledger.apply(&round_deltas(game, round)?)?;
    }
    Ok(ledger
        .standings()
        .into_iter()
        .enumerate()
        .map(|(i, e)| RankingEntry {
            position: i as u32 + 1,
            player: e.player,
            score: e.total,
        })
        .collect())
}

/// Lifetime trick-game aggregate for one player.
pub fn player_stats(
    player: PlayerId,
    games: &[TrickGameRecord],
) -> Result<TrickPlayerStats, DomainError> {
    let mut games_played = 0u32;
    let mut games_won = 0u32;
    let mut rounds_played = 0u32;
    let mut taker_rounds = 0u32;
    let mut taker_wins = 0u32;
    let mut taker_score_sum = 0i64;
    let mut total_score = 0i64;

    for game in games.iter().filter(|g| g.includes(player)) {
        games_played += 1;
        if game.finished && game.winner == Some(player) {
            games_won += 1;
        }
        for round in &game.rounds {
            rounds_played += 1;
            let deltas = round_deltas(game, round)?;
            total_score += deltas.get(&player).map_or(0, |&d| i64::from(d));
            if round.taker == player {
                taker_rounds += 1;
                taker_score_sum += i64::from(round.score);
                if round.contract_made {
                    taker_wins += 1;
                }
            }
        }
    }

    debug!(player, games = games.len(), games_played, "Aggregated trick player stats");

    Ok(TrickPlayerStats {
        player,
        games_played,
        games_won,
        rounds_played,
        taker_rounds,
        taker_wins,
        win_rate: percentage(taker_wins, taker_rounds),
        average_taker_score: mean(taker_score_sum as f64, taker_rounds),
        total_score,
        average_score_per_game: mean(total_score as f64, games_played),
    })
}

/// One entry per bid, weakest first, counting only rounds the player took.
pub fn bid_breakdown(player: PlayerId, games: &[TrickGameRecord]) -> Vec<BidStats> {
    let taken: Vec<&TrickRoundRecord> = games
        .iter()
        .filter(|g| g.includes(player))
        .flat_map(|g| g.rounds.iter())
        .filter(|r| r.taker == player)
        .collect();

    Bid::ALL
        .into_iter()
        .map(|bid| {
            let rounds: Vec<&&TrickRoundRecord> = taken.iter().filter(|r| r.bid == bid).collect();
            let times_played = rounds.len() as u32;
            let wins = rounds.iter().filter(|r| r.contract_made).count() as u32;
            let score_sum: i64 = rounds.iter().map(|r| i64::from(r.score)).sum();
            BidStats {
                bid,
                times_played,
                wins,
                win_rate: percentage(wins, times_played),
                average_score: mean(score_sum as f64, times_played),
            }
        })
        .collect()
}

/// Snapshot of one game. Unfinished games are measured up to `as_of`.
pub fn game_snapshot(
    game: &TrickGameRecord,
    as_of: OffsetDateTime,
) -> Result<GameSnapshot, DomainError> {
    let end = game.completed_at.unwrap_or(as_of);
    if end < game.created_at {
        return Err(DomainError::validation(
            ValidationKind::InvalidTimeline,
            format!("game {} ends before it was created", game.id),
        ));
    }
    let rankings = rankings(game)?;
    let leader = if game.rounds.is_empty() {
        None
    } else {
        rankings.first().map(|r| r.player)
    };

    Ok(GameSnapshot {
        game_id: game.id,
        total_rounds: game.rounds.len() as u32,
        duration: DurationBucket::from_duration(end - game.created_at),
        leader,
        rankings,
    })
}
