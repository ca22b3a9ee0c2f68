use std::collections::BTreeMap;

use time::macros::datetime;
use time::OffsetDateTime;

use crate::domain::{Bid, TrickGameRecord, TrickRoundRecord};
use crate::errors::domain::ValidationKind;
use crate::stats::duration::DurationBucket;
use crate::stats::trick::{bid_breakdown, game_snapshot, player_stats, rankings};

fn round(
    round_no: u32,
    bid: Bid,
    taker: i64,
    partner: Option<i64>,
    score: i32,
) -> TrickRoundRecord {
    TrickRoundRecord {
        round_no,
        bid,
        taker,
        partner,
        score,
        contract_made: score > 0,
        deltas: None,
    }
}

fn game(
    id: i64,
    participants: Vec<i64>,
    rounds: Vec<TrickRoundRecord>,
    created_at: OffsetDateTime,
    completed_at: Option<OffsetDateTime>,
    winner: Option<i64>,
) -> TrickGameRecord {
    TrickGameRecord {
        id,
        participants,
        rounds,
        created_at,
        finished: completed_at.is_some(),
        completed_at,
        winner,
    }
}

/// Game 1 (four players, finished) and game 2 (five players, in progress).
fn history() -> Vec<TrickGameRecord> {
    vec![
        game(
            1,
            vec![1, 2, 3, 4],
            vec![
                round(1, Bid::Small, 1, None, 25),
                round(2, Bid::Guard, 2, None, -82),
            ],
            datetime!(2024-03-01 19:00 UTC),
            Some(datetime!(2024-03-01 20:25 UTC)),
            Some(1),
        ),
        game(
            2,
            vec![1, 2, 3, 4, 5],
            vec![
                round(1, Bid::GuardWithout, 1, Some(3), 136),
                round(2, Bid::Small, 5, None, -41),
            ],
            datetime!(2024-03-02 20:00 UTC),
            None,
            None,
        ),
    ]
}

#[test]
fn player_stats_for_regular_taker() {
    let stats = player_stats(1, &history()).unwrap();
    assert_eq!(stats.games_played, 2);
    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.rounds_played, 4);
    assert_eq!(stats.taker_rounds, 2);
    assert_eq!(stats.taker_wins, 2);
    assert_eq!(stats.win_rate, 100.0);
    assert_eq!(stats.average_taker_score, 80.5);
    // game 1: +75 +82, game 2: +272 +41
    assert_eq!(stats.total_score, 470);
    assert_eq!(stats.average_score_per_game, 235.0);
}

#[test]
fn player_stats_for_losing_taker() {
    let stats = player_stats(5, &history()).unwrap();
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.taker_rounds, 1);
    assert_eq!(stats.taker_wins, 0);
    assert_eq!(stats.win_rate, 0.0);
    assert_eq!(stats.average_taker_score, -41.0);
    assert_eq!(stats.total_score, -300);

    let stats = player_stats(2, &history()).unwrap();
    assert_eq!(stats.total_score, -366);
    assert_eq!(stats.average_score_per_game, -183.0);
}

#[test]
fn player_who_never_took_has_zero_rates() {
    let stats = player_stats(4, &history()).unwrap();
    assert_eq!(stats.taker_rounds, 0);
    assert_eq!(stats.win_rate, 0.0);
    assert_eq!(stats.average_taker_score, 0.0);
    assert!(!stats.win_rate.is_nan());
}

#[test]
fn empty_history_is_all_zero() {
    let stats = player_stats(1, &[]).unwrap();
    assert_eq!(stats.games_played, 0);
    assert_eq!(stats.total_score, 0);
    assert_eq!(stats.average_score_per_game, 0.0);

    let breakdown = bid_breakdown(1, &[]);
    assert_eq!(breakdown.len(), 4);
    assert!(breakdown.iter().all(|b| b.times_played == 0 && b.win_rate == 0.0));
}

#[test]
fn bid_breakdown_groups_taker_rounds_by_bid() {
    let breakdown = bid_breakdown(1, &history());
    let bids: Vec<Bid> = breakdown.iter().map(|b| b.bid).collect();
    assert_eq!(bids, Bid::ALL.to_vec());

    assert_eq!(breakdown[0].times_played, 1);
    assert_eq!(breakdown[0].wins, 1);
    assert_eq!(breakdown[0].average_score, 25.0);
    assert_eq!(breakdown[1].times_played, 0);
    assert_eq!(breakdown[2].times_played, 1);
    assert_eq!(breakdown[2].win_rate, 100.0);
    assert_eq!(breakdown[2].average_score, 136.0);
    assert_eq!(breakdown[3].times_played, 0);
}

#[test]
fn rankings_keep_seating_order_on_ties() {
    let games = history();
    let ranked = rankings(&games[0]).unwrap();
    let order: Vec<(i64, i64)> = ranked.iter().map(|r| (r.player, r.score)).collect();
    assert_eq!(order, vec![(1, 157), (3, 57), (4, 57), (2, -271)]);
    let positions: Vec<u32> = ranked.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);

    let ranked = rankings(&games[1]).unwrap();
    let order: Vec<(i64, i64)> = ranked.iter().map(|r| (r.player, r.score)).collect();
    assert_eq!(order, vec![(1, 313), (3, 177), (2, -95), (4, -95), (5, -300)]);
}

#[test]
fn stored_ledger_overrides_redistribution() {
    let stored = round(1, Bid::Small, 1, None, 10).with_deltas(BTreeMap::from([(1, 5), (2, -5)]));
    let g = game(3, vec![1, 2, 3], vec![stored], datetime!(2024-01-01 0:00 UTC), None, None);
    let order: Vec<(i64, i64)> = rankings(&g)
        .unwrap()
        .iter()
        .map(|r| (r.player, r.score))
        .collect();
    assert_eq!(order, vec![(1, 5), (3, 0), (2, -5)]);
}

#[test]
fn stored_ledger_for_stranger_is_rejected() {
    let stored = round(1, Bid::Small, 1, None, 10).with_deltas(BTreeMap::from([(1, 5), (42, -5)]));
    let g = game(3, vec![1, 2, 3], vec![stored], datetime!(2024-01-01 0:00 UTC), None, None);
    let err = rankings(&g).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::UnknownParticipant));
}

#[test]
fn unseated_taker_is_an_error_not_a_fallback() {
    let g = game(
        4,
        vec![1, 2, 3],
        vec![round(1, Bid::Small, 9, None, 25)],
        datetime!(2024-01-01 0:00 UTC),
        None,
        None,
    );
    let err = rankings(&g).unwrap_err();
    assert!(matches!(err, crate::errors::DomainError::Inconsistent(_)));
    assert!(player_stats(1, &[g]).is_err());
}

#[test]
fn snapshot_of_finished_game() {
    let games = history();
    let snap = game_snapshot(&games[0], datetime!(2030-01-01 0:00 UTC)).unwrap();
    assert_eq!(snap.game_id, 1);
    assert_eq!(snap.total_rounds, 2);
    assert_eq!(
        snap.duration,
        DurationBucket::Hours {
            hours: 1,
            minutes: 25
        }
    );
    assert_eq!(snap.duration.to_string(), "1 hour 25 minutes");
    assert_eq!(snap.leader, Some(1));
    assert_eq!(snap.rankings.len(), 4);
}

#[test]
fn snapshot_of_game_in_progress_uses_as_of() {
    let games = history();
    let snap = game_snapshot(&games[1], datetime!(2024-03-02 20:40 UTC)).unwrap();
    assert_eq!(snap.duration, DurationBucket::Minutes { minutes: 40 });
    assert_eq!(snap.leader, Some(1));
}

#[test]
fn snapshot_without_rounds_has_no_leader() {
    let g = game(5, vec![1, 2, 3], vec![], datetime!(2024-01-01 0:00 UTC), None, None);
    let snap = game_snapshot(&g, datetime!(2024-01-01 0:01 UTC)).unwrap();
    assert_eq!(snap.leader, None);
    assert_eq!(snap.total_rounds, 0);
    assert!(snap.rankings.iter().all(|r| r.score == 0));
}

#[test]
fn snapshot_rejects_completion_before_creation() {
    let g = game(
        6,
        vec![1, 2, 3],
        vec![],
        datetime!(2024-01-02 0:00 UTC),
        Some(datetime!(2024-01-01 0:00 UTC)),
        None,
    );
    let err = game_snapshot(&g, datetime!(2024-01-03 0:00 UTC)).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::InvalidTimeline));
}
