use crate::config::StatsConfig;
use crate::domain::DiceCategory;
use crate::stats::dice_global::dice_global_stats;
use crate::stats::test_fixtures::{card, dice_game, dice_history};

use time::macros::datetime;

fn board(entries: &[crate::stats::dice_global::LeaderboardEntry]) -> Vec<(i64, u64)> {
    entries.iter().map(|e| (e.player, e.value)).collect()
}

#[test]
fn totals_count_finished_games() {
    let stats = dice_global_stats(&dice_history(), &StatsConfig::default());
    assert_eq!(stats.total_games, 2);
    assert_eq!(stats.total_players, 3);
    assert_eq!(stats.total_points, 626);
    assert_eq!(stats.average_score, 125.2);
    assert_eq!(stats.total_five_of_a_kind, 4);
}

#[test]
fn records_and_ties() {
    let stats = dice_global_stats(&dice_history(), &StatsConfig::default());

    // players 1 and 2 both have two finished games; lower id wins the tie
    let active = stats.most_active.unwrap();
    assert_eq!((active.player, active.games), (1, 2));

    let high = stats.high_score.unwrap();
    assert_eq!((high.player, high.score, high.game_id), (2, 230, 11));

    let five = stats.most_five_of_a_kind.unwrap();
    assert_eq!((five.player, five.count, five.game_id), (1, 2, 11));
}

#[test]
fn earliest_holder_keeps_a_shared_record() {
    let games = vec![
        dice_game(
            21,
            vec![(5, card(&[(DiceCategory::Chance, 30)], 0))],
            Some(datetime!(2024-05-02 0:00 UTC)),
            Some(5),
        ),
        dice_game(
            20,
            vec![(6, card(&[(DiceCategory::Chance, 30)], 0))],
            Some(datetime!(2024-05-01 0:00 UTC)),
            Some(6),
        ),
    ];
    let high = dice_global_stats(&games, &StatsConfig::default())
        .high_score
        .unwrap();
    assert_eq!((high.player, high.game_id), (6, 20));
}

#[test]
fn undated_finished_game_does_not_take_a_shared_record() {
    let mut undated = dice_game(
        31,
        vec![(8, card(&[(DiceCategory::Chance, 30)], 0))],
        None,
        Some(8),
    );
    undated.finished = true;
    let games = vec![
        undated,
        dice_game(
            30,
            vec![(7, card(&[(DiceCategory::Chance, 30)], 0))],
            Some(datetime!(2024-05-01 0:00 UTC)),
            Some(7),
        ),
    ];
    let stats = dice_global_stats(&games, &StatsConfig::default());
    assert_eq!(stats.total_games, 2);
    let high = stats.high_score.unwrap();
    assert_eq!((high.player, high.game_id), (7, 30));
}

#[test]
fn leaderboards_skip_zero_values() {
    let stats = dice_global_stats(&dice_history(), &StatsConfig::default());
    assert_eq!(board(&stats.top_by_wins), vec![(1, 1), (2, 1)]);
    assert_eq!(board(&stats.top_by_total_score), vec![(1, 329), (2, 282), (3, 15)]);
    assert_eq!(board(&stats.top_by_five_of_a_kind), vec![(1, 3), (2, 1)]);
    let positions: Vec<u32> = stats.top_by_total_score.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);

    let config = StatsConfig {
        leaderboard_size: 1,
        ..StatsConfig::default()
    };
    let stats = dice_global_stats(&dice_history(), &config);
    assert_eq!(board(&stats.top_by_total_score), vec![(1, 329)]);
}

#[test]
fn awards_need_enough_games() {
    let stats = dice_global_stats(&dice_history(), &StatsConfig::default());
    assert!(stats.luckiest.is_none());
    assert!(stats.most_consistent.is_none());

    let config = StatsConfig {
        min_games_for_awards: 2,
        ..StatsConfig::default()
    };
    let stats = dice_global_stats(&dice_history(), &config);

    let lucky = stats.luckiest.unwrap();
    assert_eq!((lucky.player, lucky.games), (1, 2));
    assert_eq!(lucky.value, 1.5);

    // scores 168 and 161
    let steady = stats.most_consistent.unwrap();
    assert_eq!(steady.player, 1);
    assert_eq!(steady.value, 3.5);
}

#[test]
fn category_figures_and_extremes() {
    let stats = dice_global_stats(&dice_history(), &StatsConfig::default());
    assert_eq!(stats.categories.len(), 13);

    let get = |c: DiceCategory| stats.categories.iter().find(|s| s.category == c).unwrap();
    assert_eq!(get(DiceCategory::Chance).average, 20.0);
    assert_eq!(get(DiceCategory::FiveOfAKind).average, 37.5);
    assert_eq!(get(DiceCategory::FiveOfAKind).zero_rate, 25.0);
    assert_eq!(get(DiceCategory::Ones).average, 1.5);

    // never-filled categories are not candidates
    assert_eq!(stats.best_category, Some(DiceCategory::LargeStraight));
    assert_eq!(stats.worst_category, Some(DiceCategory::Ones));
}

#[test]
fn recent_feed_newest_first() {
    let stats = dice_global_stats(&dice_history(), &StatsConfig::default());
    let feed: Vec<(i64, Option<i64>, u32)> = stats
        .recent_games
        .iter()
        .map(|g| (g.game_id, g.winner, g.top_score))
        .collect();
    assert_eq!(feed, vec![(11, Some(2), 230), (10, Some(1), 168)]);
    assert_eq!(stats.recent_games[0].players, vec![1, 2, 3]);
}

#[test]
fn empty_history_is_zeroed() {
    let stats = dice_global_stats(&[], &StatsConfig::default());
    assert_eq!(stats.total_games, 0);
    assert_eq!(stats.average_score, 0.0);
    assert!(stats.most_active.is_none());
    assert!(stats.high_score.is_none());
    assert!(stats.best_category.is_none());
    assert!(stats.top_by_wins.is_empty());
    assert_eq!(stats.categories.len(), 13);
    assert!(stats.recent_games.is_empty());
}
