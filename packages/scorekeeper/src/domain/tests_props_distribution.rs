//! Property tests for the zero-sum distribution.

use proptest::prelude::*;

use crate::domain::distribution::{distribute, Contract};
use crate::domain::scoring::compute_round_score;
use crate::domain::{test_gens, test_prelude};

fn sum(deltas: &crate::domain::ScoreDeltas) -> i64 {
    deltas.values().map(|&d| i64::from(d)).sum()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: three and four player tables are zero-sum.
    #[test]
    fn prop_zero_sum_small_tables(
        input in test_gens::round_input(),
        players in (3usize..=4).prop_flat_map(test_gens::participants),
        taker_seed in any::<usize>(),
    ) {
        let result = compute_round_score(&input).unwrap();
        let taker = taker_seed % players.len();
        let deltas = distribute(&result, Contract::Solo { taker }, &players).unwrap();
        prop_assert_eq!(deltas.len(), players.len());
        prop_assert_eq!(sum(&deltas), 0);
        prop_assert_eq!(
            deltas[&players[taker]],
            result.total * (players.len() as i32 - 1)
        );
    }

    /// Property: five player tables are zero-sum with or without a partner.
    #[test]
    fn prop_zero_sum_five_players(
        input in test_gens::round_input(),
        players in test_gens::participants(5),
        taker in 0usize..5,
        partner in proptest::option::of(0usize..5),
    ) {
        let result = compute_round_score(&input).unwrap();
        let contract = Contract::from_indices(taker, partner);
        let deltas = distribute(&result, contract, &players).unwrap();
        prop_assert_eq!(sum(&deltas), 0);

        let defenders = deltas.values().filter(|&&d| d == -result.total).count();
        match contract {
            Contract::Partnered { partner, .. } => {
                prop_assert_eq!(deltas[&players[taker]], 2 * result.total);
                prop_assert_eq!(deltas[&players[partner]], result.total);
                if result.total != 0 {
                    prop_assert_eq!(defenders, 3);
                }
            }
            Contract::Solo { .. } => {
                prop_assert_eq!(deltas[&players[taker]], 4 * result.total);
                if result.total != 0 {
                    prop_assert_eq!(defenders, 4);
                }
            }
        }
    }
}
