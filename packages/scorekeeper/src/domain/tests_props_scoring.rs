//! Property tests for round scoring.

use proptest::prelude::*;

use crate::domain::scoring::{compute_round_score, RoundInput};
use crate::domain::{points_needed, test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: one more captured point never lowers the score.
    #[test]
    fn prop_score_monotonic_in_points_captured(
        input in test_gens::round_input(),
    ) {
        prop_assume!(input.points_captured < 91);
        let lower = compute_round_score(&input).unwrap();
        let higher = compute_round_score(&RoundInput {
            points_captured: input.points_captured + 1,
            ..input
        })
        .unwrap();
        prop_assert!(higher.total >= lower.total,
            "score dropped from {} to {} at {:?}", lower.total, higher.total, input);
    }

    /// Property: made exactly when captured reaches the needed threshold.
    #[test]
    fn prop_contract_made_iff_threshold_reached(
        input in test_gens::round_input(),
    ) {
        let result = compute_round_score(&input).unwrap();
        let needed = points_needed(input.scoring_cards).unwrap();
        prop_assert_eq!(result.points_needed, needed);
        prop_assert_eq!(result.contract_made, input.points_captured >= needed);
    }

    /// Property: the base component is always a multiple of the bid multiplier
    /// and carries the contract's sign.
    #[test]
    fn prop_base_sign_and_scale(
        input in test_gens::round_input(),
    ) {
        let result = compute_round_score(&input).unwrap();
        prop_assert_eq!(result.base % input.bid.multiplier(), 0);
        prop_assert_eq!(result.base.signum(), result.sign());
        prop_assert_eq!(
            result.total,
            result.base + result.last_trick + result.hand_bonus + result.slam_bonus
        );
    }

    /// Property: every input in range is accepted.
    #[test]
    fn prop_valid_inputs_never_rejected(
        input in test_gens::round_input(),
    ) {
        prop_assert!(compute_round_score(&input).is_ok());
    }
}
