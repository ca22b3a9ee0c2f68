use crate::domain::scoring::{compute_round_score, RoundInput};
use crate::domain::{Bid, HandBonus, SlamState};
use crate::errors::domain::ValidationKind;

#[test]
fn exact_threshold_is_made_with_bare_base() {
    // 1 scoring card needs 51; capturing 51 leaves no margin.
    let r = compute_round_score(&RoundInput::new(Bid::Small, 1, 51)).unwrap();
    assert_eq!(r.points_needed, 51);
    assert_eq!(r.base, 25);
    assert_eq!(r.total, 25);
    assert!(r.contract_made);
}

#[test]
fn failed_contract_is_negative() {
    // No scoring cards needs 56; 40 captured misses by 16.
    let r = compute_round_score(&RoundInput::new(Bid::Small, 0, 40)).unwrap();
    assert_eq!(r.points_needed, 56);
    assert_eq!(r.total, -41);
    assert!(!r.contract_made);
    assert_eq!(r.sign(), -1);
}

#[test]
fn last_trick_bonus_is_scaled_by_multiplier() {
    let input = RoundInput::new(Bid::Guard, 2, 51).with_last_trick_bonus();
    let r = compute_round_score(&input).unwrap();
    assert_eq!(r.points_needed, 41);
    assert_eq!(r.base, 70);
    assert_eq!(r.last_trick, 20);
    assert_eq!(r.total, 90);
}

#[test]
fn last_trick_bonus_follows_contract_sign() {
    let input = RoundInput::new(Bid::Guard, 0, 50).with_last_trick_bonus();
    let r = compute_round_score(&input).unwrap();
    // (25 + 6) * 2 = 62 lost, plus 10 * 2 lost
    assert_eq!(r.base, -62);
    assert_eq!(r.last_trick, -20);
    assert_eq!(r.total, -82);
}

#[test]
fn hand_bonus_is_flat() {
    let input = RoundInput::new(Bid::GuardWithout, 3, 40).with_hand_bonus(HandBonus::Single);
    let r = compute_round_score(&input).unwrap();
    assert_eq!(r.points_needed, 36);
    assert_eq!(r.base, 116);
    assert_eq!(r.hand_bonus, 20);
    assert_eq!(r.total, 136);
}

#[test]
fn hand_bonus_stays_positive_on_failed_contract() {
    let input = RoundInput::new(Bid::GuardAgainst, 1, 50).with_hand_bonus(HandBonus::Triple);
    let r = compute_round_score(&input).unwrap();
    // (25 + 1) * 6 = 156 lost, triple bonus still +40
    assert_eq!(r.base, -156);
    assert_eq!(r.hand_bonus, 40);
    assert_eq!(r.total, -116);
}

#[test]
fn announced_slam_on_full_capture() {
    let input = RoundInput::new(Bid::Small, 3, 91).with_slam(SlamState::AnnouncedMade);
    let r = compute_round_score(&input).unwrap();
    assert_eq!(r.base, 80);
    assert_eq!(r.slam_bonus, 400);
    assert_eq!(r.total, 480);
}

#[test]
fn slam_states_add_fixed_constants() {
    for (slam, bonus) in [
        (SlamState::None, 0),
        (SlamState::AnnouncedMade, 400),
        (SlamState::AnnouncedFailed, -200),
        (SlamState::Unannounced, 200),
    ] {
        let plain = compute_round_score(&RoundInput::new(Bid::Guard, 2, 60)).unwrap();
        let input = RoundInput::new(Bid::Guard, 2, 60).with_slam(slam);
        let with = compute_round_score(&input).unwrap();
        assert_eq!(with.total - plain.total, bonus, "slam {slam:?}");
    }
}

#[test]
fn components_sum_to_total() {
    let input = RoundInput::new(Bid::GuardAgainst, 2, 30)
        .with_last_trick_bonus()
        .with_hand_bonus(HandBonus::Double)
        .with_slam(SlamState::AnnouncedFailed);
    let r = compute_round_score(&input).unwrap();
    assert_eq!(r.total, r.base + r.last_trick + r.hand_bonus + r.slam_bonus);
}

#[test]
fn captured_points_above_deck_total_rejected() {
    let err = compute_round_score(&RoundInput::new(Bid::Small, 1, 92)).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PointsOutOfRange));
}

#[test]
fn scoring_cards_above_three_rejected() {
    let err = compute_round_score(&RoundInput::new(Bid::Small, 4, 50)).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::ScoringCardsOutOfRange));
}
