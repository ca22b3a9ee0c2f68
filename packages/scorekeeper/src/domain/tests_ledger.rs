use std::collections::BTreeMap;

use crate::domain::distribution::Contract;
use crate::domain::ledger::ScoreLedger;
use crate::domain::scoring::{compute_round_score, RoundInput};
use crate::domain::Bid;
use crate::errors::domain::ValidationKind;

#[test]
fn ledger_accumulates_rounds_and_may_go_negative() {
    let mut ledger = ScoreLedger::new(&[7, 8, 9, 10]).unwrap();
    let won = compute_round_score(&RoundInput::new(Bid::Small, 1, 51)).unwrap();
    let lost = compute_round_score(&RoundInput::new(Bid::Small, 0, 40)).unwrap();

    ledger.record_round(&won, Contract::Solo { taker: 0 }).unwrap();
    ledger.record_round(&lost, Contract::Solo { taker: 1 }).unwrap();

    // 7: +75 +41, 8: -25 -123, 9 and 10: -25 +41
    assert_eq!(ledger.total(7), Some(116));
    assert_eq!(ledger.total(8), Some(-148));
    assert_eq!(ledger.total(9), Some(16));
    assert_eq!(ledger.total(10), Some(16));
    assert_eq!(ledger.entries().iter().map(|e| e.total).sum::<i64>(), 0);
}

#[test]
fn standings_are_descending_and_stable() {
    let mut ledger = ScoreLedger::new(&[3, 1, 2]).unwrap();
    let deltas = BTreeMap::from([(3, -10), (1, 5), (2, 5)]);
    ledger.apply(&deltas).unwrap();

    let order: Vec<i64> = ledger.standings().iter().map(|e| e.player).collect();
    assert_eq!(order, vec![1, 2, 3]);
    // seating order is untouched
    assert_eq!(ledger.participants(), vec![3, 1, 2]);
}

#[test]
fn apply_is_atomic_on_unknown_player() {
    let mut ledger = ScoreLedger::new(&[1, 2, 3]).unwrap();
    let deltas = BTreeMap::from([(1, 10), (99, -10)]);
    let err = ledger.apply(&deltas).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::UnknownParticipant));
    assert_eq!(ledger.total(1), Some(0));
}

#[test]
fn ledger_rejects_bad_tables() {
    assert!(ScoreLedger::new(&[1, 2]).is_err());
    assert!(ScoreLedger::new(&[1, 1, 2]).is_err());
}
