//! Seeded generator of random but valid game histories.
//!
//! Every game is produced by driving the scorekeeper engines, so the records
//! are exactly what a real table would have stored.

use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scorekeeper::{
    compute_round_score, score_category, Bid, Contract, DiceCategory, DiceGameRecord,
    DicePlayerCard, DomainError, GameId, HandBonus, PlayerId, Roll, RoundInput, ScoreLedger,
    Scorecard, SlamState, TrickGameRecord, TrickRoundRecord,
};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};
use tracing::debug;

const ROLLS_PER_TURN: usize = 3;

/// First simulated game starts here; later ones follow at one per hour.
fn epoch() -> OffsetDateTime {
    datetime!(2024-01-01 18:00 UTC)
}

pub struct Simulator {
    rng: ChaCha8Rng,
    players: usize,
    /// Seats are drawn from player ids `1..=pool`.
    pool: usize,
}

impl Simulator {
    pub fn new(seed: u64, players: usize, pool: usize) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            players,
            pool: pool.max(players),
        }
    }

    fn seat_players(&mut self) -> Vec<PlayerId> {
        sample(&mut self.rng, self.pool, self.players)
            .into_iter()
            .map(|i| i as PlayerId + 1)
            .collect()
    }

    fn timeline(&mut self, id: GameId) -> (OffsetDateTime, OffsetDateTime) {
        let created_at = epoch() + Duration::hours(id);
        let minutes = self.rng.random_range(15..=180);
        (created_at, created_at + Duration::minutes(minutes))
    }

    fn round_input(&mut self) -> RoundInput {
        let bid = Bid::ALL[self.rng.random_range(0..Bid::ALL.len())];
        let scoring_cards = self.rng.random_range(0..=3);
        let points_captured = self.rng.random_range(20..=80);
        let mut input = RoundInput::new(bid, scoring_cards, points_captured);
        if self.rng.random_bool(0.2) {
            input = input.with_last_trick_bonus();
        }
        if self.rng.random_bool(0.1) {
            let bonus = HandBonus::ALL[self.rng.random_range(0..HandBonus::ALL.len())];
            input = input.with_hand_bonus(bonus);
        }
        if self.rng.random_bool(0.02) {
            let slam = SlamState::ALL[self.rng.random_range(1..SlamState::ALL.len())];
            input = input.with_slam(slam);
        }
        input
    }

    /// One finished trick game. The ledger is stored on every round.
    pub fn trick_game(&mut self, id: GameId) -> Result<TrickGameRecord, DomainError> {
        let participants = self.seat_players();
        let mut ledger = ScoreLedger::new(&participants)?;
        let round_count = self.rng.random_range(self.players..=self.players * 3);
        let mut rounds = Vec::with_capacity(round_count);

        for round_no in 1..=round_count as u32 {
            let input = self.round_input();
            let result = compute_round_score(&input)?;
            let taker = self.rng.random_range(0..self.players);
            let partner = if self.players == 5 && self.rng.random_bool(0.5) {
                Some(self.rng.random_range(0..self.players))
            } else {
                None
            };
            let contract = Contract::from_indices(taker, partner);
            let deltas = ledger.record_round(&result, contract)?;
            rounds.push(
                TrickRoundRecord::from_result(
                    round_no,
                    participants[contract.taker()],
                    contract.partner().map(|p| participants[p]),
                    &result,
                )
                .with_deltas(deltas),
            );
        }

        let winner = ledger.standings().first().map(|e| e.player);
        let (created_at, completed_at) = self.timeline(id);
        debug!(game_id = id, rounds = rounds.len(), ?winner, "Simulated trick game");

        Ok(TrickGameRecord {
            id,
            participants,
            rounds,
            created_at,
            completed_at: Some(completed_at),
            finished: true,
            winner,
        })
    }

    fn roll(&mut self, keep: Option<(u8, usize)>) -> Result<Roll, DomainError> {
        let mut dice = [0u8; 5];
        for (i, die) in dice.iter_mut().enumerate() {
            *die = match keep {
                Some((face, kept)) if i < kept => face,
                _ => self.rng.random_range(1..=6),
            };
        }
        Roll::new(dice)
    }

    /// Up to three rolls, keeping the most common face; then the best open category.
    fn play_turn(&mut self, card: &mut Scorecard) -> Result<(), DomainError> {
        let mut roll = self.roll(None)?;
        for _ in 1..ROLLS_PER_TURN {
            if roll.is_five_of_a_kind() {
                break;
            }
            let counts = roll.counts();
            let (face, kept) = (1..=6u8)
                .map(|f| (f, usize::from(counts[usize::from(f)])))
                .max_by_key(|&(f, n)| (n, f))
                .unwrap_or((6, 0));
            roll = self.roll(Some((face, kept)))?;
        }

        let mut best: Option<(DiceCategory, u32)> = None;
        for category in card.remaining() {
            let value = score_category(category, &roll);
            if best.is_none_or(|(_, v)| value > v) {
                best = Some((category, value));
            }
        }
        if let Some((category, _)) = best {
            card.record(category, &roll)?;
        }
        Ok(())
    }

    /// One finished dice game with every card complete.
    pub fn dice_game(&mut self, id: GameId) -> Result<DiceGameRecord, DomainError> {
        let participants = self.seat_players();
        let mut cards: Vec<DicePlayerCard> = participants
            .iter()
            .map(|&player| DicePlayerCard {
                player,
                card: Scorecard::new(),
            })
            .collect();

        for _ in DiceCategory::ALL {
            for entry in &mut cards {
                self.play_turn(&mut entry.card)?;
            }
        }

        let mut winner: Option<(PlayerId, u32)> = None;
        for entry in &cards {
            let total = entry.card.grand_total();
            if winner.is_none_or(|(_, best)| total > best) {
                winner = Some((entry.player, total));
            }
        }
        let (created_at, completed_at) = self.timeline(id);
        debug!(game_id = id, ?winner, "Simulated dice game");

        Ok(DiceGameRecord {
            id,
            participants,
            cards,
            created_at,
            completed_at: Some(completed_at),
            finished: true,
            winner: winner.map(|(p, _)| p),
        })
    }
}
