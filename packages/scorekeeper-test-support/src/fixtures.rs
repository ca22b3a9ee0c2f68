//! Builders for stored game history.
//!
//! Rounds and scorecards go through the public engines, so a fixture can
//! only describe a game the engines would have produced.

use scorekeeper::{
    compute_round_score, rankings, round_deltas, DiceCategory, DiceGameRecord, DicePlayerCard,
    GameId, PlayerId, Roll, RoundInput, Scorecard, TrickGameRecord, TrickRoundRecord,
};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};
use tracing::debug;

/// Fixed reference instant for fixtures.
pub fn base_time() -> OffsetDateTime {
    datetime!(2024-01-01 18:00 UTC)
}

/// Builds a [`TrickGameRecord`] round by round.
#[derive(Debug, Clone)]
pub struct TrickGameBuilder {
    game: TrickGameRecord,
    store_deltas: bool,
}

impl TrickGameBuilder {
    pub fn new(id: GameId, participants: &[PlayerId]) -> Self {
        Self {
            game: TrickGameRecord {
                id,
                participants: participants.to_vec(),
                rounds: Vec::new(),
                created_at: base_time(),
                completed_at: None,
                finished: false,
                winner: None,
            },
            store_deltas: false,
        }
    }

    pub fn created_at(mut self, at: OffsetDateTime) -> Self {
        self.game.created_at = at;
        self
    }

    /// Keep the per-player ledger on every round recorded after this call.
    pub fn store_deltas(mut self) -> Self {
        self.store_deltas = true;
        self
    }

    /// Score `input` and append it as the next round.
    ///
    /// # Panics
    /// If the engine rejects the input or the contract.
    pub fn round(mut self, input: RoundInput, taker: PlayerId, partner: Option<PlayerId>) -> Self {
        let result = compute_round_score(&input).expect("fixture round must be valid");
        let round_no = self.game.rounds.len() as u32 + 1;
        let mut record = TrickRoundRecord::from_result(round_no, taker, partner, &result);
        if self.store_deltas {
            let deltas = round_deltas(&self.game, &record).expect("fixture contract must be valid");
            record = record.with_deltas(deltas);
        }
        self.game.rounds.push(record);
        self
    }

    /// Mark finished `minutes` after creation; the ranking leader wins.
    pub fn finish_after(mut self, minutes: i64) -> Self {
        let leader = rankings(&self.game)
            .expect("fixture game must rank")
            .first()
            .map(|r| r.player);
        self.game.completed_at = Some(self.game.created_at + Duration::minutes(minutes));
        self.game.finished = true;
        self.game.winner = leader;
        self
    }

    pub fn build(self) -> TrickGameRecord {
        debug!(game_id = self.game.id, rounds = self.game.rounds.len(), "Built trick fixture");
        self.game
    }
}

/// Builds a [`DiceGameRecord`] one scorecard at a time.
#[derive(Debug, Clone)]
pub struct DiceGameBuilder {
    game: DiceGameRecord,
}

impl DiceGameBuilder {
    pub fn new(id: GameId) -> Self {
        Self {
            game: DiceGameRecord {
                id,
                participants: Vec::new(),
                cards: Vec::new(),
                created_at: base_time(),
                completed_at: None,
                finished: false,
                winner: None,
            },
        }
    }

    pub fn created_at(mut self, at: OffsetDateTime) -> Self {
        self.game.created_at = at;
        self
    }

    /// Seat `player` and fill categories in scorecard order from `rolls`.
    ///
    /// Fewer than 13 rolls leave the trailing categories open.
    ///
    /// # Panics
    /// On an invalid die face.
    pub fn player(self, player: PlayerId, rolls: &[[u8; 5]]) -> Self {
        let mut card = Scorecard::new();
        for (category, dice) in DiceCategory::ALL.into_iter().zip(rolls) {
            let roll = Roll::new(*dice).expect("fixture dice must be 1..=6");
            card.record(category, &roll).expect("fixture category filled once");
        }
        self.seat(player, card)
    }

    /// Seat `player` with a card filled by hand.
    ///
    /// # Panics
    /// On an invalid die face or a category filled twice.
    pub fn player_with(self, player: PlayerId, plays: &[(DiceCategory, [u8; 5])]) -> Self {
        let mut card = Scorecard::new();
        for (category, dice) in plays {
            let roll = Roll::new(*dice).expect("fixture dice must be 1..=6");
            card.record(*category, &roll).expect("fixture category filled once");
        }
        self.seat(player, card)
    }

    fn seat(mut self, player: PlayerId, card: Scorecard) -> Self {
        self.game.participants.push(player);
        self.game.cards.push(DicePlayerCard { player, card });
        self
    }

    /// Mark finished `minutes` after creation; the highest card wins,
    /// earliest seat on a tie.
    pub fn finish_after(mut self, minutes: i64) -> Self {
        let mut winner: Option<(PlayerId, u32)> = None;
        for c in &self.game.cards {
            let total = c.card.grand_total();
            if winner.is_none_or(|(_, best)| total > best) {
                winner = Some((c.player, total));
            }
        }
        self.game.completed_at = Some(self.game.created_at + Duration::minutes(minutes));
        self.game.finished = true;
        self.game.winner = winner.map(|(p, _)| p);
        self
    }

    pub fn build(self) -> DiceGameRecord {
        debug!(game_id = self.game.id, cards = self.game.cards.len(), "Built dice fixture");
        self.game
    }
}
