//! Full, serializable game state.
//!
//! A snapshot holds everything needed to resume a game: deck order, hands,
//! piles, the staging slots, phase, scores, history and the RNG position.
//! Card definitions travel with the cards, so a snapshot can be restored
//! without the catalog it was dealt from.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::dealing::DealSequence;
use super::phase::Phase;
use crate::cards::Card;
use crate::core::{
    ActionRecord, GameConfig, GameError, GameRngState, Player, PlayerId, PlayerMap,
};
use crate::rules::GameOutcome;
use crate::zones::{Deck, DiscardPile};

/// Captured state of a `GameController`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub current_player: PlayerId,
    pub turn_number: u32,
    pub action_sequence: u32,
    pub deck: Deck,
    pub players: PlayerMap<Player>,
    pub discard_piles: Vec<DiscardPile>,
    pub revealed_card: Option<Card>,
    pub card_awaiting_discard: Option<Card>,
    pub deal: DealSequence,
    pub scores: PlayerMap<i32>,
    pub outcome: Option<GameOutcome>,
    pub history: Vector<ActionRecord>,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Total cards in the snapshot, wherever they are.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.remaining()
            + self
                .players
                .values()
                .map(|p| p.hand.card_count())
                .sum::<usize>()
            + self.discard_piles.iter().map(DiscardPile::len).sum::<usize>()
            + usize::from(self.revealed_card.is_some())
            + usize::from(self.card_awaiting_discard.is_some())
    }

    /// First reason this snapshot cannot be resumed on `config`'s table,
    /// or `None` if it fits.
    #[must_use]
    pub fn table_mismatch(&self, config: &GameConfig) -> Option<&'static str> {
        let seats = config.player_count;
        if self.players.player_count() != seats || self.scores.player_count() != seats {
            return Some("player count differs from the configured table");
        }
        if self.discard_piles.len() != config.discard_pile_count {
            return Some("discard pile count differs from the configured table");
        }
        if self.current_player.index() >= seats {
            return Some("current player is not a seat at the table");
        }
        let misseated = self
            .players
            .iter()
            .any(|(seat, player)| player.id != seat);
        if misseated {
            return Some("player id does not match its seat");
        }
        let misshapen = self
            .players
            .values()
            .any(|player| player.hand.slot_count() != config.cards_per_player);
        if misshapen {
            return Some("hand size differs from the configured table");
        }
        if !self.deal.is_plan_for(seats, config.cards_per_player) {
            return Some("deal plan does not fit the configured table");
        }
        if self.revealed_card.is_some() && self.card_awaiting_discard.is_some() {
            return Some("revealed and awaiting-discard cards are both present");
        }

        match self.phase {
            Phase::Setup => {
                if self.revealed_card.is_some() || self.card_awaiting_discard.is_some() {
                    return Some("a card is staged before play started");
                }
            }
            Phase::PlayerTurn | Phase::GameEnd => {
                if !self.deal.is_complete() {
                    return Some("play started before the deal finished");
                }
            }
        }
        match (&self.outcome, self.phase) {
            (Some(outcome), Phase::GameEnd) => {
                if outcome.scores.player_count() != seats || outcome.winner.index() >= seats {
                    return Some("outcome does not match the configured table");
                }
            }
            (None, Phase::GameEnd) => return Some("finished game has no outcome"),
            (Some(_), _) => return Some("outcome present before the game ended"),
            (None, _) => {}
        }
        None
    }
}
