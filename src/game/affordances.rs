//! What the presentation layer may offer the player right now.
//!
//! Derived from the interactability flags the controller re-computes after
//! every transition:
//!
//! - Deck and discard tops: only while the turn is idle (and not empty)
//! - Revealed card: whenever it exists
//! - Hand cards: only the current player's, and only while a card is revealed

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::player::{PlayerId, PlayerMap};

/// Clickable elements of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affordances {
    /// The deck can be drawn from.
    pub draw_from_deck: bool,

    /// Per pile: its top can be lifted.
    pub discard_tops: SmallVec<[bool; 2]>,

    /// The revealed card can be clicked.
    pub revealed_card: bool,

    /// A discard pile must be chosen.
    pub choose_discard_pile: bool,

    /// Per player, per slot: the hand card can be clicked.
    pub hand_slots: PlayerMap<SmallVec<[bool; 6]>>,
}

impl Affordances {
    /// Can `player` click anything in their hand?
    #[must_use]
    pub fn any_hand_slot(&self, player: PlayerId) -> bool {
        self.hand_slots
            .get(player)
            .is_some_and(|slots| slots.iter().any(|&s| s))
    }

    /// Is anything clickable at all?
    #[must_use]
    pub fn any(&self) -> bool {
        self.draw_from_deck
            || self.revealed_card
            || self.choose_discard_pile
            || self.discard_tops.iter().any(|&t| t)
            || self.hand_slots.values().any(|slots| slots.iter().any(|&s| s))
    }
}
