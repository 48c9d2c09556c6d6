//! Card instances - runtime card state.
//!
//! A `Card` is one physical card in the game. It is owned by exactly one
//! zone at a time (deck, hand slot, reveal slot or discard pile) and moves
//! between zones by value.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::definition::{CardData, CardKind};
use crate::core::player::PlayerId;

/// Unique identifier of a physical card within one deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card in play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique ID for this physical card.
    pub id: CardId,

    /// Shared immutable card data.
    pub data: Arc<CardData>,

    /// Is the face visible?
    pub face_up: bool,

    /// Can the current player click it?
    pub interactable: bool,

    /// Seat whose hand holds the card. `None` outside hands.
    pub owner: Option<PlayerId>,
}

impl Card {
    /// Create a face-down, unowned, non-interactable card.
    #[must_use]
    pub fn new(id: CardId, data: Arc<CardData>) -> Self {
        Self {
            id,
            data,
            face_up: false,
            interactable: false,
            owner: None,
        }
    }

    /// Score value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.data.value
    }

    /// Dragon or crow.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.data.kind
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Set the face. Returns true if the card actually flipped.
    pub fn set_face_up(&mut self, face_up: bool) -> bool {
        let changed = self.face_up != face_up;
        self.face_up = face_up;
        changed
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.id, self.data.name, self.data.value)
    }
}
