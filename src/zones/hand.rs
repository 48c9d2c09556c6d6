//! A player's hand: ordered card slots split into two scoring columns.
//!
//! Slots `0..n/2` are the left column and `n/2..n` the right column. The
//! slot a card sits in decides which column it scores in, so swaps always
//! put the incoming card into the slot the outgoing card left.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::error::GameError;
use crate::rules::scoring;

/// Ordered card slots of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: SmallVec<[Option<Card>; 6]>,
}

impl Hand {
    /// Create a hand of `slot_count` empty slots.
    #[must_use]
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: (0..slot_count).map(|_| None).collect(),
        }
    }

    /// Number of slots, filled or not.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of filled slots.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// True when no slot holds a card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card_count() == 0
    }

    /// Slots per column.
    #[must_use]
    pub fn column_len(&self) -> usize {
        (self.slots.len() / 2).max(1)
    }

    /// The card in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Card> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut Card> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Every slot in order.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Card>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Every card present, in slot order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter().flatten()
    }

    pub(crate) fn cards_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.slots.iter_mut().flatten()
    }

    /// Place a card face-down into an empty slot.
    pub fn deal_card(&mut self, slot: usize, mut card: Card) -> Result<(), GameError> {
        let len = self.slots.len();
        let cell = self
            .slots
            .get_mut(slot)
            .ok_or_else(|| GameError::invariant(format!("slot {slot} outside a hand of {len}")))?;
        if let Some(existing) = cell {
            return Err(GameError::invariant(format!(
                "slot {slot} already holds {existing}"
            )));
        }

        card.set_face_up(false);
        *cell = Some(card);
        Ok(())
    }

    /// Exchange `card` with the card in `slot`.
    ///
    /// On success the slot holds the former `card` and `card` holds what was
    /// in the slot. An empty or missing slot leaves both untouched.
    pub fn swap(&mut self, slot: usize, card: &mut Card) -> Result<(), GameError> {
        let held = self
            .slots
            .get_mut(slot)
            .and_then(Option::as_mut)
            .ok_or_else(|| GameError::invariant(format!("no card in hand slot {slot}")))?;

        std::mem::swap(held, card);
        Ok(())
    }

    /// Turn every card face-up. Returns the slots that were flipped.
    pub fn reveal_all(&mut self) -> SmallVec<[usize; 6]> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(slot, cell)| {
                let card = cell.as_mut()?;
                card.set_face_up(true).then_some(slot)
            })
            .collect()
    }

    /// Are all slots filled with face-up cards?
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.slots
            .iter()
            .all(|cell| cell.as_ref().is_some_and(|c| c.face_up))
    }

    /// Score of the face-up cards.
    ///
    /// Each column scores independently: a column holding two equal values
    /// scores zero, otherwise the sum of its values. Face-down cards are
    /// ignored.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.slots
            .chunks(self.column_len())
            .map(|column| {
                let visible: SmallVec<[i32; 3]> = column
                    .iter()
                    .flatten()
                    .filter(|c| c.face_up)
                    .map(Card::value)
                    .collect();
                scoring::column_contribution(&visible)
            })
            .sum()
    }
}
