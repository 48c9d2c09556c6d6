//! The opening deal as an ordered, restartable list of steps.
//!
//! Seat 0 receives slots `0..n` first, then seat 1, and so on. Steps have
//! no dependency on each other beyond their order, so the shell may run
//! them all at once or one per animation tick.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Deal one card to `player` at `slot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DealStep {
    pub player: PlayerId,
    pub slot: usize,
}

/// Ordered deal plan with a cursor.
///
/// ```
/// use dragon_crow::core::PlayerId;
/// use dragon_crow::game::{DealSequence, DealStep};
///
/// let mut deal = DealSequence::new(4, 6);
/// assert_eq!(deal.len(), 24);
/// assert_eq!(deal.next_step(), Some(DealStep { player: PlayerId::new(0), slot: 0 }));
/// assert_eq!(deal.remaining(), 23);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealSequence {
    steps: Vec<DealStep>,
    cursor: usize,
}

impl DealSequence {
    /// Plan a deal of `cards_per_player` cards to each of `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize, cards_per_player: usize) -> Self {
        let steps = PlayerId::all(player_count)
            .flat_map(|player| (0..cards_per_player).map(move |slot| DealStep { player, slot }))
            .collect();
        Self { steps, cursor: 0 }
    }

    /// Take the next step.
    pub fn next_step(&mut self) -> Option<DealStep> {
        let step = self.steps.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(step)
    }

    /// The step `next_step` would return.
    #[must_use]
    pub fn peek(&self) -> Option<DealStep> {
        self.steps.get(self.cursor).copied()
    }

    /// Start over from the first step.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Steps already taken.
    #[must_use]
    pub fn dealt(&self) -> usize {
        self.cursor
    }

    /// Steps left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len() - self.cursor
    }

    /// Total steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// True if this is the plan for the given table and the cursor lies
    /// within it.
    #[must_use]
    pub fn is_plan_for(&self, player_count: usize, cards_per_player: usize) -> bool {
        self.cursor <= self.steps.len()
            && self.steps == Self::new(player_count, cards_per_player).steps
    }
}
