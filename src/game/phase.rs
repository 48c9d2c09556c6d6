//! Game phases and turn stages.

use serde::{Deserialize, Serialize};

/// Top-level lifecycle: `Setup → PlayerTurn → GameEnd`.
///
/// Only a restart leaves `GameEnd`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Cards are being dealt.
    #[default]
    Setup,
    /// Players take turns.
    PlayerTurn,
    /// All hands are revealed and the winner is known.
    GameEnd,
}

/// Where the current turn is in the reveal-swap-discard cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnStage {
    /// Nothing revealed: draw from the deck or lift a discard top.
    Idle,
    /// A card sits in the reveal slot: swap it into the hand or discard it.
    Revealed,
    /// A card waits for the player to pick its discard pile.
    AwaitingDiscard,
}

impl TurnStage {
    /// Derive the stage from the two staging slots.
    #[must_use]
    pub fn from_slots(revealed: bool, awaiting_discard: bool) -> Self {
        match (revealed, awaiting_discard) {
            (_, true) => TurnStage::AwaitingDiscard,
            (true, false) => TurnStage::Revealed,
            (false, false) => TurnStage::Idle,
        }
    }
}
