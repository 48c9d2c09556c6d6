//! Error types.
//!
//! - `ConfigError`: the configuration cannot produce a game. Fatal at setup.
//! - `RejectReason`: an action arrived in the wrong phase, stage or seat, or
//!   named a slot/pile that cannot be used. Recoverable; state is unchanged.
//! - `GameError`: what every controller operation returns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardKind;

/// The configuration cannot produce a playable game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("need {needed} {kind} asset bindings, got {got}")]
    MissingAssets {
        kind: CardKind,
        needed: usize,
        got: usize,
    },

    #[error("player count must be 2-8, got {0}")]
    PlayerCount(usize),

    #[error("hand size must be even and at least 2, got {0}")]
    HandSize(usize),

    #[error("at least one discard pile is required")]
    NoDiscardPiles,

    #[error("copies per card type must be at least 1")]
    NoCopies,

    #[error("value {value} is used by both {first} and {second}")]
    ValueCollision {
        value: i32,
        first: String,
        second: String,
    },

    #[error("dealing {needed} cards leaves nothing to draw from a deck of {available}")]
    NotEnoughCards { needed: usize, available: usize },
}

/// Why an action was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum RejectReason {
    #[error("the game is still being dealt")]
    NotStarted,

    #[error("dealing has already finished")]
    NotDealing,

    #[error("the game is over")]
    GameOver,

    #[error("a card is already revealed")]
    CardAlreadyRevealed,

    #[error("no card has been revealed")]
    NoRevealedCard,

    #[error("a card is waiting to be discarded")]
    DiscardPending,

    #[error("no card is waiting to be discarded")]
    NothingToDiscard,

    #[error("{player} cannot act during {current}'s turn")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),

    #[error("hand slot {0} does not exist")]
    InvalidSlot(usize),

    #[error("discard pile {0} does not exist")]
    InvalidPile(usize),

    #[error("discard pile {0} is empty")]
    EmptyPile(usize),

    #[error("the deck is empty")]
    DeckEmpty,
}

/// Error returned by controller operations.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("illegal action: {0}")]
    IllegalAction(#[from] RejectReason),

    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl GameError {
    /// The rejection reason, if this is an illegal action.
    #[must_use]
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            GameError::IllegalAction(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Is this a recoverable rejection?
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, GameError::IllegalAction(_))
    }

    pub(crate) fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }
}
