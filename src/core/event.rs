//! Core-to-presentation notifications.
//!
//! The controller never renders anything. Every state change that the
//! presentation layer could show is published as a `GameEvent`, delivered
//! synchronously to each registered `GameObserver` in the order the changes
//! happen.
//!
//! ## Example
//!
//! ```
//! use dragon_crow::core::{EventLog, GameEvent, GameObserver, PlayerId};
//!
//! let log = EventLog::new();
//! let mut observer = log.clone();
//! observer.on_event(&GameEvent::TurnChanged { player: PlayerId::new(1) });
//!
//! assert_eq!(log.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use super::error::RejectReason;
use super::player::{PlayerId, PlayerMap};
use crate::cards::Card;
use crate::zones::Zone;

/// A notification for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card now lives in `zone` (at `slot` for hands).
    CardMoved {
        card: Card,
        zone: Zone,
        slot: Option<usize>,
    },
    /// A card was flipped.
    CardFaceChanged { card: Card, face_up: bool },
    /// Scores of every seat, in seat order.
    ScoresUpdated { scores: PlayerMap<i32> },
    /// It is now `player`'s turn.
    TurnChanged { player: PlayerId },
    /// Final result.
    GameEnded {
        winner: PlayerId,
        scores: PlayerMap<i32>,
    },
    /// An action was refused; nothing changed.
    ActionRejected { reason: RejectReason },
}

/// Receives game events.
///
/// Closures taking `&GameEvent` are observers too.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Observer that records every event for later inspection.
///
/// Clones share the same buffer, so keep one clone and register another.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
