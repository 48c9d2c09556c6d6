//! Shell-to-core actions.
//!
//! Every input the presentation layer can send is an `Action`. The
//! controller exposes one method per action, and `GameController::apply`
//! dispatches a serialized `Action` to the same code path.
//! Accepted actions are recorded as `ActionRecord`s.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Reveal the next card of the deck.
    DrawFromDeck,
    /// Lift the top card of a discard pile into the reveal slot.
    SelectDiscardTop { pile: usize },
    /// Swap a hand card with the revealed card.
    ClickHandCard { player: PlayerId, slot: usize },
    /// Keep the hand as is and discard the revealed card.
    ClickRevealedCard,
    /// Put the card awaiting discard on a pile, ending the turn.
    ChooseDiscardPile { pile: usize },
    /// Throw the current game away and deal a new one.
    Restart,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::DrawFromDeck => write!(f, "draw from deck"),
            Action::SelectDiscardTop { pile } => write!(f, "take top of pile {pile}"),
            Action::ClickHandCard { player, slot } => write!(f, "swap {player} slot {slot}"),
            Action::ClickRevealedCard => write!(f, "discard revealed card"),
            Action::ChooseDiscardPile { pile } => write!(f, "discard onto pile {pile}"),
            Action::Restart => write!(f, "restart"),
        }
    }
}

/// An accepted action with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        let swap = Action::ClickHandCard {
            player: PlayerId::new(1),
            slot: 4,
        };
        assert_eq!(swap.to_string(), "swap Player 1 slot 4");
        assert_eq!(Action::ChooseDiscardPile { pile: 0 }.to_string(), "discard onto pile 0");
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::new(3),
            Action::SelectDiscardTop { pile: 1 },
            7,
            0,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
