//! End-of-game result.

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerMap};

/// Final scores and the winning seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Lowest score. On a tie, the lowest seat index among the tied players.
    pub winner: PlayerId,

    /// Final score of every seat.
    pub scores: PlayerMap<i32>,
}

impl GameOutcome {
    /// Pick the winner from final scores.
    ///
    /// ```
    /// use dragon_crow::core::{PlayerId, PlayerMap};
    /// use dragon_crow::rules::GameOutcome;
    ///
    /// let scores = PlayerMap::new(4, |p| [14, 3, 3, 20][p.index()]);
    /// let outcome = GameOutcome::from_scores(scores);
    ///
    /// assert_eq!(outcome.winner, PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn from_scores(scores: PlayerMap<i32>) -> Self {
        // min_by_key keeps the first of equal minima.
        let winner = scores
            .iter()
            .min_by_key(|(_, score)| **score)
            .map_or(PlayerId::new(0), |(player, _)| player);

        Self { winner, scores }
    }

    /// Did `player` win?
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// Seats tied with the winner, winner included.
    #[must_use]
    pub fn tied_with_winner(&self) -> Vec<PlayerId> {
        let best = self.scores[self.winner];
        self.scores
            .iter()
            .filter(|(_, score)| **score == best)
            .map(|(player, _)| player)
            .collect()
    }
}
