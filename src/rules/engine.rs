//! Game outcomes.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Every other player went bankrupt.
    Winner(PlayerId),
    /// The turn limit ran out. `leader` had the highest net worth.
    TurnLimit { leader: PlayerId },
}

impl GameResult {
    /// Check if a player won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winner, or the leader when the turn limit was hit.
    #[must_use]
    pub fn leader(&self) -> PlayerId {
        match *self {
            GameResult::Winner(p) => p,
            GameResult::TurnLimit { leader } => leader,
        }
    }
}
