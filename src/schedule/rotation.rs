//! The turn ring.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Players still in the game, in seat order, with a head pointing at the
/// player whose turn it is.
///
/// Eight seats fit inline, which covers every legal player count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotation {
    seats: SmallVec<[PlayerId; 8]>,
    head: usize,
}

impl Rotation {
    /// Seat the players in the given order. The first one is current.
    pub fn new(players: impl IntoIterator<Item = PlayerId>) -> Self {
        let seats: SmallVec<[PlayerId; 8]> = players.into_iter().collect();
        assert!(!seats.is_empty(), "rotation needs at least one player");
        Self { seats, head: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Always false; a rotation keeps at least one seat.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.seats[self.head]
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.seats.contains(&player)
    }

    /// Remaining players in seat order, independent of the head.
    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.seats
    }

    /// Hand the turn to the next seat.
    pub fn pass(&mut self) {
        self.head = (self.head + 1) % self.seats.len();
    }

    /// Remove the current player. The turn passes to the seat after them.
    ///
    /// # Panics
    ///
    /// Panics when called on the last remaining seat.
    pub fn remove_current(&mut self) -> PlayerId {
        assert!(self.seats.len() > 1, "cannot remove the last seat");
        let removed = self.seats.remove(self.head);
        if self.head == self.seats.len() {
            self.head = 0;
        }
        removed
    }
}
