//! Turn scheduling and bankruptcy detection.

use crate::core::{GameError, GameState, PlayerId};
use crate::events::{EventSink, GameEvent};

use super::rotation::Rotation;

/// What the scheduler decided after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// `player` moves next.
    Next {
        player: PlayerId,
        bankrupted: Option<PlayerId>,
    },
    /// Only `winner` is left.
    GameOver {
        winner: PlayerId,
        bankrupted: Option<PlayerId>,
    },
}

impl Advance {
    /// The player removed by this advance, if any.
    #[must_use]
    pub fn bankrupted(&self) -> Option<PlayerId> {
        match *self {
            Advance::Next { bankrupted, .. } | Advance::GameOver { bankrupted, .. } => bankrupted,
        }
    }
}

/// Decides who moves next.
///
/// Bankruptcy is checked only for the player who just moved: a turn is the
/// only place cash can go negative.
#[derive(Clone, Debug)]
pub struct Scheduler {
    rotation: Rotation,
    started: bool,
}

impl Scheduler {
    pub fn new(players: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            rotation: Rotation::new(players),
            started: false,
        }
    }

    /// Player whose turn it is. `None` before the first advance.
    #[must_use]
    pub fn current(&self) -> Option<PlayerId> {
        self.started.then(|| self.rotation.current())
    }

    #[must_use]
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.rotation.contains(player)
    }

    /// Close out the current turn and pick the next player.
    ///
    /// The first call only starts the game at the first seat.
    pub fn advance<S: EventSink + ?Sized>(
        &mut self,
        state: &GameState,
        sink: &mut S,
    ) -> Result<Advance, GameError> {
        let mut bankrupted = None;

        if self.started {
            let finished = self.rotation.current();
            let account = state.account(finished)?;
            let cash = account.cash();
            if account.is_solvent() {
                self.rotation.pass();
            } else {
                self.rotation.remove_current();
                tracing::info!(
                    player = %finished,
                    cash,
                    remaining = self.rotation.len(),
                    "player bankrupt"
                );
                sink.emit(GameEvent::PlayerBankrupted {
                    player: finished,
                    cash,
                });
                bankrupted = Some(finished);
            }
        } else {
            self.started = true;
        }

        let player = self.rotation.current();
        if self.rotation.len() == 1 {
            Ok(Advance::GameOver {
                winner: player,
                bankrupted,
            })
        } else {
            Ok(Advance::Next { player, bankrupted })
        }
    }
}
