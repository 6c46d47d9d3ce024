//! Engine errors.
//!
//! Gameplay outcomes such as a declined purchase or a bankruptcy are events,
//! not errors. What lands here is either a rejected transaction precondition
//! (which the resolver turns into an event) or a broken contract that stops
//! the game loop.

use super::player::PlayerId;
use super::account::Money;

/// A transaction precondition did not hold. No state was changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    #[error("field {0} is not a property")]
    NotAProperty(usize),
    #[error("field {field} is already owned by {owner}")]
    AlreadyOwned { field: usize, owner: PlayerId },
    #[error("field {0} has no owner")]
    Unowned(usize),
    #[error("{player} does not own field {field}")]
    NotOwner { field: usize, player: PlayerId },
    #[error("{player} owns field {field} and cannot pay rent on it")]
    OwnProperty { field: usize, player: PlayerId },
    #[error("cannot afford {price} with {cash} in cash")]
    Unaffordable { price: u32, cash: Money },
}

/// Errors surfaced by the game loop and its setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("dice values ({0}, {1}) outside 1..=6")]
    InvalidDice(u8, u8),
    #[error("player count {0} outside 2..=8")]
    InvalidPlayerCount(usize),
    #[error("board has no fields")]
    EmptyBoard,
    #[error("board has a go-to-jail field but no jail")]
    MissingJail,
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("{0} has left the rotation")]
    PlayerEliminated(PlayerId),
    #[error("game is already over")]
    GameOver,
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}
