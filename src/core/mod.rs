//! Core engine types: players, accounts, state, RNG, configuration, errors.
//!
//! Everything here is independent of the turn rules; the `rules` and
//! `schedule` modules build on these types.

pub mod account;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use account::{Account, Money};
pub use config::{BankruptcyPolicy, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{GameError, TransactionError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
