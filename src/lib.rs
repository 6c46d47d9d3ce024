//! # rust-monopoly
//!
//! A deterministic engine for a simplified property-trading board game.
//!
//! ## Design Principles
//!
//! 1. **Injected Collaborators**: Dice, player decisions and output are
//!    traits handed to the game. There is no global RNG, no stdin and no
//!    printing inside the engine.
//!
//! 2. **Closed Field Set**: Every field kind is a variant of one enum, and
//!    every place that acts on a field matches it exhaustively.
//!
//! 3. **Events Over Text**: Everything that happens is a [`GameEvent`].
//!    Sinks decide whether to record, log or drop it.
//!
//! ## Architecture
//!
//! - **Turn State Machine**: [`FieldResolver`] runs a turn through explicit
//!   [`TurnPhase`]s and blocks only on the dice source and decision provider.
//!
//! - **Persistent Data Structures**: Inventories use `im-rs` so a
//!   [`GameState`] clones cheaply for snapshots.
//!
//! - **Reproducibility**: A seeded [`GameRng`] plus scripted decisions
//!   replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: Player ids, accounts, state, RNG, configuration, errors
//! - `board`: Field kinds and the reference board layout
//! - `providers`: Dice sources and decision providers
//! - `events`: Game events and sinks
//! - `rules`: Transaction primitives, the turn resolver, game results
//! - `schedule`: Turn rotation and bankruptcy detection
//! - `game`: The orchestrator tying it all together

pub mod board;
pub mod core;
pub mod events;
pub mod game;
pub mod providers;
pub mod rules;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{
    Account, BankruptcyPolicy, GameConfig, GameError, GameRng, GameRngState, GameState, Money,
    PlayerId, PlayerMap, TransactionError, MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::board::{Board, Field, Property, REFERENCE_BAIL, REFERENCE_BOARD_SIZE};

pub use crate::providers::{
    Choice, DecisionProvider, DiceSource, JailStrategy, Prompt, Roll, ScriptedDecisions,
    ScriptedDice, StandingOrders,
};

pub use crate::events::{EventSink, GameEvent, NullSink, RecordingSink, ReleaseMethod, TracingSink};

pub use crate::rules::{FieldResolver, GameResult, RentReceipt, TurnPhase, TurnSummary};

pub use crate::schedule::{Advance, Rotation, Scheduler};

pub use crate::game::Game;
