//! Game rules.
//!
//! - [`transactions`]: cash and ownership primitives
//! - [`FieldResolver`]: one turn as a state machine over [`TurnPhase`]
//! - [`GameResult`]: how a finished game ended
//!
//! The resolver is the only caller of the decision provider and the dice
//! source; transactions never prompt or roll.

pub mod engine;
mod resolver;
pub mod transactions;

pub use engine::GameResult;
pub use resolver::{FieldResolver, TurnPhase, TurnSummary};
pub use transactions::RentReceipt;
