//! External collaborators the engine blocks on.
//!
//! - [`DiceSource`]: two die faces per roll ([`GameRng`](crate::core::GameRng),
//!   [`ScriptedDice`])
//! - [`DecisionProvider`]: answers to purchase and jail prompts
//!   ([`ScriptedDecisions`], [`StandingOrders`])
//!
//! Both are passed into the game explicitly; there is no global RNG or
//! input handler.

mod decision;
mod dice;

pub use decision::{
    Choice, DecisionProvider, JailStrategy, Prompt, ScriptedDecisions, StandingOrders,
};
pub use dice::{DiceSource, Roll, ScriptedDice};
