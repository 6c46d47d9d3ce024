//! Player decisions.
//!
//! The engine asks for a decision at exactly two points: an unowned property
//! was landed on, or a jailed player starts a turn. It blocks on
//! [`DecisionProvider::decide`] until it gets an answer, and re-asks when the
//! answer is not one the prompt offers.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{Money, PlayerId};

/// An answer to a [`Prompt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Accept,
    Decline,
    RollForRelease,
    PayBail,
    /// The provider gives up on this prompt. Valid for every prompt: a
    /// purchase is treated as declined, a jailed player stays jailed.
    Abandon,
}

/// A decision the engine needs from a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// Buy the unowned property just landed on?
    Purchase {
        field: usize,
        name: String,
        price: u32,
        cash: Money,
    },
    /// Try for doubles or pay to leave jail?
    JailRelease { bail: u32, cash: Money },
}

impl Prompt {
    /// Choices the prompt offers, besides `Abandon`.
    #[must_use]
    pub fn options(&self) -> &'static [Choice] {
        match self {
            Prompt::Purchase { .. } => &[Choice::Accept, Choice::Decline],
            Prompt::JailRelease { .. } => &[Choice::RollForRelease, Choice::PayBail],
        }
    }

    /// Whether `choice` is a valid answer to this prompt.
    #[must_use]
    pub fn accepts(&self, choice: Choice) -> bool {
        choice == Choice::Abandon || self.options().contains(&choice)
    }
}

/// Source of player decisions.
pub trait DecisionProvider {
    /// Answer `prompt` on behalf of `player`.
    fn decide(&mut self, player: PlayerId, prompt: &Prompt) -> Choice;
}

impl<T: DecisionProvider + ?Sized> DecisionProvider for Box<T> {
    fn decide(&mut self, player: PlayerId, prompt: &Prompt) -> Choice {
        (**self).decide(player, prompt)
    }
}

/// Answers from a fixed queue, then `Abandon` once it is empty.
///
/// Every prompt seen is kept, so tests can check what the engine asked.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecisions {
    answers: VecDeque<Choice>,
    asked: Vec<(PlayerId, Prompt)>,
}

impl ScriptedDecisions {
    pub fn new(answers: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts received so far, oldest first.
    #[must_use]
    pub fn asked(&self) -> &[(PlayerId, Prompt)] {
        &self.asked
    }

    /// Answers not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn decide(&mut self, player: PlayerId, prompt: &Prompt) -> Choice {
        self.asked.push((player, prompt.clone()));
        self.answers.pop_front().unwrap_or(Choice::Abandon)
    }
}

/// How [`StandingOrders`] tries to leave jail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailStrategy {
    /// Always roll for doubles.
    #[default]
    RollForDoubles,
    /// Pay the bail when the cash covers it, otherwise roll.
    PayWhenAffordable,
}

/// Gives the same answer to every prompt of a kind.
///
/// Every answer it gives can be resolved, so a turn played against standing
/// orders always ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandingOrders {
    buy: bool,
    jail: JailStrategy,
}

impl StandingOrders {
    /// Buy everything offered and try for doubles in jail.
    #[must_use]
    pub fn buy_everything() -> Self {
        Self {
            buy: true,
            jail: JailStrategy::RollForDoubles,
        }
    }

    /// Never buy; try for doubles in jail.
    #[must_use]
    pub fn decline_everything() -> Self {
        Self {
            buy: false,
            jail: JailStrategy::RollForDoubles,
        }
    }

    #[must_use]
    pub fn with_jail_strategy(mut self, jail: JailStrategy) -> Self {
        self.jail = jail;
        self
    }

    #[must_use]
    pub fn buys(&self) -> bool {
        self.buy
    }

    #[must_use]
    pub fn jail_strategy(&self) -> JailStrategy {
        self.jail
    }
}

impl DecisionProvider for StandingOrders {
    fn decide(&mut self, _player: PlayerId, prompt: &Prompt) -> Choice {
        match *prompt {
            Prompt::Purchase { .. } if self.buy => Choice::Accept,
            Prompt::Purchase { .. } => Choice::Decline,
            Prompt::JailRelease { bail, cash } => match self.jail {
                JailStrategy::PayWhenAffordable if cash >= Money::from(bail) => Choice::PayBail,
                JailStrategy::PayWhenAffordable | JailStrategy::RollForDoubles => {
                    Choice::RollForRelease
                }
            },
        }
    }
}
