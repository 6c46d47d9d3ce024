//! Game configuration.
//!
//! `GameConfig` carries the table-level rules: seat count, money supply and
//! how the game may end. The board itself is fixed and lives in
//! [`crate::board::Board::reference`].

use serde::{Deserialize, Serialize};

use super::account::Money;

/// Smallest table the scheduler will run.
pub const MIN_PLAYERS: usize = 2;

/// Largest table; the rotation ring stays inline up to this size.
pub const MAX_PLAYERS: usize = 8;

/// Cash each player starts with unless overridden.
pub const DEFAULT_STARTING_CASH: Money = 1500;

/// Bonus paid each time a player wraps past Start.
pub const DEFAULT_PASS_START_BONUS: u32 = 200;

/// What happens to a bankrupt player's properties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankruptcyPolicy {
    /// Properties stay with the eliminated player and keep collecting rent.
    #[default]
    KeepHoldings,
    /// Properties go back to the bank and can be bought again.
    ReturnToBank,
}

/// Complete game configuration.
///
/// ```
/// use rust_monopoly::core::{BankruptcyPolicy, GameConfig};
///
/// let config = GameConfig::new(3)
///     .with_starting_cash(1000)
///     .with_max_turns(300)
///     .with_bankruptcy_policy(BankruptcyPolicy::ReturnToBank);
///
/// assert_eq!(config.player_count, 3);
/// assert_eq!(config.pass_start_bonus, 200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-8).
    pub player_count: usize,

    /// Cash every account opens with.
    pub starting_cash: Money,

    /// Bonus credited per wrap past Start.
    pub pass_start_bonus: u32,

    /// Stop after this many turns and rank by net worth. `None` plays until
    /// a single solvent player is left.
    pub max_turns: Option<u32>,

    /// Treatment of a bankrupt player's properties.
    pub bankruptcy: BankruptcyPolicy,
}

impl GameConfig {
    /// Create a configuration with the default money supply.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            starting_cash: DEFAULT_STARTING_CASH,
            pass_start_bonus: DEFAULT_PASS_START_BONUS,
            max_turns: None,
            bankruptcy: BankruptcyPolicy::default(),
        }
    }

    /// Set the opening cash.
    #[must_use]
    pub fn with_starting_cash(mut self, cash: Money) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Set the pass-start bonus.
    #[must_use]
    pub fn with_pass_start_bonus(mut self, bonus: u32) -> Self {
        self.pass_start_bonus = bonus;
        self
    }

    /// Cap the game length.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    /// Choose the bankruptcy policy.
    #[must_use]
    pub fn with_bankruptcy_policy(mut self, policy: BankruptcyPolicy) -> Self {
        self.bankruptcy = policy;
        self
    }

    /// Check the seat count against the supported range.
    pub fn validate(&self) -> Result<(), super::GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(super::GameError::InvalidPlayerCount(self.player_count));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MIN_PLAYERS)
    }
}
