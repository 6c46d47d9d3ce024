//! Per-player account: cash, position, holdings and jail flag.
//!
//! An account is pure bookkeeping. It never looks at the board; callers pass
//! the board size to [`Account::move_by`] and keep `inventory` in step with
//! the property owners (see [`crate::rules::transactions`]).

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Cash balance. Signed because a charge can overdraw an account.
pub type Money = i64;

/// Mutable state of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: PlayerId,
    position: usize,
    cash: Money,
    /// Field indices of owned properties. Back-references only; the board's
    /// `Property::owner` is the authority.
    inventory: OrdSet<usize>,
    jailed: bool,
}

impl Account {
    /// Open an account on Start with the given cash.
    pub fn new(id: PlayerId, cash: Money) -> Self {
        Self {
            id,
            position: 0,
            cash,
            inventory: OrdSet::new(),
            jailed: false,
        }
    }

    /// Place the account on a field before play begins.
    #[must_use]
    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Start the account jailed at `jail_index`.
    #[must_use]
    pub fn jailed_at(mut self, jail_index: usize) -> Self {
        self.position = jail_index;
        self.jailed = true;
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn cash(&self) -> Money {
        self.cash
    }

    #[must_use]
    pub fn inventory(&self) -> &OrdSet<usize> {
        &self.inventory
    }

    #[must_use]
    pub fn owns(&self, field: usize) -> bool {
        self.inventory.contains(&field)
    }

    /// Advance `delta` fields on a board of `board_size` fields.
    ///
    /// Returns how many times the move passed or landed past the last index,
    /// i.e. how many pass-start bonuses are owed. Always 0 or 1 for a dice
    /// roll on the reference board.
    pub fn move_by(&mut self, delta: usize, board_size: usize) -> usize {
        assert!(board_size > 0, "board must have at least one field");

        let travelled = self.position + delta;
        self.position = travelled % board_size;
        travelled / board_size
    }

    /// Put the account on `index` directly. Never counts as a wrap.
    pub fn teleport(&mut self, index: usize) {
        self.position = index;
    }

    pub fn credit(&mut self, amount: u32) {
        self.cash += Money::from(amount);
    }

    /// Deduct `amount` in full and report how much of it was covered.
    ///
    /// The recovered amount is `min(cash, amount)` taken before the deduction.
    /// Cash always drops by the full amount, so an overdraft leaves it
    /// negative; that negative balance is what the scheduler reads as
    /// bankruptcy.
    pub fn charge(&mut self, amount: u32) -> u32 {
        let due = Money::from(amount);
        let recovered = self.cash.clamp(0, due);
        self.cash -= due;
        u32::try_from(recovered).unwrap_or(amount)
    }

    #[must_use]
    pub fn can_afford(&self, amount: u32) -> bool {
        self.cash >= Money::from(amount)
    }

    pub fn acquire_property(&mut self, field: usize) {
        self.inventory.insert(field);
    }

    pub fn release_property(&mut self, field: usize) {
        self.inventory.remove(&field);
    }

    /// Empty the inventory, returning what it held in field order.
    pub fn release_all(&mut self) -> Vec<usize> {
        let held: Vec<usize> = self.inventory.iter().copied().collect();
        self.inventory.clear();
        held
    }

    pub fn set_jailed(&mut self, jailed: bool) {
        self.jailed = jailed;
    }

    #[must_use]
    pub fn is_jailed(&self) -> bool {
        self.jailed
    }

    #[must_use]
    pub fn is_solvent(&self) -> bool {
        self.cash >= 0
    }
}
