//! Game state: the board plus every player's account.
//!
//! `GameState` is the only mutable world the engine has. Reads are open to
//! everyone; writes go through [`crate::rules::transactions`] and the
//! resolver, which keep `Property::owner` and `Account::inventory` in step.
//!
//! Inventories are `im` persistent sets, so cloning a state for inspection
//! or replay comparison is cheap.

use super::account::{Account, Money};
use super::error::GameError;
use super::player::{PlayerId, PlayerMap};
use crate::board::Board;

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    accounts: PlayerMap<Account>,
    /// Turns played so far.
    pub turn_number: u32,
}

impl GameState {
    /// Seat `player_count` players on Start, each with `starting_cash`.
    #[must_use]
    pub fn new(board: Board, player_count: usize, starting_cash: Money) -> Self {
        Self {
            board,
            accounts: PlayerMap::new(player_count, |id| Account::new(id, starting_cash)),
            turn_number: 0,
        }
    }

    /// Build a state from prepared accounts, in seat order.
    ///
    /// Fails if an account's id does not match its seat.
    pub fn from_accounts(board: Board, accounts: Vec<Account>) -> Result<Self, GameError> {
        if let Some((_, misplaced)) = accounts
            .iter()
            .enumerate()
            .find(|(seat, acc)| acc.id().index() != *seat)
        {
            return Err(GameError::UnknownPlayer(misplaced.id()));
        }

        Ok(Self {
            board,
            accounts: PlayerMap::from_vec(accounts),
            turn_number: 0,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.accounts.player_count()
    }

    /// Iterate over all seats.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.accounts.player_ids()
    }

    /// Account for `player`.
    pub fn account(&self, player: PlayerId) -> Result<&Account, GameError> {
        self.accounts
            .get(player)
            .ok_or(GameError::UnknownPlayer(player))
    }

    pub(crate) fn account_mut(&mut self, player: PlayerId) -> Result<&mut Account, GameError> {
        self.accounts
            .get_mut(player)
            .ok_or(GameError::UnknownPlayer(player))
    }

    /// Iterate over every account in seat order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter().map(|(_, acc)| acc)
    }

    /// Cash plus the sell value of everything `player` owns.
    pub fn net_worth(&self, player: PlayerId) -> Result<Money, GameError> {
        let account = self.account(player)?;
        let holdings: Money = account
            .inventory()
            .iter()
            .filter_map(|&i| self.board.property(i))
            .map(|p| Money::from(p.sell_value()))
            .sum();
        Ok(account.cash() + holdings)
    }

    /// Whether every owner and inventory agree.
    ///
    /// Holds when each owned property appears in exactly its owner's
    /// inventory and every inventory entry points at a property owned by
    /// that account.
    #[must_use]
    pub fn ownership_consistent(&self) -> bool {
        let owners_match = self.board.properties().all(|(i, p)| {
            self.accounts()
                .all(|acc| acc.owns(i) == (p.owner() == Some(acc.id())))
        });
        let inventories_match = self.accounts().all(|acc| {
            acc.inventory()
                .iter()
                .all(|&i| self.board.property(i).and_then(|p| p.owner()) == Some(acc.id()))
        });
        owners_match && inventories_match
    }
}
