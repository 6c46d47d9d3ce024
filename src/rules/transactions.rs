//! Cash and ownership transfers.
//!
//! Each primitive checks its preconditions first and returns a
//! [`TransactionError`] without touching state if any fails. On success it
//! updates both sides of the ownership link (`Property::owner` and the
//! owner's inventory) together.
//!
//! The bank is not modelled: money paid to it disappears, money paid by it
//! appears.

use crate::core::{GameError, GameState, PlayerId, TransactionError};

/// What a rent payment moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RentReceipt {
    pub owner: PlayerId,
    /// Rent charged to the payer in full.
    pub due: u32,
    /// Portion the payer could cover, credited to the owner.
    pub paid: u32,
}

/// Buy the unowned property at `field` from the bank.
///
/// Returns the price paid.
pub fn purchase(state: &mut GameState, buyer: PlayerId, field: usize) -> Result<u32, GameError> {
    let property = state
        .board()
        .property(field)
        .ok_or(TransactionError::NotAProperty(field))?;
    if let Some(owner) = property.owner() {
        return Err(TransactionError::AlreadyOwned { field, owner }.into());
    }
    let price = property.price();

    let account = state.account(buyer)?;
    if !account.can_afford(price) {
        return Err(TransactionError::Unaffordable {
            price,
            cash: account.cash(),
        }
        .into());
    }

    let account = state.account_mut(buyer)?;
    account.charge(price);
    account.acquire_property(field);
    set_owner(state, field, Some(buyer));

    tracing::info!(player = %buyer, field, price, "property purchased");
    Ok(price)
}

/// Charge `payer` the rent on `field` and credit the owner with what was
/// recovered.
///
/// The payer loses the full rent even when it overdraws them; the owner only
/// receives the covered portion.
pub fn collect_rent(
    state: &mut GameState,
    payer: PlayerId,
    field: usize,
) -> Result<RentReceipt, GameError> {
    let property = state
        .board()
        .property(field)
        .ok_or(TransactionError::NotAProperty(field))?;
    let owner = property.owner().ok_or(TransactionError::Unowned(field))?;
    if owner == payer {
        return Err(TransactionError::OwnProperty {
            field,
            player: payer,
        }
        .into());
    }
    let due = property.rent();

    // Both accounts must exist before any cash moves.
    state.account(owner)?;
    let paid = state.account_mut(payer)?.charge(due);
    state.account_mut(owner)?.credit(paid);

    tracing::debug!(payer = %payer, owner = %owner, field, due, paid, "rent collected");
    Ok(RentReceipt { owner, due, paid })
}

/// Charge a flat tax. Returns the portion the payer could cover.
pub fn pay_tax(state: &mut GameState, payer: PlayerId, amount: u32) -> Result<u32, GameError> {
    let covered = state.account_mut(payer)?.charge(amount);
    tracing::debug!(player = %payer, amount, covered, "tax charged");
    Ok(covered)
}

/// Credit the pass-start bonus.
pub fn pay_bonus(state: &mut GameState, player: PlayerId, amount: u32) -> Result<(), GameError> {
    state.account_mut(player)?.credit(amount);
    Ok(())
}

/// Pay `bail` and leave jail. Refused without charge if unaffordable.
pub fn pay_bail(state: &mut GameState, player: PlayerId, bail: u32) -> Result<(), GameError> {
    let account = state.account_mut(player)?;
    if !account.can_afford(bail) {
        return Err(TransactionError::Unaffordable {
            price: bail,
            cash: account.cash(),
        }
        .into());
    }

    account.charge(bail);
    account.set_jailed(false);
    Ok(())
}

/// Sell a property back to the bank for its sell value.
///
/// Returns the amount credited.
pub fn sell_to_bank(
    state: &mut GameState,
    seller: PlayerId,
    field: usize,
) -> Result<u32, GameError> {
    let property = state
        .board()
        .property(field)
        .ok_or(TransactionError::NotAProperty(field))?;
    if property.owner() != Some(seller) {
        return Err(TransactionError::NotOwner {
            field,
            player: seller,
        }
        .into());
    }
    let value = property.sell_value();

    let account = state.account_mut(seller)?;
    account.release_property(field);
    account.credit(value);
    set_owner(state, field, None);

    tracing::info!(player = %seller, field, value, "property sold to bank");
    Ok(value)
}

/// Hand every property `player` owns back to the bank, unpaid.
///
/// Returns the released field indices in board order.
pub fn release_holdings(state: &mut GameState, player: PlayerId) -> Result<Vec<usize>, GameError> {
    let released = state.account_mut(player)?.release_all();
    for &field in &released {
        set_owner(state, field, None);
    }
    Ok(released)
}

fn set_owner(state: &mut GameState, field: usize, owner: Option<PlayerId>) {
    if let Some(property) = state.board_mut().property_mut(field) {
        property.set_owner(owner);
    }
}
