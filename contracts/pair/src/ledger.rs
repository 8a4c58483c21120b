//! The two balance ledgers the pair keeps in its own storage: liquidity
//! shares and slippage claims. They are independent maps; neither knows
//! the other exists.

use soroban_sdk::{vec, Address, Env, Vec};

use crate::error::Error;
use crate::storage::DataKey;

// --- liquidity shares ---

pub fn share_balance(e: &Env, id: &Address) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::ShareBalance(id.clone()))
        .unwrap_or(0)
}

fn set_share_balance(e: &Env, id: &Address, amount: i128) {
    e.storage()
        .instance()
        .set(&DataKey::ShareBalance(id.clone()), &amount);
}

/// Total share supply, including the locked minimum.
pub fn total_shares(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::ShareSupply).unwrap_or(0)
}

fn set_total_shares(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::ShareSupply, &amount);
}

/// Shares counted in the supply but owned by no address.
pub fn locked_shares(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::LockedShares).unwrap_or(0)
}

/// Every address that ever held shares. Reward distribution walks this.
pub fn share_holders(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get(&DataKey::ShareHolders)
        .unwrap_or(vec![e])
}

fn track_holder(e: &Env, id: &Address) {
    let mut holders = share_holders(e);
    if !holders.contains(id) {
        holders.push_back(id.clone());
        e.storage().instance().set(&DataKey::ShareHolders, &holders);
    }
}

pub fn mint_shares(e: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let supply = total_shares(e).checked_add(amount).ok_or(Error::Overflow)?;
    set_total_shares(e, supply);
    let balance = share_balance(e, to)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    set_share_balance(e, to, balance);
    track_holder(e, to);
    Ok(())
}

/// Adds `amount` to the supply without crediting any address.
pub fn lock_shares(e: &Env, amount: i128) -> Result<(), Error> {
    let supply = total_shares(e).checked_add(amount).ok_or(Error::Overflow)?;
    set_total_shares(e, supply);
    let locked = locked_shares(e).checked_add(amount).ok_or(Error::Overflow)?;
    e.storage().instance().set(&DataKey::LockedShares, &locked);
    Ok(())
}

pub fn burn_shares(e: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let balance = share_balance(e, from);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    let supply = total_shares(e).checked_sub(amount).ok_or(Error::Overflow)?;
    set_total_shares(e, supply);
    set_share_balance(e, from, balance - amount);
    Ok(())
}

pub fn transfer_shares(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let from_balance = share_balance(e, from);
    if from_balance < amount {
        return Err(Error::InsufficientBalance);
    }
    let to_balance = share_balance(e, to)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    set_share_balance(e, from, from_balance - amount);
    set_share_balance(e, to, to_balance);
    track_holder(e, to);
    Ok(())
}

pub fn share_allowance(e: &Env, from: &Address, spender: &Address) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::ShareAllowance(from.clone(), spender.clone()))
        .unwrap_or(0)
}

pub fn approve_shares(e: &Env, from: &Address, spender: &Address, amount: i128) {
    e.storage()
        .instance()
        .set(&DataKey::ShareAllowance(from.clone(), spender.clone()), &amount);
}

pub fn spend_share_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), Error> {
    let allowance = share_allowance(e, from, spender);
    if allowance < amount {
        return Err(Error::InsufficientAllowance);
    }
    approve_shares(e, from, spender, allowance - amount);
    Ok(())
}

// --- slippage claims ---

pub fn claim_balance(e: &Env, id: &Address) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::ClaimBalance(id.clone()))
        .unwrap_or(0)
}

fn set_claim_balance(e: &Env, id: &Address, amount: i128) {
    e.storage()
        .instance()
        .set(&DataKey::ClaimBalance(id.clone()), &amount);
}

pub fn total_claims(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::ClaimSupply).unwrap_or(0)
}

pub fn mint_claims(e: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let supply = total_claims(e).checked_add(amount).ok_or(Error::Overflow)?;
    e.storage().instance().set(&DataKey::ClaimSupply, &supply);
    let balance = claim_balance(e, to)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    set_claim_balance(e, to, balance);
    Ok(())
}

pub fn burn_claims(e: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let balance = claim_balance(e, from);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    let supply = total_claims(e).checked_sub(amount).ok_or(Error::Overflow)?;
    e.storage().instance().set(&DataKey::ClaimSupply, &supply);
    set_claim_balance(e, from, balance - amount);
    Ok(())
}

pub fn transfer_claims(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let from_balance = claim_balance(e, from);
    if from_balance < amount {
        return Err(Error::InsufficientBalance);
    }
    let to_balance = claim_balance(e, to)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    set_claim_balance(e, from, from_balance - amount);
    set_claim_balance(e, to, to_balance);
    Ok(())
}
