//! Instance-storage layout for the pair contract.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::math::Uint256;

/// Share units locked forever on the first deposit so the supply can
/// never return to zero.
pub const MINIMUM_LIQUIDITY: i128 = 1000;

/// The whole pair in one storage slot: token identities, cached
/// reserves, oracle accumulators and the settlement sub-balances.
#[contracttype]
#[derive(Clone)]
pub struct PairState {
    pub token0: Address,
    pub token1: Address,
    pub reward_token: Address,
    pub factory: Address,
    pub reserve0: i128,
    pub reserve1: i128,
    /// Timestamp of the last reserve update, truncated mod 2^32.
    pub ts_last: u32,
    /// UQ112x112 price-seconds accumulators; wrap at 2^256.
    pub price0_cumulative: Uint256,
    pub price1_cumulative: Uint256,
    /// reserve0 * reserve1 as of the latest fee-aware liquidity event,
    /// zero while the protocol fee is off.
    pub k_last: Uint256,
    /// Stored blended market prices (UQ112x112) and their observation time.
    pub market_price0: Uint256,
    pub market_price1: Uint256,
    pub market_ts: u64,
    /// Pool-favorable settlement surplus per underlying asset.
    pub slippage0: i128,
    pub slippage1: i128,
    /// Portion of the pair's reward-asset balance reserved as claim backing.
    pub reward_reserve: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Pair,
    Name,
    Symbol,
    Decimals,
    ShareBalance(Address),
    ShareAllowance(Address, Address),
    ShareSupply,
    LockedShares,
    ShareHolders,
    ClaimBalance(Address),
    ClaimSupply,
}

pub fn get_pair_state(e: &Env) -> PairState {
    e.storage().instance().get(&DataKey::Pair).unwrap()
}

pub fn set_pair_state(e: &Env, state: &PairState) {
    e.storage().instance().set(&DataKey::Pair, state);
}

pub fn set_share_metadata(e: &Env, name: &String, symbol: &String) {
    e.storage().instance().set(&DataKey::Name, name);
    e.storage().instance().set(&DataKey::Symbol, symbol);
    e.storage().instance().set(&DataKey::Decimals, &18u32);
}

pub fn share_name(e: &Env) -> String {
    e.storage().instance().get(&DataKey::Name).unwrap()
}

pub fn share_symbol(e: &Env) -> String {
    e.storage().instance().get(&DataKey::Symbol).unwrap()
}

pub fn share_decimals(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::Decimals).unwrap_or(18)
}
