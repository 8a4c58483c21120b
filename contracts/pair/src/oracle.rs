//! Price observation: cumulative UQ112x112 accumulators for external
//! TWAP consumers, plus the pair's own blended market-price estimate.

use soroban_sdk::Env;

use crate::error::Error;
use crate::event;
use crate::math::{self, U256};
use crate::storage::PairState;

/// Seconds over which the blended market price converges to the live
/// pool price.
pub const MARKET_PRICE_CAP_SECS: u64 = 300;

/// Folds the pre-update spot price into the stored market price:
/// (prev * (CAP - w) + spot * w) / CAP with w = min(elapsed, CAP).
fn blend(prev: U256, spot: U256, elapsed: u64) -> Result<U256, Error> {
    let w = elapsed.min(MARKET_PRICE_CAP_SECS);
    if w == MARKET_PRICE_CAP_SECS {
        return Ok(spot);
    }
    let mixed = prev
        .checked_mul(U256::from(MARKET_PRICE_CAP_SECS - w))
        .ok_or(Error::Overflow)?
        .checked_add(
            spot.checked_mul(U256::from(w)).ok_or(Error::Overflow)?,
        )
        .ok_or(Error::Overflow)?;
    Ok(mixed / U256::from(MARKET_PRICE_CAP_SECS))
}

/// Settles the oracle against the old reserves, then overwrites the
/// cached reserves with the given balances. Every reserve-changing
/// operation funnels through here.
pub fn update(e: &Env, state: &mut PairState, balance0: i128, balance1: i128) -> Result<(), Error> {
    if balance0 < 0 || balance1 < 0 {
        return Err(Error::NegativeAmount);
    }
    let now = e.ledger().timestamp();
    let now32 = now as u32;
    let elapsed = now32.wrapping_sub(state.ts_last);
    if elapsed > 0 && state.reserve0 > 0 && state.reserve1 > 0 {
        let spot0 = math::encode_price(state.reserve1, state.reserve0)?;
        let spot1 = math::encode_price(state.reserve0, state.reserve1)?;
        let dt = U256::from(elapsed);
        // Accumulators wrap at 2^256; consumers subtract two observations.
        let acc0 = math::load(&state.price0_cumulative)
            .overflowing_add(spot0.overflowing_mul(dt).0)
            .0;
        let acc1 = math::load(&state.price1_cumulative)
            .overflowing_add(spot1.overflowing_mul(dt).0)
            .0;
        state.price0_cumulative = math::store(acc0);
        state.price1_cumulative = math::store(acc1);

        let market_elapsed = now.saturating_sub(state.market_ts);
        let prev0 = math::load(&state.market_price0);
        let prev1 = math::load(&state.market_price1);
        state.market_price0 = math::store(blend(prev0, spot0, market_elapsed)?);
        state.market_price1 = math::store(blend(prev1, spot1, market_elapsed)?);
        state.market_ts = now;
    }
    state.reserve0 = balance0;
    state.reserve1 = balance1;
    state.ts_last = now32;
    // First liquidity seeds the market price at spot.
    if state.market_price0.is_zero() && balance0 > 0 && balance1 > 0 {
        state.market_price0 = math::store(math::encode_price(balance1, balance0)?);
        state.market_price1 = math::store(math::encode_price(balance0, balance1)?);
        state.market_ts = now;
    }
    event::sync(e, balance0, balance1);
    Ok(())
}

/// Current blended market price of token0 (or token1), recomputed
/// transiently from the stored observation and the live spot price.
pub fn market_price(e: &Env, state: &PairState, of_token0: bool) -> Result<U256, Error> {
    if state.reserve0 <= 0 || state.reserve1 <= 0 {
        return Err(Error::InsufficientLiquidity);
    }
    let spot = if of_token0 {
        math::encode_price(state.reserve1, state.reserve0)?
    } else {
        math::encode_price(state.reserve0, state.reserve1)?
    };
    let stored = if of_token0 {
        math::load(&state.market_price0)
    } else {
        math::load(&state.market_price1)
    };
    if stored.is_zero() {
        return Ok(spot);
    }
    let elapsed = e.ledger().timestamp().saturating_sub(state.market_ts);
    blend(stored, spot, elapsed)
}
