//! Quote arithmetic. Three regimes share the 0.3% trade fee:
//!
//! * constant-product: the amount an actual swap executes at, with
//!   price impact;
//! * at-price: conversion through a UQ112x112 price (spot or blended
//!   market) with no impact.
//!
//! Constant-product "in" quotes round up by one unit so the quoted
//! input always satisfies the invariant; everything else floors.

use crate::error::Error;
use crate::math::{self, U256};

pub const FEE_NUMERATOR: i128 = 997;
pub const FEE_DENOMINATOR: i128 = 1000;

/// Output for `amount_in` against the constant-product curve.
pub fn amount_out_cp(amount_in: i128, reserve_in: i128, reserve_out: i128) -> Result<i128, Error> {
    if amount_in <= 0 {
        return Err(Error::InsufficientInputAmount);
    }
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(Error::InsufficientLiquidity);
    }
    let with_fee = U256::from(amount_in as u128)
        .checked_mul(U256::from(FEE_NUMERATOR as u128))
        .ok_or(Error::Overflow)?;
    let numerator = with_fee
        .checked_mul(U256::from(reserve_out as u128))
        .ok_or(Error::Overflow)?;
    let denominator = U256::from(reserve_in as u128)
        .checked_mul(U256::from(FEE_DENOMINATOR as u128))
        .ok_or(Error::Overflow)?
        .checked_add(with_fee)
        .ok_or(Error::Overflow)?;
    math::to_i128(numerator / denominator)
}

/// Input required to draw `amount_out` from the constant-product curve.
pub fn amount_in_cp(amount_out: i128, reserve_in: i128, reserve_out: i128) -> Result<i128, Error> {
    if amount_out <= 0 {
        return Err(Error::InsufficientOutputAmount);
    }
    if reserve_in <= 0 || reserve_out <= 0 || amount_out >= reserve_out {
        return Err(Error::InsufficientLiquidity);
    }
    let numerator = U256::from(reserve_in as u128)
        .checked_mul(U256::from(amount_out as u128))
        .ok_or(Error::Overflow)?
        .checked_mul(U256::from(FEE_DENOMINATOR as u128))
        .ok_or(Error::Overflow)?;
    let denominator = U256::from((reserve_out - amount_out) as u128)
        .checked_mul(U256::from(FEE_NUMERATOR as u128))
        .ok_or(Error::Overflow)?;
    math::to_i128(numerator / denominator)?
        .checked_add(1)
        .ok_or(Error::Overflow)
}

/// Output for `amount_in` converted at `price` (the price of the input
/// asset), minus the trade fee.
pub fn amount_out_at_price(amount_in: i128, price: U256) -> Result<i128, Error> {
    if amount_in <= 0 {
        return Err(Error::InsufficientInputAmount);
    }
    let gross = math::mul_price(amount_in, price)?;
    Ok(gross
        .checked_mul(FEE_NUMERATOR)
        .ok_or(Error::Overflow)?
        / FEE_DENOMINATOR)
}

/// Input required for `amount_out` converted at `price` (the price of
/// the output asset), plus the trade fee.
pub fn amount_in_at_price(amount_out: i128, price: U256) -> Result<i128, Error> {
    if amount_out <= 0 {
        return Err(Error::InsufficientOutputAmount);
    }
    let gross = math::mul_price(amount_out, price)?;
    Ok(gross
        .checked_mul(FEE_DENOMINATOR)
        .ok_or(Error::Overflow)?
        / FEE_NUMERATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::encode_price;

    const E18: i128 = 1_000_000_000_000_000_000;

    #[test]
    fn constant_product_matches_reference_vectors() {
        assert_eq!(
            amount_out_cp(E18, 5 * E18, 10 * E18).unwrap(),
            1_662_497_915_624_478_906
        );
        assert_eq!(
            amount_out_cp(E18, 10 * E18, 5 * E18).unwrap(),
            453_305_446_940_074_565
        );
        assert_eq!(
            amount_out_cp(2 * E18, 5 * E18, 10 * E18).unwrap(),
            2_851_015_155_847_869_602
        );
        assert_eq!(
            amount_out_cp(2 * E18, 10 * E18, 5 * E18).unwrap(),
            831_248_957_812_239_453
        );
        assert_eq!(
            amount_out_cp(E18, 1000 * E18, 1000 * E18).unwrap(),
            996_006_981_039_903_216
        );
    }

    #[test]
    fn in_quote_rounds_against_the_trader() {
        // 2000/1000 pool, draw 10e18 of the scarce side
        assert_eq!(
            amount_in_cp(10 * E18, 1000 * E18, 2000 * E18).unwrap(),
            5_040_246_367_242_430_811
        );
    }

    #[test]
    fn at_price_quotes_floor() {
        let half = encode_price(1000 * E18, 2000 * E18).unwrap();
        assert_eq!(
            amount_out_at_price(10 * E18, half).unwrap(),
            4_985_000_000_000_000_000
        );
        assert_eq!(
            amount_in_at_price(10 * E18, half).unwrap(),
            5_015_045_135_406_218_655
        );
    }

    #[test]
    fn rejects_empty_or_drained_pools() {
        assert_eq!(
            amount_out_cp(E18, 0, 10 * E18),
            Err(Error::InsufficientLiquidity)
        );
        assert_eq!(
            amount_in_cp(10 * E18, 5 * E18, 10 * E18),
            Err(Error::InsufficientLiquidity)
        );
        assert_eq!(amount_out_cp(0, E18, E18), Err(Error::InsufficientInputAmount));
        assert_eq!(amount_in_cp(0, E18, E18), Err(Error::InsufficientOutputAmount));
    }
}
