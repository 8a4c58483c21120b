//! Wide-integer helpers and the UQ112x112 fixed-point price encoding.
//!
//! Prices carry 112 fractional bits, so price and accumulator
//! intermediates need 256-bit arithmetic. `U256` does the math,
//! `Uint256` is its two-limb carrier for contract storage.

use soroban_sdk::contracttype;
use uint::construct_uint;

use crate::error::Error;

construct_uint! {
    pub struct U256(4);
}

/// Number of fractional bits in an encoded price.
pub const RESOLUTION: u32 = 112;

/// Storage form of a 256-bit value. Host storage cannot hold `U256`
/// directly, so it is split into two `u128` limbs.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Uint256 {
    pub hi: u128,
    pub lo: u128,
}

impl Uint256 {
    pub const ZERO: Uint256 = Uint256 { hi: 0, lo: 0 };

    pub fn is_zero(&self) -> bool {
        self.hi == 0 && self.lo == 0
    }
}

pub fn store(v: U256) -> Uint256 {
    Uint256 {
        hi: (v >> 128usize).low_u128(),
        lo: v.low_u128(),
    }
}

pub fn load(v: &Uint256) -> U256 {
    (U256::from(v.hi) << 128usize) | U256::from(v.lo)
}

/// Narrows a `U256` back into a token amount.
pub fn to_i128(v: U256) -> Result<i128, Error> {
    if v > U256::from(i128::MAX as u128) {
        return Err(Error::Overflow);
    }
    Ok(v.low_u128() as i128)
}

/// UQ112x112 price of the asset with reserve `denom`, quoted in units of
/// the counter asset with reserve `numer`: floor((numer << 112) / denom).
pub fn encode_price(numer: i128, denom: i128) -> Result<U256, Error> {
    if numer < 0 {
        return Err(Error::NegativeAmount);
    }
    if denom <= 0 {
        return Err(Error::InsufficientLiquidity);
    }
    Ok((U256::from(numer as u128) << RESOLUTION as usize) / U256::from(denom as u128))
}

/// Converts `amount` of the priced asset into the counter asset:
/// floor(amount * price / 2^112).
pub fn mul_price(amount: i128, price: U256) -> Result<i128, Error> {
    if amount < 0 {
        return Err(Error::NegativeAmount);
    }
    let scaled = U256::from(amount as u128)
        .checked_mul(price)
        .ok_or(Error::Overflow)?;
    to_i128(scaled >> RESOLUTION as usize)
}

/// floor(a * b / c) computed through 256 bits so `a * b` cannot overflow.
pub fn muldiv(a: i128, b: i128, c: i128) -> Result<i128, Error> {
    if a < 0 || b < 0 {
        return Err(Error::NegativeAmount);
    }
    if c <= 0 {
        return Err(Error::InsufficientLiquidity);
    }
    let product = U256::from(a as u128)
        .checked_mul(U256::from(b as u128))
        .ok_or(Error::Overflow)?;
    to_i128(product / U256::from(c as u128))
}

/// floor(sqrt(a * b)).
pub fn sqrt_product(a: i128, b: i128) -> Result<i128, Error> {
    if a < 0 || b < 0 {
        return Err(Error::NegativeAmount);
    }
    let product = U256::from(a as u128)
        .checked_mul(U256::from(b as u128))
        .ok_or(Error::Overflow)?;
    to_i128(product.integer_sqrt())
}
