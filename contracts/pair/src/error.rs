use soroban_sdk::contracterror;

/// Every failure the pair can raise. Codes are part of the contract
/// surface; callers match on them to tell validation failures apart
/// from invariant violations.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InsufficientLiquidityMinted = 1,
    InsufficientLiquidityBurned = 2,
    InsufficientOutputAmount = 3,
    InsufficientLiquidity = 4,
    InvalidRecipient = 5,
    InsufficientInputAmount = 6,
    KInvariant = 7,
    InvalidToken = 8,
    InvalidPath = 9,
    InsufficientBacking = 10,
    NothingToDistribute = 11,
    NothingToRedeem = 12,
    InsufficientBalance = 13,
    InsufficientAllowance = 14,
    NegativeAmount = 15,
    Overflow = 16,
}
