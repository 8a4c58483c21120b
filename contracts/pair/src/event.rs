//! Contract events, one per externally visible state change.

use soroban_sdk::{symbol_short, Address, Env};

pub fn mint(e: &Env, to: &Address, amount0: i128, amount1: i128) {
    e.events()
        .publish((symbol_short!("mint"), to.clone()), (amount0, amount1));
}

pub fn burn(e: &Env, to: &Address, amount0: i128, amount1: i128) {
    e.events()
        .publish((symbol_short!("burn"), to.clone()), (amount0, amount1));
}

pub fn swap(
    e: &Env,
    to: &Address,
    amount0_in: i128,
    amount1_in: i128,
    amount0_out: i128,
    amount1_out: i128,
) {
    e.events().publish(
        (symbol_short!("swap"), to.clone()),
        (amount0_in, amount1_in, amount0_out, amount1_out),
    );
}

pub fn sync(e: &Env, reserve0: i128, reserve1: i128) {
    e.events()
        .publish((symbol_short!("sync"),), (reserve0, reserve1));
}

pub fn claim_mint(e: &Env, to: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("clm_mint"), to.clone()), amount);
}

pub fn claim_burn(e: &Env, to: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("clm_burn"), to.clone()), amount);
}

pub fn reward(e: &Env, retained: i128, paid: i128) {
    e.events()
        .publish((symbol_short!("reward"),), (retained, paid));
}
