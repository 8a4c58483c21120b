#![no_std]

//! Constant-product pair with a cumulative-price oracle and slippage
//! settlement. The pair holds two underlying assets plus a reward
//! asset, issues its own liquidity shares, and mints claims against
//! the reward backing when a trade executes worse than the blended
//! market price.

use soroban_sdk::token::TokenInterface;
use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, token, Address, Bytes, Env, String,
    Vec,
};

mod error;
mod event;
mod ledger;
mod math;
mod oracle;
mod quote;
mod storage;

pub use error::Error;
pub use math::Uint256;
pub use storage::{PairState, MINIMUM_LIQUIDITY};

use math::U256;

/// The slice of the factory the pair consults on liquidity events.
#[contractclient(name = "FactoryClient")]
pub trait FactoryInterface {
    /// Recipient of the protocol fee, or None while the fee is off.
    fn fee_to(e: Env) -> Option<Address>;
}

/// Implemented by flash-swap recipients. Invoked after the optimistic
/// transfer; the callee must leave enough input in the pair to satisfy
/// the invariant check.
#[contractclient(name = "SwapCalleeClient")]
pub trait SwapCallee {
    fn swap_callback(e: Env, amount0_out: i128, amount1_out: i128, data: Bytes);
}

#[contract]
pub struct Pair;

#[contractimpl]
impl Pair {
    pub fn __constructor(
        e: Env,
        token0: Address,
        token1: Address,
        reward_token: Address,
        factory: Address,
        share_name: String,
        share_symbol: String,
    ) {
        if token0 == token1 || token0 == reward_token || token1 == reward_token {
            panic_with_error!(&e, Error::InvalidToken);
        }
        let now = e.ledger().timestamp();
        let state = PairState {
            token0,
            token1,
            reward_token,
            factory,
            reserve0: 0,
            reserve1: 0,
            ts_last: now as u32,
            price0_cumulative: Uint256::ZERO,
            price1_cumulative: Uint256::ZERO,
            k_last: Uint256::ZERO,
            market_price0: Uint256::ZERO,
            market_price1: Uint256::ZERO,
            market_ts: now,
            slippage0: 0,
            slippage1: 0,
            reward_reserve: 0,
        };
        storage::set_pair_state(&e, &state);
        storage::set_share_metadata(&e, &share_name, &share_symbol);
    }

    // --- liquidity ---

    /// Issues shares for whatever token0/token1 amounts have been
    /// transferred in since the last reserve update.
    pub fn mint(e: Env, to: Address) -> Result<i128, Error> {
        let mut state = storage::get_pair_state(&e);
        let contract = e.current_contract_address();
        let balance0 = token::Client::new(&e, &state.token0).balance(&contract);
        let balance1 = token::Client::new(&e, &state.token1).balance(&contract);
        let amount0 = balance0.checked_sub(state.reserve0).ok_or(Error::Overflow)?;
        let amount1 = balance1.checked_sub(state.reserve1).ok_or(Error::Overflow)?;

        let fee_on = Self::mint_protocol_fee(&e, &mut state)?;
        let supply = ledger::total_shares(&e);
        let liquidity = if supply == 0 {
            let root = math::sqrt_product(amount0, amount1)?;
            if root <= MINIMUM_LIQUIDITY {
                return Err(Error::InsufficientLiquidityMinted);
            }
            ledger::lock_shares(&e, MINIMUM_LIQUIDITY)?;
            root - MINIMUM_LIQUIDITY
        } else {
            let by0 = math::muldiv(amount0, supply, state.reserve0)?;
            let by1 = math::muldiv(amount1, supply, state.reserve1)?;
            by0.min(by1)
        };
        if liquidity <= 0 {
            return Err(Error::InsufficientLiquidityMinted);
        }
        ledger::mint_shares(&e, &to, liquidity)?;

        oracle::update(&e, &mut state, balance0, balance1)?;
        if fee_on {
            state.k_last = Self::current_k(&state)?;
        }
        storage::set_pair_state(&e, &state);
        event::mint(&e, &to, amount0, amount1);
        Ok(liquidity)
    }

    /// Redeems the shares held by the pair itself for a pro-rata cut of
    /// the actual token0/token1 balances.
    pub fn burn(e: Env, to: Address) -> Result<(i128, i128), Error> {
        let mut state = storage::get_pair_state(&e);
        let contract = e.current_contract_address();
        let client0 = token::Client::new(&e, &state.token0);
        let client1 = token::Client::new(&e, &state.token1);
        let balance0 = client0.balance(&contract);
        let balance1 = client1.balance(&contract);
        let shares = ledger::share_balance(&e, &contract);

        let fee_on = Self::mint_protocol_fee(&e, &mut state)?;
        let supply = ledger::total_shares(&e);
        if supply <= 0 {
            return Err(Error::InsufficientLiquidity);
        }
        let amount0 = math::muldiv(shares, balance0, supply)?;
        let amount1 = math::muldiv(shares, balance1, supply)?;
        if amount0 <= 0 || amount1 <= 0 {
            return Err(Error::InsufficientLiquidityBurned);
        }
        ledger::burn_shares(&e, &contract, shares)?;
        client0.transfer(&contract, &to, &amount0);
        client1.transfer(&contract, &to, &amount1);

        let balance0 = client0.balance(&contract);
        let balance1 = client1.balance(&contract);
        oracle::update(&e, &mut state, balance0, balance1)?;
        if fee_on {
            state.k_last = Self::current_k(&state)?;
        }
        storage::set_pair_state(&e, &state);
        event::burn(&e, &to, amount0, amount1);
        Ok((amount0, amount1))
    }

    // --- trading ---

    /// Sends the requested outputs optimistically, then verifies the
    /// fee-adjusted invariant against whatever came back. A non-empty
    /// `data` triggers the flash-swap callback on `to` before the check.
    pub fn swap(
        e: Env,
        amount0_out: i128,
        amount1_out: i128,
        to: Address,
        data: Bytes,
    ) -> Result<(), Error> {
        if amount0_out < 0 || amount1_out < 0 {
            return Err(Error::NegativeAmount);
        }
        if amount0_out == 0 && amount1_out == 0 {
            return Err(Error::InsufficientOutputAmount);
        }
        let mut state = storage::get_pair_state(&e);
        if amount0_out >= state.reserve0 || amount1_out >= state.reserve1 {
            return Err(Error::InsufficientLiquidity);
        }
        if to == state.token0 || to == state.token1 {
            return Err(Error::InvalidRecipient);
        }
        let contract = e.current_contract_address();
        let client0 = token::Client::new(&e, &state.token0);
        let client1 = token::Client::new(&e, &state.token1);
        if amount0_out > 0 {
            client0.transfer(&contract, &to, &amount0_out);
        }
        if amount1_out > 0 {
            client1.transfer(&contract, &to, &amount1_out);
        }
        if !data.is_empty() {
            SwapCalleeClient::new(&e, &to).swap_callback(&amount0_out, &amount1_out, &data);
        }
        let balance0 = client0.balance(&contract);
        let balance1 = client1.balance(&contract);
        let amount0_in = (balance0 - (state.reserve0 - amount0_out)).max(0);
        let amount1_in = (balance1 - (state.reserve1 - amount1_out)).max(0);
        if amount0_in == 0 && amount1_in == 0 {
            return Err(Error::InsufficientInputAmount);
        }

        // (balance * 1000 - 3 * in) on both sides must preserve k * 1000^2.
        let adjusted0 = Self::fee_adjusted(balance0, amount0_in)?;
        let adjusted1 = Self::fee_adjusted(balance1, amount1_in)?;
        let lhs = adjusted0.checked_mul(adjusted1).ok_or(Error::Overflow)?;
        let rhs = U256::from(state.reserve0 as u128)
            .checked_mul(U256::from(state.reserve1 as u128))
            .ok_or(Error::Overflow)?
            .checked_mul(U256::from(1_000_000u64))
            .ok_or(Error::Overflow)?;
        if lhs < rhs {
            return Err(Error::KInvariant);
        }

        oracle::update(&e, &mut state, balance0, balance1)?;
        storage::set_pair_state(&e, &state);
        event::swap(&e, &to, amount0_in, amount1_in, amount0_out, amount1_out);
        Ok(())
    }

    /// Forces the cached reserves to match the actual balances.
    pub fn sync(e: Env) -> Result<(), Error> {
        let mut state = storage::get_pair_state(&e);
        let contract = e.current_contract_address();
        let balance0 = token::Client::new(&e, &state.token0).balance(&contract);
        let balance1 = token::Client::new(&e, &state.token1).balance(&contract);
        oracle::update(&e, &mut state, balance0, balance1)?;
        storage::set_pair_state(&e, &state);
        Ok(())
    }

    /// Sends any token0/token1 surplus over the cached reserves to `to`.
    /// The reward asset is never skimmable.
    pub fn skim(e: Env, to: Address) -> Result<(), Error> {
        let state = storage::get_pair_state(&e);
        let contract = e.current_contract_address();
        let client0 = token::Client::new(&e, &state.token0);
        let client1 = token::Client::new(&e, &state.token1);
        let excess0 = client0.balance(&contract) - state.reserve0;
        let excess1 = client1.balance(&contract) - state.reserve1;
        if excess0 > 0 {
            client0.transfer(&contract, &to, &excess0);
        }
        if excess1 > 0 {
            client1.transfer(&contract, &to, &excess1);
        }
        Ok(())
    }

    // --- quotes ---

    /// Output for `amount_in` of `token_in` at the current spot price,
    /// fee deducted, no price impact.
    pub fn get_amount_out_pool(e: Env, token_in: Address, amount_in: i128) -> Result<i128, Error> {
        let state = storage::get_pair_state(&e);
        let spot = Self::spot_price(&state, Self::token_side(&state, &token_in)?)?;
        quote::amount_out_at_price(amount_in, spot)
    }

    /// Input required for `amount_out` of `token_out` at the current
    /// spot price, fee added.
    pub fn get_amount_in_pool(e: Env, token_out: Address, amount_out: i128) -> Result<i128, Error> {
        let state = storage::get_pair_state(&e);
        let spot = Self::spot_price(&state, Self::token_side(&state, &token_out)?)?;
        quote::amount_in_at_price(amount_out, spot)
    }

    /// Output for `amount_in` of `token_in` at the blended market price.
    pub fn get_amount_out_market(
        e: Env,
        token_in: Address,
        amount_in: i128,
    ) -> Result<i128, Error> {
        let state = storage::get_pair_state(&e);
        let market = oracle::market_price(&e, &state, Self::token_side(&state, &token_in)?)?;
        quote::amount_out_at_price(amount_in, market)
    }

    /// Input required for `amount_out` of `token_out` at the blended
    /// market price.
    pub fn get_amount_in_market(
        e: Env,
        token_out: Address,
        amount_out: i128,
    ) -> Result<i128, Error> {
        let state = storage::get_pair_state(&e);
        let market = oracle::market_price(&e, &state, Self::token_side(&state, &token_out)?)?;
        quote::amount_in_at_price(amount_out, market)
    }

    /// Constant-product execution output for `amount_in` of `token_in`,
    /// paired with the claim amount a settlement would mint on top.
    pub fn get_amount_out_final(
        e: Env,
        token_in: Address,
        amount_in: i128,
    ) -> Result<(i128, i128), Error> {
        let state = storage::get_pair_state(&e);
        let in_is_token0 = Self::token_side(&state, &token_in)?;
        let (reserve_in, reserve_out) = if in_is_token0 {
            (state.reserve0, state.reserve1)
        } else {
            (state.reserve1, state.reserve0)
        };
        let executed = quote::amount_out_cp(amount_in, reserve_in, reserve_out)?;
        let market = oracle::market_price(&e, &state, in_is_token0)?;
        let quoted = quote::amount_out_at_price(amount_in, market)?;
        Ok((executed, (quoted - executed).max(0)))
    }

    /// Constant-product input required for `amount_out` of `token_out`,
    /// paired with the claim amount a settlement would mint on top.
    pub fn get_amount_in_final(
        e: Env,
        token_out: Address,
        amount_out: i128,
    ) -> Result<(i128, i128), Error> {
        let state = storage::get_pair_state(&e);
        let out_is_token0 = Self::token_side(&state, &token_out)?;
        let (reserve_in, reserve_out) = if out_is_token0 {
            (state.reserve1, state.reserve0)
        } else {
            (state.reserve0, state.reserve1)
        };
        let executed = quote::amount_in_cp(amount_out, reserve_in, reserve_out)?;
        let market = oracle::market_price(&e, &state, out_is_token0)?;
        let quoted = quote::amount_in_at_price(amount_out, market)?;
        Ok((executed, (executed - quoted).max(0)))
    }

    // --- slippage settlement ---

    /// Settles an exact-input trade against the market price. Requires
    /// the input to already sit in the pair on top of the reserves.
    /// Mints a claim to `to` when the market quote beats the execution;
    /// otherwise records the gap as pool-favorable surplus. Reserves
    /// are untouched, so a swap can still consume the deposit.
    pub fn deal_slippage_with_in(
        e: Env,
        path: Vec<Address>,
        amount_in: i128,
        to: Address,
        want_claim: bool,
    ) -> Result<i128, Error> {
        if amount_in <= 0 {
            return Err(Error::InsufficientInputAmount);
        }
        let mut state = storage::get_pair_state(&e);
        let (input, _) = Self::check_path(&state, &path)?;
        let in_is_token0 = input == state.token0;
        let (reserve_in, reserve_out) = if in_is_token0 {
            (state.reserve0, state.reserve1)
        } else {
            (state.reserve1, state.reserve0)
        };
        let contract = e.current_contract_address();
        let deposited = token::Client::new(&e, &input).balance(&contract) - reserve_in;
        if amount_in > deposited {
            return Err(Error::InsufficientInputAmount);
        }
        let executed = quote::amount_out_cp(amount_in, reserve_in, reserve_out)?;
        let market = oracle::market_price(&e, &state, in_is_token0)?;
        let quoted = quote::amount_out_at_price(amount_in, market)?;
        let mut claim = 0i128;
        if quoted > executed {
            if want_claim {
                claim = Self::mint_backed_claim(&e, &state, &to, quoted - executed)?;
            }
        } else {
            let surplus = executed - quoted;
            if in_is_token0 {
                state.slippage1 = state.slippage1.checked_add(surplus).ok_or(Error::Overflow)?;
            } else {
                state.slippage0 = state.slippage0.checked_add(surplus).ok_or(Error::Overflow)?;
            }
        }
        storage::set_pair_state(&e, &state);
        Ok(claim)
    }

    /// Exact-output counterpart of `deal_slippage_with_in`. The gap is
    /// measured in input-asset units.
    pub fn deal_slippage_with_out(
        e: Env,
        path: Vec<Address>,
        amount_out: i128,
        to: Address,
        want_claim: bool,
    ) -> Result<i128, Error> {
        if amount_out <= 0 {
            return Err(Error::InsufficientOutputAmount);
        }
        let mut state = storage::get_pair_state(&e);
        let (_, output) = Self::check_path(&state, &path)?;
        let out_is_token0 = output == state.token0;
        let (reserve_in, reserve_out) = if out_is_token0 {
            (state.reserve1, state.reserve0)
        } else {
            (state.reserve0, state.reserve1)
        };
        let executed = quote::amount_in_cp(amount_out, reserve_in, reserve_out)?;
        let market = oracle::market_price(&e, &state, out_is_token0)?;
        let quoted = quote::amount_in_at_price(amount_out, market)?;
        let mut claim = 0i128;
        if executed > quoted {
            if want_claim {
                claim = Self::mint_backed_claim(&e, &state, &to, executed - quoted)?;
            }
        } else {
            let surplus = quoted - executed;
            if out_is_token0 {
                state.slippage1 = state.slippage1.checked_add(surplus).ok_or(Error::Overflow)?;
            } else {
                state.slippage0 = state.slippage0.checked_add(surplus).ok_or(Error::Overflow)?;
            }
        }
        storage::set_pair_state(&e, &state);
        Ok(claim)
    }

    /// Splits any reward-asset deposit: half stays as claim backing,
    /// the rest is paid out pro-rata to share holders on the spot. The
    /// locked minimum's and the pair's own fractions are retained too.
    /// Returns (retained, paid).
    pub fn distribute_reward(e: Env) -> Result<(i128, i128), Error> {
        let mut state = storage::get_pair_state(&e);
        let contract = e.current_contract_address();
        let client = token::Client::new(&e, &state.reward_token);
        let deposit = client.balance(&contract) - state.reward_reserve;
        if deposit <= 0 {
            return Err(Error::NothingToDistribute);
        }
        let supply = ledger::total_shares(&e);
        if supply <= 0 {
            return Err(Error::InsufficientLiquidity);
        }
        let distributable = deposit / 2;
        let mut paid = 0i128;
        for holder in ledger::share_holders(&e).iter() {
            if holder == contract {
                continue;
            }
            let shares = ledger::share_balance(&e, &holder);
            if shares <= 0 {
                continue;
            }
            let cut = math::muldiv(distributable, shares, supply)?;
            if cut > 0 {
                client.transfer(&contract, &holder, &cut);
                paid = paid.checked_add(cut).ok_or(Error::Overflow)?;
            }
        }
        let retained = deposit - paid;
        state.reward_reserve = state
            .reward_reserve
            .checked_add(retained)
            .ok_or(Error::Overflow)?;
        storage::set_pair_state(&e, &state);
        event::reward(&e, retained, paid);
        Ok((retained, paid))
    }

    /// Redeems the claims held by the pair itself: burns them and
    /// releases the same nominal amount of the reward asset to `to`.
    pub fn burn_claims_for(e: Env, to: Address) -> Result<i128, Error> {
        let mut state = storage::get_pair_state(&e);
        let contract = e.current_contract_address();
        let amount = ledger::claim_balance(&e, &contract);
        if amount <= 0 {
            return Err(Error::NothingToRedeem);
        }
        if amount > state.reward_reserve {
            return Err(Error::InsufficientBacking);
        }
        ledger::burn_claims(&e, &contract, amount)?;
        state.reward_reserve -= amount;
        token::Client::new(&e, &state.reward_token).transfer(&contract, &to, &amount);
        storage::set_pair_state(&e, &state);
        event::claim_burn(&e, &to, amount);
        Ok(amount)
    }

    /// Grants `spender` allowances over the recorded pool-favorable
    /// surplus of each underlying asset. Factory-gated.
    pub fn approve_slippage_token(e: Env, spender: Address) -> Result<(), Error> {
        let state = storage::get_pair_state(&e);
        state.factory.require_auth();
        let contract = e.current_contract_address();
        let live_until = e.ledger().sequence().saturating_add(200_000);
        token::Client::new(&e, &state.token0).approve(
            &contract,
            &spender,
            &state.slippage0,
            &live_until,
        );
        token::Client::new(&e, &state.token1).approve(
            &contract,
            &spender,
            &state.slippage1,
            &live_until,
        );
        Ok(())
    }

    // --- claim ledger surface ---

    pub fn claim_balance(e: Env, id: Address) -> i128 {
        ledger::claim_balance(&e, &id)
    }

    pub fn claim_supply(e: Env) -> i128 {
        ledger::total_claims(&e)
    }

    pub fn claim_transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        ledger::transfer_claims(&e, &from, &to, amount)
    }

    // --- views ---

    pub fn get_reserves(e: Env) -> (i128, i128, u32) {
        let state = storage::get_pair_state(&e);
        (state.reserve0, state.reserve1, state.ts_last)
    }

    pub fn get_token0(e: Env) -> Address {
        storage::get_pair_state(&e).token0
    }

    pub fn get_token1(e: Env) -> Address {
        storage::get_pair_state(&e).token1
    }

    pub fn get_reward_token(e: Env) -> Address {
        storage::get_pair_state(&e).reward_token
    }

    pub fn get_factory(e: Env) -> Address {
        storage::get_pair_state(&e).factory
    }

    pub fn price0_cumulative_last(e: Env) -> Uint256 {
        storage::get_pair_state(&e).price0_cumulative
    }

    pub fn price1_cumulative_last(e: Env) -> Uint256 {
        storage::get_pair_state(&e).price1_cumulative
    }

    /// Blended market price of `token`, UQ112x112.
    pub fn get_token_market_price(e: Env, token: Address) -> Result<Uint256, Error> {
        let state = storage::get_pair_state(&e);
        let price = oracle::market_price(&e, &state, Self::token_side(&state, &token)?)?;
        Ok(math::store(price))
    }

    /// Accumulated pool-favorable surplus per underlying asset.
    pub fn get_slippage_amount(e: Env) -> (i128, i128) {
        let state = storage::get_pair_state(&e);
        (state.slippage0, state.slippage1)
    }

    pub fn reward_reserve(e: Env) -> i128 {
        storage::get_pair_state(&e).reward_reserve
    }

    /// Total share supply, locked minimum included.
    pub fn supply(e: Env) -> i128 {
        ledger::total_shares(&e)
    }

    pub fn locked_supply(e: Env) -> i128 {
        ledger::locked_shares(&e)
    }

    // --- internals ---

    /// Mints the protocol-fee shares owed since the last liquidity
    /// event: 1/6 of the pool's growth, expressed through root-k.
    fn mint_protocol_fee(e: &Env, state: &mut PairState) -> Result<bool, Error> {
        let fee_to = FactoryClient::new(e, &state.factory).fee_to();
        let k_last = math::load(&state.k_last);
        match fee_to {
            Some(fee_to) => {
                if !k_last.is_zero() {
                    let root_k = Self::current_k(state)
                        .map(|k| math::load(&k).integer_sqrt())?;
                    let root_k_last = k_last.integer_sqrt();
                    if root_k > root_k_last {
                        let supply = U256::from(ledger::total_shares(e) as u128);
                        let numerator = supply
                            .checked_mul(root_k - root_k_last)
                            .ok_or(Error::Overflow)?;
                        let denominator = root_k
                            .checked_mul(U256::from(5u64))
                            .ok_or(Error::Overflow)?
                            .checked_add(root_k_last)
                            .ok_or(Error::Overflow)?;
                        let fee = math::to_i128(numerator / denominator)?;
                        if fee > 0 {
                            ledger::mint_shares(e, &fee_to, fee)?;
                        }
                    }
                }
                Ok(true)
            }
            None => {
                if !k_last.is_zero() {
                    state.k_last = Uint256::ZERO;
                }
                Ok(false)
            }
        }
    }

    fn current_k(state: &PairState) -> Result<Uint256, Error> {
        let k = U256::from(state.reserve0 as u128)
            .checked_mul(U256::from(state.reserve1 as u128))
            .ok_or(Error::Overflow)?;
        Ok(math::store(k))
    }

    fn fee_adjusted(balance: i128, amount_in: i128) -> Result<U256, Error> {
        U256::from(balance as u128)
            .checked_mul(U256::from(1000u64))
            .ok_or(Error::Overflow)?
            .checked_sub(
                U256::from(amount_in as u128)
                    .checked_mul(U256::from(3u64))
                    .ok_or(Error::Overflow)?,
            )
            .ok_or(Error::Overflow)
    }

    fn spot_price(state: &PairState, of_token0: bool) -> Result<U256, Error> {
        if state.reserve0 <= 0 || state.reserve1 <= 0 {
            return Err(Error::InsufficientLiquidity);
        }
        if of_token0 {
            math::encode_price(state.reserve1, state.reserve0)
        } else {
            math::encode_price(state.reserve0, state.reserve1)
        }
    }

    /// True if `token` is token0, false if token1.
    fn token_side(state: &PairState, token: &Address) -> Result<bool, Error> {
        if *token == state.token0 {
            Ok(true)
        } else if *token == state.token1 {
            Ok(false)
        } else {
            Err(Error::InvalidToken)
        }
    }

    fn check_path(state: &PairState, path: &Vec<Address>) -> Result<(Address, Address), Error> {
        if path.len() != 2 {
            return Err(Error::InvalidPath);
        }
        let input = path.get(0).ok_or(Error::InvalidPath)?;
        let output = path.get(1).ok_or(Error::InvalidPath)?;
        if input == output {
            return Err(Error::InvalidPath);
        }
        Self::token_side(state, &input)?;
        Self::token_side(state, &output)?;
        Ok((input, output))
    }

    /// Mints at most as many claims as the backing can still honor.
    fn mint_backed_claim(
        e: &Env,
        state: &PairState,
        to: &Address,
        gap: i128,
    ) -> Result<i128, Error> {
        let headroom = state
            .reward_reserve
            .checked_sub(ledger::total_claims(e))
            .ok_or(Error::Overflow)?
            .max(0);
        let claim = gap.min(headroom);
        if claim > 0 {
            ledger::mint_claims(e, to, claim)?;
            event::claim_mint(e, to, claim);
        }
        Ok(claim)
    }
}

#[contractimpl]
impl token::Interface for Pair {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        ledger::share_allowance(&e, &from, &spender)
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, _expiration_ledger: u32) {
        from.require_auth();
        if amount < 0 {
            panic_with_error!(&e, Error::NegativeAmount);
        }
        ledger::approve_shares(&e, &from, &spender, amount);
    }

    fn balance(e: Env, id: Address) -> i128 {
        ledger::share_balance(&e, &id)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        if amount < 0 {
            panic_with_error!(&e, Error::NegativeAmount);
        }
        if let Err(err) = ledger::transfer_shares(&e, &from, &to, amount) {
            panic_with_error!(&e, err);
        }
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        if amount < 0 {
            panic_with_error!(&e, Error::NegativeAmount);
        }
        if let Err(err) = ledger::spend_share_allowance(&e, &from, &spender, amount) {
            panic_with_error!(&e, err);
        }
        if let Err(err) = ledger::transfer_shares(&e, &from, &to, amount) {
            panic_with_error!(&e, err);
        }
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();
        if amount < 0 {
            panic_with_error!(&e, Error::NegativeAmount);
        }
        if let Err(err) = ledger::burn_shares(&e, &from, amount) {
            panic_with_error!(&e, err);
        }
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        if amount < 0 {
            panic_with_error!(&e, Error::NegativeAmount);
        }
        if let Err(err) = ledger::spend_share_allowance(&e, &from, &spender, amount) {
            panic_with_error!(&e, err);
        }
        if let Err(err) = ledger::burn_shares(&e, &from, amount) {
            panic_with_error!(&e, err);
        }
    }

    fn decimals(e: Env) -> u32 {
        storage::share_decimals(&e)
    }

    fn name(e: Env) -> String {
        storage::share_name(&e)
    }

    fn symbol(e: Env) -> String {
        storage::share_symbol(&e)
    }
}
