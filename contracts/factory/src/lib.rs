#![no_std]

use soroban_sdk::{
    contract, contractimpl, contracttype, vec, Address, BytesN, Env, String, Vec,
};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    PairWasmHash,
    DeployedPairs(Address, Address),
    AllPairs,
    FeeTo,
}

#[contract]
pub struct PairFactory;

#[contractimpl]
impl PairFactory {
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&DataKey::Admin, &admin);
    }

    /// Set the pair contract Wasm hash (admin only)
    pub fn update_pair_wasm_hash(env: Env, admin_addr: Address, new_hash: BytesN<32>) {
        Self::require_admin(&env, &admin_addr);
        env.storage().instance().set(&DataKey::PairWasmHash, &new_hash);
    }

    /// Get the pair contract Wasm hash
    pub fn get_pair_wasm_hash(env: Env) -> BytesN<32> {
        env.storage().instance().get(&DataKey::PairWasmHash).expect("not set")
    }

    /// Recipient of the protocol fee. None while the fee is off.
    pub fn fee_to(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::FeeTo).unwrap_or(None)
    }

    /// Turn the protocol fee on (Some) or off (None). Admin only.
    pub fn set_fee_to(env: Env, admin_addr: Address, fee_to: Option<Address>) {
        Self::require_admin(&env, &admin_addr);
        env.storage().instance().set(&DataKey::FeeTo, &fee_to);
    }

    /// Deploy a new pair for a token pair, revert if one already exists
    pub fn create_pair(
        env: Env,
        token0: Address,
        token1: Address,
        reward_token: Address,
        share_name: String,
        share_symbol: String,
        salt: BytesN<32>,
    ) -> Address {
        assert!(token0 != token1, "Tokens must be different");
        let key = DataKey::DeployedPairs(token0.clone(), token1.clone());
        let mirror = DataKey::DeployedPairs(token1.clone(), token0.clone());
        if env.storage().instance().get::<_, Address>(&key).is_some()
            || env.storage().instance().get::<_, Address>(&mirror).is_some()
        {
            panic!("Pair already exists for tokens");
        }
        let wasm_hash = env
            .storage()
            .instance()
            .get::<_, BytesN<32>>(&DataKey::PairWasmHash)
            .expect("Wasm hash not set");
        let pair_addr = env
            .deployer()
            .with_address(env.current_contract_address(), salt)
            .deploy_v2(
                wasm_hash,
                (
                    token0,
                    token1,
                    reward_token,
                    env.current_contract_address(),
                    share_name,
                    share_symbol,
                ),
            );
        env.storage().instance().set(&key, &pair_addr);

        let mut all_pairs = env
            .storage()
            .instance()
            .get::<_, Vec<Address>>(&DataKey::AllPairs)
            .unwrap_or(vec![&env]);
        all_pairs.push_back(pair_addr.clone());
        env.storage().instance().set(&DataKey::AllPairs, &all_pairs);

        pair_addr
    }

    /// Get the pair address for a token pair, or None if not exists
    pub fn get_pair(env: Env, token0: Address, token1: Address) -> Option<Address> {
        if let Some(addr) = env
            .storage()
            .instance()
            .get(&DataKey::DeployedPairs(token0.clone(), token1.clone()))
        {
            return Some(addr);
        }
        env.storage()
            .instance()
            .get(&DataKey::DeployedPairs(token1, token0))
    }

    /// Get all deployed pairs
    pub fn get_all_pairs(env: Env) -> Vec<Address> {
        env.storage().instance().get(&DataKey::AllPairs).unwrap_or(vec![&env])
    }

    /// Get total number of pairs
    pub fn get_pair_count(env: Env) -> u32 {
        Self::get_all_pairs(env).len()
    }

    fn require_admin(env: &Env, admin_addr: &Address) {
        let admin = env
            .storage()
            .instance()
            .get::<_, Address>(&DataKey::Admin)
            .expect("not set");
        assert!(admin == *admin_addr, "Unauthorized");
        admin.require_auth();
    }
}

mod test;
