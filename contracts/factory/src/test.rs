#![cfg(test)]
extern crate std;

use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

use crate::{PairFactory, PairFactoryClient};

fn deploy_factory<'a>(e: &Env, admin: &Address) -> PairFactoryClient<'a> {
    let contract_id = e.register(PairFactory, (admin,));
    PairFactoryClient::new(e, &contract_id)
}

#[test]
fn test_fee_to_defaults_off() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);

    let factory = deploy_factory(&env, &admin);
    assert_eq!(factory.fee_to(), None);
}

#[test]
fn test_set_fee_to_round_trips() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let recipient = Address::generate(&env);

    let factory = deploy_factory(&env, &admin);
    factory.set_fee_to(&admin, &Some(recipient.clone()));
    assert_eq!(factory.fee_to(), Some(recipient));

    factory.set_fee_to(&admin, &None);
    assert_eq!(factory.fee_to(), None);
}

#[test]
#[should_panic(expected = "Unauthorized")]
fn test_set_fee_to_rejects_non_admin() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let intruder = Address::generate(&env);

    let factory = deploy_factory(&env, &admin);
    factory.set_fee_to(&intruder, &Some(intruder.clone()));
}

#[test]
fn test_update_pair_wasm_hash() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);

    let factory = deploy_factory(&env, &admin);
    let hash = BytesN::from_array(&env, &[7; 32]);
    factory.update_pair_wasm_hash(&admin, &hash);
    assert_eq!(factory.get_pair_wasm_hash(), hash);
}

#[test]
#[should_panic(expected = "Unauthorized")]
fn test_update_pair_wasm_hash_rejects_non_admin() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let intruder = Address::generate(&env);

    let factory = deploy_factory(&env, &admin);
    factory.update_pair_wasm_hash(&intruder, &BytesN::from_array(&env, &[7; 32]));
}

#[test]
fn test_registry_starts_empty() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let token_a = Address::generate(&env);
    let token_b = Address::generate(&env);

    let factory = deploy_factory(&env, &admin);
    assert_eq!(factory.get_pair(&token_a, &token_b), None);
    assert_eq!(factory.get_all_pairs().len(), 0);
    assert_eq!(factory.get_pair_count(), 0);
}
