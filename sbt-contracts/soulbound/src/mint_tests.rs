#![cfg(test)]

use crate::{ContractError, SoulboundContract, SoulboundContractClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    vec, Address, BytesN, Env, IntoVal, String, Symbol,
};

fn setup(open_mint: bool) -> (Env, SoulboundContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(SoulboundContract, ());
    let client = SoulboundContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    client.initialize(&operator, &open_mint);

    (env, client, operator)
}

#[test]
fn test_mint_records_owner_and_url() {
    let (env, client, operator) = setup(false);
    let recipient = Address::generate(&env);

    client.mint(&operator, &recipient, &1, &String::from_str(&env, "my_url"));

    assert_eq!(client.get_owner(&1), recipient);
    assert!(client.has_soul(&recipient));

    let metadata = client.get_metadata(&1);
    assert_eq!(metadata.url, String::from_str(&env, "my_url"));
    assert_eq!(metadata.github_url, None);
    assert_eq!(metadata.email_address, None);
}

#[test]
fn test_mint_emits_event() {
    let (env, client, operator) = setup(false);
    let recipient = Address::generate(&env);
    let url = String::from_str(&env, "my_url");

    client.mint(&operator, &recipient, &1, &url);

    let expected = (
        client.address.clone(),
        (Symbol::new(&env, "SoulMinted"), recipient.clone()).into_val(&env),
        (1u64, url.clone()).into_val(&env),
    );
    assert!(env.events().all().contains(&expected));
}

#[test]
fn test_get_owner_unminted_fails() {
    let (_env, client, _operator) = setup(false);

    assert_eq!(client.try_get_owner(&1), Err(Ok(ContractError::NotFound)));
}

#[test]
fn test_mint_duplicate_token_id_fails() {
    let (env, client, operator) = setup(false);
    let first = Address::generate(&env);
    let second = Address::generate(&env);

    client.mint(&operator, &first, &1, &String::from_str(&env, "my_url"));

    assert_eq!(
        client.try_mint(&operator, &second, &1, &String::from_str(&env, "other_url")),
        Err(Ok(ContractError::AlreadyMinted))
    );

    // First mint is untouched
    assert_eq!(client.get_owner(&1), first);
}

#[test]
fn test_mint_same_owner_twice_fails() {
    let (env, client, operator) = setup(false);
    let recipient = Address::generate(&env);

    client.mint(&operator, &recipient, &1, &String::from_str(&env, "my_url"));

    // Soul minted but not yet claimed
    assert_eq!(
        client.try_mint(&operator, &recipient, &2, &String::from_str(&env, "my_url")),
        Err(Ok(ContractError::PendingClaim))
    );

    let hash = BytesN::from_array(&env, &[7u8; 32]);
    client.claim(&recipient, &vec![&env, hash]);

    // Claimed soul blocks minting for good
    assert_eq!(
        client.try_mint(&operator, &recipient, &2, &String::from_str(&env, "my_url")),
        Err(Ok(ContractError::SoulExists))
    );
}

#[test]
fn test_only_operator_mints() {
    let (env, client, _operator) = setup(false);
    let outsider = Address::generate(&env);
    let recipient = Address::generate(&env);

    assert_eq!(
        client.try_mint(&outsider, &recipient, &1, &String::from_str(&env, "my_url")),
        Err(Ok(ContractError::Unauthorized))
    );
    assert!(!client.has_soul(&recipient));
}

#[test]
fn test_open_mint_allows_any_caller() {
    let (env, client, _operator) = setup(true);
    let outsider = Address::generate(&env);
    let recipient = Address::generate(&env);

    client.mint(&outsider, &recipient, &1, &String::from_str(&env, "my_url"));

    assert_eq!(client.get_owner(&1), recipient);
}

#[test]
fn test_mint_zero_token_id_fails() {
    let (env, client, operator) = setup(false);
    let recipient = Address::generate(&env);

    assert_eq!(
        client.try_mint(&operator, &recipient, &0, &String::from_str(&env, "my_url")),
        Err(Ok(ContractError::InvalidTokenId))
    );
}

#[test]
fn test_mint_empty_url_is_allowed() {
    let (env, client, operator) = setup(false);
    let recipient = Address::generate(&env);

    client.mint(&operator, &recipient, &1, &String::from_str(&env, ""));

    assert_eq!(client.get_metadata(&1).url, String::from_str(&env, ""));
}
