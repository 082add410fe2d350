// soulbound/src/soul.rs
use soroban_sdk::{contracttype, Address, BytesN, Env, String, Vec};

use crate::errors::ContractError;
use crate::storage;

/// Off-chain metadata attached at mint time. Only `url` is required;
/// the profile links stay unset until the owner provides them.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct TokenMetadata {
    pub url: String,
    pub github_url: Option<String>,
    pub email_address: Option<String>,
}

/// One soul per address. `claimed` flips once, when the owner attaches
/// their credential hashes.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct SoulRecord {
    pub token_id: u64,
    pub metadata: TokenMetadata,
    pub claimed: bool,
    pub credentials: Vec<BytesN<32>>,
}

pub fn mint_soul(
    env: &Env,
    owner: &Address,
    token_id: u64,
    url: String,
) -> Result<(), ContractError> {
    if storage::get_token_owner(env, token_id).is_some() {
        return Err(ContractError::AlreadyMinted);
    }

    match storage::get_soul(env, owner) {
        Some(soul) if soul.claimed => return Err(ContractError::SoulExists),
        Some(_) => return Err(ContractError::PendingClaim),
        None => {}
    }

    let record = SoulRecord {
        token_id,
        metadata: TokenMetadata {
            url,
            github_url: None,
            email_address: None,
        },
        claimed: false,
        credentials: Vec::new(env),
    };

    storage::set_soul(env, owner, &record);
    storage::set_token_owner(env, token_id, owner);

    Ok(())
}

pub fn claim_soul(
    env: &Env,
    owner: &Address,
    credentials: Vec<BytesN<32>>,
) -> Result<u64, ContractError> {
    let mut soul = storage::get_soul(env, owner).ok_or(ContractError::NotMinted)?;

    if soul.claimed {
        return Err(ContractError::AlreadyClaimed);
    }

    soul.claimed = true;
    soul.credentials = credentials;
    storage::set_soul(env, owner, &soul);

    Ok(soul.token_id)
}

pub fn burn_soul(env: &Env, owner: &Address) -> Result<u64, ContractError> {
    let soul = storage::get_soul(env, owner).ok_or(ContractError::SoulNotFound)?;

    storage::remove_token_owner(env, soul.token_id);
    storage::remove_soul(env, owner);

    Ok(soul.token_id)
}
