#![no_std]
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

mod errors;
mod events;
mod soul;
mod storage;
mod validation;

pub use errors::ContractError;
pub use soul::{SoulRecord, TokenMetadata};

use events::Events;

#[contract]
pub struct SoulboundContract;

#[contractimpl]
impl SoulboundContract {
    /// Record the operator and the mint policy. The operator is captured
    /// once; every later call fails with `AlreadyInitialized`.
    pub fn initialize(env: Env, operator: Address, open_mint: bool) -> Result<(), ContractError> {
        if storage::get_operator(&env).is_some() {
            return Err(ContractError::AlreadyInitialized);
        }

        storage::set_operator(&env, &operator);
        storage::set_open_mint(&env, open_mint);

        Events::registry_initialized(&env, &operator, open_mint);
        Ok(())
    }

    /// Issue a new soul for `owner` under `token_id`. Minting is
    /// restricted to the operator unless the registry was initialized
    /// with `open_mint`. The soul stays unclaimed until the owner calls
    /// `claim`.
    pub fn mint(
        env: Env,
        caller: Address,
        owner: Address,
        token_id: u64,
        url: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        validation::validate_token_id(token_id)?;
        validation::validate_minter(&env, &caller)?;

        soul::mint_soul(&env, &owner, token_id, url.clone())?;

        Events::soul_minted(&env, &owner, token_id, &url);
        Ok(())
    }

    /// Attach credential hashes to a minted soul. Only the owner can
    /// claim, and only once.
    pub fn claim(
        env: Env,
        owner: Address,
        credentials: Vec<BytesN<32>>,
    ) -> Result<(), ContractError> {
        owner.require_auth();

        let token_id = soul::claim_soul(&env, &owner, credentials)?;

        Events::soul_claimed(&env, &owner, token_id);
        Ok(())
    }

    /// Delete the caller's soul and free its token id. One-way; the data
    /// is gone once burned.
    pub fn burn(env: Env, owner: Address) -> Result<(), ContractError> {
        owner.require_auth();

        let token_id = soul::burn_soul(&env, &owner)?;

        Events::soul_burned(&env, &owner, token_id);
        Ok(())
    }

    pub fn get_owner(env: Env, token_id: u64) -> Result<Address, ContractError> {
        storage::get_token_owner(&env, token_id).ok_or(ContractError::NotFound)
    }

    pub fn get_metadata(env: Env, token_id: u64) -> Result<TokenMetadata, ContractError> {
        let owner = storage::get_token_owner(&env, token_id).ok_or(ContractError::NotFound)?;
        let soul = storage::get_soul(&env, &owner).ok_or(ContractError::NotFound)?;
        Ok(soul.metadata)
    }

    /// True from mint onward, claimed or not; false again after burn.
    pub fn has_soul(env: Env, owner: Address) -> bool {
        storage::get_soul(&env, &owner).is_some()
    }

    pub fn get_soul(env: Env, owner: Address) -> Result<SoulRecord, ContractError> {
        storage::get_soul(&env, &owner).ok_or(ContractError::SoulNotFound)
    }

    pub fn operator(env: Env) -> Result<Address, ContractError> {
        storage::get_operator(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn is_open_mint(env: Env) -> bool {
        storage::is_open_mint(&env)
    }
}


#[cfg(test)]
mod mint_tests;
