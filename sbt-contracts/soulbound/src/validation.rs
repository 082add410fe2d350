// soulbound/src/validation.rs
use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::storage;

pub fn validate_token_id(token_id: u64) -> Result<(), ContractError> {
    if token_id == 0 {
        return Err(ContractError::InvalidTokenId);
    }
    Ok(())
}

/// Open registries accept any authenticated minter; otherwise only the
/// operator recorded at initialization may mint.
pub fn validate_minter(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if storage::is_open_mint(env) {
        return Ok(());
    }

    match storage::get_operator(env) {
        Some(operator) if operator == *caller => Ok(()),
        Some(_) => Err(ContractError::Unauthorized),
        None => Err(ContractError::NotInitialized),
    }
}
