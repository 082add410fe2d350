// soulbound/src/storage.rs
use soroban_sdk::{contracttype, Address, Env};

use crate::soul::SoulRecord;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Operator,
    OpenMint,
    Soul(Address),
    TokenOwner(u64),
}

pub fn set_operator(env: &Env, operator: &Address) {
    env.storage().instance().set(&DataKey::Operator, operator);
}

pub fn get_operator(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Operator)
}

pub fn set_open_mint(env: &Env, open: bool) {
    env.storage().instance().set(&DataKey::OpenMint, &open);
}

pub fn is_open_mint(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::OpenMint).unwrap_or(false)
}

pub fn set_soul(env: &Env, owner: &Address, soul: &SoulRecord) {
    env.storage().persistent().set(&DataKey::Soul(owner.clone()), soul);
}

pub fn get_soul(env: &Env, owner: &Address) -> Option<SoulRecord> {
    env.storage().persistent().get(&DataKey::Soul(owner.clone()))
}

pub fn remove_soul(env: &Env, owner: &Address) {
    env.storage().persistent().remove(&DataKey::Soul(owner.clone()));
}

pub fn set_token_owner(env: &Env, token_id: u64, owner: &Address) {
    env.storage().persistent().set(&DataKey::TokenOwner(token_id), owner);
}

pub fn get_token_owner(env: &Env, token_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::TokenOwner(token_id))
}

pub fn remove_token_owner(env: &Env, token_id: u64) {
    env.storage().persistent().remove(&DataKey::TokenOwner(token_id));
}
