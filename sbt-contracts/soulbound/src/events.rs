// soulbound/src/events.rs
use soroban_sdk::{Address, Env, String, Symbol};

pub struct Events;

impl Events {
    pub fn registry_initialized(env: &Env, operator: &Address, open_mint: bool) {
        env.events().publish(
            (Symbol::new(env, "RegistryInitialized"), operator.clone()),
            open_mint,
        );
    }

    pub fn soul_minted(env: &Env, owner: &Address, token_id: u64, url: &String) {
        env.events().publish(
            (Symbol::new(env, "SoulMinted"), owner.clone()),
            (token_id, url.clone()),
        );
    }

    pub fn soul_claimed(env: &Env, owner: &Address, token_id: u64) {
        env.events().publish(
            (Symbol::new(env, "SoulClaimed"), owner.clone()),
            token_id,
        );
    }

    pub fn soul_burned(env: &Env, owner: &Address, token_id: u64) {
        env.events().publish(
            (Symbol::new(env, "SoulBurned"), owner.clone()),
            token_id,
        );
    }
}
