//! Non-reentrancy lock for entry points that move assets.
//!
//! The flag lives in instance storage. When the guarded invocation fails the
//! host discards every storage write, the flag included, so only the success
//! path needs an explicit [`exit`].

use soroban_sdk::{symbol_short, Env, Symbol};

const LOCKED: Symbol = symbol_short!("LOCKED");

/// Takes the lock. Returns `false` if it is already held.
pub fn enter(env: &Env) -> bool {
    if is_locked(env) {
        return false;
    }
    env.storage().instance().set(&LOCKED, &true);
    true
}

/// Releases the lock.
pub fn exit(env: &Env) {
    env.storage().instance().remove(&LOCKED);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().get(&LOCKED).unwrap_or(false)
}
