use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const OPERATOR_PREFIX: Symbol = symbol_short!("OPERATOR");
const OPERATOR_LIST: Symbol = symbol_short!("OPER_LIST");

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn operator_key(operator: &Address) -> (Symbol, Address) {
    (OPERATOR_PREFIX, operator.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Primary admin ────────────────────────────────────────────────────────────

/// Stores `admin` as the primary admin, replacing any previous one.
/// Callers must verify authorization beforehand.
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

/// Returns the primary admin, if one has been set.
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ADMIN)
}

/// Returns `true` if `caller` is the primary admin.
pub fn is_admin(env: &Env, caller: &Address) -> bool {
    get_admin(env).is_some_and(|admin| admin == *caller)
}

// ── Operators ────────────────────────────────────────────────────────────────

/// Grants or revokes operator rights for `operator`.
///
/// Operators may run configuration entry points but cannot change the
/// primary admin or the operator set.
pub fn set_operator(env: &Env, operator: &Address, enabled: bool) {
    let key = operator_key(operator);
    if enabled {
        env.storage().persistent().set(&key, &true);
        extend_ttl(env, &key);
        track_operator(env, operator);
    } else {
        env.storage().persistent().remove(&key);
        untrack_operator(env, operator);
    }
}

/// Returns `true` if `operator` currently holds operator rights.
pub fn is_operator(env: &Env, operator: &Address) -> bool {
    let key = operator_key(operator);
    let granted: bool = env.storage().persistent().get(&key).unwrap_or(false);
    if granted {
        extend_ttl(env, &key);
    }
    granted
}

/// The authorization check for configuration entry points: the primary
/// admin or any granted operator.
pub fn is_authorized_admin(env: &Env, caller: &Address) -> bool {
    is_admin(env, caller) || is_operator(env, caller)
}

/// Returns every address currently holding operator rights.
pub fn list_operators(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&OPERATOR_LIST)
        .unwrap_or(Vec::new(env))
}

fn track_operator(env: &Env, operator: &Address) {
    let mut operators = list_operators(env);
    if !operators.iter().any(|o| o == *operator) {
        operators.push_back(operator.clone());
        env.storage().persistent().set(&OPERATOR_LIST, &operators);
    }
}

fn untrack_operator(env: &Env, operator: &Address) {
    let operators = list_operators(env);
    let mut kept = Vec::new(env);
    for o in operators.iter() {
        if o != *operator {
            kept.push_back(o);
        }
    }
    env.storage().persistent().set(&OPERATOR_LIST, &kept);
}
