//! Pool registry: ordered, append-only list of staking pools plus the
//! engine-wide allocation denominator.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::ContractError;

// ── Storage keys ─────────────────────────────────────────────────────────────

const POOL: Symbol = symbol_short!("POOL");
const POOL_CNT: Symbol = symbol_short!("POOL_CNT");
const POOL_ASSET: Symbol = symbol_short!("POOL_AST");
const TOTAL_ALLOC: Symbol = symbol_short!("TOT_ALLOC");

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

// ── Types ────────────────────────────────────────────────────────────────────

/// One staking bucket for a single asset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub asset: Address,
    /// Deposit fee in basis points, always below `MAX_DEPOSIT_FEE_BPS`.
    pub deposit_fee_bps: u32,
    pub alloc_weight: i128,
    pub last_reward_time: u64,
    /// Cumulative reward per staked unit, scaled by `ACC_PRECISION`.
    pub acc_reward_per_share: i128,
    /// Whether `alloc_weight` is part of the total allocation weight.
    pub is_started: bool,
    pub total_staked: i128,
}

impl Pool {
    pub fn new(
        asset: Address,
        alloc_weight: i128,
        deposit_fee_bps: u32,
        last_reward_time: u64,
        is_started: bool,
    ) -> Self {
        Self {
            asset,
            deposit_fee_bps,
            alloc_weight,
            last_reward_time,
            acc_reward_per_share: 0,
            is_started,
            total_staked: 0,
        }
    }
}

/// First second a newly added pool may accrue from.
///
/// Before the schedule starts the pool can never begin earlier than
/// `start_time`; afterwards it can never begin in the past. A later
/// `requested` time is honoured in both cases, which lets an admin delay a
/// pool's launch. `requested == 0` therefore means "as early as allowed".
pub fn effective_last_reward_time(requested: u64, start_time: u64, now: u64) -> u64 {
    if now < start_time {
        requested.max(start_time)
    } else {
        requested.max(now)
    }
}

/// A new pool joins the denominator immediately unless its first eligible
/// second is still ahead of both the schedule start and the current time.
pub fn starts_immediately(last_reward_time: u64, start_time: u64, now: u64) -> bool {
    last_reward_time <= start_time || last_reward_time <= now
}

// ── Storage helpers ──────────────────────────────────────────────────────────

fn pool_key(pool_id: u32) -> (Symbol, u32) {
    (POOL, pool_id)
}

fn asset_key(asset: &Address) -> (Symbol, Address) {
    (POOL_ASSET, asset.clone())
}

/// Number of registered pools. Ids run `0..count`.
pub fn count(env: &Env) -> u32 {
    env.storage().instance().get(&POOL_CNT).unwrap_or(0)
}

pub fn load(env: &Env, pool_id: u32) -> Result<Pool, ContractError> {
    env.storage()
        .persistent()
        .get(&pool_key(pool_id))
        .ok_or(ContractError::PoolNotFound)
}

pub fn store(env: &Env, pool_id: u32, pool: &Pool) {
    let key = pool_key(pool_id);
    env.storage().persistent().set(&key, pool);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Appends `pool` to the registry and indexes its asset. Returns the new id.
pub fn push(env: &Env, pool: &Pool) -> u32 {
    let pool_id = count(env);
    store(env, pool_id, pool);

    let key = asset_key(&pool.asset);
    env.storage().persistent().set(&key, &pool_id);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

    env.storage()
        .instance()
        .set(&POOL_CNT, &pool_id.saturating_add(1));
    pool_id
}

/// Id of the pool staking `asset`, if any.
pub fn pool_id_of(env: &Env, asset: &Address) -> Option<u32> {
    env.storage().persistent().get(&asset_key(asset))
}

/// Sum of `alloc_weight` over started pools.
pub fn total_alloc_weight(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_ALLOC).unwrap_or(0)
}

pub fn set_total_alloc_weight(env: &Env, total: i128) {
    env.storage().instance().set(&TOTAL_ALLOC, &total);
}
