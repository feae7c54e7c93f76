//! Pool accumulator updates.
//!
//! [`advance`] is the only place the accumulator formula lives. The mutating
//! entry points run it against stored state and persist the result; the
//! read-only previews run it against copies and throw the result away, so a
//! preview always matches what the next claim pays.

use common::fixed_point;
use soroban_sdk::{log, Env};

use crate::pool::{self, Pool};
use crate::schedule::Schedule;
use crate::ContractError;

/// Brings `pool` up to `now`.
///
/// ```text
/// share   = generated(last_reward_time, now) × alloc_weight / total_alloc_weight
/// acc    += share × ACC_PRECISION / total_staked
/// ```
///
/// An empty pool only moves `last_reward_time`; reward for the empty period
/// is never emitted. A pool that is not started yet joins
/// `total_alloc_weight` the first time it is advanced with stake.
///
/// Returns `true` if this call activated the pool.
pub fn advance(
    env: &Env,
    pool: &mut Pool,
    schedule: &Schedule,
    total_alloc_weight: &mut i128,
    now: u64,
) -> Result<bool, ContractError> {
    if now <= pool.last_reward_time {
        return Ok(false);
    }
    if pool.total_staked == 0 {
        pool.last_reward_time = now;
        return Ok(false);
    }

    let mut activated = false;
    if !pool.is_started {
        pool.is_started = true;
        *total_alloc_weight = total_alloc_weight
            .checked_add(pool.alloc_weight)
            .ok_or(ContractError::ArithmeticOverflow)?;
        activated = true;
    }

    if *total_alloc_weight > 0 {
        let generated = schedule.generated_reward(pool.last_reward_time, now)?;
        let share = fixed_point::mul_div(env, generated, pool.alloc_weight, *total_alloc_weight)
            .ok_or(ContractError::ArithmeticOverflow)?;
        let increment = fixed_point::per_share(env, share, pool.total_staked)
            .ok_or(ContractError::ArithmeticOverflow)?;
        pool.acc_reward_per_share = pool
            .acc_reward_per_share
            .checked_add(increment)
            .ok_or(ContractError::ArithmeticOverflow)?;
    }

    pool.last_reward_time = now;
    Ok(activated)
}

/// Advances the stored pool `pool_id` to `now` and persists it, together with
/// the total allocation weight if activation changed it.
pub fn accrue_pool(
    env: &Env,
    schedule: &Schedule,
    pool_id: u32,
    now: u64,
) -> Result<Pool, ContractError> {
    let mut pool = pool::load(env, pool_id)?;
    if now <= pool.last_reward_time {
        return Ok(pool);
    }

    let mut total = pool::total_alloc_weight(env);
    if advance(env, &mut pool, schedule, &mut total, now)? {
        log!(
            env,
            "pool {} activated, total alloc weight now {}",
            pool_id,
            total
        );
        pool::set_total_alloc_weight(env, total);
    }
    pool::store(env, pool_id, &pool);
    Ok(pool)
}

/// Accrues pools `from..=to` in ascending order.
pub fn accrue_range(
    env: &Env,
    schedule: &Schedule,
    from: u32,
    to: u32,
    now: u64,
) -> Result<(), ContractError> {
    if from > to {
        return Err(ContractError::InvalidRange);
    }
    if to >= pool::count(env) {
        return Err(ContractError::PoolNotFound);
    }
    for pool_id in from..=to {
        accrue_pool(env, schedule, pool_id, now)?;
    }
    Ok(())
}

/// Accrues every registered pool.
pub fn accrue_all(env: &Env, schedule: &Schedule, now: u64) -> Result<(), ContractError> {
    for pool_id in 0..pool::count(env) {
        accrue_pool(env, schedule, pool_id, now)?;
    }
    Ok(())
}
