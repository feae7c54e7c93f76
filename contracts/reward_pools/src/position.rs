use common::fixed_point;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::ContractError;

const POSITION: Symbol = symbol_short!("POSITION");

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

/// A holder's stake in one pool.
///
/// `reward_debt` is the accumulator value already settled for `amount`; it
/// is re-checkpointed after every mutation so only reward accrued since then
/// shows up as pending.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserPosition {
    pub amount: i128,
    pub reward_debt: i128,
}

/// One row of `get_positions`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionView {
    pub pool_id: u32,
    pub asset: Address,
    pub amount: i128,
    pub pending: i128,
}

impl UserPosition {
    /// ```text
    /// pending = amount × acc / ACC_PRECISION − reward_debt
    /// ```
    pub fn pending(&self, env: &Env, acc_reward_per_share: i128) -> Result<i128, ContractError> {
        let accrued = fixed_point::scale_down(env, self.amount, acc_reward_per_share)
            .ok_or(ContractError::ArithmeticOverflow)?;
        let pending = accrued
            .checked_sub(self.reward_debt)
            .ok_or(ContractError::ArithmeticOverflow)?;
        Ok(pending.max(0))
    }

    pub fn checkpoint(
        &mut self,
        env: &Env,
        acc_reward_per_share: i128,
    ) -> Result<(), ContractError> {
        self.reward_debt = fixed_point::scale_down(env, self.amount, acc_reward_per_share)
            .ok_or(ContractError::ArithmeticOverflow)?;
        Ok(())
    }
}

fn position_key(pool_id: u32, holder: &Address) -> (Symbol, u32, Address) {
    (POSITION, pool_id, holder.clone())
}

/// Reads a position; holders that never interacted get a zeroed one.
pub fn load(env: &Env, pool_id: u32, holder: &Address) -> UserPosition {
    env.storage()
        .persistent()
        .get(&position_key(pool_id, holder))
        .unwrap_or_default()
}

pub fn store(env: &Env, pool_id: u32, holder: &Address, position: &UserPosition) {
    let key = position_key(pool_id, holder);
    env.storage().persistent().set(&key, position);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
