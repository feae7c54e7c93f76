#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub reward_token: Address,
    pub fee_sink: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub timestamp: u64,
}

/// Fired once when the reward budget is fixed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsInitializedEvent {
    pub total_budget: i128,
    pub reward_per_second: i128,
    pub timestamp: u64,
}

/// Fired when a holder stakes into a pool. `amount` is the credited stake,
/// after `fee` has been routed to the fee sink.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub holder: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub fee: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub holder: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a holder exits a pool without collecting rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawnEvent {
    pub holder: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired on every reward transfer. `pool_id` is `None` for the aggregate
/// payout of `claim_all_pending`.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub holder: Address,
    pub pool_id: Option<u32>,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolAddedEvent {
    pub pool_id: u32,
    pub asset: Address,
    pub alloc_weight: i128,
    pub deposit_fee_bps: u32,
    pub last_reward_time: u64,
    pub is_started: bool,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfigUpdatedEvent {
    pub pool_id: u32,
    pub old_alloc_weight: i128,
    pub new_alloc_weight: i128,
    pub deposit_fee_bps: u32,
    pub total_alloc_weight: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSinkChangedEvent {
    pub old_sink: Address,
    pub new_sink: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperatorSetEvent {
    pub operator: Address,
    pub enabled: bool,
    pub timestamp: u64,
}

/// Fired when an admin sweeps a stray asset out of the contract.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRecoveredEvent {
    pub asset: Address,
    pub amount: i128,
    pub to: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    reward_token: Address,
    fee_sink: Address,
    start_time: u64,
    end_time: u64,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            reward_token,
            fee_sink,
            start_time,
            end_time,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_initialized(env: &Env, total_budget: i128, reward_per_second: i128) {
    env.events().publish(
        (symbol_short!("RWD_INIT"),),
        RewardsInitializedEvent {
            total_budget,
            reward_per_second,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposited(env: &Env, holder: Address, pool_id: u32, amount: i128, fee: i128) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), holder.clone(), pool_id),
        DepositedEvent {
            holder,
            pool_id,
            amount,
            fee,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, holder: Address, pool_id: u32, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), holder.clone(), pool_id),
        WithdrawnEvent {
            holder,
            pool_id,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_emergency_withdrawn(env: &Env, holder: Address, pool_id: u32, amount: i128) {
    env.events().publish(
        (symbol_short!("EMRG_WD"), holder.clone(), pool_id),
        EmergencyWithdrawnEvent {
            holder,
            pool_id,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_paid(env: &Env, holder: Address, pool_id: Option<u32>, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_PAID"), holder.clone()),
        RewardPaidEvent {
            holder,
            pool_id,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pool_added(
    env: &Env,
    pool_id: u32,
    asset: Address,
    alloc_weight: i128,
    deposit_fee_bps: u32,
    last_reward_time: u64,
    is_started: bool,
) {
    env.events().publish(
        (symbol_short!("POOL_ADD"), pool_id),
        PoolAddedEvent {
            pool_id,
            asset,
            alloc_weight,
            deposit_fee_bps,
            last_reward_time,
            is_started,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pool_config_updated(
    env: &Env,
    pool_id: u32,
    old_alloc_weight: i128,
    new_alloc_weight: i128,
    deposit_fee_bps: u32,
    total_alloc_weight: i128,
) {
    env.events().publish(
        (symbol_short!("POOL_UPD"), pool_id),
        PoolConfigUpdatedEvent {
            pool_id,
            old_alloc_weight,
            new_alloc_weight,
            deposit_fee_bps,
            total_alloc_weight,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_fee_sink_changed(env: &Env, old_sink: Address, new_sink: Address) {
    env.events().publish(
        (symbol_short!("FEE_SINK"),),
        FeeSinkChangedEvent {
            old_sink,
            new_sink,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_changed(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_CHG"), new_admin.clone()),
        AdminChangedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_operator_set(env: &Env, operator: Address, enabled: bool) {
    env.events().publish(
        (symbol_short!("OPER_SET"), operator.clone()),
        OperatorSetEvent {
            operator,
            enabled,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_asset_recovered(env: &Env, asset: Address, amount: i128, to: Address) {
    env.events().publish(
        (symbol_short!("RECOVER"), asset.clone()),
        AssetRecoveredEvent {
            asset,
            amount,
            to,
            timestamp: env.ledger().timestamp(),
        },
    );
}
