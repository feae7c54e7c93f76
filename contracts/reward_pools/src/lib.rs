#![no_std]

pub mod accrual;
pub mod events;
pub mod pool;
pub mod position;
pub mod schedule;

use common::{access, fixed_point, reentrancy};
use soroban_sdk::{contract, contractimpl, log, symbol_short, token, Address, Env, Symbol, Vec};

use pool::Pool;
use position::{PositionView, UserPosition};
use schedule::Schedule;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const FEE_SINK: Symbol = symbol_short!("FEE_SINK");

// ── Limits ───────────────────────────────────────────────────────────────────

/// Exclusive upper bound on a pool's deposit fee (2 %).
pub const MAX_DEPOSIT_FEE_BPS: u32 = 200;

/// Pool assets stay locked against recovery for this long after the
/// schedule ends.
pub const RECOVERY_COOLDOWN: u64 = 14 * 24 * 60 * 60;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NoRewardsPresent = 4,
    DuplicateAsset = 5,
    FeeTooHigh = 6,
    LengthMismatch = 7,
    InvalidRange = 8,
    InsufficientBalance = 9,
    ProtectedAsset = 10,
    PoolNotFound = 11,
    InvalidAmount = 12,
    InvalidSchedule = 13,
    ArithmeticOverflow = 14,
    Reentrant = 15,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct RewardPoolsContract;

#[contractimpl]
impl RewardPoolsContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `reward_token` – SAC address of the token emitted as rewards.
    /// * `fee_sink`     – receiver of deposit fees.
    /// * `start_time`   – first emission second; must be in the future.
    /// * `running_time` – length of the emission window in seconds.
    ///
    /// The emission rate is fixed later by `initialize_rewards`, once the
    /// contract holds the reward budget.
    pub fn initialize(
        env: Env,
        admin: Address,
        reward_token: Address,
        fee_sink: Address,
        start_time: u64,
        running_time: u64,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if start_time <= env.ledger().timestamp() {
            return Err(ContractError::InvalidSchedule);
        }
        let schedule = Schedule::new(start_time, running_time)?;

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        env.storage().instance().set(&FEE_SINK, &fee_sink);
        schedule::store(&env, &schedule);
        access::set_admin(&env, &admin);

        events::publish_initialized(
            &env,
            admin,
            reward_token,
            fee_sink,
            schedule.start_time,
            schedule.end_time,
        );

        Ok(())
    }

    /// Fix the reward budget from the contract's current reward-token
    /// balance and derive the per-second emission rate.
    ///
    /// Callable once. Returns the emission rate.
    pub fn initialize_rewards(env: Env, caller: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_authorized(&env, &caller)?;

        let mut schedule = schedule::load(&env)?;
        if schedule.is_funded() {
            return Err(ContractError::AlreadyInitialized);
        }

        let reward_token = Self::reward_token(&env)?;
        let balance =
            token::Client::new(&env, &reward_token).balance(&env.current_contract_address());
        if balance <= 0 {
            return Err(ContractError::NoRewardsPresent);
        }

        schedule.fund(balance);
        schedule::store(&env, &schedule);

        log!(
            &env,
            "reward budget {} fixed, {} per second",
            schedule.total_budget,
            schedule.reward_per_second
        );
        events::publish_rewards_initialized(&env, schedule.total_budget, schedule.reward_per_second);

        Ok(schedule.reward_per_second)
    }

    // ── Pool registry ───────────────────────────────────────────────────────

    /// Register a new pool for `asset`.
    ///
    /// With `with_update` every existing pool is accrued first, so the
    /// change in total allocation weight does not reach back into periods
    /// that already elapsed. `last_reward_time` may push the pool's launch
    /// into the future; `0` launches it as early as allowed.
    pub fn add_pool(
        env: Env,
        caller: Address,
        alloc_weight: i128,
        deposit_fee_bps: u32,
        asset: Address,
        with_update: bool,
        last_reward_time: u64,
    ) -> Result<u32, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_authorized(&env, &caller)?;

        Self::add_pool_entry(
            &env,
            alloc_weight,
            deposit_fee_bps,
            asset,
            with_update,
            last_reward_time,
        )
    }

    /// Bulk `add_pool` over parallel arrays, applied in array order.
    pub fn add_pools(
        env: Env,
        caller: Address,
        alloc_weights: Vec<i128>,
        deposit_fee_bps: Vec<u32>,
        assets: Vec<Address>,
        with_update: bool,
        last_reward_times: Vec<u64>,
    ) -> Result<Vec<u32>, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_authorized(&env, &caller)?;

        let len = alloc_weights.len();
        if deposit_fee_bps.len() != len || assets.len() != len || last_reward_times.len() != len {
            return Err(ContractError::LengthMismatch);
        }

        let mut ids = Vec::new(&env);
        for i in 0..len {
            let id = Self::add_pool_entry(
                &env,
                alloc_weights.get(i).ok_or(ContractError::LengthMismatch)?,
                deposit_fee_bps.get(i).ok_or(ContractError::LengthMismatch)?,
                assets.get(i).ok_or(ContractError::LengthMismatch)?,
                with_update,
                last_reward_times.get(i).ok_or(ContractError::LengthMismatch)?,
            )?;
            ids.push_back(id);
        }
        Ok(ids)
    }

    /// Change a pool's allocation weight and deposit fee.
    ///
    /// Every pool is accrued under the old weights first.
    pub fn update_pool_config(
        env: Env,
        caller: Address,
        pool_id: u32,
        alloc_weight: i128,
        deposit_fee_bps: u32,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_authorized(&env, &caller)?;

        Self::update_pool_entry(&env, pool_id, alloc_weight, deposit_fee_bps)
    }

    /// Bulk `update_pool_config` over matched `(pool_id, weight, fee)` arrays.
    pub fn update_pools_config(
        env: Env,
        caller: Address,
        pool_ids: Vec<u32>,
        alloc_weights: Vec<i128>,
        deposit_fee_bps: Vec<u32>,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_authorized(&env, &caller)?;

        let len = pool_ids.len();
        if alloc_weights.len() != len || deposit_fee_bps.len() != len {
            return Err(ContractError::LengthMismatch);
        }

        for i in 0..len {
            Self::update_pool_entry(
                &env,
                pool_ids.get(i).ok_or(ContractError::LengthMismatch)?,
                alloc_weights.get(i).ok_or(ContractError::LengthMismatch)?,
                deposit_fee_bps.get(i).ok_or(ContractError::LengthMismatch)?,
            )?;
        }
        Ok(())
    }

    // ── Accrual ─────────────────────────────────────────────────────────────

    /// Bring one pool's accumulator up to the current ledger time.
    pub fn update_pool(env: Env, pool_id: u32) -> Result<(), ContractError> {
        let schedule = schedule::load(&env)?;
        accrual::accrue_pool(&env, &schedule, pool_id, env.ledger().timestamp())?;
        Ok(())
    }

    /// Accrue every pool.
    pub fn mass_update_pools(env: Env) -> Result<(), ContractError> {
        let schedule = schedule::load(&env)?;
        accrual::accrue_all(&env, &schedule, env.ledger().timestamp())
    }

    /// Accrue pools `from..=to`.
    pub fn mass_update_pool_range(env: Env, from: u32, to: u32) -> Result<(), ContractError> {
        let schedule = schedule::load(&env)?;
        accrual::accrue_range(&env, &schedule, from, to, env.ledger().timestamp())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Stake `amount` of the pool's asset, paying out any pending reward.
    ///
    /// The deposit fee is taken from `amount` and sent to the fee sink; the
    /// remainder is credited. `amount == 0` only harvests.
    pub fn deposit(
        env: Env,
        holder: Address,
        pool_id: u32,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        holder.require_auth();
        if amount < 0 {
            return Err(ContractError::InvalidAmount);
        }
        Self::lock(&env)?;

        // 1. Settle the pool up to now.
        let schedule = schedule::load(&env)?;
        let mut pool = accrual::accrue_pool(&env, &schedule, pool_id, env.ledger().timestamp())?;
        let mut position = position::load(&env, pool_id, &holder);

        // 2. Reward owed on the existing stake.
        let pending = if position.amount > 0 {
            position.pending(&env, pool.acc_reward_per_share)?
        } else {
            0
        };

        // 3. Credit the new stake net of fee, then checkpoint.
        let fee = fixed_point::bps_of(&env, amount, pool.deposit_fee_bps)
            .ok_or(ContractError::ArithmeticOverflow)?;
        let credited = amount - fee;
        position.amount = position
            .amount
            .checked_add(credited)
            .ok_or(ContractError::ArithmeticOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(credited)
            .ok_or(ContractError::ArithmeticOverflow)?;
        position.checkpoint(&env, pool.acc_reward_per_share)?;

        pool::store(&env, pool_id, &pool);
        position::store(&env, pool_id, &holder, &position);

        // 4. Move assets.
        if pending > 0 {
            Self::payout_reward(&env, &holder, Some(pool_id), pending)?;
        }
        if amount > 0 {
            let asset = token::Client::new(&env, &pool.asset);
            let this = env.current_contract_address();
            asset.transfer(&holder, &this, &amount);
            if fee > 0 {
                asset.transfer(&this, &Self::fee_sink(&env)?, &fee);
            }
            events::publish_deposited(&env, holder, pool_id, credited, fee);
        }

        reentrancy::exit(&env);
        Ok(())
    }

    /// Unstake `amount`, paying out any pending reward.
    pub fn withdraw(
        env: Env,
        holder: Address,
        pool_id: u32,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        holder.require_auth();
        if amount < 0 {
            return Err(ContractError::InvalidAmount);
        }
        Self::lock(&env)?;

        let mut position = position::load(&env, pool_id, &holder);
        if amount > position.amount {
            return Err(ContractError::InsufficientBalance);
        }

        let schedule = schedule::load(&env)?;
        let mut pool = accrual::accrue_pool(&env, &schedule, pool_id, env.ledger().timestamp())?;

        let pending = position.pending(&env, pool.acc_reward_per_share)?;
        position.amount -= amount;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        position.checkpoint(&env, pool.acc_reward_per_share)?;

        pool::store(&env, pool_id, &pool);
        position::store(&env, pool_id, &holder, &position);

        if pending > 0 {
            Self::payout_reward(&env, &holder, Some(pool_id), pending)?;
        }
        if amount > 0 {
            token::Client::new(&env, &pool.asset).transfer(
                &env.current_contract_address(),
                &holder,
                &amount,
            );
            events::publish_withdrawn(&env, holder, pool_id, amount);
        }

        reentrancy::exit(&env);
        Ok(())
    }

    /// Return the full stake without touching rewards.
    ///
    /// Pending reward is forfeited. Returns the amount sent back.
    pub fn emergency_withdraw(
        env: Env,
        holder: Address,
        pool_id: u32,
    ) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        holder.require_auth();
        Self::lock(&env)?;

        let mut pool = pool::load(&env, pool_id)?;
        let position = position::load(&env, pool_id, &holder);
        let amount = position.amount;

        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        pool::store(&env, pool_id, &pool);
        position::store(&env, pool_id, &holder, &UserPosition::default());

        if amount > 0 {
            token::Client::new(&env, &pool.asset).transfer(
                &env.current_contract_address(),
                &holder,
                &amount,
            );
        }
        events::publish_emergency_withdrawn(&env, holder, pool_id, amount);

        reentrancy::exit(&env);
        Ok(amount)
    }

    /// Harvest every pool `holder` has stake in with a single transfer.
    ///
    /// Pools where the holder has no stake are not accrued. Returns the
    /// amount actually paid.
    pub fn claim_all_pending(env: Env, holder: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        holder.require_auth();
        Self::lock(&env)?;

        let schedule = schedule::load(&env)?;
        let now = env.ledger().timestamp();

        let mut owed: i128 = 0;
        for pool_id in 0..pool::count(&env) {
            let mut position = position::load(&env, pool_id, &holder);
            if position.amount == 0 {
                continue;
            }
            let pool = accrual::accrue_pool(&env, &schedule, pool_id, now)?;
            owed = owed
                .checked_add(position.pending(&env, pool.acc_reward_per_share)?)
                .ok_or(ContractError::ArithmeticOverflow)?;
            position.checkpoint(&env, pool.acc_reward_per_share)?;
            position::store(&env, pool_id, &holder, &position);
        }

        let paid = if owed > 0 {
            Self::payout_reward(&env, &holder, None, owed)?
        } else {
            0
        };

        reentrancy::exit(&env);
        Ok(paid)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Reward `holder` would receive from `pool_id` if they harvested now.
    pub fn pending_reward(env: Env, pool_id: u32, holder: Address) -> Result<i128, ContractError> {
        let schedule = schedule::load(&env)?;
        let mut pool = pool::load(&env, pool_id)?;
        let mut total = pool::total_alloc_weight(&env);
        let now = env.ledger().timestamp();
        accrual::advance(&env, &mut pool, &schedule, &mut total, now)?;

        position::load(&env, pool_id, &holder).pending(&env, pool.acc_reward_per_share)
    }

    /// Every pool `holder` has stake in, with amount and pending reward.
    ///
    /// Pools are simulated in the same order `claim_all_pending` accrues
    /// them, so lazy activations earlier in the list are reflected in the
    /// denominator seen by later pools.
    pub fn get_positions(env: Env, holder: Address) -> Result<Vec<PositionView>, ContractError> {
        let schedule = schedule::load(&env)?;
        let now = env.ledger().timestamp();
        let mut total = pool::total_alloc_weight(&env);

        let mut views = Vec::new(&env);
        for pool_id in 0..pool::count(&env) {
            let position = position::load(&env, pool_id, &holder);
            if position.amount == 0 {
                continue;
            }
            let mut pool = pool::load(&env, pool_id)?;
            accrual::advance(&env, &mut pool, &schedule, &mut total, now)?;
            views.push_back(PositionView {
                pool_id,
                asset: pool.asset,
                amount: position.amount,
                pending: position.pending(&env, pool.acc_reward_per_share)?,
            });
        }
        Ok(views)
    }

    /// Reward emitted across all pools during `[from, to)`.
    pub fn generated_reward(env: Env, from: u64, to: u64) -> Result<i128, ContractError> {
        schedule::load(&env)?.generated_reward(from, to)
    }

    pub fn get_schedule(env: Env) -> Result<Schedule, ContractError> {
        schedule::load(&env)
    }

    pub fn get_pool(env: Env, pool_id: u32) -> Result<Pool, ContractError> {
        pool::load(&env, pool_id)
    }

    pub fn pool_count(env: Env) -> u32 {
        pool::count(&env)
    }

    pub fn get_position(env: Env, pool_id: u32, holder: Address) -> UserPosition {
        position::load(&env, pool_id, &holder)
    }

    /// Sum of weights of started pools.
    pub fn total_alloc_weight(env: Env) -> i128 {
        pool::total_alloc_weight(&env)
    }

    pub fn get_reward_token(env: Env) -> Result<Address, ContractError> {
        Self::reward_token(&env)
    }

    pub fn get_fee_sink(env: Env) -> Result<Address, ContractError> {
        Self::fee_sink(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        access::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn is_operator(env: Env, operator: Address) -> bool {
        access::is_operator(&env, &operator)
    }

    pub fn get_operators(env: Env) -> Vec<Address> {
        access::list_operators(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    pub fn set_fee_sink(env: Env, caller: Address, fee_sink: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_authorized(&env, &caller)?;

        let old = Self::fee_sink(&env)?;
        env.storage().instance().set(&FEE_SINK, &fee_sink);

        events::publish_fee_sink_changed(&env, old, fee_sink);

        Ok(())
    }

    /// Hand the primary admin role to `new_admin`.
    ///
    /// Only the current primary admin may do this; operators may not.
    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if !access::is_admin(&env, &caller) {
            return Err(ContractError::Unauthorized);
        }

        access::set_admin(&env, &new_admin);

        events::publish_admin_changed(&env, caller, new_admin);

        Ok(())
    }

    /// Grant or revoke operator rights. Primary admin only.
    pub fn set_operator(
        env: Env,
        caller: Address,
        operator: Address,
        enabled: bool,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if !access::is_admin(&env, &caller) {
            return Err(ContractError::Unauthorized);
        }

        access::set_operator(&env, &operator, enabled);

        events::publish_operator_set(&env, operator, enabled);

        Ok(())
    }

    /// Sweep `amount` of an asset that is not owed to anyone.
    ///
    /// The reward token can never be recovered. Pool assets become
    /// recoverable `RECOVERY_COOLDOWN` seconds after the schedule ends.
    pub fn recover_unsupported_asset(
        env: Env,
        caller: Address,
        asset: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_authorized(&env, &caller)?;

        if amount < 0 {
            return Err(ContractError::InvalidAmount);
        }
        if asset == Self::reward_token(&env)? {
            return Err(ContractError::ProtectedAsset);
        }
        let schedule = schedule::load(&env)?;
        let unlock_at = schedule.end_time.saturating_add(RECOVERY_COOLDOWN);
        if env.ledger().timestamp() < unlock_at && pool::pool_id_of(&env, &asset).is_some() {
            return Err(ContractError::ProtectedAsset);
        }

        token::Client::new(&env, &asset).transfer(&env.current_contract_address(), &to, &amount);

        events::publish_asset_recovered(&env, asset, amount, to);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert unless `caller` is the admin or a granted operator.
    fn require_authorized(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !access::is_authorized_admin(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Take the reentrancy lock. A failing call rolls the flag back along
    /// with every other write, so only successful paths call `exit`.
    fn lock(env: &Env) -> Result<(), ContractError> {
        if !reentrancy::enter(env) {
            return Err(ContractError::Reentrant);
        }
        Ok(())
    }

    fn reward_token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    fn fee_sink(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&FEE_SINK)
            .ok_or(ContractError::NotInitialized)
    }

    fn add_pool_entry(
        env: &Env,
        alloc_weight: i128,
        deposit_fee_bps: u32,
        asset: Address,
        with_update: bool,
        requested_last_reward_time: u64,
    ) -> Result<u32, ContractError> {
        if alloc_weight < 0 {
            return Err(ContractError::InvalidAmount);
        }
        if deposit_fee_bps >= MAX_DEPOSIT_FEE_BPS {
            return Err(ContractError::FeeTooHigh);
        }
        if asset == Self::reward_token(env)? {
            return Err(ContractError::ProtectedAsset);
        }
        if pool::pool_id_of(env, &asset).is_some() {
            return Err(ContractError::DuplicateAsset);
        }

        let schedule = schedule::load(env)?;
        let now = env.ledger().timestamp();
        if with_update {
            accrual::accrue_all(env, &schedule, now)?;
        }

        let last_reward_time =
            pool::effective_last_reward_time(requested_last_reward_time, schedule.start_time, now);
        let is_started = pool::starts_immediately(last_reward_time, schedule.start_time, now);
        if is_started {
            let total = pool::total_alloc_weight(env)
                .checked_add(alloc_weight)
                .ok_or(ContractError::ArithmeticOverflow)?;
            pool::set_total_alloc_weight(env, total);
        }

        let pool_id = pool::push(
            env,
            &Pool::new(
                asset.clone(),
                alloc_weight,
                deposit_fee_bps,
                last_reward_time,
                is_started,
            ),
        );

        events::publish_pool_added(
            env,
            pool_id,
            asset,
            alloc_weight,
            deposit_fee_bps,
            last_reward_time,
            is_started,
        );

        Ok(pool_id)
    }

    fn update_pool_entry(
        env: &Env,
        pool_id: u32,
        alloc_weight: i128,
        deposit_fee_bps: u32,
    ) -> Result<(), ContractError> {
        if alloc_weight < 0 {
            return Err(ContractError::InvalidAmount);
        }
        if deposit_fee_bps >= MAX_DEPOSIT_FEE_BPS {
            return Err(ContractError::FeeTooHigh);
        }

        // Settle everything under the old weights before changing them.
        let schedule = schedule::load(env)?;
        accrual::accrue_all(env, &schedule, env.ledger().timestamp())?;

        let mut pool = pool::load(env, pool_id)?;
        let old_weight = pool.alloc_weight;
        let mut total = pool::total_alloc_weight(env);
        if pool.is_started {
            total = total
                .checked_sub(old_weight)
                .and_then(|t| t.checked_add(alloc_weight))
                .ok_or(ContractError::ArithmeticOverflow)?;
            pool::set_total_alloc_weight(env, total);
        }
        pool.alloc_weight = alloc_weight;
        pool.deposit_fee_bps = deposit_fee_bps;
        pool::store(env, pool_id, &pool);

        events::publish_pool_config_updated(
            env,
            pool_id,
            old_weight,
            alloc_weight,
            deposit_fee_bps,
            total,
        );

        Ok(())
    }

    /// Send up to `amount` reward tokens to `to`.
    ///
    /// Clamped to the contract's reward-token balance; a shortfall never
    /// blocks the surrounding deposit or withdrawal. Returns the amount sent.
    fn payout_reward(
        env: &Env,
        to: &Address,
        pool_id: Option<u32>,
        amount: i128,
    ) -> Result<i128, ContractError> {
        let client = token::Client::new(env, &Self::reward_token(env)?);
        let this = env.current_contract_address();
        let available = client.balance(&this);

        let paid = amount.min(available).max(0);
        if paid < amount {
            log!(
                env,
                "reward payout clamped: owed {}, available {}",
                amount,
                available
            );
        }
        if paid > 0 {
            client.transfer(&this, to, &paid);
            events::publish_reward_paid(env, to.clone(), pool_id, paid);
        }
        Ok(paid)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
