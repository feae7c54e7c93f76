use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::ContractError;

const SCHEDULE: Symbol = symbol_short!("SCHEDULE");

/// Emission window and rate.
///
/// `start_time` and `end_time` are fixed at `initialize`. `total_budget` and
/// `reward_per_second` stay zero until `initialize_rewards` observes the
/// funded balance, after which they never change.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    pub start_time: u64,
    pub end_time: u64,
    pub total_budget: i128,
    pub reward_per_second: i128,
}

impl Schedule {
    pub fn new(start_time: u64, running_time: u64) -> Result<Self, ContractError> {
        if running_time == 0 {
            return Err(ContractError::InvalidSchedule);
        }
        let end_time = start_time
            .checked_add(running_time)
            .ok_or(ContractError::InvalidSchedule)?;
        Ok(Self {
            start_time,
            end_time,
            total_budget: 0,
            reward_per_second: 0,
        })
    }

    pub fn running_time(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }

    pub fn is_funded(&self) -> bool {
        self.total_budget > 0
    }

    /// Fixes the budget and derives the per-second rate.
    ///
    /// The division truncates; the remainder (< running time) is never
    /// emitted.
    pub fn fund(&mut self, budget: i128) {
        self.total_budget = budget;
        self.reward_per_second = budget / i128::from(self.running_time());
    }

    /// Reward emitted across all pools during `[from, to)`.
    ///
    /// The interval is clipped to `[start_time, end_time)`; anything outside
    /// the window, or an empty interval, yields zero.
    pub fn generated_reward(&self, from: u64, to: u64) -> Result<i128, ContractError> {
        let lo = from.max(self.start_time);
        let hi = to.min(self.end_time);
        if lo >= hi {
            return Ok(0);
        }
        i128::from(hi - lo)
            .checked_mul(self.reward_per_second)
            .ok_or(ContractError::ArithmeticOverflow)
    }
}

pub fn load(env: &Env) -> Result<Schedule, ContractError> {
    env.storage()
        .instance()
        .get(&SCHEDULE)
        .ok_or(ContractError::NotInitialized)
}

pub fn store(env: &Env, schedule: &Schedule) {
    env.storage().instance().set(&SCHEDULE, schedule);
}
