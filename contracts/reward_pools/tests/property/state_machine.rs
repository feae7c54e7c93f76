#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based state machine tests for the reward pools contract.
//!
//! Random sequences of deposits, withdrawals, harvests and clock moves are
//! replayed against a fresh contract. After every step:
//!
//! - each pool's `total_staked` equals the sum of its holders' positions
//! - the contract holds exactly `total_staked` of every pool asset
//! - the acting holder has nothing pending in the pool they touched
//! - reward tokens are conserved and never exceed what has been emitted

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use reward_pools::{RewardPoolsContract, RewardPoolsContractClient};
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};

const START: u64 = 1_000;
const RUNNING: u64 = 100_000;
const BUDGET: i128 = 1_000_000_000;
const HOLDERS: usize = 3;
const POOLS: u32 = 2;

#[derive(Arbitrary, Clone, Debug)]
enum Op {
    Deposit {
        #[proptest(strategy = "0usize..HOLDERS")]
        holder: usize,
        #[proptest(strategy = "0u32..POOLS")]
        pool_id: u32,
        #[proptest(strategy = "0i128..=1_000_000")]
        amount: i128,
    },
    Withdraw {
        #[proptest(strategy = "0usize..HOLDERS")]
        holder: usize,
        #[proptest(strategy = "0u32..POOLS")]
        pool_id: u32,
        #[proptest(strategy = "0i128..=1_000_000")]
        amount: i128,
    },
    EmergencyWithdraw {
        #[proptest(strategy = "0usize..HOLDERS")]
        holder: usize,
        #[proptest(strategy = "0u32..POOLS")]
        pool_id: u32,
    },
    ClaimAll {
        #[proptest(strategy = "0usize..HOLDERS")]
        holder: usize,
    },
    Advance {
        #[proptest(strategy = "0u64..=20_000")]
        seconds: u64,
    },
}

// ── Helpers ───────────────────────────────────────────────────────────────────

struct World {
    env: Env,
    client: RewardPoolsContractClient<'static>,
    reward_token: Address,
    assets: [Address; POOLS as usize],
    holders: [Address; HOLDERS],
}

fn new_asset(env: &Env) -> Address {
    env.register_stellar_asset_contract_v2(Address::generate(env))
        .address()
}

fn setup() -> World {
    let env = Env::default();
    env.mock_all_auths();

    let reward_token = new_asset(&env);
    let contract_id = env.register(RewardPoolsContract, ());
    let client = RewardPoolsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &reward_token, &Address::generate(&env), &START, &RUNNING);
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &BUDGET);
    client.initialize_rewards(&admin);

    let assets = [new_asset(&env), new_asset(&env)];
    client.add_pool(&admin, &300, &0, &assets[0], &false, &0);
    client.add_pool(&admin, &100, &150, &assets[1], &true, &0);

    let holders = [
        Address::generate(&env),
        Address::generate(&env),
        Address::generate(&env),
    ];
    for holder in &holders {
        for asset in &assets {
            StellarAssetClient::new(&env, asset).mint(holder, &1_000_000_000_000);
        }
    }

    World {
        env,
        client,
        reward_token,
        assets,
        holders,
    }
}

fn apply(world: &World, op: &Op) -> Option<(usize, u32)> {
    let client = &world.client;
    match *op {
        Op::Deposit {
            holder,
            pool_id,
            amount,
        } => {
            client.deposit(&world.holders[holder], &pool_id, &amount);
            Some((holder, pool_id))
        }
        Op::Withdraw {
            holder,
            pool_id,
            amount,
        } => {
            let staked = client.get_position(&pool_id, &world.holders[holder]).amount;
            client.withdraw(&world.holders[holder], &pool_id, &amount.min(staked));
            Some((holder, pool_id))
        }
        Op::EmergencyWithdraw { holder, pool_id } => {
            client.emergency_withdraw(&world.holders[holder], &pool_id);
            Some((holder, pool_id))
        }
        Op::ClaimAll { holder } => {
            client.claim_all_pending(&world.holders[holder]);
            for pool_id in 0..POOLS {
                let pending = client.pending_reward(&pool_id, &world.holders[holder]);
                assert_eq!(pending, 0, "pool {} still pending after claim_all", pool_id);
            }
            None
        }
        Op::Advance { seconds } => {
            let now = world.env.ledger().timestamp();
            world.env.ledger().set_timestamp(now + seconds);
            None
        }
    }
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_ledger_stays_consistent(ops in prop::collection::vec(any::<Op>(), 1..40)) {
        let world = setup();
        let client = &world.client;
        let this = client.address.clone();
        let reward = TokenClient::new(&world.env, &world.reward_token);

        for op in &ops {
            let touched = apply(&world, op);

            for pool_id in 0..POOLS {
                let positions: i128 = world
                    .holders
                    .iter()
                    .map(|h| client.get_position(&pool_id, h).amount)
                    .sum();
                let pool = client.get_pool(&pool_id);
                prop_assert_eq!(pool.total_staked, positions);
                prop_assert_eq!(
                    TokenClient::new(&world.env, &world.assets[pool_id as usize]).balance(&this),
                    positions
                );
            }

            if let Some((holder, pool_id)) = touched {
                prop_assert_eq!(client.pending_reward(&pool_id, &world.holders[holder]), 0);
            }

            let paid: i128 = world.holders.iter().map(|h| reward.balance(h)).sum();
            prop_assert_eq!(paid + reward.balance(&this), BUDGET);
            let now = world.env.ledger().timestamp();
            prop_assert!(paid <= client.generated_reward(&START, &now.max(START)));
        }
    }
}
