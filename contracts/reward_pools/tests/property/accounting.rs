#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Properties of single deposits and reward splits.
//!
//! Invariants tested:
//! - The deposit fee plus the credited stake always equals the amount sent
//! - Pending reward is zero immediately after a deposit
//! - Two holders in one pool are paid pro rata, within rounding
//! - Accruing a pool twice at the same timestamp changes nothing

use proptest::prelude::*;
use reward_pools::{RewardPoolsContract, RewardPoolsContractClient};
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};

const START: u64 = 1_000;
const RUNNING: u64 = 100_000;
const BUDGET: i128 = 1_000_000_000;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup() -> (Env, RewardPoolsContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(RewardPoolsContract, ());
    let client = RewardPoolsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let fee_sink = Address::generate(&env);
    client.initialize(&admin, &reward_token, &fee_sink, &START, &RUNNING);
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &BUDGET);
    client.initialize_rewards(&admin);

    (env, client, admin, fee_sink)
}

fn funded_holder(env: &Env, asset: &Address, amount: i128) -> Address {
    let holder = Address::generate(env);
    StellarAssetClient::new(env, asset).mint(&holder, &amount);
    holder
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Fee and credited stake always add back up to the deposited amount.
    #[test]
    fn prop_fee_split_is_exact(
        amount in 1i128..=1_000_000_000_000,
        fee_bps in 0u32..200,
    ) {
        let (env, client, admin, fee_sink) = setup();
        let asset = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        client.add_pool(&admin, &100, &fee_bps, &asset, &false, &0);

        let holder = funded_holder(&env, &asset, amount);
        client.deposit(&holder, &0, &amount);

        let credited = client.get_position(&0, &holder).amount;
        let fee = TokenClient::new(&env, &asset).balance(&fee_sink);
        prop_assert_eq!(credited + fee, amount);
        prop_assert_eq!(fee, amount * fee_bps as i128 / 10_000);
        prop_assert_eq!(client.get_pool(&0).total_staked, credited);
    }

    /// A fresh checkpoint leaves nothing pending, wherever the clock is.
    #[test]
    fn prop_pending_zero_after_deposit(
        first in 1i128..=1_000_000,
        second in 0i128..=1_000_000,
        elapsed in 0u64..=RUNNING * 2,
    ) {
        let (env, client, admin, _) = setup();
        let asset = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        client.add_pool(&admin, &100, &0, &asset, &false, &0);

        let holder = funded_holder(&env, &asset, first + second);
        client.deposit(&holder, &0, &first);

        env.ledger().set_timestamp(START + elapsed);
        client.deposit(&holder, &0, &second);
        prop_assert_eq!(client.pending_reward(&0, &holder), 0);
    }

    /// Two stakers sharing a pool for the whole schedule split the emission
    /// by stake, up to truncation.
    #[test]
    fn prop_pro_rata_split(
        a in 1i128..=1_000_000,
        b in 1i128..=1_000_000,
    ) {
        let (env, client, admin, _) = setup();
        let asset = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        client.add_pool(&admin, &100, &0, &asset, &false, &0);

        let alice = funded_holder(&env, &asset, a);
        let bob = funded_holder(&env, &asset, b);
        client.deposit(&alice, &0, &a);
        client.deposit(&bob, &0, &b);

        env.ledger().set_timestamp(START + RUNNING);
        let pa = client.pending_reward(&0, &alice);
        let pb = client.pending_reward(&0, &bob);
        let emitted = client.generated_reward(&START, &(START + RUNNING));

        prop_assert!(pa + pb <= emitted);
        prop_assert!(emitted - (pa + pb) <= 3);
        prop_assert!((pa - emitted * a / (a + b)).abs() <= 1);
        prop_assert!((pb - emitted * b / (a + b)).abs() <= 1);
    }

    /// A second accrual at the same timestamp is a no-op.
    #[test]
    fn prop_accrual_idempotent(
        stake in 1i128..=1_000_000,
        elapsed in 0u64..=RUNNING * 2,
    ) {
        let (env, client, admin, _) = setup();
        let asset = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        client.add_pool(&admin, &100, &0, &asset, &false, &0);

        let holder = funded_holder(&env, &asset, stake);
        client.deposit(&holder, &0, &stake);

        env.ledger().set_timestamp(START + elapsed);
        client.update_pool(&0);
        let once = client.get_pool(&0);
        client.update_pool(&0);
        prop_assert_eq!(client.get_pool(&0), once);
        prop_assert_eq!(client.total_alloc_weight(), 100);
    }
}
