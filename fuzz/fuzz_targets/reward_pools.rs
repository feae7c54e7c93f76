#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use reward_pools::{RewardPoolsContract, RewardPoolsContractClient};
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};

const START: u64 = 1_000;
const RUNNING: u64 = 86_400;
const BUDGET: i128 = 10_000_000_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { pool: u8, amount: u64 },
    Withdraw { pool: u8, amount: u64 },
    EmergencyWithdraw { pool: u8 },
    ClaimAll,
    AddPool { weight: u32, fee_bps: u16, last_reward_time: u64 },
    UpdatePool { pool: u8, weight: u32, fee_bps: u16 },
    MassUpdate { from: u8, to: u8 },
    Advance { seconds: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let reward_token = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let contract_id = env.register(RewardPoolsContract, ());
    let client = RewardPoolsContractClient::new(&env, &contract_id);

    client.initialize(&admin, &reward_token, &admin, &START, &RUNNING);
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &BUDGET);
    client.initialize_rewards(&admin);

    let mut users = vec![];
    for _ in 0..4 {
        users.push(Address::generate(&env));
    }
    let mut assets: Vec<Address> = vec![];

    // Looking for panics and for reward tokens minted out of thin air.
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        let pool_count = client.pool_count();
        match action {
            FuzzAction::Deposit { pool, amount } => {
                let pool_id = pool as u32 % pool_count.max(1);
                if let Some(asset) = assets.get(pool_id as usize) {
                    StellarAssetClient::new(&env, asset).mint(caller, &(amount as i128));
                }
                let _ = client.try_deposit(caller, &pool_id, &(amount as i128));
            }
            FuzzAction::Withdraw { pool, amount } => {
                let _ = client.try_withdraw(caller, &(pool as u32), &(amount as i128));
            }
            FuzzAction::EmergencyWithdraw { pool } => {
                let _ = client.try_emergency_withdraw(caller, &(pool as u32));
            }
            FuzzAction::ClaimAll => {
                let _ = client.try_claim_all_pending(caller);
            }
            FuzzAction::AddPool {
                weight,
                fee_bps,
                last_reward_time,
            } => {
                let asset = env
                    .register_stellar_asset_contract_v2(admin.clone())
                    .address();
                if client
                    .try_add_pool(
                        &admin,
                        &(weight as i128),
                        &(fee_bps as u32),
                        &asset,
                        &true,
                        &last_reward_time,
                    )
                    .is_ok()
                {
                    assets.push(asset);
                }
            }
            FuzzAction::UpdatePool {
                pool,
                weight,
                fee_bps,
            } => {
                let _ = client.try_update_pool_config(
                    &admin,
                    &(pool as u32),
                    &(weight as i128),
                    &(fee_bps as u32),
                );
            }
            FuzzAction::MassUpdate { from, to } => {
                let _ = client.try_mass_update_pool_range(&(from as u32), &(to as u32));
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now.saturating_add(seconds as u64));
            }
        }
        assert!(client.pool_count() >= pool_count);
    }

    let reward = TokenClient::new(&env, &reward_token);
    let paid: i128 = users.iter().map(|u| reward.balance(u)).sum();
    assert!(reward.balance(&contract_id) >= 0);
    assert_eq!(paid + reward.balance(&contract_id), BUDGET);
});
