#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking_rewards::{StakingRewardsContract, StakingRewardsContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { user: u8, amount: u64 },
    Unstake { user: u8, amount: u64 },
    ClaimRewards { user: u8 },
    DepositRewards { amount: u64 },
    Advance { seconds: u32 },
}

#[derive(Arbitrary, Debug)]
pub struct FuzzInput {
    pub reward_rate: u32,
    pub actions: Vec<FuzzAction>,
}

fuzz_target!(|input: FuzzInput| {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingRewardsContract, ());
    let client = StakingRewardsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let rate = i128::from(input.reward_rate);
    client.initialize_pool(&admin, &stake_token, &reward_token, &rate);
    StellarAssetClient::new(&env, &reward_token).mint(&admin, &i128::from(i64::MAX));

    let mut users = vec![admin.clone()];
    for _ in 0..4 {
        users.push(Address::generate(&env));
    }
    for user in &users {
        StellarAssetClient::new(&env, &stake_token).mint(user, &i128::from(i64::MAX));
    }

    let stake_client = TokenClient::new(&env, &stake_token);
    let reward_client = TokenClient::new(&env, &reward_token);

    // Errors are expected (overdrawn unstakes, underfunded claims); what must
    // never happen is a panic or a broken vault invariant.
    for action in input.actions {
        match action {
            FuzzAction::Stake { user, amount } => {
                let caller = &users[user as usize % users.len()];
                let _ = client.try_stake(caller, &stake_token, &reward_token, &i128::from(amount));
            }
            FuzzAction::Unstake { user, amount } => {
                let caller = &users[user as usize % users.len()];
                let _ = client.try_unstake(caller, &stake_token, &reward_token, &i128::from(amount));
            }
            FuzzAction::ClaimRewards { user } => {
                let caller = &users[user as usize % users.len()];
                let _ = client.try_claim_rewards(caller, &stake_token, &reward_token);
            }
            FuzzAction::DepositRewards { amount } => {
                let _ = client.try_deposit_rewards(
                    &admin,
                    &stake_token,
                    &reward_token,
                    &i128::from(amount),
                );
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now.saturating_add(u64::from(seconds)));
            }
        }

        let pool = client.get_pool(&stake_token, &reward_token);
        let vaults = client.get_vaults(&stake_token, &reward_token);
        let user_sum: i128 = users
            .iter()
            .filter_map(|u| client.get_user_stake(&stake_token, &reward_token, u))
            .map(|s| s.amount_staked)
            .sum();

        assert_eq!(pool.total_staked, user_sum);
        assert_eq!(pool.total_staked, vaults.stake_vault.balance);
        assert_eq!(pool.total_staked, stake_client.balance(&contract_id));
        assert_eq!(vaults.reward_vault.balance, reward_client.balance(&contract_id));
    }
});
