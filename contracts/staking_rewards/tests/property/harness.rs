//! Shared setup for the property suites.

use proptest_derive::Arbitrary;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};
use staking_rewards::{ContractError, StakingRewardsContract, StakingRewardsContractClient};

/// Reward tokens minted to the admin up front; deposits draw from this.
pub const ADMIN_REWARD_SUPPLY: i128 = 1_000_000_000_000;

pub struct Harness {
    pub env: Env,
    pub client: StakingRewardsContractClient<'static>,
    pub contract_id: Address,
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
}

impl Harness {
    /// Deploy the contract and one pool at t=0 emitting `rate` per second.
    pub fn new(rate: i128) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(0);

        let stake_token = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        let reward_token = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();

        let contract_id = env.register(StakingRewardsContract, ());
        let client = StakingRewardsContractClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        client.initialize_pool(&admin, &stake_token, &reward_token, &rate);
        StellarAssetClient::new(&env, &reward_token).mint(&admin, &ADMIN_REWARD_SUPPLY);

        Self {
            env,
            client,
            contract_id,
            admin,
            stake_token,
            reward_token,
        }
    }

    pub fn staker(&self, balance: i128) -> Address {
        let staker = Address::generate(&self.env);
        StellarAssetClient::new(&self.env, &self.stake_token).mint(&staker, &balance);
        staker
    }

    pub fn advance(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn staked(&self, user: &Address) -> i128 {
        self.client
            .get_user_stake(&self.stake_token, &self.reward_token, user)
            .map(|s| s.amount_staked)
            .unwrap_or(0)
    }

    pub fn pending(&self, user: &Address) -> i128 {
        self.client
            .get_pending_rewards(&self.stake_token, &self.reward_token, user)
    }

    pub fn stake_token_balance(&self, who: &Address) -> i128 {
        TokenClient::new(&self.env, &self.stake_token).balance(who)
    }

    pub fn reward_token_balance(&self, who: &Address) -> i128 {
        TokenClient::new(&self.env, &self.reward_token).balance(who)
    }
}

/// One step of a randomly generated session. `user` is reduced modulo the
/// number of stakers in play.
#[derive(Arbitrary, Clone, Debug)]
pub enum Op {
    Stake { user: u8, amount: u16 },
    Unstake { user: u8, amount: u16 },
    Claim { user: u8 },
    Deposit { amount: u16 },
    Advance { seconds: u8 },
}

/// The contract error carried by a `try_*` result, if any.
pub fn contract_error<T, E>(result: &Result<T, Result<ContractError, E>>) -> Option<ContractError> {
    match result {
        Err(Ok(e)) => Some(*e),
        _ => None,
    }
}
