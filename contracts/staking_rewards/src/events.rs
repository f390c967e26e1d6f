#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::PoolId;

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once per token pair when its pool is created.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInitializedEvent {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub reward_rate_per_second: i128,
    pub timestamp: u64,
}

/// Fired when the admin tops up a reward vault.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsDepositedEvent {
    pub pool: PoolId,
    pub admin: Address,
    pub amount: i128,
    pub reward_vault_balance: i128,
    pub timestamp: u64,
}

/// Fired when a user deposits stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub pool: PoolId,
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user withdraws stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub pool: PoolId,
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user is paid accumulated rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsClaimedEvent {
    pub pool: PoolId,
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_pool_initialized(
    env: &Env,
    admin: Address,
    pool: &PoolId,
    reward_rate_per_second: i128,
) {
    env.events().publish(
        (symbol_short!("POOL_INIT"), admin.clone()),
        PoolInitializedEvent {
            admin,
            stake_token: pool.stake_token.clone(),
            reward_token: pool.reward_token.clone(),
            reward_rate_per_second,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_deposited(
    env: &Env,
    pool: PoolId,
    admin: Address,
    amount: i128,
    reward_vault_balance: i128,
) {
    env.events().publish(
        (symbol_short!("RWD_DEP"), admin.clone()),
        RewardsDepositedEvent {
            pool,
            admin,
            amount,
            reward_vault_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    pool: PoolId,
    staker: Address,
    amount: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            pool,
            staker,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(
    env: &Env,
    pool: PoolId,
    staker: Address,
    amount: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone()),
        UnstakedEvent {
            pool,
            staker,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_claimed(env: &Env, pool: PoolId, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), staker.clone()),
        RewardsClaimedEvent {
            pool,
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
