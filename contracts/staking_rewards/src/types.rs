use soroban_sdk::{contracttype, Address};

/// Identifies a pool by the token pair it governs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolId {
    pub stake_token: Address,
    pub reward_token: Address,
}

impl PoolId {
    pub fn new(stake_token: Address, reward_token: Address) -> Self {
        Self {
            stake_token,
            reward_token,
        }
    }
}

/// Shared record for one stake/reward token pair.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    /// May deposit reward inventory.
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    /// Reward tokens emitted per second across all stakers.
    pub reward_rate_per_second: i128,
    /// Always equal to the stake vault balance.
    pub total_staked: i128,
    /// Cumulative reward per staked unit, scaled by `rewards::PRECISION`.
    pub acc_reward_per_share: i128,
    /// Scaled emissions not yet credited to the accumulator.
    pub reward_remainder: i128,
    pub last_update_time: u64,
}

impl Pool {
    pub fn id(&self) -> PoolId {
        PoolId::new(self.stake_token.clone(), self.reward_token.clone())
    }
}

/// Per-user accounting record within a pool.
///
/// Created on the first stake and kept after a full unstake so the owner can
/// still claim and later re-stake.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserStake {
    pub owner: Address,
    pub amount_staked: i128,
    /// Accumulator value already accounted for in `pending_rewards`.
    pub reward_debt: i128,
    pub pending_rewards: i128,
}

impl UserStake {
    /// A fresh record owes nothing for accrual that happened before it existed.
    pub fn new(owner: Address, acc_reward_per_share: i128) -> Self {
        Self {
            owner,
            amount_staked: 0,
            reward_debt: acc_reward_per_share,
            pending_rewards: 0,
        }
    }
}

/// Custodial balance held by the contract on behalf of one pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vault {
    pub token: Address,
    pub balance: i128,
}

/// Both vaults of a pool, as returned by `get_vaults`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolVaults {
    pub stake_vault: Vault,
    pub reward_vault: Vault,
}
