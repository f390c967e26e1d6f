#![no_std]

pub mod events;
pub mod rewards;
mod storage;
pub mod types;
pub mod vault;

use soroban_sdk::{contract, contractimpl, Address, Env};

pub use types::{Pool, PoolId, PoolVaults, UserStake, Vault};
use vault::VaultKind;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    PoolNotFound = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    ZeroAmount = 4,
    InvalidRate = 5,
    InsufficientUserBalance = 6,
    InsufficientAdminBalance = 7,
    InsufficientStaked = 8,
    InsufficientVaultBalance = 9,
    ArithmeticOverflow = 10,
    TokensIdentical = 11,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingRewardsContract;

#[contractimpl]
impl StakingRewardsContract {
    // ── Pool setup ──────────────────────────────────────────────────────────

    /// Create the pool for a (stake, reward) token pair with empty vaults.
    ///
    /// * `stake_token`  – SAC address of the token users lock.
    /// * `reward_token` – SAC address of the token paid out as rewards.
    /// * `reward_rate_per_second` – reward tokens emitted per second across
    ///   all stakers; fixed for the life of the pool.
    pub fn initialize_pool(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
        reward_rate_per_second: i128,
    ) -> Result<(), ContractError> {
        admin.require_auth();

        let id = PoolId::new(stake_token, reward_token);
        if storage::has_pool(&env, &id) {
            return Err(ContractError::AlreadyInitialized);
        }
        if reward_rate_per_second < 0 {
            return Err(ContractError::InvalidRate);
        }
        if id.stake_token == id.reward_token {
            return Err(ContractError::TokensIdentical);
        }

        let pool = Pool {
            admin: admin.clone(),
            stake_token: id.stake_token.clone(),
            reward_token: id.reward_token.clone(),
            reward_rate_per_second,
            total_staked: 0,
            acc_reward_per_share: 0,
            reward_remainder: 0,
            last_update_time: env.ledger().timestamp(),
        };
        storage::set_pool(&env, &pool);
        vault::open(&env, &id);

        events::publish_pool_initialized(&env, admin, &id, reward_rate_per_second);

        Ok(())
    }

    /// Move `amount` reward tokens from the admin into the pool's reward vault.
    ///
    /// Accrual is untouched: this only stocks the inventory that claims are
    /// paid from.
    pub fn deposit_rewards(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        admin.require_auth();

        let pool = Self::load_pool(&env, stake_token, reward_token)?;
        if admin != pool.admin {
            return Err(ContractError::Unauthorized);
        }
        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }

        let id = pool.id();
        let reward_vault = vault::deposit(
            &env,
            &id,
            VaultKind::Reward,
            &admin,
            amount,
            ContractError::InsufficientAdminBalance,
        )?;

        events::publish_rewards_deposited(&env, id, admin, amount, reward_vault.balance);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` stake tokens in the pool.
    ///
    /// The accumulator is settled first so the new tokens never earn
    /// retroactively.
    pub fn stake(
        env: Env,
        user: Address,
        stake_token: Address,
        reward_token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        user.require_auth();

        let mut pool = Self::load_pool(&env, stake_token, reward_token)?;
        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }

        // 1. Settle global then user accrual.
        rewards::settle(&mut pool, env.ledger().timestamp())?;
        let id = pool.id();
        let mut user_stake = storage::get_user_stake(&env, &id, &user)
            .unwrap_or_else(|| UserStake::new(user.clone(), pool.acc_reward_per_share));
        rewards::settle_user(&pool, &mut user_stake)?;

        // 2. Pull tokens into the stake vault.
        vault::deposit(
            &env,
            &id,
            VaultKind::Stake,
            &user,
            amount,
            ContractError::InsufficientUserBalance,
        )?;

        // 3. Book the new stake.
        user_stake.amount_staked = user_stake
            .amount_staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;

        storage::set_user_stake(&env, &id, &user_stake);
        storage::set_pool(&env, &pool);

        events::publish_staked(&env, id, user, amount, pool.total_staked);

        Ok(())
    }

    /// Return `amount` staked tokens to the user.
    ///
    /// Rewards accrued up to now stay in `pending_rewards` and remain
    /// claimable.
    pub fn unstake(
        env: Env,
        user: Address,
        stake_token: Address,
        reward_token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        user.require_auth();

        let mut pool = Self::load_pool(&env, stake_token, reward_token)?;
        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }

        let id = pool.id();
        let mut user_stake =
            storage::get_user_stake(&env, &id, &user).ok_or(ContractError::InsufficientStaked)?;
        if user_stake.amount_staked < amount {
            return Err(ContractError::InsufficientStaked);
        }

        // 1. Settle before the stake shrinks.
        rewards::settle(&mut pool, env.ledger().timestamp())?;
        rewards::settle_user(&pool, &mut user_stake)?;

        // 2. Pay the tokens back out of the stake vault.
        vault::withdraw(&env, &id, VaultKind::Stake, &user, amount)?;

        // 3. Book the reduction.
        user_stake.amount_staked = user_stake
            .amount_staked
            .checked_sub(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;

        storage::set_user_stake(&env, &id, &user_stake);
        storage::set_pool(&env, &pool);

        events::publish_unstaked(&env, id, user, amount, pool.total_staked);

        Ok(())
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out everything `user` has accrued and return the amount.
    ///
    /// Nothing pending is a successful no-op returning `0`. If the reward
    /// vault is short the call fails with `InsufficientVaultBalance` and the
    /// pending balance is kept for a later attempt.
    pub fn claim_rewards(
        env: Env,
        user: Address,
        stake_token: Address,
        reward_token: Address,
    ) -> Result<i128, ContractError> {
        user.require_auth();

        let mut pool = Self::load_pool(&env, stake_token, reward_token)?;
        let id = pool.id();

        // 1. Callers with no record have nothing to claim and leave the pool
        //    untouched.
        let mut user_stake = match storage::get_user_stake(&env, &id, &user) {
            Some(user_stake) => user_stake,
            None => return Ok(0),
        };

        // 2. Sync the accumulator, then the caller.
        rewards::settle(&mut pool, env.ledger().timestamp())?;
        storage::set_pool(&env, &pool);
        rewards::settle_user(&pool, &mut user_stake)?;

        // 3. Nothing to pay: persist the snapshot and return without reverting.
        let amount = user_stake.pending_rewards;
        if amount == 0 {
            storage::set_user_stake(&env, &id, &user_stake);
            return Ok(0);
        }

        // 4. Pay from the reward vault, then clear.
        vault::withdraw(&env, &id, VaultKind::Reward, &user, amount)?;
        user_stake.pending_rewards = 0;
        storage::set_user_stake(&env, &id, &user_stake);

        events::publish_rewards_claimed(&env, id, user, amount);

        Ok(amount)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn pool_exists(env: Env, stake_token: Address, reward_token: Address) -> bool {
        storage::has_pool(&env, &PoolId::new(stake_token, reward_token))
    }

    /// Return the stored pool record (accumulator as of its last settlement).
    pub fn get_pool(
        env: Env,
        stake_token: Address,
        reward_token: Address,
    ) -> Result<Pool, ContractError> {
        Self::load_pool(&env, stake_token, reward_token)
    }

    /// Return the stored stake record, if `user` has ever staked in the pool.
    pub fn get_user_stake(
        env: Env,
        stake_token: Address,
        reward_token: Address,
        user: Address,
    ) -> Option<UserStake> {
        storage::get_user_stake(&env, &PoolId::new(stake_token, reward_token), &user)
    }

    /// Return both custodial vaults of the pool.
    pub fn get_vaults(
        env: Env,
        stake_token: Address,
        reward_token: Address,
    ) -> Result<PoolVaults, ContractError> {
        let id = PoolId::new(stake_token, reward_token);
        Ok(PoolVaults {
            stake_vault: vault::load(&env, &id, VaultKind::Stake)?,
            reward_vault: vault::load(&env, &id, VaultKind::Reward)?,
        })
    }

    /// Return what `claim_rewards` would pay right now, without mutating state.
    pub fn get_pending_rewards(
        env: Env,
        stake_token: Address,
        reward_token: Address,
        user: Address,
    ) -> Result<i128, ContractError> {
        let pool = Self::load_pool(&env, stake_token, reward_token)?;
        match storage::get_user_stake(&env, &pool.id(), &user) {
            Some(user_stake) => {
                rewards::pending_rewards_at(&pool, &user_stake, env.ledger().timestamp())
            }
            None => Ok(0),
        }
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn load_pool(
        env: &Env,
        stake_token: Address,
        reward_token: Address,
    ) -> Result<Pool, ContractError> {
        storage::get_pool(env, &PoolId::new(stake_token, reward_token))
            .ok_or(ContractError::PoolNotFound)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
