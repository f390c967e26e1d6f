//! Custodial vaults.
//!
//! Tokens physically sit in the contract's own balance on each token
//! contract; the contract address is the only authority able to move them.
//! Every pool keeps its own ledger of what it holds, so two pools sharing a
//! token never pay out of each other's inventory.

use soroban_sdk::{token, Address, Env};

use crate::{
    storage,
    types::{PoolId, Vault},
    ContractError,
};

/// Which of a pool's two vaults an operation touches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VaultKind {
    Stake,
    Reward,
}

/// Create both vaults of a new pool, empty.
pub fn open(env: &Env, id: &PoolId) {
    storage::set_stake_vault(
        env,
        id,
        &Vault {
            token: id.stake_token.clone(),
            balance: 0,
        },
    );
    storage::set_reward_vault(
        env,
        id,
        &Vault {
            token: id.reward_token.clone(),
            balance: 0,
        },
    );
}

pub fn load(env: &Env, id: &PoolId, kind: VaultKind) -> Result<Vault, ContractError> {
    match kind {
        VaultKind::Stake => storage::get_stake_vault(env, id),
        VaultKind::Reward => storage::get_reward_vault(env, id),
    }
    .ok_or(ContractError::PoolNotFound)
}

fn save(env: &Env, id: &PoolId, kind: VaultKind, vault: &Vault) {
    match kind {
        VaultKind::Stake => storage::set_stake_vault(env, id, vault),
        VaultKind::Reward => storage::set_reward_vault(env, id, vault),
    }
}

/// Pull `amount` from `from` into the vault.
///
/// `from` must already have authorized the invocation. Fails with
/// `insufficient` when their external balance cannot cover the amount.
pub fn deposit(
    env: &Env,
    id: &PoolId,
    kind: VaultKind,
    from: &Address,
    amount: i128,
    insufficient: ContractError,
) -> Result<Vault, ContractError> {
    let mut vault = load(env, id, kind)?;
    let client = token::Client::new(env, &vault.token);

    if client.balance(from) < amount {
        return Err(insufficient);
    }

    vault.balance = vault
        .balance
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    client.transfer(from, &env.current_contract_address(), &amount);
    save(env, id, kind, &vault);

    Ok(vault)
}

/// Pay `amount` out of the vault to `to`.
pub fn withdraw(
    env: &Env,
    id: &PoolId,
    kind: VaultKind,
    to: &Address,
    amount: i128,
) -> Result<Vault, ContractError> {
    let mut vault = load(env, id, kind)?;

    if vault.balance < amount {
        return Err(ContractError::InsufficientVaultBalance);
    }
    vault.balance = vault
        .balance
        .checked_sub(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    token::Client::new(env, &vault.token).transfer(&env.current_contract_address(), to, &amount);
    save(env, id, kind, &vault);

    Ok(vault)
}
