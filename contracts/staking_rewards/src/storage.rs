use soroban_sdk::{symbol_short, Address, Env, IntoVal, Symbol, TryFromVal, Val};

use crate::types::{Pool, PoolId, UserStake, Vault};

// ── Storage key prefixes ─────────────────────────────────────────────────────

// Pool-scoped keys:  (prefix, pool_id)
const POOL: Symbol = symbol_short!("POOL");
const STAKE_VAULT: Symbol = symbol_short!("STK_VLT");
const REWARD_VAULT: Symbol = symbol_short!("RWD_VLT");

// User-scoped keys:  (prefix, pool_id, user)
const USER_STAKE: Symbol = symbol_short!("USR_STK");

// ~5s ledgers: bump once under 30 days left, back up to 60 days.
const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND_TO: u32 = 1_036_800;

fn pool_key(id: &PoolId) -> (Symbol, PoolId) {
    (POOL, id.clone())
}

fn stake_vault_key(id: &PoolId) -> (Symbol, PoolId) {
    (STAKE_VAULT, id.clone())
}

fn reward_vault_key(id: &PoolId) -> (Symbol, PoolId) {
    (REWARD_VAULT, id.clone())
}

fn user_stake_key(id: &PoolId, user: &Address) -> (Symbol, PoolId, Address) {
    (USER_STAKE, id.clone(), user.clone())
}

fn read<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().persistent().get(key)
}

fn write<K, V>(env: &Env, key: &K, value: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Pool ─────────────────────────────────────────────────────────────────────

pub fn has_pool(env: &Env, id: &PoolId) -> bool {
    env.storage().persistent().has(&pool_key(id))
}

pub fn get_pool(env: &Env, id: &PoolId) -> Option<Pool> {
    read(env, &pool_key(id))
}

pub fn set_pool(env: &Env, pool: &Pool) {
    write(env, &pool_key(&pool.id()), pool);
}

// ── Vaults ───────────────────────────────────────────────────────────────────

pub fn get_stake_vault(env: &Env, id: &PoolId) -> Option<Vault> {
    read(env, &stake_vault_key(id))
}

pub fn set_stake_vault(env: &Env, id: &PoolId, vault: &Vault) {
    write(env, &stake_vault_key(id), vault);
}

pub fn get_reward_vault(env: &Env, id: &PoolId) -> Option<Vault> {
    read(env, &reward_vault_key(id))
}

pub fn set_reward_vault(env: &Env, id: &PoolId, vault: &Vault) {
    write(env, &reward_vault_key(id), vault);
}

// ── User stakes ──────────────────────────────────────────────────────────────

pub fn get_user_stake(env: &Env, id: &PoolId, user: &Address) -> Option<UserStake> {
    read(env, &user_stake_key(id, user))
}

pub fn set_user_stake(env: &Env, id: &PoolId, stake: &UserStake) {
    write(env, &user_stake_key(id, &stake.owner), stake);
}
