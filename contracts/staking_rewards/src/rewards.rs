//! Reward-per-share accrual engine.
//!
//! The pool keeps one accumulator, `acc_reward_per_share`, equal to the total
//! reward earned by a single staked unit since the pool was created. Each user
//! stores the accumulator value they were last settled at (`reward_debt`), so
//! their share since then is `amount_staked × (acc − reward_debt)`. Settlement
//! is O(1) per interaction regardless of how many users are staked.

use crate::{
    types::{Pool, UserStake},
    ContractError,
};

/// Fixed-point scaling factor for `acc_reward_per_share`.
///
/// 10^18 keeps a non-zero per-share increment for pools holding up to 10^18
/// units at one unit per second, and still leaves room in `i128` for
/// rate × elapsed × PRECISION up to ~1.7 × 10^20.
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

/// Accumulator increase for `elapsed` seconds of emissions.
///
/// ```text
/// scaled  = reward_rate × elapsed × PRECISION + carried
/// Δacc    = scaled / total_staked
/// carried = scaled % total_staked
/// ```
///
/// The division remainder is handed back so the caller can fold it into the
/// next settlement; settling often never loses emissions to truncation.
/// Returns `(0, carried)` when nothing is staked: emissions during an empty
/// period are not distributed to anyone.
pub fn reward_per_share_delta(
    reward_rate: i128,
    elapsed: u64,
    total_staked: i128,
    carried: i128,
) -> Result<(i128, i128), ContractError> {
    if total_staked <= 0 {
        return Ok((0, carried));
    }

    let scaled = reward_rate
        .checked_mul(i128::from(elapsed))
        .ok_or(ContractError::ArithmeticOverflow)?
        .checked_mul(PRECISION)
        .ok_or(ContractError::ArithmeticOverflow)?
        .checked_add(carried)
        .ok_or(ContractError::ArithmeticOverflow)?;

    let delta = scaled
        .checked_div(total_staked)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let remainder = scaled
        .checked_rem(total_staked)
        .ok_or(ContractError::ArithmeticOverflow)?;

    Ok((delta, remainder))
}

/// Reward earned by `amount_staked` units while the accumulator moved from
/// `reward_debt` to `acc_reward_per_share`. Truncates toward zero.
pub fn accrued(
    amount_staked: i128,
    acc_reward_per_share: i128,
    reward_debt: i128,
) -> Result<i128, ContractError> {
    let delta = acc_reward_per_share
        .checked_sub(reward_debt)
        .ok_or(ContractError::ArithmeticOverflow)?;

    amount_staked
        .checked_mul(delta)
        .ok_or(ContractError::ArithmeticOverflow)?
        .checked_div(PRECISION)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Bring the pool accumulator current to `now`.
///
/// `last_update_time` always moves to `now`, even when nothing is staked, but
/// never moves backwards.
pub fn settle(pool: &mut Pool, now: u64) -> Result<(), ContractError> {
    let elapsed = now.saturating_sub(pool.last_update_time);

    let (delta, remainder) = reward_per_share_delta(
        pool.reward_rate_per_second,
        elapsed,
        pool.total_staked,
        pool.reward_remainder,
    )?;
    pool.reward_remainder = remainder;
    pool.acc_reward_per_share = pool
        .acc_reward_per_share
        .checked_add(delta)
        .ok_or(ContractError::ArithmeticOverflow)?;

    if now > pool.last_update_time {
        pool.last_update_time = now;
    }

    Ok(())
}

/// Credit `user` with everything accrued since its last snapshot and move the
/// snapshot to the pool's current accumulator. Call after [`settle`].
pub fn settle_user(pool: &Pool, user: &mut UserStake) -> Result<(), ContractError> {
    let newly_accrued = accrued(
        user.amount_staked,
        pool.acc_reward_per_share,
        user.reward_debt,
    )?;

    user.pending_rewards = user
        .pending_rewards
        .checked_add(newly_accrued)
        .ok_or(ContractError::ArithmeticOverflow)?;
    user.reward_debt = pool.acc_reward_per_share;

    Ok(())
}

/// What `user` could claim at `now`, computed on copies.
pub fn pending_rewards_at(pool: &Pool, user: &UserStake, now: u64) -> Result<i128, ContractError> {
    let mut pool = pool.clone();
    let mut user = user.clone();
    settle(&mut pool, now)?;
    settle_user(&pool, &mut user)?;
    Ok(user.pending_rewards)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure-math tests, no contract invocation.
