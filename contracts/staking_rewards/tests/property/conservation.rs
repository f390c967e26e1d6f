#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests over random operation sequences on one pool.
//!
//! Invariants tested after every step:
//! - `total_staked` equals the sum of user stakes, the stake vault balance and
//!   the contract's stake-token balance
//! - reward tokens are conserved: deposits = reward vault + paid out
//! - the accumulator and its timestamp never decrease
//! - pending rewards never exceed what the pool has emitted

use proptest::prelude::*;
use staking_rewards::ContractError;

use crate::harness::{contract_error, Harness, Op};

const RATE: i128 = 1_000;
const STAKERS: usize = 3;
const STAKER_BALANCE: i128 = 100_000;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_vaults_always_balance(ops in prop::collection::vec(any::<Op>(), 1..40)) {
        let h = Harness::new(RATE);
        let users: Vec<_> = (0..STAKERS).map(|_| h.staker(STAKER_BALANCE)).collect();

        let mut deposited: i128 = 0;
        let mut paid: i128 = 0;
        let mut last_acc: i128 = 0;
        let mut last_update: u64 = 0;

        for op in ops {
            match op {
                Op::Stake { user, amount } => {
                    let who = &users[user as usize % STAKERS];
                    let amount = i128::from(amount);
                    let result = h.client.try_stake(who, &h.stake_token, &h.reward_token, &amount);
                    if amount == 0 {
                        prop_assert_eq!(contract_error(&result), Some(ContractError::ZeroAmount));
                    } else if result.is_err() {
                        prop_assert_eq!(contract_error(&result), Some(ContractError::InsufficientUserBalance));
                    }
                }
                Op::Unstake { user, amount } => {
                    let who = &users[user as usize % STAKERS];
                    let amount = i128::from(amount);
                    let before = h.staked(who);
                    let result = h.client.try_unstake(who, &h.stake_token, &h.reward_token, &amount);
                    if amount == 0 {
                        prop_assert_eq!(contract_error(&result), Some(ContractError::ZeroAmount));
                    } else if amount > before {
                        prop_assert_eq!(contract_error(&result), Some(ContractError::InsufficientStaked));
                    } else {
                        prop_assert!(result.is_ok());
                        prop_assert_eq!(h.staked(who), before - amount);
                    }
                }
                Op::Claim { user } => {
                    let who = &users[user as usize % STAKERS];
                    let owed = h.pending(who);
                    match h.client.try_claim_rewards(who, &h.stake_token, &h.reward_token) {
                        Ok(Ok(amount)) => {
                            prop_assert_eq!(amount, owed);
                            paid += amount;
                            prop_assert_eq!(h.pending(who), 0);
                        }
                        Err(Ok(e)) => {
                            prop_assert_eq!(e, ContractError::InsufficientVaultBalance);
                            prop_assert_eq!(h.pending(who), owed);
                        }
                        other => prop_assert!(false, "unexpected claim result {:?}", other),
                    }
                }
                Op::Deposit { amount } => {
                    let amount = i128::from(amount);
                    let result = h.client.try_deposit_rewards(&h.admin, &h.stake_token, &h.reward_token, &amount);
                    if amount == 0 {
                        prop_assert_eq!(contract_error(&result), Some(ContractError::ZeroAmount));
                    } else {
                        prop_assert!(result.is_ok());
                        deposited += amount;
                    }
                }
                Op::Advance { seconds } => h.advance(u64::from(seconds)),
            }

            let pool = h.client.get_pool(&h.stake_token, &h.reward_token);
            let vaults = h.client.get_vaults(&h.stake_token, &h.reward_token);
            let user_sum: i128 = users.iter().map(|u| h.staked(u)).sum();

            prop_assert_eq!(pool.total_staked, user_sum);
            prop_assert_eq!(pool.total_staked, vaults.stake_vault.balance);
            prop_assert_eq!(pool.total_staked, h.stake_token_balance(&h.contract_id));

            prop_assert_eq!(vaults.reward_vault.balance, deposited - paid);
            prop_assert_eq!(vaults.reward_vault.balance, h.reward_token_balance(&h.contract_id));

            prop_assert!(pool.acc_reward_per_share >= last_acc);
            prop_assert!(pool.last_update_time >= last_update);
            last_acc = pool.acc_reward_per_share;
            last_update = pool.last_update_time;

            let outstanding: i128 = users.iter().map(|u| h.pending(u)).sum();
            prop_assert!(paid + outstanding <= RATE * i128::from(h.now()));
        }
    }
}
