use crate::domain::{
    PoolVariant, Position, RewardPerToken, Timestamp, TokenAmount, UnstakeFee,
};
use crate::errors::StakingError;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    AccountId,
};
use std::cmp;

/// Staking rewards pool.
///
/// Rewards are streamed linearly over [duration](Pool::duration) seconds at
/// [reward_rate](Pool::reward_rate) units per second and are shared between stakers in proportion
/// to their stake.
///
/// Accrual is tracked through [reward_per_token_stored](Pool::reward_per_token_stored), which
/// integrates `reward_rate / total_supply` over time up to [updated_at](Pool::updated_at). Every
/// state change first checkpoints the accumulator (and the affected position), so that what was
/// earned before the change is frozen at the rate that was in effect.
///
/// All operations validate and compute before mutating - if an error is returned, then the pool
/// and position are left unchanged.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct Pool {
    name: String,
    staking_asset: AccountId,
    reward_asset: AccountId,
    /// the only account allowed to notify rewards
    reward_supplier: AccountId,
    /// reward period length in seconds
    duration: u64,
    unstake_fee: UnstakeFee,

    /// when the current reward period ends - zero until the pool is funded
    finish_at: Timestamp,
    /// when [reward_per_token_stored](Pool::reward_per_token_stored) was last brought current
    updated_at: Timestamp,
    /// reward units emitted per second
    reward_rate: u128,
    reward_per_token_stored: RewardPerToken,
    total_supply: TokenAmount,
    /// rewards held by the pool that have not been claimed
    pool_reward_balance: TokenAmount,
}

/// Result of settling a position's rewards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardClaim {
    /// total rewards claimed, i.e., `payout + fee`
    pub amount: TokenAmount,
    /// transferred to the fee collector
    pub fee: TokenAmount,
    /// transferred to the participant
    pub payout: TokenAmount,
}

impl Pool {
    pub fn new(
        name: String,
        staking_asset: AccountId,
        reward_asset: AccountId,
        reward_supplier: AccountId,
        duration: u64,
        unstake_fee: u128,
    ) -> Result<Self, StakingError> {
        if duration == 0 {
            return Err(StakingError::InvalidDuration);
        }
        Ok(Self {
            name,
            staking_asset,
            reward_asset,
            reward_supplier,
            duration,
            unstake_fee: UnstakeFee::new(unstake_fee)?,
            finish_at: Timestamp::default(),
            updated_at: Timestamp::default(),
            reward_rate: 0,
            reward_per_token_stored: RewardPerToken::default(),
            total_supply: TokenAmount::ZERO,
            pool_reward_balance: TokenAmount::ZERO,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn staking_asset(&self) -> &str {
        &self.staking_asset
    }

    pub fn reward_asset(&self) -> &str {
        &self.reward_asset
    }

    pub fn reward_supplier(&self) -> &str {
        &self.reward_supplier
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn unstake_fee(&self) -> UnstakeFee {
        self.unstake_fee
    }

    pub fn finish_at(&self) -> Timestamp {
        self.finish_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn reward_rate(&self) -> u128 {
        self.reward_rate
    }

    pub fn reward_per_token_stored(&self) -> RewardPerToken {
        self.reward_per_token_stored
    }

    pub fn total_supply(&self) -> TokenAmount {
        self.total_supply
    }

    pub fn pool_reward_balance(&self) -> TokenAmount {
        self.pool_reward_balance
    }

    /// returns true once the current reward period has fully elapsed
    /// - an unfunded pool is considered over
    pub fn is_period_over(&self, now: Timestamp) -> bool {
        now >= self.finish_at
    }

    /// accrual never runs past the funded period
    pub fn last_time_reward_applicable(&self, now: Timestamp) -> Timestamp {
        cmp::min(now, self.finish_at)
    }

    pub fn reward_per_token(&self, now: Timestamp) -> Result<RewardPerToken, StakingError> {
        if self.total_supply.is_zero() {
            return Ok(self.reward_per_token_stored);
        }
        let seconds = self
            .last_time_reward_applicable(now)
            .seconds_since(self.updated_at);
        let accrued = RewardPerToken::accrued(self.reward_rate, seconds, self.total_supply)?;
        self.reward_per_token_stored.checked_add(accrued)
    }

    /// brings the reward per token accumulator current
    pub fn checkpoint(&mut self, now: Timestamp) -> Result<(), StakingError> {
        let reward_per_token = self.reward_per_token(now)?;
        self.apply_checkpoint(reward_per_token, now);
        Ok(())
    }

    /// brings the reward per token accumulator and the position's accrued rewards current
    pub fn checkpoint_position(
        &mut self,
        position: &mut Position,
        now: Timestamp,
    ) -> Result<(), StakingError> {
        let reward_per_token = self.reward_per_token(now)?;
        let mut checkpointed = *position;
        checkpointed.checkpoint(reward_per_token)?;
        self.apply_checkpoint(reward_per_token, now);
        *position = checkpointed;
        Ok(())
    }

    fn apply_checkpoint(&mut self, reward_per_token: RewardPerToken, now: Timestamp) {
        self.reward_per_token_stored = reward_per_token;
        self.updated_at = self.last_time_reward_applicable(now);
    }

    /// rewards the position can claim as of `now`
    pub fn earned(&self, position: &Position, now: Timestamp) -> Result<TokenAmount, StakingError> {
        position.earned(self.reward_per_token(now)?)
    }

    /// Injects `amount` of reward into the pool and restarts the reward period.
    ///
    /// If the current period is still running, then the rewards that have not been emitted yet are
    /// rolled into the new rate, i.e., funded rewards are never lost or double counted.
    ///
    /// NOTE: the caller is responsible for authorizing the reward supplier and for transferring
    ///       the reward funds into pool custody.
    pub fn notify_reward_amount(
        &mut self,
        amount: TokenAmount,
        now: Timestamp,
    ) -> Result<(), StakingError> {
        if amount.is_zero() {
            return Err(StakingError::InvalidAmount);
        }
        let duration = self.duration as u128;
        let reward_rate = if self.is_period_over(now) {
            amount.value() / duration
        } else {
            let remaining = self.finish_at.seconds_since(now) as u128;
            let leftover = remaining
                .checked_mul(self.reward_rate)
                .ok_or(StakingError::ArithmeticOverflow)?;
            amount
                .value()
                .checked_add(leftover)
                .ok_or(StakingError::ArithmeticOverflow)?
                / duration
        };
        if reward_rate == 0 {
            return Err(StakingError::ZeroRewardRate);
        }
        let finish_at = now
            .checked_add_seconds(self.duration)
            .ok_or(StakingError::ArithmeticOverflow)?;
        let pool_reward_balance = self
            .pool_reward_balance
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;

        // accrual up to now is frozen at the rate that was in effect
        self.checkpoint(now)?;
        self.reward_rate = reward_rate;
        self.finish_at = finish_at;
        self.updated_at = now;
        self.pool_reward_balance = pool_reward_balance;
        Ok(())
    }

    pub fn stake(
        &mut self,
        position: &mut Position,
        amount: TokenAmount,
        now: Timestamp,
    ) -> Result<(), StakingError> {
        if amount.is_zero() {
            return Err(StakingError::InvalidAmount);
        }
        let balance = position
            .balance
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        let total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;

        self.checkpoint_position(position, now)?;
        position.balance = balance;
        self.total_supply = total_supply;
        Ok(())
    }

    pub fn withdraw(
        &mut self,
        variant: PoolVariant,
        position: &mut Position,
        amount: TokenAmount,
        now: Timestamp,
    ) -> Result<(), StakingError> {
        if amount.is_zero() {
            return Err(StakingError::InvalidAmount);
        }
        let balance = position
            .balance
            .checked_sub(amount)
            .ok_or(StakingError::InsufficientStaked)?;
        variant.check_release_gate(self, now)?;
        let total_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;

        self.checkpoint_position(position, now)?;
        position.balance = balance;
        self.total_supply = total_supply;
        Ok(())
    }

    /// Settles the position's accrued rewards.
    ///
    /// Returns None if there is nothing to claim - this is not treated as an error.
    pub fn claim(
        &mut self,
        variant: PoolVariant,
        position: &mut Position,
        now: Timestamp,
    ) -> Result<Option<RewardClaim>, StakingError> {
        variant.check_release_gate(self, now)?;

        let mut checkpointed = *position;
        let mut pool = self.clone();
        pool.checkpoint_position(&mut checkpointed, now)?;
        let amount = checkpointed.rewards;
        if amount.is_zero() {
            *self = pool;
            *position = checkpointed;
            return Ok(None);
        }

        let fee = self.unstake_fee.fee(amount)?;
        let payout = amount
            .checked_sub(fee)
            .ok_or(StakingError::ArithmeticOverflow)?;
        pool.pool_reward_balance = pool
            .pool_reward_balance
            .checked_sub(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        checkpointed.rewards = TokenAmount::ZERO;

        *self = pool;
        *position = checkpointed;
        Ok(Some(RewardClaim {
            amount,
            fee,
            payout,
        }))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::FIXED_POINT_SCALE;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    const T0: u64 = 1_000;

    fn new_pool(duration: u64) -> Pool {
        Pool::new(
            "pool".to_string(),
            "stk.near".to_string(),
            "rwd.near".to_string(),
            "supplier.near".to_string(),
            duration,
            10 * FIXED_POINT_SCALE,
        )
        .unwrap()
    }

    fn funded_pool(duration: u64, amount: u128) -> Pool {
        let mut pool = new_pool(duration);
        pool.notify_reward_amount(amount.into(), T0.into()).unwrap();
        pool
    }

    #[test]
    fn new_pool_is_zeroed() {
        let pool = new_pool(100);
        assert_eq!(pool.name(), "pool");
        assert_eq!(pool.staking_asset(), "stk.near");
        assert_eq!(pool.reward_asset(), "rwd.near");
        assert_eq!(pool.reward_supplier(), "supplier.near");
        assert_eq!(pool.duration(), 100);
        assert_eq!(pool.finish_at(), Timestamp(0));
        assert_eq!(pool.updated_at(), Timestamp(0));
        assert_eq!(pool.reward_rate(), 0);
        assert_eq!(pool.reward_per_token_stored(), RewardPerToken::default());
        assert_eq!(pool.total_supply(), TokenAmount::ZERO);
        assert_eq!(pool.pool_reward_balance(), TokenAmount::ZERO);
    }

    #[test]
    fn new_pool_with_invalid_settings() {
        assert_eq!(
            Pool::new(
                "pool".to_string(),
                "stk.near".to_string(),
                "rwd.near".to_string(),
                "supplier.near".to_string(),
                0,
                0
            ),
            Err(StakingError::InvalidDuration)
        );
        assert_eq!(
            Pool::new(
                "pool".to_string(),
                "stk.near".to_string(),
                "rwd.near".to_string(),
                "supplier.near".to_string(),
                100,
                UnstakeFee::MAX.value() + 1
            ),
            Err(StakingError::InvalidFee)
        );
    }

    #[test]
    fn first_funding() {
        let pool = funded_pool(100, 1000);
        assert_eq!(pool.reward_rate(), 10);
        assert_eq!(pool.finish_at(), Timestamp(T0 + 100));
        assert_eq!(pool.updated_at(), Timestamp(T0));
        assert_eq!(pool.reward_per_token_stored(), RewardPerToken::default());
        assert_eq!(pool.pool_reward_balance(), TokenAmount(1000));
    }

    #[test]
    fn stake_then_earn() {
        let mut pool = funded_pool(100, 1000);
        let mut position = Position::default();
        pool.stake(&mut position, 50.into(), T0.into()).unwrap();
        assert_eq!(pool.total_supply(), TokenAmount(50));
        assert_eq!(position.balance, TokenAmount(50));

        assert_eq!(
            pool.earned(&position, (T0 + 10).into()).unwrap(),
            TokenAmount(100)
        );
        // the view does not mutate
        assert_eq!(pool.reward_per_token_stored(), RewardPerToken::default());
    }

    #[test]
    fn stake_before_funding_earns_from_funding_time() {
        let mut pool = new_pool(100);
        let mut position = Position::default();
        pool.stake(&mut position, 50.into(), T0.into()).unwrap();
        assert_eq!(pool.updated_at(), Timestamp(0));
        assert_eq!(
            pool.earned(&position, (T0 + 50).into()).unwrap(),
            TokenAmount::ZERO
        );

        pool.notify_reward_amount(1000.into(), (T0 + 50).into())
            .unwrap();
        assert_eq!(pool.reward_per_token_stored(), RewardPerToken::default());
        assert_eq!(
            pool.earned(&position, (T0 + 60).into()).unwrap(),
            TokenAmount(100)
        );
    }

    #[test]
    fn zero_stake_is_rejected() {
        let mut pool = funded_pool(100, 1000);
        let mut position = Position::default();
        assert_eq!(
            pool.stake(&mut position, 0.into(), T0.into()),
            Err(StakingError::InvalidAmount)
        );
    }

    #[test]
    fn withdraw_more_than_staked() {
        let mut pool = funded_pool(100, 1000);
        let mut position = Position::default();
        pool.stake(&mut position, 50.into(), T0.into()).unwrap();
        let pool_before = pool.clone();
        let position_before = position;

        assert_eq!(
            pool.withdraw(
                PoolVariant::Open,
                &mut position,
                51.into(),
                (T0 + 10).into()
            ),
            Err(StakingError::InsufficientStaked)
        );
        assert_eq!(pool, pool_before);
        assert_eq!(position, position_before);
    }

    #[test]
    fn locked_withdraw_is_gated_until_period_is_over() {
        let mut pool = funded_pool(100, 1000);
        let mut position = Position::default();
        pool.stake(&mut position, 50.into(), T0.into()).unwrap();

        assert_eq!(
            pool.withdraw(
                PoolVariant::Locked,
                &mut position,
                10.into(),
                (T0 + 10).into()
            ),
            Err(StakingError::DurationNotOver)
        );
        // insufficient balance is reported before the gate
        assert_eq!(
            pool.withdraw(
                PoolVariant::Locked,
                &mut position,
                100.into(),
                (T0 + 10).into()
            ),
            Err(StakingError::InsufficientStaked)
        );

        pool.withdraw(
            PoolVariant::Locked,
            &mut position,
            10.into(),
            (T0 + 100).into(),
        )
        .unwrap();
        assert_eq!(position.balance, TokenAmount(40));
        assert_eq!(pool.total_supply(), TokenAmount(40));
        assert_eq!(position.rewards, TokenAmount(1000));
    }

    #[test]
    fn open_withdraw_mid_period_stops_earning() {
        let mut pool = funded_pool(100, 1000);
        let mut position = Position::default();
        pool.stake(&mut position, 50.into(), T0.into()).unwrap();
        pool.withdraw(
            PoolVariant::Open,
            &mut position,
            50.into(),
            (T0 + 10).into(),
        )
        .unwrap();
        assert_eq!(position.rewards, TokenAmount(100));
        assert_eq!(
            pool.earned(&position, (T0 + 90).into()).unwrap(),
            TokenAmount(100)
        );
    }

    #[test]
    fn claim_with_fee() {
        let mut pool = funded_pool(100, 1000);
        let mut position = Position::default();
        pool.stake(&mut position, 50.into(), T0.into()).unwrap();

        let claim = pool
            .claim(PoolVariant::Locked, &mut position, (T0 + 200).into())
            .unwrap()
            .unwrap();
        assert_eq!(
            claim,
            RewardClaim {
                amount: 1000.into(),
                fee: 100.into(),
                payout: 900.into()
            }
        );
        assert_eq!(position.rewards, TokenAmount::ZERO);
        assert_eq!(pool.pool_reward_balance(), TokenAmount::ZERO);

        // nothing left to claim
        assert_eq!(
            pool.claim(PoolVariant::Locked, &mut position, (T0 + 300).into()),
            Ok(None)
        );
    }

    #[test]
    fn locked_claim_is_gated_until_period_is_over() {
        let mut pool = funded_pool(100, 1000);
        let mut position = Position::default();
        pool.stake(&mut position, 50.into(), T0.into()).unwrap();
        assert_eq!(
            pool.claim(PoolVariant::Locked, &mut position, (T0 + 99).into()),
            Err(StakingError::DurationNotOver)
        );
        assert!(pool
            .claim(PoolVariant::Open, &mut position, (T0 + 99).into())
            .unwrap()
            .is_some());
    }

    #[test]
    fn claim_nothing_is_a_noop() {
        let mut pool = funded_pool(100, 1000);
        let mut position = Position::default();
        assert_eq!(
            pool.claim(PoolVariant::Open, &mut position, (T0 + 10).into()),
            Ok(None)
        );
        assert_eq!(pool.pool_reward_balance(), TokenAmount(1000));
    }

    #[test]
    fn mid_period_top_up_rolls_over_leftover_rewards() {
        let mut pool = funded_pool(100, 1000);
        let mut position = Position::default();
        pool.stake(&mut position, 50.into(), T0.into()).unwrap();

        pool.notify_reward_amount(1000.into(), (T0 + 50).into())
            .unwrap();
        // (1000 + 50 * 10) / 100
        assert_eq!(pool.reward_rate(), 15);
        assert_eq!(pool.finish_at(), Timestamp(T0 + 150));
        assert_eq!(pool.updated_at(), Timestamp(T0 + 50));
        assert_eq!(pool.pool_reward_balance(), TokenAmount(2000));
        assert_eq!(
            pool.reward_per_token_stored(),
            RewardPerToken::from(10 * FIXED_POINT_SCALE)
        );
        assert_eq!(
            pool.earned(&position, (T0 + 150).into()).unwrap(),
            TokenAmount(2000)
        );
    }

    #[test]
    fn funding_after_period_is_over() {
        let mut pool = funded_pool(100, 1000);
        pool.notify_reward_amount(500.into(), (T0 + 300).into())
            .unwrap();
        assert_eq!(pool.reward_rate(), 5);
        assert_eq!(pool.finish_at(), Timestamp(T0 + 400));
    }

    #[test]
    fn funding_that_cannot_be_emitted_is_rejected() {
        let mut pool = new_pool(100);
        assert_eq!(
            pool.notify_reward_amount(99.into(), T0.into()),
            Err(StakingError::ZeroRewardRate)
        );
        assert_eq!(
            pool.notify_reward_amount(0.into(), T0.into()),
            Err(StakingError::InvalidAmount)
        );
        assert_eq!(pool, new_pool(100));
    }

    #[test]
    fn earned_is_flat_after_period_is_over() {
        let mut pool = funded_pool(100, 1000);
        let mut position = Position::default();
        pool.stake(&mut position, 50.into(), T0.into()).unwrap();
        let at_finish = pool.earned(&position, (T0 + 100).into()).unwrap();
        assert_eq!(at_finish, TokenAmount(1000));
        assert_eq!(
            pool.earned(&position, (T0 + 10_000).into()).unwrap(),
            at_finish
        );
    }

    /// - Given a pool funded with 1000 tokens that have 18 decimals
    /// - And a single smallest unit is staked
    /// - When the reward period elapses
    /// - Then the staker earns, withdraws, and claims the full reward without overflowing
    #[test]
    fn single_unit_stake_against_18_decimal_rewards() {
        let reward = 1000 * FIXED_POINT_SCALE;
        let mut pool = funded_pool(100, reward);
        let mut position = Position::default();
        pool.stake(&mut position, 1.into(), T0.into()).unwrap();

        assert_eq!(
            pool.earned(&position, (T0 + 50).into()).unwrap(),
            TokenAmount(reward / 2)
        );
        pool.checkpoint_position(&mut position, (T0 + 50).into())
            .unwrap();
        assert_eq!(position.rewards, TokenAmount(reward / 2));

        pool.withdraw(PoolVariant::Open, &mut position, 1.into(), (T0 + 100).into())
            .unwrap();
        assert_eq!(pool.total_supply(), TokenAmount::ZERO);
        assert_eq!(position.rewards, TokenAmount(reward));

        let claim = pool
            .claim(PoolVariant::Open, &mut position, (T0 + 100).into())
            .unwrap()
            .unwrap();
        assert_eq!(claim.amount, TokenAmount(reward));
        assert_eq!(claim.fee, TokenAmount(reward / 10));
        assert_eq!(claim.payout, TokenAmount(reward - reward / 10));
        assert_eq!(pool.pool_reward_balance(), TokenAmount::ZERO);
        assert_eq!(position.rewards, TokenAmount::ZERO);
    }

    /// operations are decoded from arbitrary input:
    /// - (0, participant, amount) -> stake
    /// - (1, participant, amount) -> withdraw
    /// - (2, _, amount) -> notify
    /// - (3, participant, _) -> claim
    /// each operation is applied after advancing the clock
    fn run_ops(ops: &[(u8, bool, u32, u8)]) -> (Pool, [Position; 2], Timestamp, TokenAmount) {
        let mut pool = new_pool(100);
        let mut positions = [Position::default(), Position::default()];
        let mut now = Timestamp(T0);
        let mut claimed = TokenAmount::ZERO;
        for (op, participant, amount, seconds) in ops.iter().cloned() {
            now = Timestamp(now.value() + seconds as u64);
            let position = &mut positions[participant as usize];
            let amount = TokenAmount(amount as u128);
            let _ = match op % 4 {
                0 => pool.stake(position, amount, now),
                1 => pool.withdraw(PoolVariant::Open, position, amount, now),
                2 => pool.notify_reward_amount(amount, now),
                _ => pool
                    .claim(PoolVariant::Open, position, now)
                    .map(|claim| {
                        if let Some(claim) = claim {
                            claimed = claimed.checked_add(claim.amount).unwrap();
                        }
                    }),
            };
        }
        (pool, positions, now, claimed)
    }

    #[quickcheck]
    fn rewards_are_never_over_distributed(ops: Vec<(u8, bool, u32, u8)>) -> bool {
        let (pool, positions, now, _) = run_ops(&ops);
        let total_earned = positions
            .iter()
            .map(|position| pool.earned(position, now).unwrap().value())
            .sum::<u128>();
        total_earned <= pool.pool_reward_balance().value()
    }

    #[quickcheck]
    fn checkpoint_is_idempotent(ops: Vec<(u8, bool, u32, u8)>) -> bool {
        let (mut pool, mut positions, now, _) = run_ops(&ops);
        pool.checkpoint_position(&mut positions[0], now).unwrap();
        let (pool_once, position_once) = (pool.clone(), positions[0]);
        pool.checkpoint_position(&mut positions[0], now).unwrap();
        pool == pool_once && positions[0] == position_once
    }

    #[quickcheck]
    fn earned_matches_checkpointed_rewards(ops: Vec<(u8, bool, u32, u8)>) -> bool {
        let (mut pool, mut positions, now, _) = run_ops(&ops);
        let earned = pool.earned(&positions[1], now).unwrap();
        pool.checkpoint_position(&mut positions[1], now).unwrap();
        earned == positions[1].rewards
    }

    #[quickcheck]
    fn equal_stakes_earn_equal_rewards(stake: u32, amount: u32, seconds: u8) -> TestResult {
        if stake == 0 || (amount as u64) < 100 {
            return TestResult::discard();
        }
        let mut pool = funded_pool(100, amount as u128);
        let mut alice = Position::default();
        let mut bob = Position::default();
        pool.stake(&mut alice, (stake as u128).into(), T0.into())
            .unwrap();
        pool.stake(&mut bob, (stake as u128).into(), T0.into()).unwrap();
        let now = Timestamp(T0 + seconds as u64);
        TestResult::from_bool(pool.earned(&alice, now) == pool.earned(&bob, now))
    }

    #[quickcheck]
    fn top_up_blends_leftover_emission(first: u32, second: u32, elapsed: u8) -> TestResult {
        let duration = 100_u64;
        if (first as u64) < duration || second == 0 || elapsed as u64 >= duration {
            return TestResult::discard();
        }
        let mut pool = funded_pool(duration, first as u128);
        let rate_before = pool.reward_rate();
        let now = Timestamp(T0 + elapsed as u64);
        let leftover = pool.finish_at().seconds_since(now) as u128 * rate_before;
        let expected = second as u128 + leftover;
        if pool
            .notify_reward_amount((second as u128).into(), now)
            .is_err()
        {
            return TestResult::from_bool(expected < duration as u128);
        }
        let emitted = pool.reward_rate() * duration as u128;
        TestResult::from_bool(emitted <= expected && expected - emitted < duration as u128)
    }

    #[quickcheck]
    fn earned_grows_then_stays_flat(stake: u32, amount: u32, t1: u8, t2: u8) -> TestResult {
        if stake == 0 || (amount as u64) < 100 {
            return TestResult::discard();
        }
        let mut pool = funded_pool(100, amount as u128);
        let mut position = Position::default();
        pool.stake(&mut position, (stake as u128).into(), T0.into())
            .unwrap();
        let (t1, t2) = (cmp::min(t1, t2) as u64, cmp::max(t1, t2) as u64);
        let earned_1 = pool.earned(&position, (T0 + t1).into()).unwrap();
        let earned_2 = pool.earned(&position, (T0 + t2).into()).unwrap();
        let at_finish = pool.earned(&position, (T0 + 100).into()).unwrap();
        let after_finish = pool
            .earned(&position, (T0 + 100 + t2).into())
            .unwrap();
        TestResult::from_bool(earned_1 <= earned_2 && at_finish == after_finish)
    }
}
