use crate::{
    domain::{self, AssetTransfer, Pool, Position, Role, Timestamp},
    errors::StakingError,
    interface::{
        staking_rewards::events, PoolView, PositionView, StakingRewards, TokenAmount,
    },
    near::{log, UnwrapOrPanic},
    StakingRewardsContract,
};
use near_sdk::{
    env,
    json_types::{ValidAccountId, U128, U64},
    near_bindgen, AccountId,
};

#[near_bindgen]
impl StakingRewards for StakingRewardsContract {
    fn pool(&self, name: String) -> PoolView {
        let pool = self.load_pool(&name).unwrap_or_panic();
        (&pool).into()
    }

    fn pool_names(&self) -> Vec<String> {
        self.pools.keys().collect()
    }

    fn earned(&self, name: String, account_id: ValidAccountId) -> TokenAmount {
        let pool = self.load_pool(&name).unwrap_or_panic();
        let position = self
            .load_position(&name, account_id.as_ref())
            .unwrap_or_default();
        pool.earned(&position, Timestamp::now())
            .unwrap_or_panic()
            .into()
    }

    fn position(&self, name: String, account_id: ValidAccountId) -> Option<PositionView> {
        let pool = self.load_pool(&name).unwrap_or_panic();
        self.load_position(&name, account_id.as_ref())
            .map(|position| PositionView {
                balance: position.balance.into(),
                reward_per_token_paid: position.reward_per_token_paid.to_string(),
                rewards: position.rewards.into(),
                earned: pool
                    .earned(&position, Timestamp::now())
                    .unwrap_or_panic()
                    .into(),
            })
    }

    fn balance_of(&self, name: String, account_id: ValidAccountId) -> TokenAmount {
        self.load_pool(&name).unwrap_or_panic();
        self.load_position(&name, account_id.as_ref())
            .map(|position| position.balance)
            .unwrap_or_default()
            .into()
    }

    fn reward_per_token(&self, name: String) -> String {
        let pool = self.load_pool(&name).unwrap_or_panic();
        pool.reward_per_token(Timestamp::now())
            .unwrap_or_panic()
            .to_string()
    }

    fn last_time_reward_applicable(&self, name: String) -> U64 {
        let pool = self.load_pool(&name).unwrap_or_panic();
        pool.last_time_reward_applicable(Timestamp::now())
            .value()
            .into()
    }

    fn create_pool(
        &mut self,
        name: String,
        staking_asset: ValidAccountId,
        reward_asset: ValidAccountId,
        duration: U64,
        unstake_fee: U128,
        reward_supplier: ValidAccountId,
    ) {
        self.try_create_pool(
            &env::predecessor_account_id(),
            name,
            staking_asset.into(),
            reward_asset.into(),
            duration.0,
            unstake_fee.0,
            reward_supplier.into(),
        )
        .unwrap_or_panic()
    }

    fn notify_reward_amount(&mut self, name: String, amount: TokenAmount) {
        self.try_notify_reward_amount(
            &env::predecessor_account_id(),
            &name,
            amount.into(),
            Timestamp::now(),
        )
        .unwrap_or_panic()
    }

    fn stake(&mut self, name: String, amount: TokenAmount) {
        self.try_stake(
            &env::predecessor_account_id(),
            &name,
            amount.into(),
            Timestamp::now(),
        )
        .unwrap_or_panic()
    }

    fn withdraw(&mut self, name: String, amount: TokenAmount) {
        self.try_withdraw(
            &env::predecessor_account_id(),
            &name,
            amount.into(),
            Timestamp::now(),
        )
        .unwrap_or_panic()
    }

    fn get_reward(&mut self, name: String) -> TokenAmount {
        self.try_get_reward(&env::predecessor_account_id(), &name, Timestamp::now())
            .unwrap_or_panic()
            .into()
    }

    fn exit(&mut self, name: String) -> TokenAmount {
        self.try_exit(&env::predecessor_account_id(), &name, Timestamp::now())
            .unwrap_or_panic()
            .into()
    }
}

/// The operations load the pool and position by value, run the engine, and then move the funds.
/// Nothing is saved unless every step succeeds.
impl StakingRewardsContract {
    pub(crate) fn try_create_pool(
        &mut self,
        creator: &str,
        name: String,
        staking_asset: AccountId,
        reward_asset: AccountId,
        duration: u64,
        unstake_fee: u128,
        reward_supplier: AccountId,
    ) -> Result<(), StakingError> {
        self.check_role(Role::CreatePool, creator)?;
        if self.pools.get(&name).is_some() {
            return Err(StakingError::PoolAlreadyExists);
        }
        let pool = Pool::new(
            name,
            staking_asset,
            reward_asset,
            reward_supplier,
            duration,
            unstake_fee,
        )?;
        self.save_pool(&pool);

        log(events::PoolCreated {
            name: pool.name(),
            staking_asset: pool.staking_asset(),
            reward_asset: pool.reward_asset(),
            reward_supplier: pool.reward_supplier(),
            duration: pool.duration(),
            unstake_fee: pool.unstake_fee().value(),
        });
        Ok(())
    }

    /// the reward funds are moved from the reward supplier's custody balance into pool custody
    pub(crate) fn try_notify_reward_amount(
        &mut self,
        caller: &str,
        name: &str,
        amount: domain::TokenAmount,
        now: Timestamp,
    ) -> Result<(), StakingError> {
        let mut pool = self.load_pool(name)?;
        if caller != pool.reward_supplier() {
            return Err(StakingError::NotRewardSupplier);
        }
        pool.notify_reward_amount(amount, now)?;
        let custody_id = self.assets.custody_id().to_string();
        self.assets
            .transfer_from(pool.reward_asset(), caller, &custody_id, amount)?;
        self.save_pool(&pool);

        log(events::RewardNotified {
            pool: name,
            amount: amount.value(),
            reward_rate: pool.reward_rate(),
            finish_at: pool.finish_at().value(),
        });
        Ok(())
    }

    pub(crate) fn try_stake(
        &mut self,
        caller: &str,
        name: &str,
        amount: domain::TokenAmount,
        now: Timestamp,
    ) -> Result<(), StakingError> {
        let (mut pool, mut position) = self.load_pool_position(name, caller)?;
        pool.stake(&mut position, amount, now)?;
        let custody_id = self.assets.custody_id().to_string();
        self.assets
            .transfer_from(pool.staking_asset(), caller, &custody_id, amount)?;
        self.save_pool(&pool);
        self.save_position(name, caller, &position);

        log(events::Staked {
            pool: name,
            account_id: caller,
            amount: amount.value(),
        });
        Ok(())
    }

    pub(crate) fn try_withdraw(
        &mut self,
        caller: &str,
        name: &str,
        amount: domain::TokenAmount,
        now: Timestamp,
    ) -> Result<(), StakingError> {
        let (mut pool, mut position) = self.load_pool_position(name, caller)?;
        pool.withdraw(self.variant, &mut position, amount, now)?;
        self.assets.transfer(pool.staking_asset(), caller, amount)?;
        self.save_pool(&pool);
        self.save_position(name, caller, &position);

        log(events::Withdrawn {
            pool: name,
            account_id: caller,
            amount: amount.value(),
        });
        Ok(())
    }

    /// Returns the payout credited to the caller. The unstake fee is credited to the fee collector.
    pub(crate) fn try_get_reward(
        &mut self,
        caller: &str,
        name: &str,
        now: Timestamp,
    ) -> Result<domain::TokenAmount, StakingError> {
        let (mut pool, mut position) = self.load_pool_position(name, caller)?;
        let claim = match pool.claim(self.variant, &mut position, now)? {
            Some(claim) => claim,
            None => return Ok(domain::TokenAmount::ZERO),
        };

        let custody_balance = self
            .assets
            .balance_of(pool.reward_asset(), self.assets.custody_id());
        if custody_balance < claim.amount {
            return Err(StakingError::TransferFailed);
        }
        self.assets
            .transfer(pool.reward_asset(), caller, claim.payout)?;
        if !claim.fee.is_zero() {
            let fee_collector_id = self.fee_collector_id.clone();
            self.assets
                .transfer(pool.reward_asset(), &fee_collector_id, claim.fee)?;
        }
        self.save_pool(&pool);
        self.save_position(name, caller, &position);

        log(events::RewardClaimed {
            pool: name,
            account_id: caller,
            amount: claim.payout.value(),
            fee: claim.fee.value(),
        });
        Ok(claim.payout)
    }

    /// withdraws the whole staked balance, if any, and then claims rewards
    pub(crate) fn try_exit(
        &mut self,
        caller: &str,
        name: &str,
        now: Timestamp,
    ) -> Result<domain::TokenAmount, StakingError> {
        let balance = self
            .load_position(name, caller)
            .map(|position| position.balance)
            .unwrap_or_default();
        if !balance.is_zero() {
            self.try_withdraw(caller, name, balance, now)?;
        }
        self.try_get_reward(caller, name, now)
    }

    fn load_pool_position(
        &self,
        name: &str,
        account_id: &str,
    ) -> Result<(Pool, Position), StakingError> {
        let pool = self.load_pool(name)?;
        let position = self.load_position(name, account_id).unwrap_or_default();
        Ok((pool, position))
    }
}
