use crate::interface::{PoolView, PositionView, TokenAmount};
use near_sdk::json_types::{ValidAccountId, U128, U64};

/// Staking pools where participants stake one asset and earn a proportional share of a reward
/// asset that is streamed into the pool over the pool's duration.
///
/// Assets are NEP-141 fungible tokens, identified by their token contract account ID. Funds are
/// moved between the caller's asset custody balance and the pool - see [AssetCustody](crate::interface::AssetCustody).
pub trait StakingRewards {
    ////////////////////////////
    ///     VIEW METHODS    ///
    /// //////////////////////

    /// ## Panics
    /// - if the pool does not exist
    fn pool(&self, name: String) -> PoolView;

    fn pool_names(&self) -> Vec<String>;

    /// Returns the rewards the account can claim from the pool at the current block time.
    ///
    /// ## Panics
    /// - if the pool does not exist
    fn earned(&self, name: String, account_id: ValidAccountId) -> TokenAmount;

    /// Returns None if the account never staked with the pool.
    ///
    /// ## Panics
    /// - if the pool does not exist
    fn position(&self, name: String, account_id: ValidAccountId) -> Option<PositionView>;

    /// Returns the amount the account has staked with the pool.
    ///
    /// ## Panics
    /// - if the pool does not exist
    fn balance_of(&self, name: String, account_id: ValidAccountId) -> TokenAmount;

    /// 18 decimals fixed point reward per staked unit as of the current block time
    ///
    /// The value is returned as a decimal string because it is tracked with 256 bits.
    ///
    /// ## Panics
    /// - if the pool does not exist
    fn reward_per_token(&self, name: String) -> String;

    /// ## Panics
    /// - if the pool does not exist
    fn last_time_reward_applicable(&self, name: String) -> U64;

    //////////////////////////////
    ///     CHANGE METHODS    ///
    /// ////////////////////////

    /// Registers a new pool.
    ///
    /// - `duration` - reward period length in seconds
    /// - `unstake_fee` - percentage with 18 decimals charged on claimed rewards, e.g., 10% = `10 * 10^18`
    ///
    /// ## Panics
    /// - if the predecessor account does not have the [CreatePool](crate::interface::Role::CreatePool) role
    /// - if a pool with the same name already exists
    /// - if the duration is zero
    /// - if the unstake fee is greater than 100%
    fn create_pool(
        &mut self,
        name: String,
        staking_asset: ValidAccountId,
        reward_asset: ValidAccountId,
        duration: U64,
        unstake_fee: U128,
        reward_supplier: ValidAccountId,
    );

    /// Funds the pool with the specified reward amount, which is transferred from the reward
    /// supplier's custody balance into the pool, and starts a new reward period.
    ///
    /// If the current reward period is still running, the rewards not yet emitted are rolled into
    /// the new period.
    ///
    /// ## Panics
    /// - if the pool does not exist
    /// - if the predecessor account is not the pool's reward supplier
    /// - if the amount is zero or too small to be emitted over the pool duration
    /// - if the reward supplier's custody balance is insufficient
    fn notify_reward_amount(&mut self, name: String, amount: TokenAmount);

    /// Stakes the specified amount from the predecessor account's custody balance.
    ///
    /// ## Panics
    /// - if the pool does not exist
    /// - if the amount is zero
    /// - if the account's staking asset custody balance is insufficient
    fn stake(&mut self, name: String, amount: TokenAmount);

    /// Withdraws staked funds back into the predecessor account's custody balance.
    ///
    /// ## Panics
    /// - if the pool does not exist
    /// - if the amount is zero or more than what is staked
    /// - locked variant: if the pool's reward period is not over
    fn withdraw(&mut self, name: String, amount: TokenAmount);

    /// Claims the predecessor account's rewards. The unstake fee is transferred to the fee collector
    /// and the rest is credited to the account's reward asset custody balance.
    ///
    /// Returns the amount credited to the account. If there are no rewards to claim, then this is
    /// a no-op.
    ///
    /// ## Panics
    /// - if the pool does not exist
    /// - locked variant: if the pool's reward period is not over
    fn get_reward(&mut self, name: String) -> TokenAmount;

    /// Withdraws all staked funds and claims rewards.
    ///
    /// Returns the reward amount credited to the account.
    ///
    /// ## Panics
    /// - if the pool does not exist
    /// - locked variant: if the pool's reward period is not over
    fn exit(&mut self, name: String) -> TokenAmount;
}

pub mod events {
    #[derive(Debug)]
    pub struct PoolCreated<'a> {
        pub name: &'a str,
        pub staking_asset: &'a str,
        pub reward_asset: &'a str,
        pub reward_supplier: &'a str,
        pub duration: u64,
        pub unstake_fee: u128,
    }

    #[derive(Debug)]
    pub struct RewardNotified<'a> {
        pub pool: &'a str,
        pub amount: u128,
        pub reward_rate: u128,
        pub finish_at: u64,
    }

    #[derive(Debug)]
    pub struct Staked<'a> {
        pub pool: &'a str,
        pub account_id: &'a str,
        pub amount: u128,
    }

    #[derive(Debug)]
    pub struct Withdrawn<'a> {
        pub pool: &'a str,
        pub account_id: &'a str,
        pub amount: u128,
    }

    #[derive(Debug)]
    pub struct RewardClaimed<'a> {
        pub pool: &'a str,
        pub account_id: &'a str,
        pub amount: u128,
        pub fee: u128,
    }
}
