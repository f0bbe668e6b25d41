use crate::domain;
use crate::interface::TokenAmount;
use near_sdk::{
    json_types::{U128, U64},
    serde::{Deserialize, Serialize},
    AccountId,
};

/// Pool snapshot
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PoolView {
    pub name: String,
    pub staking_asset: AccountId,
    pub reward_asset: AccountId,
    pub reward_supplier: AccountId,
    /// reward period length in seconds
    pub duration: U64,
    /// percentage with 18 decimals charged on claimed rewards
    pub unstake_fee: U128,

    /// when the current reward period ends in seconds since the Unix epoch
    /// - zero means the pool has never been funded
    pub finish_at: U64,
    pub updated_at: U64,
    /// reward units emitted per second
    pub reward_rate: U128,
    /// 18 decimals fixed point, serialized as a decimal string because it may exceed 128 bits
    pub reward_per_token_stored: String,
    pub total_supply: TokenAmount,
    pub pool_reward_balance: TokenAmount,
}

impl From<&domain::Pool> for PoolView {
    fn from(pool: &domain::Pool) -> Self {
        Self {
            name: pool.name().to_string(),
            staking_asset: pool.staking_asset().to_string(),
            reward_asset: pool.reward_asset().to_string(),
            reward_supplier: pool.reward_supplier().to_string(),
            duration: pool.duration().into(),
            unstake_fee: pool.unstake_fee().value().into(),
            finish_at: pool.finish_at().value().into(),
            updated_at: pool.updated_at().value().into(),
            reward_rate: pool.reward_rate().into(),
            reward_per_token_stored: pool.reward_per_token_stored().to_string(),
            total_supply: pool.total_supply().into(),
            pool_reward_balance: pool.pool_reward_balance().into(),
        }
    }
}
