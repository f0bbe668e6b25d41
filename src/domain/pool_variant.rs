use crate::domain::{Pool, Timestamp};
use crate::errors::StakingError;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Pool flavor, which is chosen when the contract is deployed and applies to all of its pools.
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq,
)]
#[serde(crate = "near_sdk::serde")]
pub enum PoolVariant {
    /// stake may be withdrawn and rewards claimed at any time
    Open,
    /// stake withdrawals and reward claims are blocked until the pool's current reward period is
    /// over
    Locked,
}

impl PoolVariant {
    /// checks whether stake and rewards may be released from the pool at the specified time
    pub fn check_release_gate(&self, pool: &Pool, now: Timestamp) -> Result<(), StakingError> {
        match self {
            PoolVariant::Open => Ok(()),
            PoolVariant::Locked if pool.is_period_over(now) => Ok(()),
            PoolVariant::Locked => Err(StakingError::DurationNotOver),
        }
    }
}

impl Default for PoolVariant {
    fn default() -> Self {
        PoolVariant::Open
    }
}
