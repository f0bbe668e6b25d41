use crate::core::{FIXED_POINT_SCALE, U256};
use crate::domain::TokenAmount;
use crate::errors::StakingError;
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use std::{
    fmt::{self, Display, Formatter},
    io,
};

/// Cumulative reward units earned per unit of stake, scaled by [FIXED_POINT_SCALE].
///
/// The accumulator is 256 bits wide. A single smallest unit staked against an 18 decimal reward
/// stream accrues far more than a u128 can hold.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct RewardPerToken(pub U256);

impl RewardPerToken {
    pub fn value(&self) -> U256 {
        self.0
    }

    /// reward per token accrued when `reward_rate` units per second are emitted for `seconds`
    /// across `total_supply` staked units
    /// - nothing accrues when nothing is staked
    pub fn accrued(
        reward_rate: u128,
        seconds: u64,
        total_supply: TokenAmount,
    ) -> Result<RewardPerToken, StakingError> {
        if total_supply.is_zero() {
            return Ok(RewardPerToken::default());
        }
        let emitted = U256::from(reward_rate)
            .checked_mul(U256::from(seconds))
            .and_then(|emitted| emitted.checked_mul(U256::from(FIXED_POINT_SCALE)))
            .ok_or(StakingError::ArithmeticOverflow)?;
        Ok(RewardPerToken(emitted / U256::from(total_supply.value())))
    }

    pub fn checked_add(self, other: RewardPerToken) -> Result<RewardPerToken, StakingError> {
        self.0
            .checked_add(other.0)
            .map(RewardPerToken)
            .ok_or(StakingError::ArithmeticOverflow)
    }

    /// rewards earned by `balance` staked units since `paid` was snapshotted, rounded down
    pub fn rewards_since(
        &self,
        paid: RewardPerToken,
        balance: TokenAmount,
    ) -> Result<TokenAmount, StakingError> {
        let rewards = self
            .0
            .checked_sub(paid.0)
            .and_then(|delta| delta.checked_mul(U256::from(balance.value())))
            .ok_or(StakingError::ArithmeticOverflow)?
            / U256::from(FIXED_POINT_SCALE);
        if rewards > U256::from(u128::MAX) {
            return Err(StakingError::ArithmeticOverflow);
        }
        Ok(TokenAmount(rewards.as_u128()))
    }
}

impl From<u128> for RewardPerToken {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

/// persisted as the four little endian 64 bit limbs
impl BorshSerialize for RewardPerToken {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        (self.0).0.serialize(writer)
    }
}

impl BorshDeserialize for RewardPerToken {
    fn deserialize(buf: &mut &[u8]) -> io::Result<Self> {
        let limbs = <[u64; 4]>::deserialize(buf)?;
        Ok(Self(U256(limbs)))
    }
}

impl Display for RewardPerToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
