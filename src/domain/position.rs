use crate::domain::{RewardPerToken, TokenAmount};
use crate::errors::StakingError;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// A participant's stake in a single pool.
///
/// Positions are created zeroed on first access and are never deleted, only zeroed out.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// staked amount
    pub balance: TokenAmount,
    /// snapshot of the pool's reward per token at the position's last checkpoint
    pub reward_per_token_paid: RewardPerToken,
    /// rewards accrued up to the last checkpoint that have not been claimed yet
    pub rewards: TokenAmount,
}

impl Position {
    /// rewards earned as of the specified pool reward per token
    pub fn earned(&self, reward_per_token: RewardPerToken) -> Result<TokenAmount, StakingError> {
        reward_per_token
            .rewards_since(self.reward_per_token_paid, self.balance)?
            .checked_add(self.rewards)
            .ok_or(StakingError::ArithmeticOverflow)
    }

    /// freezes the rewards earned so far into [rewards](Position::rewards)
    pub fn checkpoint(&mut self, reward_per_token: RewardPerToken) -> Result<(), StakingError> {
        self.rewards = self.earned(reward_per_token)?;
        self.reward_per_token_paid = reward_per_token;
        Ok(())
    }
}
