use crate::interface::TokenAmount;
use near_sdk::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct PositionView {
    pub balance: TokenAmount,
    /// pool reward per token at the position's last checkpoint as a decimal string
    pub reward_per_token_paid: String,
    /// rewards accrued as of the last checkpoint
    pub rewards: TokenAmount,
    /// rewards that can be claimed now
    pub earned: TokenAmount,
}
