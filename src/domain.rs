//! defines the internal domain model used to implement the business logic
//!
//! NOTE: the domain model is separate from the interface model. That being said, the interface model
//! closely mirrors the domain model.

mod asset_ledger;
mod pool;
mod pool_variant;
mod position;
mod reward_per_token;
mod role;
mod timestamp;
mod token_amount;
mod unstake_fee;

pub use asset_ledger::{AssetLedger, AssetTransfer};
pub use pool::{Pool, RewardClaim};
pub use pool_variant::PoolVariant;
pub use position::Position;
pub use reward_per_token::RewardPerToken;
pub use role::{Role, RoleSet};
pub use timestamp::Timestamp;
pub use token_amount::TokenAmount;
pub use unstake_fee::UnstakeFee;
