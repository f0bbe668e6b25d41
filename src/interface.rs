//! defines the interfaces that the contract exposes externally

pub mod access_control;
pub mod asset_custody;
pub mod contract_config;
mod model;
pub mod staking_rewards;

pub use access_control::*;
pub use asset_custody::*;
pub use contract_config::*;
pub use model::*;
pub use staking_rewards::*;
