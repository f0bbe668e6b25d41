use crate::interface::{Config, PoolVariant};
use near_sdk::AccountId;

pub trait ContractConfig {
    /// all pools managed by the contract share the same variant
    fn variant(&self) -> PoolVariant;

    /// receives the unstake fees charged on claimed rewards
    fn fee_collector_id(&self) -> AccountId;

    fn config(&self) -> Config;

    /// ## Panics
    /// - if the predecessor account does not have the [DefaultAdmin](crate::interface::Role::DefaultAdmin) role
    fn update_config(&mut self, config: Config);
}
