use crate::interface;
use crate::near::TGAS;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct Config {
    gas_config: GasConfig,
}

impl Config {
    pub fn gas_config(&self) -> &GasConfig {
        &self.gas_config
    }

    pub fn apply_updates(&mut self, config: &interface::Config) {
        if let Some(gas_config) = config.gas_config.as_ref() {
            self.gas_config.update(gas_config);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gas_config: GasConfig::default(),
        }
    }
}

/// gas allotted to the cross contract calls made when assets are withdrawn
#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct GasConfig {
    ft_transfer: u64,
    on_asset_withdrawn: u64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            ft_transfer: TGAS * 10,
            on_asset_withdrawn: TGAS * 10,
        }
    }
}

impl GasConfig {
    pub fn ft_transfer(&self) -> u64 {
        self.ft_transfer
    }

    pub fn on_asset_withdrawn(&self) -> u64 {
        self.on_asset_withdrawn
    }

    /// ## Panics
    /// if any gas value is zero
    pub fn update(&mut self, config: &interface::GasConfig) {
        if let Some(ft_transfer) = config.ft_transfer.as_ref() {
            assert!(ft_transfer.0 > 0, "ft_transfer gas must not be zero");
            self.ft_transfer = ft_transfer.0;
        }

        if let Some(on_asset_withdrawn) = config.on_asset_withdrawn.as_ref() {
            assert!(
                on_asset_withdrawn.0 > 0,
                "on_asset_withdrawn gas must not be zero"
            );
            self.on_asset_withdrawn = on_asset_withdrawn.0;
        }
    }
}
