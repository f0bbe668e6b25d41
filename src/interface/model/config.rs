use crate::config;
use near_sdk::{
    json_types::U64,
    serde::{Deserialize, Serialize},
};

/// Used to view the contract config and to apply config updates - when updating, only the
/// specified values are changed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Config {
    pub gas_config: Option<GasConfig>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct GasConfig {
    pub ft_transfer: Option<U64>,
    pub on_asset_withdrawn: Option<U64>,
}

impl From<&config::Config> for Config {
    fn from(value: &config::Config) -> Self {
        let gas_config = value.gas_config();
        Self {
            gas_config: Some(GasConfig {
                ft_transfer: Some(gas_config.ft_transfer().into()),
                on_asset_withdrawn: Some(gas_config.on_asset_withdrawn().into()),
            }),
        }
    }
}
