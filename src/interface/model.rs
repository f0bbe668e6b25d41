mod config;
mod pool;
mod position;

pub use config::{Config, GasConfig};
pub use pool::PoolView;
pub use position::PositionView;

pub use crate::domain::{PoolVariant, Role};

use crate::domain;
use near_sdk::{
    json_types::U128,
    serde::{Deserialize, Serialize},
};
use std::fmt::{self, Display, Formatter};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct TokenAmount(pub U128);

impl From<domain::TokenAmount> for TokenAmount {
    fn from(value: domain::TokenAmount) -> Self {
        Self(value.0.into())
    }
}

impl From<TokenAmount> for domain::TokenAmount {
    fn from(value: TokenAmount) -> Self {
        Self(value.value())
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl TokenAmount {
    pub fn value(&self) -> u128 {
        self.0 .0
    }
}

impl Default for TokenAmount {
    fn default() -> Self {
        Self(U128(0))
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value().fmt(f)
    }
}
