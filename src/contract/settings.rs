use crate::{domain::PoolVariant, interface::Config};
use near_sdk::{
    env,
    json_types::ValidAccountId,
    serde::{Deserialize, Serialize},
    AccountId,
};
use std::{
    convert::TryInto,
    fmt::{self, Display, Formatter},
};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(crate = "near_sdk::serde")]
pub struct ContractSettings {
    /// granted the [DefaultAdmin](crate::domain::Role::DefaultAdmin) and
    /// [CreatePool](crate::domain::Role::CreatePool) roles
    pub admin_id: ValidAccountId,
    /// receives unstake fees
    pub fee_collector_id: ValidAccountId,
    pub variant: PoolVariant,
    /// overrides the default config
    pub config: Option<Config>,
}

impl ContractSettings {
    /// depends on NEAR runtime env
    pub fn new(
        admin_id: AccountId,
        fee_collector_id: AccountId,
        variant: PoolVariant,
        config: Option<Config>,
    ) -> Result<Self, InvalidContractSettings> {
        let settings = Self {
            admin_id: admin_id
                .try_into()
                .map_err(|_| InvalidContractSettings::InvalidAdminId)?,
            fee_collector_id: fee_collector_id
                .try_into()
                .map_err(|_| InvalidContractSettings::InvalidFeeCollectorId)?,
            variant,
            config,
        };

        match settings.validate() {
            Some(err) => Err(err),
            None => Ok(settings),
        }
    }

    pub fn validate(&self) -> Option<InvalidContractSettings> {
        if env::current_account_id().as_str() == self.fee_collector_id.as_ref().as_str() {
            Some(InvalidContractSettings::FeeCollectorMustNotBeContract)
        } else {
            None
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum InvalidContractSettings {
    InvalidAdminId,
    InvalidFeeCollectorId,
    FeeCollectorMustNotBeContract,
}

impl Display for InvalidContractSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidContractSettings::FeeCollectorMustNotBeContract => write!(
                f,
                "fee collector account ID must not be the contract account ID"
            ),
            InvalidContractSettings::InvalidAdminId => write!(f, "invalid admin account ID"),
            InvalidContractSettings::InvalidFeeCollectorId => {
                write!(f, "invalid fee collector account ID")
            }
        }
    }
}
