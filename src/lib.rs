pub mod config;
pub mod contract;
pub mod core;
pub mod domain;
pub mod errors;
pub mod interface;
pub mod near;

#[cfg(test)]
pub(crate) mod test_utils;

pub use contract::settings::*;

use crate::{
    config::Config,
    core::Hash,
    domain::{AssetLedger, Pool, PoolVariant, Position, Role, RoleSet},
    near::storage_keys::{
        ASSETS_KEY_PREFIX, POOLS_KEY_PREFIX, POSITIONS_KEY_PREFIX, ROLES_KEY_PREFIX,
    },
};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::{LookupMap, UnorderedMap},
    env, near_bindgen, AccountId,
};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: near_sdk::wee_alloc::WeeAlloc = near_sdk::wee_alloc::WeeAlloc::INIT;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize)]
pub struct StakingRewardsContract {
    /// applies to all pools
    variant: PoolVariant,
    fee_collector_id: AccountId,
    config: Config,

    pools: UnorderedMap<String, Pool>,
    /// key = hash(pool name, account ID)
    positions: LookupMap<Hash, Position>,
    /// key = hash(account ID)
    roles: LookupMap<Hash, RoleSet>,
    assets: AssetLedger,
}

impl Default for StakingRewardsContract {
    fn default() -> Self {
        panic!("contract must be initialized before usage")
    }
}

#[near_bindgen]
impl StakingRewardsContract {
    /// ## Panics
    /// - if the contract is already initialized
    /// - if the settings are invalid
    #[init]
    pub fn new(settings: ContractSettings) -> Self {
        assert!(!env::state_exists(), "contract is already initialized");
        if let Some(err) = settings.validate() {
            panic!("{}", err);
        }

        let mut config = Config::default();
        if let Some(updates) = settings.config.as_ref() {
            config.apply_updates(updates);
        }

        let mut contract = Self {
            variant: settings.variant,
            fee_collector_id: settings.fee_collector_id.as_ref().clone(),
            config,
            pools: UnorderedMap::new(POOLS_KEY_PREFIX.to_vec()),
            positions: LookupMap::new(POSITIONS_KEY_PREFIX.to_vec()),
            roles: LookupMap::new(ROLES_KEY_PREFIX.to_vec()),
            assets: AssetLedger::new(ASSETS_KEY_PREFIX, env::current_account_id()),
        };

        let admin_id = settings.admin_id.as_ref();
        let mut roles = RoleSet::default();
        roles.insert(Role::DefaultAdmin);
        roles.insert(Role::CreatePool);
        contract.roles.insert(&Hash::from(admin_id), &roles);

        contract
    }
}
