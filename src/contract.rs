pub mod access_control;
pub mod asset_custody;
pub mod contract_config;
pub mod settings;
pub mod staking_rewards;

use crate::{
    core::Hash,
    domain::{Pool, Position, Role, RoleSet},
    errors::StakingError,
    StakingRewardsContract,
};

impl StakingRewardsContract {
    pub(crate) fn load_pool(&self, name: &str) -> Result<Pool, StakingError> {
        self.pools
            .get(&name.to_string())
            .ok_or(StakingError::NoSuchPool)
    }

    pub(crate) fn save_pool(&mut self, pool: &Pool) {
        self.pools.insert(&pool.name().to_string(), pool);
    }

    pub(crate) fn load_position(&self, pool: &str, account_id: &str) -> Option<Position> {
        self.positions.get(&position_key(pool, account_id))
    }

    /// positions are never deleted, a fully withdrawn and claimed position is kept zeroed out
    pub(crate) fn save_position(&mut self, pool: &str, account_id: &str, position: &Position) {
        self.positions
            .insert(&position_key(pool, account_id), position);
    }

    pub(crate) fn account_roles(&self, account_id: &str) -> RoleSet {
        self.roles
            .get(&Hash::from(account_id))
            .unwrap_or_default()
    }

    /// accounts without roles are removed to free up storage
    pub(crate) fn save_account_roles(&mut self, account_id: &str, roles: RoleSet) {
        let key = Hash::from(account_id);
        if roles.is_empty() {
            self.roles.remove(&key);
        } else {
            self.roles.insert(&key, &roles);
        }
    }

    pub(crate) fn check_role(&self, role: Role, account_id: &str) -> Result<(), StakingError> {
        if self.account_roles(account_id).contains(role) {
            Ok(())
        } else {
            Err(StakingError::AccessDenied)
        }
    }
}

fn position_key(pool: &str, account_id: &str) -> Hash {
    Hash::composite(&[pool, account_id])
}
