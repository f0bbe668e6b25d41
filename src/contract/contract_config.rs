use crate::{
    domain::{PoolVariant, Role},
    interface::{self, ContractConfig},
    near::UnwrapOrPanic,
    StakingRewardsContract,
};
use near_sdk::{env, near_bindgen, AccountId};

#[near_bindgen]
impl ContractConfig for StakingRewardsContract {
    fn variant(&self) -> PoolVariant {
        self.variant
    }

    fn fee_collector_id(&self) -> AccountId {
        self.fee_collector_id.clone()
    }

    fn config(&self) -> interface::Config {
        (&self.config).into()
    }

    fn update_config(&mut self, config: interface::Config) {
        self.check_role(Role::DefaultAdmin, &env::predecessor_account_id())
            .unwrap_or_panic();
        self.config.apply_updates(&config);
    }
}
