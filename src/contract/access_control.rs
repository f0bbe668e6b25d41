use crate::{
    domain::Role,
    errors::StakingError,
    interface::{access_control::events, AccessControl},
    near::{log, UnwrapOrPanic},
    StakingRewardsContract,
};
use near_sdk::{env, json_types::ValidAccountId, near_bindgen};

#[near_bindgen]
impl AccessControl for StakingRewardsContract {
    fn has_role(&self, role: Role, account_id: ValidAccountId) -> bool {
        self.account_roles(account_id.as_ref()).contains(role)
    }

    fn grant_role(&mut self, role: Role, account_id: ValidAccountId) -> bool {
        self.try_grant_role(&env::predecessor_account_id(), role, account_id.as_ref())
            .unwrap_or_panic()
    }

    fn revoke_role(&mut self, role: Role, account_id: ValidAccountId) -> bool {
        self.try_revoke_role(&env::predecessor_account_id(), role, account_id.as_ref())
            .unwrap_or_panic()
    }

    fn renounce_role(&mut self, role: Role) -> bool {
        let account_id = env::predecessor_account_id();
        self.remove_role(&account_id, role, &account_id)
    }
}

impl StakingRewardsContract {
    pub(crate) fn try_grant_role(
        &mut self,
        sender: &str,
        role: Role,
        account_id: &str,
    ) -> Result<bool, StakingError> {
        self.check_role(Role::DefaultAdmin, sender)?;
        let mut roles = self.account_roles(account_id);
        if !roles.insert(role) {
            return Ok(false);
        }
        self.save_account_roles(account_id, roles);
        log(events::RoleGranted {
            role,
            account_id,
            sender,
        });
        Ok(true)
    }

    pub(crate) fn try_revoke_role(
        &mut self,
        sender: &str,
        role: Role,
        account_id: &str,
    ) -> Result<bool, StakingError> {
        self.check_role(Role::DefaultAdmin, sender)?;
        Ok(self.remove_role(sender, role, account_id))
    }

    fn remove_role(&mut self, sender: &str, role: Role, account_id: &str) -> bool {
        let mut roles = self.account_roles(account_id);
        if !roles.remove(role) {
            return false;
        }
        self.save_account_roles(account_id, roles);
        log(events::RoleRevoked {
            role,
            account_id,
            sender,
        });
        true
    }
}
