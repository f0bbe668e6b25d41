use crate::interface::Role;
use near_sdk::json_types::ValidAccountId;

/// Two role model:
/// - [DefaultAdmin](Role::DefaultAdmin) accounts grant and revoke roles
/// - [CreatePool](Role::CreatePool) accounts create pools
pub trait AccessControl {
    fn has_role(&self, role: Role, account_id: ValidAccountId) -> bool;

    /// Returns false if the account already had the role.
    ///
    /// ## Panics
    /// - if the predecessor account does not have the [DefaultAdmin](Role::DefaultAdmin) role
    fn grant_role(&mut self, role: Role, account_id: ValidAccountId) -> bool;

    /// Returns false if the account did not have the role.
    ///
    /// ## Panics
    /// - if the predecessor account does not have the [DefaultAdmin](Role::DefaultAdmin) role
    fn revoke_role(&mut self, role: Role, account_id: ValidAccountId) -> bool;

    /// The predecessor account gives up the role.
    ///
    /// Returns false if the account did not have the role.
    fn renounce_role(&mut self, role: Role) -> bool;
}

pub mod events {
    use crate::interface::Role;

    #[derive(Debug)]
    pub struct RoleGranted<'a> {
        pub role: Role,
        pub account_id: &'a str,
        pub sender: &'a str,
    }

    #[derive(Debug)]
    pub struct RoleRevoked<'a> {
        pub role: Role,
        pub account_id: &'a str,
        pub sender: &'a str,
    }
}
