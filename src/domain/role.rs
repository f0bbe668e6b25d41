use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

#[derive(
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(crate = "near_sdk::serde")]
pub enum Role {
    /// may grant and revoke roles
    DefaultAdmin,
    /// may create pools
    CreatePool,
}

impl Role {
    fn bit(&self) -> u8 {
        match self {
            Role::DefaultAdmin => 0b01,
            Role::CreatePool => 0b10,
        }
    }
}

/// Set of roles granted to an account
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    pub fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    /// returns false if the role was already in the set
    pub fn insert(&mut self, role: Role) -> bool {
        let inserted = !self.contains(role);
        self.0 |= role.bit();
        inserted
    }

    /// returns false if the role was not in the set
    pub fn remove(&mut self, role: Role) -> bool {
        let removed = self.contains(role);
        self.0 &= !role.bit();
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_and_remove() {
        let mut roles = RoleSet::default();
        assert!(roles.is_empty());

        assert!(roles.insert(Role::CreatePool));
        assert!(!roles.insert(Role::CreatePool));
        assert!(roles.contains(Role::CreatePool));
        assert!(!roles.contains(Role::DefaultAdmin));

        assert!(roles.insert(Role::DefaultAdmin));
        assert!(roles.remove(Role::CreatePool));
        assert!(!roles.remove(Role::CreatePool));
        assert!(roles.contains(Role::DefaultAdmin));
        assert!(!roles.is_empty());
    }
}
