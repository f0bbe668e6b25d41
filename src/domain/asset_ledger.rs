use crate::core::Hash;
use crate::domain::TokenAmount;
use crate::errors::StakingError;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::LookupMap,
    AccountId,
};

/// Asset transfer collaborator used by the staking rewards engine.
///
/// Assets are identified by their NEP-141 token contract account ID. A failed transfer leaves all
/// balances unchanged.
pub trait AssetTransfer {
    fn balance_of(&self, asset: &str, account_id: &str) -> TokenAmount;

    /// moves funds from `from` to `to`
    fn transfer_from(
        &mut self,
        asset: &str,
        from: &str,
        to: &str,
        amount: TokenAmount,
    ) -> Result<(), StakingError>;

    /// moves funds out of custody to `to`
    fn transfer(&mut self, asset: &str, to: &str, amount: TokenAmount)
        -> Result<(), StakingError>;
}

/// Asset balances held by the contract on behalf of accounts.
///
/// Tokens enter the ledger through `ft_on_transfer` deposits and leave through withdrawals that
/// are paid out with `ft_transfer`. The custody account holds the funds backing all pools.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct AssetLedger {
    custody_id: AccountId,
    /// key = hash(asset, account ID)
    balances: LookupMap<Hash, TokenAmount>,
}

impl AssetLedger {
    pub fn new(key_prefix: [u8; 1], custody_id: AccountId) -> Self {
        Self {
            custody_id,
            balances: LookupMap::new(key_prefix.to_vec()),
        }
    }

    pub fn custody_id(&self) -> &str {
        &self.custody_id
    }

    /// ## Panics
    /// if the balance overflows
    pub fn credit(&mut self, asset: &str, account_id: &str, amount: TokenAmount) {
        let balance = self
            .balance_of(asset, account_id)
            .checked_add(amount)
            .unwrap_or_else(|| panic!("{}", StakingError::ArithmeticOverflow));
        self.set_balance(asset, account_id, balance);
    }

    pub fn debit(
        &mut self,
        asset: &str,
        account_id: &str,
        amount: TokenAmount,
    ) -> Result<(), StakingError> {
        let balance = self
            .balance_of(asset, account_id)
            .checked_sub(amount)
            .ok_or(StakingError::TransferFailed)?;
        self.set_balance(asset, account_id, balance);
        Ok(())
    }

    fn set_balance(&mut self, asset: &str, account_id: &str, balance: TokenAmount) {
        let key = Self::key(asset, account_id);
        if balance.is_zero() {
            self.balances.remove(&key);
        } else {
            self.balances.insert(&key, &balance);
        }
    }

    fn key(asset: &str, account_id: &str) -> Hash {
        Hash::composite(&[asset, account_id])
    }
}

impl AssetTransfer for AssetLedger {
    fn balance_of(&self, asset: &str, account_id: &str) -> TokenAmount {
        self.balances
            .get(&Self::key(asset, account_id))
            .unwrap_or_default()
    }

    fn transfer_from(
        &mut self,
        asset: &str,
        from: &str,
        to: &str,
        amount: TokenAmount,
    ) -> Result<(), StakingError> {
        if from == to {
            return if self.balance_of(asset, from) >= amount {
                Ok(())
            } else {
                Err(StakingError::TransferFailed)
            };
        }
        let from_balance = self
            .balance_of(asset, from)
            .checked_sub(amount)
            .ok_or(StakingError::TransferFailed)?;
        let to_balance = self
            .balance_of(asset, to)
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.set_balance(asset, from, from_balance);
        self.set_balance(asset, to, to_balance);
        Ok(())
    }

    fn transfer(
        &mut self,
        asset: &str,
        to: &str,
        amount: TokenAmount,
    ) -> Result<(), StakingError> {
        let custody_id = self.custody_id.clone();
        self.transfer_from(asset, &custody_id, to, amount)
    }
}
