use crate::interface::TokenAmount;
use near_sdk::{ext_contract, json_types::ValidAccountId, AccountId, Promise, PromiseOrValue};

/// The contract takes custody of the NEP-141 tokens that are staked and paid out as rewards.
///
/// Tokens are deposited via `ft_transfer_call` on the token contract, which credits the sender's
/// custody balance. Staking, reward funding, and reward claims move funds between custody
/// balances. Tokens leave the contract via [withdraw_asset](AssetCustody::withdraw_asset).
pub trait AssetCustody {
    fn asset_balance(&self, asset: ValidAccountId, account_id: ValidAccountId) -> TokenAmount;

    /// Transfers the amount from the predecessor account's custody balance back to the account via
    /// `ft_transfer` on the asset's token contract. If the transfer fails, the custody balance is
    /// credited back.
    ///
    /// #[payable] - exactly 1 yoctoNEAR must be attached
    ///
    /// ## Panics
    /// - if exactly 1 yoctoNEAR is not attached
    /// - if the amount is zero
    /// - if the custody balance is insufficient
    fn withdraw_asset(&mut self, asset: ValidAccountId, amount: TokenAmount) -> Promise;
}

/// NEP-141 transfer call receiver
pub trait FungibleTokenReceiver {
    /// The predecessor account is the token contract, which is the asset ID.
    ///
    /// Returns the unused amount, which is always zero - all deposited tokens are credited to the
    /// sender's custody balance.
    ///
    /// ## Panics
    /// - if the amount is zero
    fn ft_on_transfer(
        &mut self,
        sender_id: ValidAccountId,
        amount: TokenAmount,
        msg: String,
    ) -> PromiseOrValue<TokenAmount>;
}

#[ext_contract(ext_fungible_token)]
pub trait ExtFungibleToken {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: TokenAmount, memo: Option<String>);
}

#[ext_contract(ext_asset_custody_callbacks)]
pub trait ExtAssetCustodyCallbacks {
    /// credits the custody balance back if the `ft_transfer` failed
    fn on_asset_withdrawn(&mut self, asset: AccountId, account_id: AccountId, amount: TokenAmount);
}

pub mod events {
    #[derive(Debug)]
    pub struct AssetDeposited<'a> {
        pub asset: &'a str,
        pub account_id: &'a str,
        pub amount: u128,
    }

    #[derive(Debug)]
    pub struct AssetWithdrawn<'a> {
        pub asset: &'a str,
        pub account_id: &'a str,
        pub amount: u128,
    }

    #[derive(Debug)]
    pub struct AssetWithdrawalFailed<'a> {
        pub asset: &'a str,
        pub account_id: &'a str,
        pub amount: u128,
    }
}
