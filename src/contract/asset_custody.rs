use crate::{
    domain::{self, AssetTransfer},
    errors::StakingError,
    interface::{
        asset_custody::events, ext_asset_custody_callbacks, ext_fungible_token, AssetCustody,
        FungibleTokenReceiver, TokenAmount,
    },
    near::{
        assert_predecessor_is_self, assert_yocto_near_attached, is_promise_result_success, log,
        UnwrapOrPanic, NO_DEPOSIT, ONE_YOCTO,
    },
    StakingRewardsContract,
};
use near_sdk::{
    env, json_types::ValidAccountId, near_bindgen, AccountId, Promise, PromiseOrValue,
};

#[near_bindgen]
impl AssetCustody for StakingRewardsContract {
    fn asset_balance(&self, asset: ValidAccountId, account_id: ValidAccountId) -> TokenAmount {
        self.assets
            .balance_of(asset.as_ref(), account_id.as_ref())
            .into()
    }

    #[payable]
    fn withdraw_asset(&mut self, asset: ValidAccountId, amount: TokenAmount) -> Promise {
        assert_yocto_near_attached();
        let account_id = env::predecessor_account_id();
        let amount: domain::TokenAmount = amount.into();
        self.debit_asset(asset.as_ref(), &account_id, amount)
            .unwrap_or_panic();

        let gas_config = self.config.gas_config();
        ext_fungible_token::ft_transfer(
            account_id.clone(),
            amount.into(),
            None,
            asset.as_ref(),
            ONE_YOCTO,
            gas_config.ft_transfer(),
        )
        .then(ext_asset_custody_callbacks::on_asset_withdrawn(
            asset.into(),
            account_id,
            amount.into(),
            &env::current_account_id(),
            NO_DEPOSIT,
            gas_config.on_asset_withdrawn(),
        ))
    }
}

#[near_bindgen]
impl FungibleTokenReceiver for StakingRewardsContract {
    fn ft_on_transfer(
        &mut self,
        sender_id: ValidAccountId,
        amount: TokenAmount,
        msg: String,
    ) -> PromiseOrValue<TokenAmount> {
        let asset = env::predecessor_account_id();
        if !msg.is_empty() {
            env::log(format!("ft_on_transfer msg is ignored: {}", msg).as_bytes());
        }
        self.try_deposit_asset(&asset, sender_id.as_ref(), amount.into())
            .unwrap_or_panic();
        PromiseOrValue::Value(TokenAmount::default())
    }
}

#[near_bindgen]
impl StakingRewardsContract {
    /// If the `ft_transfer` failed, then the funds are credited back to the account's custody balance.
    pub fn on_asset_withdrawn(&mut self, asset: AccountId, account_id: AccountId, amount: TokenAmount) {
        assert_predecessor_is_self();
        let amount: domain::TokenAmount = amount.into();
        if is_promise_result_success(env::promise_result(0)) {
            log(events::AssetWithdrawn {
                asset: &asset,
                account_id: &account_id,
                amount: amount.value(),
            });
        } else {
            self.assets.credit(&asset, &account_id, amount);
            log(events::AssetWithdrawalFailed {
                asset: &asset,
                account_id: &account_id,
                amount: amount.value(),
            });
        }
    }
}

impl StakingRewardsContract {
    pub(crate) fn try_deposit_asset(
        &mut self,
        asset: &str,
        account_id: &str,
        amount: domain::TokenAmount,
    ) -> Result<(), StakingError> {
        if amount.is_zero() {
            return Err(StakingError::InvalidAmount);
        }
        self.assets.credit(asset, account_id, amount);
        log(events::AssetDeposited {
            asset,
            account_id,
            amount: amount.value(),
        });
        Ok(())
    }

    fn debit_asset(
        &mut self,
        asset: &str,
        account_id: &str,
        amount: domain::TokenAmount,
    ) -> Result<(), StakingError> {
        if amount.is_zero() {
            return Err(StakingError::InvalidAmount);
        }
        self.assets.debit(asset, account_id, amount)
    }
}
