use crate::{domain::PoolVariant, ContractSettings, StakingRewardsContract};
use near_sdk::{
    env, json_types::ValidAccountId, testing_env, MockedBlockchain, PromiseResult,
    RuntimeFeesConfig, VMConfig, VMContext,
};
use std::convert::TryFrom;

pub const CONTRACT_ID: &str = "staking-rewards.oysterpack.near";
pub const ADMIN: &str = "admin.oysterpack.near";
pub const FEE_COLLECTOR: &str = "fees.oysterpack.near";
pub const REWARD_SUPPLIER: &str = "rewards.oysterpack.near";
pub const ALICE: &str = "alice.near";
pub const BOB: &str = "bob.near";
pub const STAKING_ASSET: &str = "stake.token.near";
pub const REWARD_ASSET: &str = "reward.token.near";

const NANOS_PER_SECOND: u64 = 1_000_000_000;

pub fn new_context(predecessor_account_id: &str) -> VMContext {
    VMContext {
        current_account_id: CONTRACT_ID.to_string(),
        signer_account_id: predecessor_account_id.to_string(),
        signer_account_pk: vec![0, 1, 2],
        predecessor_account_id: predecessor_account_id.to_string(),
        input: vec![],
        epoch_height: 0,
        block_index: 0,
        block_timestamp: 0,
        account_balance: 0,
        account_locked_balance: 0,
        storage_usage: 10u64.pow(6),
        attached_deposit: 0,
        prepaid_gas: 10u64.pow(18),
        random_seed: vec![0, 1, 2],
        is_view: false,
        output_data_receivers: vec![],
    }
}

/// block time is specified in seconds
pub fn new_context_at(predecessor_account_id: &str, seconds: u64) -> VMContext {
    let mut context = new_context(predecessor_account_id);
    context.block_timestamp = seconds * NANOS_PER_SECOND;
    context
}

/// sets the runtime env for the next contract call
pub fn set_context(predecessor_account_id: &str, seconds: u64) {
    testing_env!(new_context_at(predecessor_account_id, seconds));
}

pub fn account_id(account_id: &str) -> ValidAccountId {
    ValidAccountId::try_from(account_id).unwrap()
}

pub fn contract_settings(variant: PoolVariant) -> ContractSettings {
    ContractSettings {
        admin_id: account_id(ADMIN),
        fee_collector_id: account_id(FEE_COLLECTOR),
        variant,
        config: None,
    }
}

/// deploys the contract at block time zero
pub fn new_contract(variant: PoolVariant) -> StakingRewardsContract {
    set_context(ADMIN, 0);
    StakingRewardsContract::new(contract_settings(variant))
}

/// sets the runtime env for a callback that receives the specified promise result
pub fn set_env_with_promise_result(context: VMContext, promise_result: PromiseResult) {
    let storage = match env::take_blockchain_interface() {
        Some(mut blockchain) => blockchain.as_mut_mocked_blockchain().unwrap().take_storage(),
        None => Default::default(),
    };
    env::set_blockchain_interface(Box::new(MockedBlockchain::new(
        context,
        VMConfig::default(),
        RuntimeFeesConfig::default(),
        vec![promise_result],
        storage,
        Default::default(),
    )));
}

pub fn success_promise_result() -> PromiseResult {
    PromiseResult::Successful(vec![])
}
