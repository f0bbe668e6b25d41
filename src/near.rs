pub mod storage_keys;

use crate::errors::asserts;
use near_sdk::{env, PromiseResult};
use std::fmt::{Debug, Display};

/// Used to indicate that no deposit is being attached to a cross contract func call
pub const NO_DEPOSIT: u128 = 0;

/// NEP-141 `ft_transfer` requires exactly 1 yoctoNEAR to be attached
pub const ONE_YOCTO: u128 = 1;

/// 1 TGas
pub const TGAS: u64 = 1_000_000_000_000;

/// asserts that predecessor account is the contract itself - used to enforce that callbacks
/// should only be called internally - even though they are exposed on the public contract interface
pub fn assert_predecessor_is_self() {
    if env::predecessor_account_id() != env::current_account_id() {
        panic!("{}", asserts::PREDECESSOR_MUST_BE_SELF)
    }
}

pub fn assert_yocto_near_attached() {
    assert_eq!(
        env::attached_deposit(),
        ONE_YOCTO,
        "{}",
        asserts::EXACTLY_ONE_YOCTO_NEAR_MUST_BE_ATTACHED
    )
}

pub fn is_promise_result_success(result: PromiseResult) -> bool {
    match result {
        PromiseResult::Successful(_) => true,
        _ => false,
    }
}

/// wrapper around `near_sdk::env::log()` which supports structured logging
pub fn log<T: Debug>(event: T) {
    env::log(format!("{:#?}", event).as_bytes());
}

/// Contract functions fail by panicking, which causes the NEAR runtime to roll back all state
/// changes made by the function call.
pub trait UnwrapOrPanic<T> {
    fn unwrap_or_panic(self) -> T;
}

impl<T, E: Display> UnwrapOrPanic<T> for Result<T, E> {
    fn unwrap_or_panic(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}
