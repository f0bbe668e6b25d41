//! centralizes all error messages

use std::fmt::{self, Display, Formatter};

pub mod asserts {
    pub const PREDECESSOR_MUST_BE_SELF: &str = "contract call is only allowed internally";
    pub const EXACTLY_ONE_YOCTO_NEAR_MUST_BE_ATTACHED: &str =
        "exactly 1 yoctoNEAR must be attached";
}

pub mod staking_rewards {
    pub const NO_SUCH_POOL: &str = "pool does not exist";

    pub const POOL_ALREADY_EXISTS: &str = "pool already exists";

    pub const NOT_REWARD_SUPPLIER: &str =
        "contract call is only allowed by the pool reward supplier";

    pub const INSUFFICIENT_STAKED: &str = "staked balance is insufficient to fulfill request";

    pub const DURATION_NOT_OVER: &str = "pool reward period is not over";

    pub const ZERO_AMOUNT: &str = "amount must not be zero";

    pub const ZERO_REWARD_RATE: &str =
        "reward amount is too small to be emitted over the pool duration";

    pub const ZERO_DURATION: &str = "pool duration must not be zero";

    pub const UNSTAKE_FEE_OUT_OF_RANGE: &str = "unstake fee must not exceed 100%";

    pub const ARITHMETIC_OVERFLOW: &str = "ILLEGAL STATE : arithmetic overflow";
}

pub mod access_control {
    pub const ACCESS_DENIED: &str = "account does not have the required role";
}

pub mod asset_custody {
    pub const TRANSFER_FAILED: &str = "asset transfer failed because the balance is insufficient";
}

/// Domain failures raised by the staking rewards engine.
///
/// Every failure is raised before any state is persisted. Contract entry points turn the error
/// into a panic, which rolls back the whole function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakingError {
    NoSuchPool,
    PoolAlreadyExists,
    AccessDenied,
    NotRewardSupplier,
    InsufficientStaked,
    DurationNotOver,
    InvalidAmount,
    ZeroRewardRate,
    InvalidDuration,
    InvalidFee,
    TransferFailed,
    ArithmeticOverflow,
}

impl Display for StakingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let message = match self {
            StakingError::NoSuchPool => staking_rewards::NO_SUCH_POOL,
            StakingError::PoolAlreadyExists => staking_rewards::POOL_ALREADY_EXISTS,
            StakingError::AccessDenied => access_control::ACCESS_DENIED,
            StakingError::NotRewardSupplier => staking_rewards::NOT_REWARD_SUPPLIER,
            StakingError::InsufficientStaked => staking_rewards::INSUFFICIENT_STAKED,
            StakingError::DurationNotOver => staking_rewards::DURATION_NOT_OVER,
            StakingError::InvalidAmount => staking_rewards::ZERO_AMOUNT,
            StakingError::ZeroRewardRate => staking_rewards::ZERO_REWARD_RATE,
            StakingError::InvalidDuration => staking_rewards::ZERO_DURATION,
            StakingError::InvalidFee => staking_rewards::UNSTAKE_FEE_OUT_OF_RANGE,
            StakingError::TransferFailed => asset_custody::TRANSFER_FAILED,
            StakingError::ArithmeticOverflow => staking_rewards::ARITHMETIC_OVERFLOW,
        };
        write!(f, "{}", message)
    }
}
