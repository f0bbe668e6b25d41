use crate::core::{mul_div, FIXED_POINT_SCALE};
use crate::domain::TokenAmount;
use crate::errors::StakingError;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};

/// Fee charged on claimed rewards, expressed as a percentage with 18 decimals,
/// i.e., `10 * 10^18` = 10%.
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default,
)]
pub struct UnstakeFee(pub u128);

impl UnstakeFee {
    /// 100%
    pub const MAX: UnstakeFee = UnstakeFee(100 * FIXED_POINT_SCALE);

    pub fn new(value: u128) -> Result<Self, StakingError> {
        if value > Self::MAX.0 {
            Err(StakingError::InvalidFee)
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> u128 {
        self.0
    }

    /// fee portion of the claimed amount, rounded down
    pub fn fee(&self, amount: TokenAmount) -> Result<TokenAmount, StakingError> {
        mul_div(amount.value(), self.0, Self::MAX.0)
            .map(TokenAmount)
            .ok_or(StakingError::ArithmeticOverflow)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ten_percent() {
        let fee = UnstakeFee::new(10 * FIXED_POINT_SCALE).unwrap();
        assert_eq!(fee.fee(1000.into()).unwrap(), TokenAmount(100));
        // rounds down the same way as `amount * 10 / 100`
        assert_eq!(fee.fee(999.into()).unwrap(), TokenAmount(999 * 10 / 100));
    }

    #[test]
    fn zero_fee() {
        assert_eq!(
            UnstakeFee::default().fee(u128::MAX.into()).unwrap(),
            TokenAmount::ZERO
        );
    }

    #[test]
    fn fee_is_capped_at_100_percent() {
        assert_eq!(
            UnstakeFee::MAX.fee(1000.into()).unwrap(),
            TokenAmount(1000)
        );
        assert_eq!(
            UnstakeFee::new(UnstakeFee::MAX.value() + 1),
            Err(StakingError::InvalidFee)
        );
    }
}
