mod hash;

pub use hash::Hash;

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

/// 18 decimal fixed point scale used for the reward per token accumulator
pub const FIXED_POINT_SCALE: u128 = 1_000_000_000_000_000_000;

/// computes `a * b / c` using a 256-bit intermediate product, rounding down
///
/// Returns None if `c` is zero or if the result does not fit into a u128.
pub fn mul_div(a: u128, b: u128, c: u128) -> Option<u128> {
    if c == 0 {
        return None;
    }
    let value = U256::from(a).checked_mul(U256::from(b))? / U256::from(c);
    if value > U256::from(u128::MAX) {
        None
    } else {
        Some(value.as_u128())
    }
}
