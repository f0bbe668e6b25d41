use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
};
use std::fmt::{self, Display, Formatter};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Block time in seconds since the Unix epoch.
///
/// Pool durations and reward periods are expressed in seconds. The NEAR runtime reports block
/// time in nanoseconds, which is truncated to whole seconds.
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Default,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// ## Panics
    /// if NEAR runtime context is not available
    pub fn now() -> Self {
        Self(env::block_timestamp() / NANOS_PER_SECOND)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// number of seconds elapsed since `earlier` - zero if `earlier` is in the future
    pub fn seconds_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    pub fn checked_add_seconds(&self, seconds: u64) -> Option<Timestamp> {
        self.0.checked_add(seconds).map(Timestamp)
    }
}

impl From<u64> for Timestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for u64 {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
