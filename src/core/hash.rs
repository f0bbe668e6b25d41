use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
};

/// SHA-256 digest used to key persistent records
/// - hashing the natural keys keeps the TRIE balanced and the storage keys at a fixed length
#[derive(
    BorshDeserialize,
    BorshSerialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Ord,
    PartialOrd,
    Default,
)]
pub struct Hash([u8; 32]);

impl Hash {
    const LENGTH: usize = 32;

    /// composite key hash, e.g., (pool name, account ID)
    ///
    /// each part is length prefixed, which guarantees that `("ab", "c")` and `("a", "bc")` produce
    /// different hashes
    pub fn composite(parts: &[&str]) -> Self {
        assert!(!parts.is_empty(), "value cannot be empty");
        let mut buf = Vec::with_capacity(parts.iter().map(|part| part.len() + 4).sum());
        for part in parts {
            buf.extend_from_slice(&(part.len() as u32).to_le_bytes());
            buf.extend_from_slice(part.as_bytes());
        }
        Self::from(buf.as_slice())
    }
}

impl From<&[u8]> for Hash {
    fn from(value: &[u8]) -> Self {
        assert!(!value.is_empty(), "value cannot be empty");
        let mut buf = [0u8; Hash::LENGTH];
        let hash = env::sha256(value);
        buf.copy_from_slice(&hash.as_slice()[..Hash::LENGTH]);
        Self(buf)
    }
}

impl From<&str> for Hash {
    fn from(value: &str) -> Self {
        value.as_bytes().into()
    }
}

impl From<&String> for Hash {
    fn from(value: &String) -> Self {
        value.as_str().into()
    }
}
