//! SHA3-256 hash values and domain-separated hashing.

use std::fmt::{self, Debug, Display};

use sha3::{Digest, Sha3_256};

/// Salt that separates raw transaction hashes from every other hashed type.
pub const RAW_TRANSACTION_HASH_SALT: &[u8] = b"RawTransaction@@$$LIBRA$$@@";

/// A 32-byte SHA3-256 hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HashValue([u8; 32]);

impl HashValue {
    /// The zero hash (32 zero bytes).
    pub const ZERO: Self = Self([0; 32]);

    /// Hash the given data with SHA3-256.
    pub fn sha3_256(data: &[u8]) -> Self {
        Self(Sha3_256::digest(data).into())
    }

    /// Hash `data` under a domain salt: `SHA3(SHA3(salt) || data)`.
    pub fn salted(salt: &[u8], data: &[u8]) -> Self {
        let prefix = Sha3_256::digest(salt);
        let mut hasher = Sha3_256::new();
        hasher.update(prefix);
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Hash of canonical raw transaction bytes, the message that gets signed.
    pub fn raw_transaction(bytes: &[u8]) -> Self {
        Self::salted(RAW_TRANSACTION_HASH_SALT, bytes)
    }

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl AsRef<[u8]> for HashValue {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Debug for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashValue({})", self)
    }
}
