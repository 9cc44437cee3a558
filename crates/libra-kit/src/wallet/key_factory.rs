//! Hierarchical key derivation.
//!
//! The master key is HKDF-Extract over the seed. Every child is produced by
//! HKDF-Expand with the index appended to the info string as a little-endian
//! `u64`. The master's chain code doubles as its secret and is the expansion
//! PRK directly. Below the master, the PRK is HKDF-Extract keyed by the
//! parent's chain code over the parent's secret key, so a chain code on its
//! own derives nothing. All derivation is hardened: public keys alone derive
//! nothing either.

use std::fmt::{self, Debug, Display};

use hkdf::Hkdf;
use sha3::Sha3_256;
use tracing::debug;
use zeroize::Zeroize;

use super::Seed;
use crate::error::DeriveError;
use crate::types::{AccountAddress, PublicKey, SecretKey};

/// HKDF-Extract salt for the master key.
pub const MASTER_KEY_SALT: &[u8] = b"LIBRA WALLET: master key salt$";

/// HKDF info prefix for a child's private key.
pub const DERIVED_KEY_INFO: &[u8] = b"LIBRA WALLET: derived key$";

/// HKDF info prefix for a child's chain code.
pub const CHAIN_CODE_INFO: &[u8] = b"LIBRA WALLET: chain code$";

/// Index of a derived child key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChildNumber(u64);

impl ChildNumber {
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    pub const fn index(&self) -> u64 {
        self.0
    }

    /// The index as it is appended to the HKDF info string.
    fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl From<u64> for ChildNumber {
    fn from(index: u64) -> Self {
        Self(index)
    }
}

impl From<u32> for ChildNumber {
    fn from(index: u32) -> Self {
        Self(index as u64)
    }
}

impl TryFrom<i64> for ChildNumber {
    type Error = DeriveError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        u64::try_from(index)
            .map(Self)
            .map_err(|_| DeriveError::NegativeChildNumber(index))
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A key pair together with the chain code used to derive its children.
#[derive(Clone)]
pub struct ExtendedKeyPair {
    secret_key: SecretKey,
    public_key: PublicKey,
    chain_code: [u8; 32],
    child_number: Option<ChildNumber>,
}

impl ExtendedKeyPair {
    fn new(secret: [u8; 32], chain_code: [u8; 32], child_number: Option<ChildNumber>) -> Self {
        let secret_key = SecretKey::ed25519_from_bytes(secret);
        let public_key = secret_key.public_key();
        Self {
            secret_key,
            public_key,
            chain_code,
            child_number,
        }
    }

    /// Derive the child at `index`.
    pub fn child(&self, index: ChildNumber) -> ExtendedKeyPair {
        let hkdf = match self.child_number {
            // Master secret and chain code are the same PRK
            None => Hkdf::<Sha3_256>::from_prk(&self.chain_code)
                .expect("a 32-byte chain code is a valid SHA3-256 PRK"),
            Some(_) => {
                Hkdf::<Sha3_256>::new(Some(self.chain_code.as_slice()), self.secret_key.as_bytes())
            }
        };

        let mut secret = expand(&hkdf, DERIVED_KEY_INFO, index);
        let chain_code = expand(&hkdf, CHAIN_CODE_INFO, index);
        let child = Self::new(secret, chain_code, Some(index));
        secret.zeroize();

        debug!(
            index = index.index(),
            public_key = %child.public_key,
            "derived child key"
        );
        child
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Index this key was derived at, or `None` for the master key.
    pub fn child_number(&self) -> Option<ChildNumber> {
        self.child_number
    }

    /// Address of the account controlled by this key.
    pub fn address(&self) -> AccountAddress {
        AccountAddress::from_public_key(&self.public_key)
    }
}

impl Drop for ExtendedKeyPair {
    fn drop(&mut self) {
        self.chain_code.zeroize();
    }
}

impl PartialEq for ExtendedKeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key
            && self.chain_code == other.chain_code
            && self.child_number == other.child_number
    }
}

impl Eq for ExtendedKeyPair {}

impl Debug for ExtendedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKeyPair")
            .field("public_key", &self.public_key)
            .field("child_number", &self.child_number)
            .field("secret_key", &"***")
            .field("chain_code", &"***")
            .finish()
    }
}

fn expand(hkdf: &Hkdf<Sha3_256>, label: &[u8], index: ChildNumber) -> [u8; 32] {
    let mut info = Vec::with_capacity(label.len() + 8);
    info.extend_from_slice(label);
    info.extend_from_slice(&index.to_le_bytes());

    let mut okm = [0u8; 32];
    hkdf.expand(&info, &mut okm)
        .expect("32 bytes is within the HKDF-SHA3-256 output limit");
    okm
}

/// Derives account keys from a wallet seed.
///
/// # Example
///
/// ```rust
/// use libra_kit::wallet::{KeyFactory, Mnemonic, Seed};
///
/// let mnemonic = Mnemonic::generate(24).unwrap();
/// let factory = KeyFactory::new(&Seed::new(&mnemonic, "LIBRA"));
///
/// let first_account = factory.private_child(0u64);
/// println!("address: {}", first_account.address());
/// ```
#[derive(Clone)]
pub struct KeyFactory {
    master: ExtendedKeyPair,
}

impl KeyFactory {
    pub fn new(seed: &Seed) -> Self {
        let (prk, _) = Hkdf::<Sha3_256>::extract(Some(MASTER_KEY_SALT), seed.as_bytes());
        let mut master_prk = [0u8; 32];
        master_prk.copy_from_slice(&prk);
        let master = ExtendedKeyPair::new(master_prk, master_prk, None);
        master_prk.zeroize();

        debug!(public_key = %master.public_key, "initialized key factory");
        Self { master }
    }

    /// The master key. Its chain code is the extracted PRK.
    pub fn master(&self) -> &ExtendedKeyPair {
        &self.master
    }

    /// Derive the child of the master key at `index`.
    ///
    /// Child 0 is the wallet's first account.
    pub fn private_child(&self, index: impl Into<ChildNumber>) -> ExtendedKeyPair {
        self.master.child(index.into())
    }
}

impl Debug for KeyFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyFactory")
            .field("master", &self.master)
            .finish()
    }
}
