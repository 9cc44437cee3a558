//! Wallet seed derived from a mnemonic.

use std::fmt::{self, Debug};

use sha3::Sha3_256;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::Mnemonic;

/// Prefix prepended to the caller's salt before stretching the phrase.
pub const MNEMONIC_SALT_PREFIX: &[u8] = b"LIBRA WALLET: mnemonic salt prefix$";

/// PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Seed length in bytes.
pub const SEED_LENGTH: usize = 32;

/// 32 bytes of key material stretched from a mnemonic and a salt.
///
/// The same phrase and salt always produce the same seed. Memory is wiped on
/// drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LENGTH]);

impl Seed {
    /// PBKDF2-HMAC-SHA3-256 over the space-joined phrase.
    pub fn new(mnemonic: &Mnemonic, salt: &str) -> Self {
        let phrase = Zeroizing::new(mnemonic.to_string());
        let mut full_salt = Vec::with_capacity(MNEMONIC_SALT_PREFIX.len() + salt.len());
        full_salt.extend_from_slice(MNEMONIC_SALT_PREFIX);
        full_salt.extend_from_slice(salt.as_bytes());

        let mut seed = [0u8; SEED_LENGTH];
        pbkdf2::pbkdf2_hmac::<Sha3_256>(phrase.as_bytes(), &full_salt, PBKDF2_ROUNDS, &mut seed);
        Self(seed)
    }

    /// Wrap raw seed bytes, e.g. restored from secure storage.
    pub fn from_bytes(bytes: [u8; SEED_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }
}

impl Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let mnemonic = Mnemonic::from_entropy(&[9; 32]).unwrap();
        assert_eq!(Seed::new(&mnemonic, "LIBRA"), Seed::new(&mnemonic, "LIBRA"));
    }

    #[test]
    fn test_salt_changes_seed() {
        let mnemonic = Mnemonic::from_entropy(&[9; 32]).unwrap();
        assert_ne!(Seed::new(&mnemonic, "LIBRA"), Seed::new(&mnemonic, ""));
    }

    #[test]
    fn test_phrase_changes_seed() {
        let a = Mnemonic::from_entropy(&[1; 16]).unwrap();
        let b = Mnemonic::from_entropy(&[2; 16]).unwrap();
        assert_ne!(Seed::new(&a, "LIBRA"), Seed::new(&b, "LIBRA"));
    }

    #[test]
    fn test_golden_seed() {
        let mnemonic = Mnemonic::parse_unchecked(
            "hurry seven priority awful wear jeans antique add fetch sure negative finish \
             suit draft myself chimney spend marine clock furnace draft public erase evidence",
        )
        .unwrap();
        let seed = Seed::new(&mnemonic, "LIBRA");
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "9e9ff712b382f9e35d8d0125832d12e910fcc82570a908e2dcdc7bb13c021395"
        );
    }

    #[test]
    fn test_debug_redacted() {
        assert_eq!(format!("{:?}", Seed::from_bytes([1; 32])), "Seed(***)");
    }
}
