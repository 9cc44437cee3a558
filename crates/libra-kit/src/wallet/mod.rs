//! Deterministic wallet: mnemonic phrase, seed and account key derivation.
//!
//! ```rust
//! use libra_kit::wallet::{KeyFactory, Mnemonic, Seed};
//!
//! let mnemonic = Mnemonic::from_entropy(&[0x11; 32]).unwrap();
//! let seed = Seed::new(&mnemonic, "LIBRA");
//! let factory = KeyFactory::new(&seed);
//!
//! let account = factory.private_child(0u64);
//! assert_eq!(account.address(), factory.private_child(0u64).address());
//! ```

mod key_factory;
mod mnemonic;
mod seed;

pub use key_factory::{
    CHAIN_CODE_INFO, ChildNumber, DERIVED_KEY_INFO, ExtendedKeyPair, KeyFactory, MASTER_KEY_SALT,
};
pub use mnemonic::Mnemonic;
pub use seed::{MNEMONIC_SALT_PREFIX, PBKDF2_ROUNDS, SEED_LENGTH, Seed};
