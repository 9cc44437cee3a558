//! An offline Rust toolkit for Libra wallets and transactions.
//!
//! **libra-kit** covers the client-side half of talking to a Libra node:
//! deriving account keys from a mnemonic, decoding account state the node
//! returns, and encoding and signing transactions to send back. Nothing here
//! touches the network.
//!
//! # Quick Start
//!
//! ```rust
//! use libra_kit::wallet::{KeyFactory, Mnemonic, Seed};
//! use libra_kit::{AccountAddress, Program, TransactionBuilder};
//!
//! # fn main() -> Result<(), libra_kit::Error> {
//! // Restore a wallet
//! let mnemonic = Mnemonic::generate(24)?;
//! let factory = KeyFactory::new(&Seed::new(&mnemonic, "LIBRA"));
//! let account = factory.private_child(0u64);
//!
//! // Send 1 libra
//! let receiver: AccountAddress = "ab".repeat(32).parse()?;
//! let p2p_script: Vec<u8> = Vec::new(); // compiled peer_to_peer_transfer script
//! let signed = TransactionBuilder::new()
//!     .sender(account.address())
//!     .sequence_number(0)
//!     .program(Program::peer_to_peer_transfer(p2p_script, receiver, 1_000_000))
//!     .sign_with(&account)?;
//!
//! println!("submit: {}", signed.to_base64());
//! # Ok(())
//! # }
//! ```
//!
//! # Core Types
//!
//! - [`wallet::Mnemonic`], [`wallet::Seed`], [`wallet::KeyFactory`] - Deterministic wallet
//! - [`AccountAddress`] - SHA3-256 of an Ed25519 public key
//! - [`AccountResource`] - Decoded on-chain account state
//! - [`RawTransaction`], [`SignedTransaction`] - What gets signed and sent
//! - [`PublicKey`], [`SecretKey`], [`Signature`] - Ed25519 keys
//!
//! # Wire Format
//!
//! Integers are little-endian and variable-length fields carry a `u32` length
//! prefix. See [`codec`] for the reader and writer.

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod types;
pub mod wallet;

// Re-export commonly used types at crate root
pub use error::{
    CodecError, DeriveError, Error, MnemonicError, ParseAddressError, ParseKeyError, SignerError,
};
pub use types::*;

pub use client::{InMemorySigner, Signer, TransactionBuilder};
pub use config::TransactionConfig;
pub use wallet::{ChildNumber, ExtendedKeyPair, KeyFactory, Mnemonic, Seed};
