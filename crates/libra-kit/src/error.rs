//! Error types for libra-kit.
//!
//! # Error Hierarchy
//!
//! - [`Error`](enum@Error) - Main error type, returned by the builder and
//!   other operations that can fail for more than one reason
//!   - [`MnemonicError`] - Seed phrase validation failures
//!   - [`DeriveError`] - Invalid derivation index
//!   - [`CodecError`] - Canonical encoding/decoding failures
//!   - [`ParseKeyError`] - Invalid key format
//!   - [`ParseAddressError`] - Invalid account address format
//!   - [`SignerError`] - Signing operation failures
//!
//! # Error Handling Examples
//!
//! ```rust
//! use libra_kit::{AccountResource, CodecError};
//!
//! match AccountResource::from_bytes(&[0x04, 0x00]) {
//!     Ok(resource) => println!("Balance: {}", resource.balance),
//!     Err(CodecError::TruncatedInput { needed, remaining }) => {
//!         println!("need {} bytes, only {} left", needed, remaining);
//!     }
//!     Err(e) => println!("malformed account blob: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error validating a mnemonic seed phrase.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Word '{0}' is not in the mnemonic dictionary")]
    UnknownDictionaryWord(String),

    #[error("Mnemonic checksum does not match its entropy")]
    InvalidMnemonicChecksum,

    #[error("Invalid word count: {0}. Must be 12, 15, 18, 21, or 24")]
    InvalidWordCount(usize),

    #[error("Invalid entropy length: {0} bytes. Must be 16, 20, 24, 28, or 32")]
    InvalidEntropyLength(usize),
}

/// Error constructing a derivation index.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeriveError {
    #[error("Child number must be non-negative, got {0}")]
    NegativeChildNumber(i64),
}

/// Error reading or writing the canonical binary format.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("Malformed length prefix: {0:#010x}")]
    MalformedLength(u32),

    #[error("Unsupported argument type: {0}")]
    UnsupportedArgumentType(u8),

    #[error("Invalid boolean byte: {0:#04x}")]
    InvalidBool(u8),

    #[error("String argument is not valid UTF-8")]
    InvalidUtf8,

    #[error("{0} trailing bytes after decoded value")]
    TrailingBytes(usize),

    #[error("Invalid key: {0}")]
    InvalidKey(#[from] ParseKeyError),
}

/// Error parsing a public or secret key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseKeyError {
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid curve point: key bytes do not represent a valid point on the curve")]
    InvalidCurvePoint,
}

/// Error parsing an account address.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseAddressError {
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    #[error("Invalid address length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// Error during signing operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignerError {
    #[error("Signing key unavailable: secret key material is missing or corrupt")]
    SigningKeyUnavailable,
}

// ============================================================================
// Main Error Type
// ============================================================================

/// Main error type for libra-kit operations.
#[derive(Debug, Error)]
pub enum Error {
    // ─── Configuration ───
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ─── Wallet ───
    #[error(transparent)]
    Mnemonic(#[from] MnemonicError),

    #[error(transparent)]
    Derive(#[from] DeriveError),

    // ─── Parsing ───
    #[error(transparent)]
    ParseKey(#[from] ParseKeyError),

    #[error(transparent)]
    ParseAddress(#[from] ParseAddressError),

    // ─── Serialization ───
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    // ─── Transaction ───
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    // ─── Signing ───
    #[error("Signing failed: {0}")]
    Signing(#[from] SignerError),
}
