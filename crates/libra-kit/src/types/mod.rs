//! Core value types for Libra clients.
//!
//! Every type here is an immutable value once constructed; the canonical
//! encode/decode rules live next to each type.

mod account;
mod address;
mod hash;
mod key;
mod transaction;

pub use account::{AccountResource, EventHandle};
pub use address::AccountAddress;
pub use hash::{HashValue, RAW_TRANSACTION_HASH_SALT};
pub use key::{
    KeyPair, PUBLIC_KEY_LENGTH, PublicKey, SECRET_KEY_LENGTH, SIGNATURE_LENGTH, SecretKey,
    Signature,
};
pub use transaction::{
    Program, RawTransaction, SignedTransaction, TransactionArgument, sign_transaction,
};
