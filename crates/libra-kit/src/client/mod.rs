//! Offline client pieces: signers and the transaction builder.

mod signer;
mod transaction;

pub use signer::{InMemorySigner, Signer};
pub use transaction::TransactionBuilder;
