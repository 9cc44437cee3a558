//! Fluent transaction builder.
//!
//! Collects the sender, sequence number and program, fills gas and expiry
//! from a [`TransactionConfig`], then encodes and signs.
//!
//! # Example
//!
//! ```rust
//! use libra_kit::{AccountAddress, InMemorySigner, Program, SecretKey, Signer, TransactionBuilder};
//!
//! # fn example(p2p_script: Vec<u8>) -> Result<(), libra_kit::Error> {
//! let signer = InMemorySigner::new(SecretKey::generate_ed25519());
//! let receiver: AccountAddress = "ab".repeat(32).parse()?;
//!
//! let signed = TransactionBuilder::new()
//!     .sender(signer.address())
//!     .sequence_number(0)
//!     .program(Program::peer_to_peer_transfer(p2p_script, receiver, 1_000_000))
//!     .sign_with(&signer)?;
//!
//! assert!(signed.verify());
//! # Ok(())
//! # }
//! ```

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::config::TransactionConfig;
use crate::error::Error;
use crate::types::{AccountAddress, AccountResource, Program, RawTransaction, SignedTransaction};

use super::signer::Signer;

/// When the built transaction expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Expiration {
    /// Config's delta from the time of `build()`.
    Default,
    /// Fixed delta from the time of `build()`.
    In(Duration),
    /// Absolute seconds since the Unix epoch.
    At(u64),
}

/// Builder for a [`RawTransaction`].
///
/// Sender, sequence number and program are required; gas settings and
/// expiry fall back to the [`TransactionConfig`].
#[derive(Clone, Debug)]
pub struct TransactionBuilder {
    config: TransactionConfig,
    sender: Option<AccountAddress>,
    sequence_number: Option<u64>,
    program: Option<Program>,
    max_gas_amount: Option<u64>,
    gas_unit_price: Option<u64>,
    expiration: Expiration,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self {
            config: TransactionConfig::default(),
            sender: None,
            sequence_number: None,
            program: None,
            max_gas_amount: None,
            gas_unit_price: None,
            expiration: Expiration::Default,
        }
    }

    /// Use `config` for any gas or expiry setting not set explicitly.
    pub fn config(mut self, config: TransactionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn sender(mut self, sender: AccountAddress) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn sequence_number(mut self, sequence_number: u64) -> Self {
        self.sequence_number = Some(sequence_number);
        self
    }

    /// Take the sequence number from the sender's decoded account state.
    pub fn sequence_number_from(self, account: &AccountResource) -> Self {
        self.sequence_number(account.sequence_number as u64)
    }

    pub fn program(mut self, program: Program) -> Self {
        self.program = Some(program);
        self
    }

    pub fn max_gas_amount(mut self, max_gas_amount: u64) -> Self {
        self.max_gas_amount = Some(max_gas_amount);
        self
    }

    pub fn gas_unit_price(mut self, gas_unit_price: u64) -> Self {
        self.gas_unit_price = Some(gas_unit_price);
        self
    }

    /// Expire at `seconds` since the Unix epoch.
    pub fn expiration_time(mut self, seconds: u64) -> Self {
        self.expiration = Expiration::At(seconds);
        self
    }

    /// Expire `delta` after `build()` is called.
    pub fn expires_in(mut self, delta: Duration) -> Self {
        self.expiration = Expiration::In(delta);
        self
    }

    /// Assemble the raw transaction.
    pub fn build(self) -> Result<RawTransaction, Error> {
        self.config.validate()?;

        let sender = self
            .sender
            .ok_or_else(|| Error::InvalidTransaction("sender is required".to_string()))?;
        let sequence_number = self
            .sequence_number
            .ok_or_else(|| Error::InvalidTransaction("sequence number is required".to_string()))?;
        let program = self
            .program
            .ok_or_else(|| Error::InvalidTransaction("program is required".to_string()))?;

        let expiration_time = match self.expiration {
            Expiration::At(seconds) => seconds,
            Expiration::In(delta) => expiration_from_now(delta)?,
            Expiration::Default => expiration_from_now(self.config.expiration_delta())?,
        };

        let txn = RawTransaction::new(
            sender,
            sequence_number,
            program,
            self.max_gas_amount.unwrap_or(self.config.max_gas_amount),
            self.gas_unit_price.unwrap_or(self.config.gas_unit_price),
            expiration_time,
        );

        debug!(
            sender = %txn.sender,
            sequence_number = txn.sequence_number,
            expiration_time = txn.expiration_time,
            "built raw transaction"
        );
        Ok(txn)
    }

    /// Build, encode and sign.
    pub fn sign_with<S: Signer + ?Sized>(self, signer: &S) -> Result<SignedTransaction, Error> {
        let txn = self.build()?;
        Ok(txn.sign(signer)?)
    }
}

fn expiration_from_now(delta: Duration) -> Result<u64, Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::InvalidTransaction(format!("system clock before Unix epoch: {}", e)))?;
    Ok(now.as_secs().saturating_add(delta.as_secs()))
}
