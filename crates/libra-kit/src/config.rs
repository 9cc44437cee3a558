//! Transaction defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default gas limit per transaction.
pub const DEFAULT_MAX_GAS_AMOUNT: u64 = 6_000;

/// Default gas price, in micro-libra per unit.
pub const DEFAULT_GAS_UNIT_PRICE: u64 = 1_000;

/// Default lifetime of a transaction, in seconds.
pub const DEFAULT_EXPIRATION_DELTA_SECS: u64 = 1_000;

/// Gas and expiry defaults applied by the transaction builder.
///
/// Missing fields take their defaults when deserializing, so a partial
/// document only overrides what it names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionConfig {
    /// Upper bound on gas units a transaction may consume.
    pub max_gas_amount: u64,
    /// Price per gas unit, in micro-libra.
    pub gas_unit_price: u64,
    /// Seconds between building a transaction and its expiry.
    pub expiration_delta: u64,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            max_gas_amount: DEFAULT_MAX_GAS_AMOUNT,
            gas_unit_price: DEFAULT_GAS_UNIT_PRICE,
            expiration_delta: DEFAULT_EXPIRATION_DELTA_SECS,
        }
    }
}

impl TransactionConfig {
    pub fn expiration_delta(&self) -> Duration {
        Duration::from_secs(self.expiration_delta)
    }

    /// Reject settings no transaction could be accepted with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_gas_amount == 0 {
            return Err(Error::Config("max_gas_amount must be positive".to_string()));
        }
        if self.expiration_delta == 0 {
            return Err(Error::Config(
                "expiration_delta must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
