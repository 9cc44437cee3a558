//! On-chain account state.
//!
//! The node returns an account's state as an opaque blob; the account
//! resource sits at its start. Decoding is all-or-nothing: either every field
//! is read or an error comes back, never a defaulted record.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::codec::{CanonicalDecode, CanonicalReader};
use crate::error::CodecError;

/// Handle to an account's event stream.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventHandle {
    /// Number of events emitted so far. Never decreases.
    pub count: u32,
    /// Opaque key identifying the stream.
    #[serde(with = "hex_bytes")]
    pub key: Vec<u8>,
}

impl EventHandle {
    pub fn new(count: u32, key: Vec<u8>) -> Self {
        Self { count, key }
    }
}

impl CanonicalDecode for EventHandle {
    /// Layout: `u32` count, `u32` reserved, `u32` key length, key bytes.
    fn decode(reader: &mut CanonicalReader<'_>) -> Result<Self, CodecError> {
        let count = reader.read_u32()?;
        // Reserved word after the count; read past it without interpreting it.
        let _reserved = reader.read_u32()?;
        let key = reader.read_bytes()?;
        Ok(Self { count, key })
    }
}

/// Decoded snapshot of an account's `LibraAccount.T` resource.
///
/// # Example
///
/// ```rust
/// use libra_kit::AccountResource;
///
/// # fn example(blob: &[u8]) -> Result<(), libra_kit::Error> {
/// let account = AccountResource::from_bytes(blob)?;
/// println!("balance: {} micro-libra, next sequence number: {}",
///     account.balance, account.sequence_number);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResource {
    /// Authentication key (length-prefixed on the wire).
    #[serde(with = "hex_bytes")]
    pub authentication_key: Vec<u8>,
    /// Balance in micro-libra.
    pub balance: u64,
    /// Whether the key rotation capability has been delegated away.
    pub delegated_key_rotation_capability: bool,
    /// Whether the withdrawal capability has been delegated away.
    pub delegated_withdrawal_capability: bool,
    /// Events received by this account.
    pub received_events: EventHandle,
    /// Events sent by this account.
    pub sent_events: EventHandle,
    /// Sequence number the account's next transaction must carry.
    pub sequence_number: u32,
}

impl AccountResource {
    /// Decode an account resource from the start of `bytes`.
    ///
    /// Bytes following the resource are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut reader = CanonicalReader::new(bytes);
        let resource = Self::decode(&mut reader)?;
        if !reader.is_empty() {
            trace!(
                trailing = reader.remaining(),
                "ignoring bytes after account resource"
            );
        }
        debug!(
            balance = resource.balance,
            sequence_number = resource.sequence_number,
            "decoded account resource"
        );
        Ok(resource)
    }
}

impl CanonicalDecode for AccountResource {
    fn decode(reader: &mut CanonicalReader<'_>) -> Result<Self, CodecError> {
        let authentication_key = reader.read_bytes()?;
        let balance = reader.read_u64()?;
        let delegated_key_rotation_capability = reader.read_bool()?;
        let delegated_withdrawal_capability = reader.read_bool()?;
        let received_events = EventHandle::decode(reader)?;
        let sent_events = EventHandle::decode(reader)?;
        let sequence_number = reader.read_u32()?;

        Ok(Self {
            authentication_key,
            balance,
            delegated_key_rotation_capability,
            delegated_withdrawal_capability,
            received_events,
            sent_events,
            sequence_number,
        })
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(d)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}
