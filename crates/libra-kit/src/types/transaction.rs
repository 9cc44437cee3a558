//! Transaction types.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use borsh::BorshSerialize;
use tracing::debug;

use super::{AccountAddress, HashValue, PublicKey, Signature};
use crate::client::Signer;
use crate::codec::{CanonicalDecode, CanonicalReader, CanonicalWriter, decode_exact};
use crate::error::{CodecError, Error, SignerError};

/// A typed argument passed to a transaction script.
///
/// IMPORTANT: Variant order matters for serialization!
/// The one-byte wire tags are: 0 = U64, 1 = Address, 2 = String, 3 = ByteArray
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize)]
pub enum TransactionArgument {
    /// Unsigned 64-bit integer, 8 bytes. (tag = 0)
    U64(u64),
    /// Account address, 32 raw bytes. (tag = 1)
    Address(AccountAddress),
    /// UTF-8 string, length-prefixed. (tag = 2)
    String(String),
    /// Opaque byte string, length-prefixed. (tag = 3)
    ByteArray(Vec<u8>),
}

impl TransactionArgument {
    /// Wire tag of this argument.
    pub fn tag(&self) -> u8 {
        match self {
            TransactionArgument::U64(_) => 0,
            TransactionArgument::Address(_) => 1,
            TransactionArgument::String(_) => 2,
            TransactionArgument::ByteArray(_) => 3,
        }
    }
}

impl From<u64> for TransactionArgument {
    fn from(value: u64) -> Self {
        TransactionArgument::U64(value)
    }
}

impl From<AccountAddress> for TransactionArgument {
    fn from(address: AccountAddress) -> Self {
        TransactionArgument::Address(address)
    }
}

impl From<String> for TransactionArgument {
    fn from(value: String) -> Self {
        TransactionArgument::String(value)
    }
}

impl From<Vec<u8>> for TransactionArgument {
    fn from(bytes: Vec<u8>) -> Self {
        TransactionArgument::ByteArray(bytes)
    }
}

impl CanonicalDecode for TransactionArgument {
    fn decode(reader: &mut CanonicalReader<'_>) -> Result<Self, CodecError> {
        match reader.read_u8()? {
            0 => Ok(TransactionArgument::U64(reader.read_u64()?)),
            1 => Ok(TransactionArgument::Address(AccountAddress::decode(reader)?)),
            2 => Ok(TransactionArgument::String(reader.read_string()?)),
            3 => Ok(TransactionArgument::ByteArray(reader.read_bytes()?)),
            tag => Err(CodecError::UnsupportedArgumentType(tag)),
        }
    }
}

/// Script bytecode plus its arguments: the unit of execution in a transaction.
///
/// The bytecode is opaque; callers load the compiled script however they like.
#[derive(Clone, Debug, Default, PartialEq, Eq, BorshSerialize)]
pub struct Program {
    /// Compiled script bytecode.
    pub code: Vec<u8>,
    /// Script arguments, in call order.
    pub args: Vec<TransactionArgument>,
    /// Compiled modules to publish alongside the script.
    pub modules: Vec<Vec<u8>>,
}

impl Program {
    /// Create a program with no arguments or modules.
    pub fn new(code: impl Into<Vec<u8>>) -> Self {
        Self {
            code: code.into(),
            args: Vec::new(),
            modules: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<TransactionArgument>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a module to publish.
    pub fn module(mut self, module: impl Into<Vec<u8>>) -> Self {
        self.modules.push(module.into());
        self
    }

    /// Peer-to-peer transfer: the script takes `(receiver, amount)`.
    pub fn peer_to_peer_transfer(
        code: impl Into<Vec<u8>>,
        receiver: AccountAddress,
        micro_libra: u64,
    ) -> Self {
        Self::new(code).arg(receiver).arg(micro_libra)
    }

    /// Rotate the sender's authentication key to `new_key`.
    pub fn rotate_authentication_key(code: impl Into<Vec<u8>>, new_key: Vec<u8>) -> Self {
        Self::new(code).arg(new_key)
    }
}

impl CanonicalDecode for Program {
    fn decode(reader: &mut CanonicalReader<'_>) -> Result<Self, CodecError> {
        let code = reader.read_bytes()?;
        let args = reader.read_seq(TransactionArgument::decode)?;
        let modules = reader.read_seq(|r| r.read_bytes())?;
        Ok(Self {
            code,
            args,
            modules,
        })
    }
}

/// An unsigned transaction.
///
/// Field order is the wire order.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize)]
pub struct RawTransaction {
    /// The account that sends and pays for the transaction.
    pub sender: AccountAddress,
    /// Must equal the sender's current on-chain sequence number.
    pub sequence_number: u64,
    /// The script to run.
    pub program: Program,
    /// Upper bound on gas units this transaction may consume.
    pub max_gas_amount: u64,
    /// Price per gas unit, in micro-libra.
    pub gas_unit_price: u64,
    /// Absolute expiry, seconds since the Unix epoch.
    pub expiration_time: u64,
}

impl RawTransaction {
    /// Create a new transaction.
    pub fn new(
        sender: AccountAddress,
        sequence_number: u64,
        program: Program,
        max_gas_amount: u64,
        gas_unit_price: u64,
        expiration_time: u64,
    ) -> Self {
        Self {
            sender,
            sequence_number,
            program,
            max_gas_amount,
            gas_unit_price,
            expiration_time,
        }
    }

    /// Canonical bytes of this transaction (what gets signed and sent).
    pub fn to_bytes(&self) -> Vec<u8> {
        CanonicalWriter::encode(self)
    }

    /// Decode a transaction from its canonical bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        decode_exact(bytes)
    }

    /// Hash of the canonical bytes, as signed.
    pub fn hash(&self) -> HashValue {
        HashValue::raw_transaction(&self.to_bytes())
    }

    /// Encode once, then sign those exact bytes.
    pub fn sign<S: Signer + ?Sized>(&self, signer: &S) -> Result<SignedTransaction, SignerError> {
        sign_transaction(signer, self.to_bytes())
    }
}

impl CanonicalDecode for RawTransaction {
    fn decode(reader: &mut CanonicalReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            sender: AccountAddress::decode(reader)?,
            sequence_number: reader.read_u64()?,
            program: Program::decode(reader)?,
            max_gas_amount: reader.read_u64()?,
            gas_unit_price: reader.read_u64()?,
            expiration_time: reader.read_u64()?,
        })
    }
}

/// Sign canonical raw transaction bytes.
///
/// The signature covers `SHA3(SHA3(salt) || raw_txn_bytes)`, computed over the
/// very bytes stored in the returned envelope.
pub fn sign_transaction<S: Signer + ?Sized>(
    signer: &S,
    raw_txn_bytes: Vec<u8>,
) -> Result<SignedTransaction, SignerError> {
    let hash = HashValue::raw_transaction(&raw_txn_bytes);
    let signature = signer.sign(hash.as_bytes())?;
    let public_key = signer.public_key();
    debug!(
        public_key = %public_key,
        len = raw_txn_bytes.len(),
        hash = %hash,
        "signed raw transaction"
    );
    Ok(SignedTransaction {
        raw_txn_bytes,
        public_key,
        signature,
    })
}

/// A signed transaction ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedTransaction {
    raw_txn_bytes: Vec<u8>,
    public_key: PublicKey,
    signature: Signature,
}

impl SignedTransaction {
    /// The exact canonical bytes that were signed.
    pub fn raw_txn_bytes(&self) -> &[u8] {
        &self.raw_txn_bytes
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Decode the signed raw transaction.
    pub fn raw_transaction(&self) -> Result<RawTransaction, CodecError> {
        RawTransaction::from_bytes(&self.raw_txn_bytes)
    }

    /// Get the hash of the signed raw transaction.
    pub fn hash(&self) -> HashValue {
        HashValue::raw_transaction(&self.raw_txn_bytes)
    }

    /// Check the signature against the embedded public key.
    pub fn verify(&self) -> bool {
        self.signature.verify(self.hash().as_bytes(), &self.public_key)
    }

    /// Serialize to bytes for submission: length-prefixed raw transaction,
    /// public key and signature.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = CanonicalWriter::with_capacity(self.raw_txn_bytes.len() + 108);
        writer
            .write_bytes(&self.raw_txn_bytes)
            .write_bytes(self.public_key.as_bytes())
            .write_bytes(self.signature.as_bytes());
        writer.into_bytes()
    }

    /// Serialize to base64 for submission.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Deserialize from bytes.
    ///
    /// Use this to reconstruct a signed transaction that was serialized with
    /// [`to_bytes`](Self::to_bytes), for example after signing offline.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        decode_exact(bytes)
    }

    /// Deserialize from base64.
    pub fn from_base64(s: &str) -> Result<Self, Error> {
        let bytes = STANDARD
            .decode(s)
            .map_err(|e| Error::InvalidTransaction(format!("Invalid base64: {}", e)))?;
        Ok(Self::from_bytes(&bytes)?)
    }
}

impl CanonicalDecode for SignedTransaction {
    fn decode(reader: &mut CanonicalReader<'_>) -> Result<Self, CodecError> {
        let raw_txn_bytes = reader.read_bytes()?;
        let public_key = PublicKey::from_slice(&reader.read_bytes()?)?;
        let signature = Signature::from_slice(&reader.read_bytes()?)?;
        Ok(Self {
            raw_txn_bytes,
            public_key,
            signature,
        })
    }
}
