//! Signer trait and implementations.
//!
//! A `Signer` owns (or stands in for) one Ed25519 key and signs the hashes of
//! raw transactions.
//!
//! # Implementations
//!
//! - [`InMemorySigner`] - Single key stored in memory, or a watch-only public key
//! - [`KeyPair`] - A loose key pair
//! - [`ExtendedKeyPair`] - An account key derived from a wallet seed
//!
//! # Example
//!
//! ```rust
//! use libra_kit::{InMemorySigner, Signer};
//!
//! # fn example() -> Result<(), libra_kit::Error> {
//! let signer = InMemorySigner::from_secret_key_str(&"07".repeat(32))?;
//! let signature = signer.sign(b"message")?;
//! assert!(signature.verify(b"message", &signer.public_key()));
//! # Ok(())
//! # }
//! ```

use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::error::{Error, SignerError};
use crate::types::{AccountAddress, KeyPair, PublicKey, SecretKey, Signature};
use crate::wallet::ExtendedKeyPair;

// ============================================================================
// Signer Trait
// ============================================================================

/// Trait for signing transactions.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use libra_kit::{PublicKey, SecretKey, Signature, Signer, SignerError};
///
/// struct MyCustomSigner {
///     secret_key: SecretKey,
/// }
///
/// impl Signer for MyCustomSigner {
///     fn public_key(&self) -> PublicKey {
///         self.secret_key.public_key()
///     }
///
///     fn sign(&self, message: &[u8]) -> Result<Signature, SignerError> {
///         Ok(self.secret_key.sign(message))
///     }
/// }
/// ```
pub trait Signer: Send + Sync {
    /// The public key signatures verify against.
    fn public_key(&self) -> PublicKey;

    /// Sign `message` with the corresponding private key.
    fn sign(&self, message: &[u8]) -> Result<Signature, SignerError>;

    /// Address of the account this signer controls.
    fn address(&self) -> AccountAddress {
        self.public_key().address()
    }
}

/// Implement `Signer` for `Arc<dyn Signer>` for convenience.
impl Signer for Arc<dyn Signer> {
    fn public_key(&self) -> PublicKey {
        (**self).public_key()
    }

    fn sign(&self, message: &[u8]) -> Result<Signature, SignerError> {
        (**self).sign(message)
    }
}

impl Signer for KeyPair {
    fn public_key(&self) -> PublicKey {
        self.public_key
    }

    fn sign(&self, message: &[u8]) -> Result<Signature, SignerError> {
        Ok(self.secret_key.sign(message))
    }
}

impl Signer for ExtendedKeyPair {
    fn public_key(&self) -> PublicKey {
        *ExtendedKeyPair::public_key(self)
    }

    fn sign(&self, message: &[u8]) -> Result<Signature, SignerError> {
        Ok(self.secret_key().sign(message))
    }
}

// ============================================================================
// InMemorySigner
// ============================================================================

/// A signer with a single key stored in memory.
///
/// A watch-only signer carries just a public key: it reports the key and
/// address but every signing attempt fails with
/// [`SignerError::SigningKeyUnavailable`].
#[derive(Clone)]
pub struct InMemorySigner {
    public_key: PublicKey,
    secret_key: Option<SecretKey>,
}

impl InMemorySigner {
    pub fn new(secret_key: SecretKey) -> Self {
        Self {
            public_key: secret_key.public_key(),
            secret_key: Some(secret_key),
        }
    }

    /// Parse a hex-encoded secret key (32-byte seed or 64-byte keypair form).
    pub fn from_secret_key_str(secret_key: &str) -> Result<Self, Error> {
        Ok(Self::new(secret_key.parse()?))
    }

    /// A signer that knows only the public key.
    pub fn watch_only(public_key: PublicKey) -> Self {
        Self {
            public_key,
            secret_key: None,
        }
    }

    /// Whether this signer can produce signatures.
    pub fn can_sign(&self) -> bool {
        self.secret_key.is_some()
    }
}

impl Signer for InMemorySigner {
    fn public_key(&self) -> PublicKey {
        self.public_key
    }

    fn sign(&self, message: &[u8]) -> Result<Signature, SignerError> {
        let secret_key = self
            .secret_key
            .as_ref()
            .ok_or(SignerError::SigningKeyUnavailable)?;
        Ok(secret_key.sign(message))
    }
}

impl From<KeyPair> for InMemorySigner {
    fn from(keypair: KeyPair) -> Self {
        Self::new(keypair.secret_key)
    }
}

impl From<SecretKey> for InMemorySigner {
    fn from(secret_key: SecretKey) -> Self {
        Self::new(secret_key)
    }
}

impl Debug for InMemorySigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemorySigner")
            .field("public_key", &self.public_key)
            .field("can_sign", &self.can_sign())
            .finish()
    }
}
