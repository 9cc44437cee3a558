//! Mnemonic seed phrases.
//!
//! Phrases use the 2048-word BIP-39 English dictionary. Each word encodes 11
//! bits; the trailing `ENT / 32` bits are a checksum taken from the first
//! byte of SHA3-256(entropy).

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use bip39::Language;
use rand::RngCore;
use rand::rngs::OsRng;
use sha3::{Digest, Sha3_256};
use zeroize::Zeroizing;

use crate::error::MnemonicError;

/// Bits encoded by each dictionary word.
const BITS_PER_WORD: usize = 11;

/// Map a word count to its entropy length in bytes.
fn entropy_len_for_words(word_count: usize) -> Result<usize, MnemonicError> {
    match word_count {
        12 => Ok(16),
        15 => Ok(20),
        18 => Ok(24),
        21 => Ok(28),
        24 => Ok(32),
        _ => Err(MnemonicError::InvalidWordCount(word_count)),
    }
}

/// Top `bits` bits of the entropy's SHA3-256 hash.
fn checksum(entropy: &[u8], bits: usize) -> u8 {
    Sha3_256::digest(entropy)[0] >> (8 - bits)
}

/// A validated mnemonic phrase.
///
/// Stored as dictionary indices; the phrase and its entropy are recomputed on
/// demand.
///
/// # Example
///
/// ```rust
/// use libra_kit::wallet::Mnemonic;
///
/// let mnemonic = Mnemonic::from_entropy(&[0x42; 16]).unwrap();
/// let parsed: Mnemonic = mnemonic.to_string().parse().unwrap();
/// assert_eq!(parsed, mnemonic);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic {
    indices: Vec<u16>,
}

impl Mnemonic {
    /// Parse a phrase and verify its checksum.
    ///
    /// Whitespace is collapsed and case is ignored.
    pub fn parse(phrase: &str) -> Result<Self, MnemonicError> {
        let mnemonic = Self::parse_unchecked(phrase)?;
        let (entropy, embedded) = mnemonic.split_bits();
        let cs_bits = entropy.len() / 4;
        if checksum(&entropy, cs_bits) != embedded {
            return Err(MnemonicError::InvalidMnemonicChecksum);
        }
        Ok(mnemonic)
    }

    /// Parse a phrase, checking word count and dictionary membership but not
    /// the checksum.
    ///
    /// Accounts created from an arbitrary sequence of dictionary words have no
    /// valid checksum yet still derive keys; this accepts them.
    pub fn parse_unchecked(phrase: &str) -> Result<Self, MnemonicError> {
        let normalized = phrase.trim().to_lowercase();
        let words: Vec<&str> = normalized.split_whitespace().collect();
        entropy_len_for_words(words.len())?;

        let indices = words
            .iter()
            .map(|word| {
                Language::English
                    .find_word(word)
                    .ok_or_else(|| MnemonicError::UnknownDictionaryWord(word.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { indices })
    }

    /// Encode entropy (16, 20, 24, 28 or 32 bytes) as a phrase with checksum.
    pub fn from_entropy(entropy: &[u8]) -> Result<Self, MnemonicError> {
        if !matches!(entropy.len(), 16 | 20 | 24 | 28 | 32) {
            return Err(MnemonicError::InvalidEntropyLength(entropy.len()));
        }
        let cs_bits = entropy.len() / 4;
        let total_bits = entropy.len() * 8 + cs_bits;
        let cs = checksum(entropy, cs_bits);

        let bit = |i: usize| -> u16 {
            if i < entropy.len() * 8 {
                ((entropy[i / 8] >> (7 - i % 8)) & 1) as u16
            } else {
                ((cs >> (cs_bits - 1 - (i - entropy.len() * 8))) & 1) as u16
            }
        };

        let indices = (0..total_bits / BITS_PER_WORD)
            .map(|w| {
                (0..BITS_PER_WORD).fold(0u16, |acc, b| (acc << 1) | bit(w * BITS_PER_WORD + b))
            })
            .collect();

        Ok(Self { indices })
    }

    /// Generate a random phrase of `word_count` words.
    pub fn generate(word_count: usize) -> Result<Self, MnemonicError> {
        let mut entropy = Zeroizing::new(vec![0u8; entropy_len_for_words(word_count)?]);
        OsRng.fill_bytes(&mut entropy);
        Self::from_entropy(&entropy)
    }

    /// The phrase's words, in order.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        let list = Language::English.word_list();
        self.indices.iter().map(move |&i| list[i as usize])
    }

    /// Number of words in the phrase.
    pub fn word_count(&self) -> usize {
        self.indices.len()
    }

    /// The entropy bits encoded by the phrase (checksum bits excluded).
    pub fn entropy(&self) -> Vec<u8> {
        self.split_bits().0
    }

    /// Split the phrase's bit string into entropy bytes and checksum bits.
    fn split_bits(&self) -> (Vec<u8>, u8) {
        let total_bits = self.indices.len() * BITS_PER_WORD;
        let entropy_bits = total_bits * 32 / 33;
        let mut entropy = vec![0u8; entropy_bits / 8];
        let mut cs = 0u8;

        for i in 0..total_bits {
            let word = self.indices[i / BITS_PER_WORD];
            let bit = ((word >> (BITS_PER_WORD - 1 - i % BITS_PER_WORD)) & 1) as u8;
            if i < entropy_bits {
                entropy[i / 8] |= bit << (7 - i % 8);
            } else {
                cs = (cs << 1) | bit;
            }
        }

        (entropy, cs)
    }
}

impl FromStr for Mnemonic {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic({} words, ***)", self.indices.len())
    }
}
