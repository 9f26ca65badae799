//! Fixed algorithm parameters.
//!
//! Every value that influences the ciphertext lives here as a named constant.
//! Two implementations interoperate only if they agree on all of them, so
//! they are exposed read-only: callers can inspect [`Parameters`] but the
//! only knobs are the cipher variant and raising the iteration count.

use std::fmt;
use std::str::FromStr;

use aes::cipher::{IvSizeUser, KeySizeUser};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::Error;

/// Default cipher, in OpenSSL naming.
pub const CIPHER: &str = "AES-256-CBC";

/// Hash used for the salt and as the PBKDF2 PRF.
pub const HASH: &str = "SHA256";

/// PBKDF2 iteration count used for IV derivation.
pub const PBKDF2_ITERATIONS: u32 = 64_000;

/// Lowest iteration count an encryptor accepts.
///
/// The iteration count is what makes building a rainbow table of a small
/// input space (e.g. every social security number) expensive even after the
/// key leaks. It may be raised, never lowered.
pub const PBKDF2_MIN_ITERATIONS: u32 = 64_000;

/// Key length in bytes for the default cipher.
pub const KEY_LENGTH: usize = 32;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes192CbcEnc = cbc::Encryptor<aes::Aes192>;
type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Block cipher used for the encryption step.
///
/// Only CBC mode is offered. The derived IV is fed to the cipher as a
/// regular IV; modes that treat the nonce differently (CTR, GCM) would turn
/// a plaintext-derived nonce into a keystream reuse problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cipher {
    /// AES-128 in CBC mode
    Aes128Cbc,
    /// AES-192 in CBC mode
    Aes192Cbc,
    /// AES-256 in CBC mode
    #[default]
    Aes256Cbc,
}

impl Cipher {
    /// Returns the OpenSSL style name, e.g. `AES-256-CBC`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aes128Cbc => "AES-128-CBC",
            Self::Aes192Cbc => "AES-192-CBC",
            Self::Aes256Cbc => "AES-256-CBC",
        }
    }

    /// Key length in bytes, as reported by the cipher implementation.
    #[must_use]
    pub fn key_len(self) -> usize {
        match self {
            Self::Aes128Cbc => Aes128CbcEnc::key_size(),
            Self::Aes192Cbc => Aes192CbcEnc::key_size(),
            Self::Aes256Cbc => Aes256CbcEnc::key_size(),
        }
    }

    /// IV length in bytes, as reported by the cipher implementation.
    #[must_use]
    pub fn iv_len(self) -> usize {
        match self {
            Self::Aes128Cbc => Aes128CbcEnc::iv_size(),
            Self::Aes192Cbc => Aes192CbcEnc::iv_size(),
            Self::Aes256Cbc => Aes256CbcEnc::iv_size(),
        }
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cipher {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AES-128-CBC" => Ok(Self::Aes128Cbc),
            "AES-192-CBC" => Ok(Self::Aes192Cbc),
            "AES-256-CBC" => Ok(Self::Aes256Cbc),
            _ => Err(Error::CipherConfiguration(format!(
                "{s} is not a supported CBC cipher"
            ))),
        }
    }
}

impl Serialize for Cipher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The complete set of parameters an encryptor runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    cipher: Cipher,
    iterations: u32,
}

impl Parameters {
    /// AES-256-CBC, SHA-256, 64000 PBKDF2 iterations.
    pub const DEFAULT: Self = Self {
        cipher: Cipher::Aes256Cbc,
        iterations: PBKDF2_ITERATIONS,
    };

    pub(crate) const fn new(cipher: Cipher, iterations: u32) -> Self {
        Self { cipher, iterations }
    }

    /// Returns the cipher.
    #[must_use]
    pub const fn cipher(&self) -> Cipher {
        self.cipher
    }

    /// Returns the hash name used for salt and KDF.
    #[must_use]
    pub const fn hash(&self) -> &'static str {
        HASH
    }

    /// Returns the PBKDF2 iteration count.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Returns the required key length in bytes.
    #[must_use]
    pub fn key_len(&self) -> usize {
        self.cipher.key_len()
    }

    /// Returns the derived IV length in bytes.
    #[must_use]
    pub fn iv_len(&self) -> usize {
        self.cipher.iv_len()
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Serialize for Parameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Parameters", 6)?;
        state.serialize_field("cipher", &self.cipher)?;
        state.serialize_field("hash", self.hash())?;
        state.serialize_field("kdf", "PBKDF2")?;
        state.serialize_field("iterations", &self.iterations)?;
        state.serialize_field("key_length", &self.key_len())?;
        state.serialize_field("iv_length", &self.iv_len())?;
        state.end()
    }
}
