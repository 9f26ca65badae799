//! Error types for `SecureSearch` operations.
//!
//! None of the variants carry plaintext, key, salt or IV material. Messages
//! describe what was rejected, never the rejected value.

/// Main error type for `SecureSearch` operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The cipher name is unknown or not a CBC mode cipher
    #[error("unsupported cipher configuration: {0}")]
    CipherConfiguration(String),

    /// PBKDF2 rejected its parameters while deriving the IV
    #[error("IV derivation failed: {0}")]
    KeyDerivation(String),

    /// The block cipher rejected the key or IV
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// The operating system CSPRNG could not supply key material
    #[error("key generation failed: insufficient entropy")]
    InsufficientEntropy,

    /// A hex encoded key could not be decoded
    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),
}
