//! Key generation and decoding.
//!
//! Keys travel as lowercase hex text. Both directions hand the result back in
//! a `secrecy` wrapper so the caller's copy is wiped when it goes out of scope.

use hex::FromHexError;
use rand::{rngs::OsRng, RngCore};
use secrecy::{SecretString, SecretVec};
use zeroize::Zeroizing;

use crate::error::Error;
use crate::params::KEY_LENGTH;

/// Generates a random key of [`KEY_LENGTH`] bytes, hex encoded.
///
/// # Errors
///
/// Returns `Error::InsufficientEntropy` if the OS random source fails.
///
/// # Example
///
/// ```
/// use securesearch::keys::generate_key;
/// use secrecy::ExposeSecret;
///
/// let key = generate_key().expect("OS RNG unavailable");
/// assert_eq!(key.expose_secret().len(), 64);
/// ```
pub fn generate_key() -> Result<SecretString, Error> {
    generate_key_of_len(KEY_LENGTH)
}

/// Generates a random key of `len` bytes, hex encoded.
///
/// Only the operating system CSPRNG is used. If it fails the error is
/// returned; there is no fallback source.
///
/// # Errors
///
/// Returns `Error::InsufficientEntropy` if `len` is zero or the OS random
/// source fails.
pub fn generate_key_of_len(len: usize) -> Result<SecretString, Error> {
    if len == 0 {
        return Err(Error::InsufficientEntropy);
    }

    let mut raw = Zeroizing::new(vec![0u8; len]);
    OsRng.try_fill_bytes(&mut raw).map_err(|e| {
        tracing::error!(error = %e, "OS random source failed");
        Error::InsufficientEntropy
    })?;

    tracing::debug!(key_len = len, "generated key");
    Ok(SecretString::new(hex::encode(raw.as_slice())))
}

/// Decodes a hex encoded key.
///
/// Surrounding whitespace is ignored. Length is not checked here; the
/// encryptor checks it against its cipher.
///
/// # Errors
///
/// Returns `Error::InvalidKeyEncoding` if the input is not valid hex.
///
/// # Example
///
/// ```
/// use securesearch::keys::decode_key;
/// use secrecy::ExposeSecret;
///
/// let key = decode_key("00ff").unwrap();
/// assert_eq!(key.expose_secret().as_slice(), &[0x00, 0xff]);
/// ```
pub fn decode_key(encoded: &str) -> Result<SecretVec<u8>, Error> {
    hex::decode(encoded.trim()).map(SecretVec::new).map_err(|e| {
        // hex's own messages quote the offending character
        let reason = match e {
            FromHexError::InvalidHexCharacter { index, .. } => {
                format!("non-hex character at position {index}")
            }
            FromHexError::OddLength => "odd number of hex digits".to_string(),
            FromHexError::InvalidStringLength => "unexpected length".to_string(),
        };
        Error::InvalidKeyEncoding(reason)
    })
}
