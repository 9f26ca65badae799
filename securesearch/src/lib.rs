//! # `SecureSearch`
//!
//! Deterministic one-way encryption of unique sensitive values (social
//! security numbers, account numbers, e-mail addresses) so that encrypted
//! records can be searched by equality without ever being decrypted.
//!
//! ## How it works
//!
//! - Salt: `hex(SHA-256(key))`
//! - IV: `PBKDF2-HMAC-SHA256(plaintext, salt, 64000 rounds)`
//! - Ciphertext: `base64(AES-256-CBC(plaintext, key, IV))`
//!
//! The IV depends only on the plaintext and the key, so encryption is a pure
//! function of both. There is no decryption: the IV is never stored.
//!
//! ## Example
//!
//! ```rust
//! use securesearch::prelude::*;
//! use secrecy::ExposeSecret;
//!
//! let key = decode_key(generate_key()?.expose_secret())?;
//! let encryptor = DeterministicEncryptor::new();
//!
//! let stored = encryptor.encrypt(b"1234567890", key.expose_secret())?;
//! let search = encryptor.encrypt(b"1234567890", key.expose_secret())?;
//! assert_eq!(stored, search);
//! # Ok::<(), Error>(())
//! ```

#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cipher;
pub mod deterministic;
pub mod error;
pub mod kdf;
pub mod keys;
pub mod params;

pub use deterministic::encrypt;
pub use keys::{decode_key, generate_key};

pub mod prelude {
    //! Convenience re-exports for common use.
    pub use crate::deterministic::{encrypt, DeterministicEncryptor};
    pub use crate::error::Error;
    pub use crate::keys::{decode_key, generate_key};
    pub use crate::params::{Cipher, Parameters};
}
