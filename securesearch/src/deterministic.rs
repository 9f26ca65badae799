//! Deterministic one-way encryption for equality search.
//!
//! A value is encrypted with AES-CBC under an IV derived from the value itself
//! (see [`crate::kdf`]). The same value and key always produce the same
//! ciphertext, so an encrypted column can be searched by encrypting the search
//! term and comparing. Nothing in this crate decrypts: the IV is not stored
//! and can only be recomputed from the original plaintext.
//!
//! # Security Properties
//!
//! - **Deterministic**: Same plaintext + key → same ciphertext, on any machine
//! - **Keyed**: Without the key the IV and ciphertext are unpredictable
//! - **Costly to enumerate**: Every encryption runs 64000 PBKDF2 rounds, so a
//!   rainbow table over a small input space takes a long time even with the key
//!
//! # Security Warning
//!
//! Deterministic encryption reveals equality. Use it only for unique values
//! that need exact-match lookup. Canonicalize values before encrypting them:
//! `"0042"` and `"42"` are different plaintexts.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use secrecy::SecretString;

use crate::cipher::cbc_encrypt;
use crate::error::Error;
use crate::kdf::{derive_iv, derive_salt};
use crate::keys::generate_key_of_len;
use crate::params::{Cipher, Parameters, PBKDF2_MIN_ITERATIONS};

/// Deterministic, one-way encryptor.
///
/// Holds parameters only, never key material. It is `Copy`, `Send` and
/// `Sync`; share one instance or create one per call, the result is the same.
///
/// # Example
///
/// ```
/// use securesearch::deterministic::DeterministicEncryptor;
///
/// let key = [0x42u8; 32];
/// let encryptor = DeterministicEncryptor::new();
///
/// let ciphertext1 = encryptor.encrypt(b"1234567890", &key)?;
/// let ciphertext2 = encryptor.encrypt(b"1234567890", &key)?;
/// assert_eq!(ciphertext1, ciphertext2); // Deterministic!
/// # Ok::<(), securesearch::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeterministicEncryptor {
    params: Parameters,
}

impl DeterministicEncryptor {
    /// Creates an encryptor with the default parameters (AES-256-CBC,
    /// PBKDF2-HMAC-SHA256, 64000 iterations).
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Parameters::DEFAULT }
    }

    /// Switches to another CBC cipher.
    ///
    /// Ciphertexts produced with different ciphers do not match each other.
    #[must_use]
    pub const fn with_cipher(mut self, cipher: Cipher) -> Self {
        self.params = Parameters::new(cipher, self.params.iterations());
        self
    }

    /// Sets the PBKDF2 iteration count.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyDerivation` if `iterations` is below
    /// [`PBKDF2_MIN_ITERATIONS`].
    pub fn with_iterations(mut self, iterations: u32) -> Result<Self, Error> {
        if iterations < PBKDF2_MIN_ITERATIONS {
            return Err(Error::KeyDerivation(format!(
                "{iterations} PBKDF2 iterations is below the minimum of {PBKDF2_MIN_ITERATIONS}"
            )));
        }
        self.params = Parameters::new(self.params.cipher(), iterations);
        Ok(self)
    }

    /// Returns the parameters this encryptor runs with.
    #[must_use]
    pub const fn parameters(&self) -> Parameters {
        self.params
    }

    /// Encrypts `plaintext` deterministically under `key`.
    ///
    /// # Arguments
    ///
    /// * `plaintext` - Canonical byte form of the value (may be empty)
    /// * `key` - Raw key, exactly as long as the cipher requires
    ///
    /// # Returns
    ///
    /// Base64 encoded ciphertext (same input → same output)
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyDerivation` if IV derivation fails and
    /// `Error::Encryption` if the cipher rejects the key.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(cipher = %self.params.cipher(), iterations = self.params.iterations())
    )]
    pub fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> Result<String, Error> {
        let cipher = self.params.cipher();
        let iv_len = cipher.iv_len();

        let salt = derive_salt(key);
        let iv = derive_iv(plaintext, salt.as_bytes(), self.params.iterations(), iv_len)?;
        let ciphertext = cbc_encrypt(cipher, key, &iv, plaintext)?;

        Ok(STANDARD.encode(ciphertext))
    }

    /// Encrypts the UTF-8 bytes of `plaintext`.
    ///
    /// # Errors
    ///
    /// Same as [`DeterministicEncryptor::encrypt`].
    pub fn encrypt_str(&self, plaintext: &str, key: &[u8]) -> Result<String, Error> {
        self.encrypt(plaintext.as_bytes(), key)
    }

    /// Generates a random hex encoded key sized for this encryptor's cipher.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientEntropy` if the OS random source fails.
    pub fn generate_key(&self) -> Result<SecretString, Error> {
        generate_key_of_len(self.params.key_len())
    }
}

/// Encrypts `plaintext` under `key` with the default parameters.
///
/// # Errors
///
/// See [`DeterministicEncryptor::encrypt`].
///
/// # Example
///
/// ```
/// use securesearch::{decode_key, encrypt};
/// use secrecy::ExposeSecret;
///
/// let key = decode_key("2116d1542ad7377a9395e22c8264b480cdf843b069c391ff02183179f9ff2446")?;
/// let ciphertext = encrypt(b"1234567890", key.expose_secret())?;
/// assert_eq!(ciphertext, "RoH2Bfuob46Mn+XX5TETBg==");
/// # Ok::<(), securesearch::error::Error>(())
/// ```
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<String, Error> {
    DeterministicEncryptor::new().encrypt(plaintext, key)
}
