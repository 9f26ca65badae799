//! Salt and IV derivation.
//!
//! The IV is not random: it is derived from the plaintext with PBKDF2, salted
//! with a hash of the key. The same `(plaintext, key)` pair therefore always
//! yields the same IV, while anyone without the key cannot predict it.
//!
//! ```text
//! salt = lowercase_hex(SHA-256(key))
//! iv   = PBKDF2-HMAC-SHA256(plaintext, salt, iterations, iv_len)
//! ```
//!
//! Both values are returned in [`Zeroizing`] buffers and are wiped when
//! dropped, including on early error returns. This is best effort only:
//! temporaries inside the hash and cipher crates are outside our reach.

use hmac::Hmac;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::Error;

/// Derives the PBKDF2 salt from the key.
///
/// The salt is the 64 ASCII bytes of the lowercase hex digest, not the raw
/// 32 byte digest. Changing this changes every ciphertext.
///
/// # Example
///
/// ```
/// use securesearch::kdf::derive_salt;
///
/// let salt = derive_salt(&[0u8; 32]);
/// assert_eq!(salt.len(), 64);
/// ```
#[must_use]
pub fn derive_salt(key: &[u8]) -> Zeroizing<String> {
    let digest: Zeroizing<[u8; 32]> = Zeroizing::new(Sha256::digest(key).into());
    Zeroizing::new(hex::encode(digest.as_slice()))
}

/// Derives the IV for `plaintext` with PBKDF2-HMAC-SHA256.
///
/// # Arguments
///
/// * `plaintext` - Used as the PBKDF2 password
/// * `salt` - Output of [`derive_salt`]
/// * `iterations` - PBKDF2 round count
/// * `iv_len` - Number of IV bytes to derive
///
/// # Errors
///
/// Returns `Error::KeyDerivation` if `iterations` or `iv_len` is zero, or if
/// PBKDF2 rejects the parameters.
pub fn derive_iv(
    plaintext: &[u8],
    salt: &[u8],
    iterations: u32,
    iv_len: usize,
) -> Result<Zeroizing<Vec<u8>>, Error> {
    if iterations == 0 {
        return Err(Error::KeyDerivation("PBKDF2 iterations must be at least 1".to_string()));
    }
    if iv_len == 0 {
        return Err(Error::KeyDerivation("IV length must be at least 1".to_string()));
    }

    let mut iv = Zeroizing::new(vec![0u8; iv_len]);
    pbkdf2::pbkdf2::<Hmac<Sha256>>(plaintext, salt, iterations, &mut iv)
        .map_err(|e| Error::KeyDerivation(format!("PBKDF2 rejected parameters: {e}")))?;

    Ok(iv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::PBKDF2_ITERATIONS;

    const KEY_HEX: &str = "2116d1542ad7377a9395e22c8264b480cdf843b069c391ff02183179f9ff2446";

    #[test]
    fn test_salt_is_hex_digest_of_key() {
        let key = hex::decode(KEY_HEX).unwrap();
        let salt = derive_salt(&key);

        assert_eq!(
            salt.as_str(),
            "636a67131e755a70772526d5b20a12995a8440b5d0c4f5687f1dd2176505793b"
        );
    }

    #[test]
    fn test_salt_different_keys() {
        let salt1 = derive_salt(&[1u8; 32]);
        let salt2 = derive_salt(&[2u8; 32]);

        assert_ne!(salt1.as_str(), salt2.as_str());
    }

    #[test]
    fn test_derive_iv_known_value() {
        let key = hex::decode(KEY_HEX).unwrap();
        let salt = derive_salt(&key);

        let iv = derive_iv(b"1234567890", salt.as_bytes(), PBKDF2_ITERATIONS, 16)
            .expect("IV derivation failed");

        assert_eq!(hex::encode(iv.as_slice()), "a72add2719bcf09013ae19cff5404042");
    }

    #[test]
    fn test_derive_iv_deterministic() {
        let salt = derive_salt(&[7u8; 32]);

        let iv1 = derive_iv(b"alice@example.com", salt.as_bytes(), 1_000, 16).unwrap();
        let iv2 = derive_iv(b"alice@example.com", salt.as_bytes(), 1_000, 16).unwrap();

        assert_eq!(iv1.as_slice(), iv2.as_slice());
    }

    #[test]
    fn test_derive_iv_different_plaintexts() {
        let salt = derive_salt(&[7u8; 32]);

        let iv1 = derive_iv(b"alice@example.com", salt.as_bytes(), 1_000, 16).unwrap();
        let iv2 = derive_iv(b"bob@example.com", salt.as_bytes(), 1_000, 16).unwrap();

        assert_ne!(iv1.as_slice(), iv2.as_slice());
    }

    #[test]
    fn test_derive_iv_output_length() {
        let salt = derive_salt(&[7u8; 32]);

        for len in [8, 16, 32, 48] {
            let iv = derive_iv(b"value", salt.as_bytes(), 1, len).unwrap();
            assert_eq!(iv.len(), len);
        }
    }

    #[test]
    fn test_derive_iv_empty_plaintext() {
        let salt = derive_salt(&[7u8; 32]);

        let iv = derive_iv(b"", salt.as_bytes(), 1_000, 16).unwrap();
        assert_eq!(iv.len(), 16);
    }

    #[test]
    fn test_derive_iv_zero_iterations() {
        let salt = derive_salt(&[7u8; 32]);

        let result = derive_iv(b"value", salt.as_bytes(), 0, 16);
        assert!(matches!(result, Err(Error::KeyDerivation(_))));
    }

    #[test]
    fn test_derive_iv_zero_length() {
        let salt = derive_salt(&[7u8; 32]);

        let result = derive_iv(b"value", salt.as_bytes(), 1_000, 0);
        assert!(matches!(result, Err(Error::KeyDerivation(_))));
    }

    // RFC 7914 section 11, PBKDF2-HMAC-SHA256 test vector
    #[test]
    fn test_pbkdf2_sha256_rfc7914_vector() {
        const EXPECTED_HEX: &str = "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
                                    49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783";

        let dk = derive_iv(b"passwd", b"salt", 1, 64).unwrap();

        assert_eq!(hex::encode(dk.as_slice()), EXPECTED_HEX);
    }
}
