//! CBC encryption with PKCS#7 padding.

use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};

use crate::error::Error;
use crate::params::Cipher;

/// Encrypts `plaintext` with `cipher` under `key` and `iv`.
///
/// Keys are used as given. A key that does not match the cipher's key size
/// is an error; it is never padded or truncated.
///
/// # Errors
///
/// Returns `Error::Encryption` if the key or IV length does not match the
/// cipher.
pub fn cbc_encrypt(
    cipher: Cipher,
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, Error> {
    match cipher {
        Cipher::Aes128Cbc => encrypt_with::<aes::Aes128>(cipher, key, iv, plaintext),
        Cipher::Aes192Cbc => encrypt_with::<aes::Aes192>(cipher, key, iv, plaintext),
        Cipher::Aes256Cbc => encrypt_with::<aes::Aes256>(cipher, key, iv, plaintext),
    }
}

fn encrypt_with<C>(cipher: Cipher, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, Error>
where
    C: aes::cipher::BlockEncryptMut + aes::cipher::BlockCipher + aes::cipher::KeyInit,
{
    if key.len() != cipher.key_len() {
        return Err(Error::Encryption(format!(
            "{cipher} requires a {}-byte key, got {} bytes",
            cipher.key_len(),
            key.len()
        )));
    }

    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv).map_err(|_| {
        Error::Encryption(format!("{cipher} rejected a {}-byte IV", iv.len()))
    })?;

    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}
