//! Property tests for determinism and input sensitivity.
//!
//! Each case runs full 64000-round PBKDF2 derivations, so the case count is
//! kept small.

use proptest::prelude::*;
use securesearch::encrypt;

fn config() -> ProptestConfig {
    ProptestConfig::with_cases(8)
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn encryption_is_deterministic(
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
        key in prop::array::uniform32(any::<u8>()),
    ) {
        let ct1 = encrypt(&plaintext, &key).unwrap();
        let ct2 = encrypt(&plaintext, &key).unwrap();
        prop_assert_eq!(ct1, ct2);
    }

    #[test]
    fn distinct_keys_give_distinct_ciphertexts(
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
        key1 in prop::array::uniform32(any::<u8>()),
        key2 in prop::array::uniform32(any::<u8>()),
    ) {
        prop_assume!(key1 != key2);
        prop_assert_ne!(encrypt(&plaintext, &key1).unwrap(), encrypt(&plaintext, &key2).unwrap());
    }

    #[test]
    fn distinct_plaintexts_give_distinct_ciphertexts(
        plaintext1 in prop::collection::vec(any::<u8>(), 0..64),
        plaintext2 in prop::collection::vec(any::<u8>(), 0..64),
        key in prop::array::uniform32(any::<u8>()),
    ) {
        prop_assume!(plaintext1 != plaintext2);
        prop_assert_ne!(encrypt(&plaintext1, &key).unwrap(), encrypt(&plaintext2, &key).unwrap());
    }

    #[test]
    fn ciphertext_is_padded_base64(
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
        key in prop::array::uniform32(any::<u8>()),
    ) {
        use base64::{engine::general_purpose::STANDARD, Engine as _};

        let raw = STANDARD.decode(encrypt(&plaintext, &key).unwrap()).unwrap();
        prop_assert_eq!(raw.len(), (plaintext.len() / 16 + 1) * 16);
    }
}
