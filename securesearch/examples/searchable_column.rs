//! Example: storing social security numbers so they can be searched but not read.
//!
//! Run with `cargo run --release -p securesearch --example searchable_column`.

use secrecy::ExposeSecret;
use securesearch::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("SecureSearch Deterministic Encryption Example");
    println!("=============================================\n");

    // In production the key comes from a secret store, never from source code
    let encoded = generate_key()?;
    let key = decode_key(encoded.expose_secret())?;
    let encryptor = DeterministicEncryptor::new();
    let params = encryptor.parameters();
    println!(
        "✓ Encryptor ready: {}, {} x PBKDF2-{}\n",
        params.cipher(),
        params.iterations(),
        params.hash()
    );

    // Example 1: Deterministic property
    println!("Example 1: Deterministic Encryption");
    println!("-----------------------------------");
    let ssn = "1234010170";
    let ct1 = encryptor.encrypt_str(ssn, key.expose_secret())?;
    let ct2 = encryptor.encrypt_str(ssn, key.expose_secret())?;
    println!("Ciphertext 1: {ct1}");
    println!("Ciphertext 2: {ct2}");
    println!("Deterministic: {}", if ct1 == ct2 { "✓ YES" } else { "✗ NO" });
    println!();

    // Example 2: Equality search
    println!("Example 2: Searching an Encrypted Column");
    println!("----------------------------------------");
    let records = ["1234010170", "4321150385", "1234010170", "9876311299"];
    let column = records
        .iter()
        .map(|ssn| encryptor.encrypt_str(ssn, key.expose_secret()))
        .collect::<Result<Vec<_>, _>>()?;

    let needle = encryptor.encrypt_str("1234010170", key.expose_secret())?;
    let hits: Vec<usize> = column
        .iter()
        .enumerate()
        .filter(|(_, ct)| **ct == needle)
        .map(|(i, _)| i)
        .collect();
    println!("Found {} match(es) at rows {hits:?}", hits.len());
    println!("→ The column never held a plaintext value\n");

    // Example 3: Canonical input
    println!("Example 3: Canonicalize Before Encrypting");
    println!("-----------------------------------------");
    let padded = encryptor.encrypt_str("0042", key.expose_secret())?;
    let bare = encryptor.encrypt_str("42", key.expose_secret())?;
    println!("\"0042\" and \"42\" match: {}", if padded == bare { "yes" } else { "no" });
    println!("→ Pick one byte representation per value and stick to it\n");

    println!("⚠️  Security Considerations:");
    println!("   1. Deterministic encryption reveals which rows hold equal values");
    println!("   2. Use it only for unique values that need exact-match lookup");
    println!("   3. Nothing here decrypts; keep the original elsewhere if you need it");

    Ok(())
}
