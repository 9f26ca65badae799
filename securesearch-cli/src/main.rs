//! `SecureSearch` CLI tool for key generation and deterministic encryption.

#![warn(clippy::pedantic, clippy::nursery)]

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use secrecy::{ExposeSecret, SecretString};
use securesearch::params::{CIPHER, PBKDF2_ITERATIONS};
use securesearch::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "securesearch")]
#[command(about = "Deterministic one-way encryption for searchable values", long_about = None)]
struct Cli {
    /// CBC cipher, in OpenSSL naming
    #[arg(long, global = true, env = "SECURESEARCH_CIPHER", default_value = CIPHER)]
    cipher: String,

    /// PBKDF2 iteration count (may only be raised)
    #[arg(long, global = true, default_value_t = PBKDF2_ITERATIONS)]
    iterations: u32,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, env = "SECURESEARCH_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new hex encoded key
    Keygen,
    /// Encrypt values, one ciphertext per output line
    Encrypt {
        /// Hex encoded key
        #[arg(long, env = "SECURESEARCH_KEY", hide_env_values = true)]
        key: String,
        /// Values to encrypt; read from stdin, one per line, when omitted
        values: Vec<String>,
    },
    /// Print the active parameters as JSON
    Params,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let cipher: Cipher = cli.cipher.parse()?;
    let encryptor = DeterministicEncryptor::new()
        .with_cipher(cipher)
        .with_iterations(cli.iterations)?;

    match cli.command {
        Commands::Keygen => keygen(&encryptor),
        Commands::Encrypt { key, values } => {
            encrypt_values(&encryptor, SecretString::new(key), &values)
        }
        Commands::Params => {
            let json = serde_json::to_string_pretty(&encryptor.parameters())
                .context("failed to serialize parameters")?;
            println!("{json}");
            Ok(())
        }
    }
}

fn init_logging(log_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries keys and ciphertexts; logs go to stderr
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("failed to initialise tracing subscriber")?;

    Ok(())
}

fn keygen(encryptor: &DeterministicEncryptor) -> Result<()> {
    let key = encryptor.generate_key().context("key generation failed")?;
    println!("{}", key.expose_secret());
    Ok(())
}

fn encrypt_values(
    encryptor: &DeterministicEncryptor,
    key: SecretString,
    values: &[String],
) -> Result<()> {
    let key = decode_key(key.expose_secret())?;
    let params = encryptor.parameters();
    if key.expose_secret().len() != params.key_len() {
        bail!(
            "{} requires a {}-byte key ({} hex characters)",
            params.cipher(),
            params.key_len(),
            params.key_len() * 2
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count = 0usize;

    let mut emit = |value: &str| -> Result<()> {
        let ciphertext = encryptor
            .encrypt_str(value, key.expose_secret())
            .with_context(|| format!("failed to encrypt value #{}", count + 1))?;
        writeln!(out, "{ciphertext}").context("failed to write output")?;
        count += 1;
        Ok(())
    };

    if values.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            emit(&line)?;
        }
    } else {
        for value in values {
            emit(value)?;
        }
    }
    drop(emit);

    tracing::info!(count, cipher = %params.cipher(), "encrypted values");
    Ok(())
}
