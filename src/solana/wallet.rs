use anyhow::Result;
use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::{rng, RngCore};
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use std::str::FromStr;

use crate::entity::{KeyMaterial, WalletError};

/// Generate fresh key material for a new wallet.
pub fn generate_key_material() -> Result<KeyMaterial> {
    // 1) Create 32 bytes of random entropy as the Ed25519 seed.
    let mut seed = [0u8; 32];
    rng().fill_bytes(&mut seed);

    // 2) Derive the Ed25519 key from the seed.
    let signing_key = SigningKey::try_from(&seed[..])
        .map_err(|e| WalletError::WalletCreationError(e.to_string()))?;
    let verifying_key = VerifyingKey::from(&signing_key);

    // 3) Combine (32 bytes private + 32 bytes public) into one 64-byte array.
    let mut ed25519_bytes = [0u8; 64];
    ed25519_bytes[..32].copy_from_slice(&signing_key.to_bytes());
    ed25519_bytes[32..].copy_from_slice(&verifying_key.to_bytes());

    // 4) Create Solana Keypair from these 64 bytes.
    let keypair = Keypair::from_bytes(&ed25519_bytes)
        .map_err(|e| WalletError::WalletCreationError(e.to_string()))?;

    // 5) Base58 address for display, lowercase hex for the secret.
    Ok(KeyMaterial {
        address: keypair.pubkey().to_string(),
        secret_key_hex: hex::encode(keypair.to_bytes()),
    })
}

/// Convert base58 string to Solana `Pubkey`.
pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address).map_err(|_| WalletError::InvalidAddress.into())
}
