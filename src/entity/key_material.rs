use serde::{Deserialize, Serialize};

/// A freshly generated keypair. Held only in process memory and fully
/// replaced by the next generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyMaterial {
    pub address: String,        // base58-encoded public key
    pub secret_key_hex: String, // 64 keypair bytes, lowercase hex
}
