use serde::{Deserialize, Serialize};

use crate::entity::TokenMetadataRecord;

/// One SPL token holding, merged with the session metadata record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenHolding {
    pub mint: String,   // token mint address
    pub amount: String, // human-readable amount as reported by the node
    pub symbol: String,
    pub name: String,
    pub image: String,
}

impl TokenHolding {
    pub fn new(mint: String, amount: String, metadata: &TokenMetadataRecord) -> Self {
        Self {
            mint,
            amount,
            symbol: metadata.symbol.clone(),
            name: metadata.name.clone(),
            image: metadata.image.clone(),
        }
    }
}
