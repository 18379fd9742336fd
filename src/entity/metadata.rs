use serde::Deserialize;
use std::sync::{Arc, Mutex};

/// Sentinel shown when the registry document is unavailable.
pub const UNKNOWN: &str = "Unknown";

/// Display metadata from the token registry. One record is fetched per
/// session and applied uniformly to every holding.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenMetadataRecord {
    pub symbol: String,
    pub name: String,
    pub image: String,
}

impl TokenMetadataRecord {
    /// Fallback record used while no registry document has arrived.
    pub fn unknown() -> Self {
        Self {
            symbol: UNKNOWN.to_string(),
            name: UNKNOWN.to_string(),
            image: UNKNOWN.to_string(),
        }
    }
}

/// Slot shared between the startup registry fetch and the aggregator.
/// Written at most once, read-only afterwards.
pub type SharedMetadata = Arc<Mutex<Option<TokenMetadataRecord>>>;
