use anyhow::Result;
use log::info;
use reqwest::Client;

use crate::entity::{TokenMetadataRecord, WalletError};

/// Client for the remote token metadata registry. The document is fetched
/// exactly once per session, from a task spawned at startup.
pub struct RegistryClient {
    http_client: Client,
    url: String,
}

impl RegistryClient {
    pub fn new(url: &str) -> Self {
        Self {
            http_client: Client::new(),
            url: url.to_string(),
        }
    }

    /// One-shot fetch of the token metadata document.
    pub async fn fetch_metadata(&self) -> Result<TokenMetadataRecord> {
        info!("Fetching token metadata from {}", self.url);

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| WalletError::RegistryUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WalletError::RegistryUnavailable(format!(
                "registry returned HTTP {}",
                response.status()
            ))
            .into());
        }

        let record: TokenMetadataRecord = response
            .json()
            .await
            .map_err(|e| WalletError::RegistryUnavailable(e.to_string()))?;

        info!("Token metadata loaded: {} ({})", record.name, record.symbol);

        Ok(record)
    }
}
