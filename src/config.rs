/// Application configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Solana RPC endpoint
    pub rpc_url: String,

    /// URL of the token metadata registry document
    pub registry_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.devnet.solana.com".to_string(),
            registry_url:
                "https://raw.githubusercontent.com/SUNIDHI-JAIN125/MetaData-Token/main/metadata.json"
                    .to_string(),
        }
    }
}

impl Config {
    /// Creates a configuration from environment variables
    pub fn from_env() -> Self {
        use std::env;

        Self {
            rpc_url: env::var("SOLANA_RPC_URL")
                .unwrap_or_else(|_| "https://api.devnet.solana.com".to_string()),
            registry_url: env::var("TOKEN_REGISTRY_URL").unwrap_or_else(|_| {
                "https://raw.githubusercontent.com/SUNIDHI-JAIN125/MetaData-Token/main/metadata.json"
                    .to_string()
            }),
        }
    }
}
