#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Token registry unavailable: {0}")]
    RegistryUnavailable(String),

    #[error("Solana gateway error: {0}")]
    GatewayFailure(String),

    #[error("Invalid address")]
    InvalidAddress,

    #[error("Failed to create wallet: {0}")]
    WalletCreationError(String),
}
