mod key_material;
mod metadata;
mod snapshot;
mod token_holding;
mod wallet_error;

pub use key_material::KeyMaterial;
pub use metadata::{SharedMetadata, TokenMetadataRecord, UNKNOWN};
pub use snapshot::SnapshotState;
pub use token_holding::TokenHolding;
pub use wallet_error::WalletError;
