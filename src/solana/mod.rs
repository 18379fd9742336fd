// Re-export everything from submodules
pub mod client;
pub mod gateway;
pub mod utils;
pub mod wallet;

// Re-export commonly used items
pub use client::create_solana_client;
pub use gateway::{ParsedTokenAccount, RpcGateway, SolanaRpcGateway};
pub use utils::lamports_to_sol;
pub use wallet::{generate_key_material, parse_pubkey};
