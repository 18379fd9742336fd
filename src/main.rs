//! Solana Wallet Console - Main executable
//!
//! Interactive console application that lets the user generate a fresh
//! Solana keypair, then query the configured RPC endpoint for the native
//! balance and SPL token holdings of that address.
use dotenv::dotenv;
use log::{error, info};
use solana_wallet_console::view::console;
use solana_wallet_console::{
    create_solana_client, Config, ConsoleNotifier, RegistryClient, SharedMetadata,
    SnapshotAggregator, SolanaRpcGateway,
};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!(
        "Starting Solana Wallet Console v{}",
        solana_wallet_console::VERSION
    );

    let config = Config::from_env();

    // Initialize Solana client
    info!("Connecting to Solana network at {}...", config.rpc_url);
    let solana_client = create_solana_client(&config.rpc_url)?;

    let gateway = Arc::new(SolanaRpcGateway::new(solana_client));
    let notifier = Arc::new(ConsoleNotifier);

    // The metadata record is written once by the background fetch and
    // read-only afterwards.
    let metadata: SharedMetadata = Arc::new(Mutex::new(None));

    let registry = RegistryClient::new(&config.registry_url);
    let metadata_slot = metadata.clone();
    tokio::spawn(async move {
        match registry.fetch_metadata().await {
            Ok(record) => {
                *metadata_slot.lock().unwrap() = Some(record);
            }
            Err(e) => {
                // Token rows fall back to "Unknown" metadata.
                error!("Failed to fetch token metadata: {}", e);
            }
        }
    });

    let aggregator = Arc::new(SnapshotAggregator::new(gateway, notifier, metadata));

    console::print_welcome();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "create" => {
                aggregator.create_wallet();
                console::render_wallet(&aggregator.snapshot());
            }
            "wallet" => {
                console::render_wallet(&aggregator.snapshot());
            }
            "balance" => {
                // Fire-and-forget: the prompt stays responsive while the
                // request is in flight.
                let aggregator = aggregator.clone();
                tokio::spawn(async move {
                    aggregator.fetch_balance().await;
                    console::render_balance(&aggregator.snapshot());
                });
            }
            "tokens" => {
                let aggregator = aggregator.clone();
                tokio::spawn(async move {
                    aggregator.fetch_tokens().await;
                    console::render_tokens(&aggregator.snapshot());
                });
            }
            "help" => console::print_welcome(),
            "quit" | "exit" => break,
            "" => {}
            other => println!("Unknown command: {} (try 'help')", other),
        }
    }

    info!("Shutting down");
    Ok(())
}
