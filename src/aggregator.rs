use log::error;
use std::sync::{Arc, Mutex};

use crate::entity::{SharedMetadata, SnapshotState, TokenHolding, TokenMetadataRecord};
use crate::solana::gateway::RpcGateway;
use crate::solana::utils::lamports_to_sol;
use crate::solana::wallet::generate_key_material;
use crate::view::Notifier;

/// Assembles a consistent view of one account from independently failing
/// sources: the RPC gateway for balance and token accounts, and the session
/// metadata record for display enrichment.
///
/// All failures are handled here. Gateway errors turn into a single transient
/// notification and leave the previously fetched values in place; querying
/// before a wallet exists is a silent no-op.
pub struct SnapshotAggregator {
    gateway: Arc<dyn RpcGateway>,
    notifier: Arc<dyn Notifier>,
    metadata: SharedMetadata,
    state: Mutex<SnapshotState>,
}

impl SnapshotAggregator {
    pub fn new(
        gateway: Arc<dyn RpcGateway>,
        notifier: Arc<dyn Notifier>,
        metadata: SharedMetadata,
    ) -> Self {
        Self {
            gateway,
            notifier,
            metadata,
            state: Mutex::new(SnapshotState::default()),
        }
    }

    /// Current state, cloned for rendering.
    pub fn snapshot(&self) -> SnapshotState {
        self.state.lock().unwrap().clone()
    }

    /// Generate fresh key material, replacing the current wallet.
    pub fn create_wallet(&self) {
        self.state.lock().unwrap().loading = true;

        let result = generate_key_material();

        let mut state = self.state.lock().unwrap();
        state.loading = false;

        match result {
            Ok(key_material) => {
                // A new wallet invalidates everything fetched for the old one.
                state.wallet = Some(key_material);
                state.balance = None;
                state.tokens.clear();
                state.error = None;
            }
            Err(e) => {
                error!("Wallet generation failed: {}", e);
                self.notifier.notify_failure("Failed to create wallet");
            }
        }
    }

    /// Fetch the native balance of the current address.
    pub async fn fetch_balance(&self) {
        let address = match self.current_address() {
            Some(address) => address,
            None => return,
        };

        match self.gateway.get_balance(&address).await {
            Ok(lamports) => {
                let mut state = self.state.lock().unwrap();
                state.balance = Some(lamports_to_sol(lamports));
                state.error = None;
            }
            Err(e) => {
                error!("Balance fetch failed for {}: {}", address, e);
                self.notifier.notify_failure("Failed to fetch balance");
            }
        }
    }

    /// Fetch all SPL token accounts of the current address and merge them
    /// with the session metadata record.
    pub async fn fetch_tokens(&self) {
        let address = match self.current_address() {
            Some(address) => address,
            None => return,
        };

        match self.gateway.get_token_accounts(&address).await {
            Ok(accounts) => {
                let metadata = self.current_metadata();
                let mut state = self.state.lock().unwrap();

                if accounts.is_empty() {
                    state.tokens.clear();
                    state.error = Some("No tokens found".to_string());
                } else {
                    // Node ordering is preserved.
                    state.tokens = accounts
                        .into_iter()
                        .map(|account| {
                            TokenHolding::new(account.mint, account.ui_amount_string, &metadata)
                        })
                        .collect();
                    state.error = None;
                }
            }
            Err(e) => {
                error!("Token fetch failed for {}: {}", address, e);
                self.notifier.notify_failure("Failed to fetch tokens");
            }
        }
    }

    /// Address captured at the start of an operation; queries before the
    /// first generation see none.
    fn current_address(&self) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .wallet
            .as_ref()
            .map(|wallet| wallet.address.clone())
    }

    fn current_metadata(&self) -> TokenMetadataRecord {
        self.metadata
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(TokenMetadataRecord::unknown)
    }
}
