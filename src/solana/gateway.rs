use anyhow::{anyhow, Result};
use async_trait::async_trait;
use solana_account_decoder::parse_token::UiTokenAccount;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_client::rpc_response::RpcKeyedAccount;
use std::sync::Arc;

use crate::entity::WalletError;
use crate::solana::wallet::parse_pubkey;

/// A parsed SPL token account, reduced to the fields the snapshot needs.
#[derive(Debug, Clone)]
pub struct ParsedTokenAccount {
    pub mint: String,
    pub ui_amount_string: String,
}

/// The two account queries behind the snapshot aggregator. The node's
/// ordering of token accounts is passed through untouched.
#[async_trait]
pub trait RpcGateway: Send + Sync {
    /// Raw lamport balance of the address.
    async fn get_balance(&self, address: &str) -> Result<u64>;

    /// All SPL token accounts owned by the address.
    async fn get_token_accounts(&self, address: &str) -> Result<Vec<ParsedTokenAccount>>;
}

pub struct SolanaRpcGateway {
    client: Arc<RpcClient>,
}

impl SolanaRpcGateway {
    pub fn new(client: Arc<RpcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RpcGateway for SolanaRpcGateway {
    async fn get_balance(&self, address: &str) -> Result<u64> {
        let pubkey = parse_pubkey(address)?;

        self.client
            .get_balance(&pubkey)
            .await
            .map_err(|e| WalletError::GatewayFailure(e.to_string()).into())
    }

    async fn get_token_accounts(&self, address: &str) -> Result<Vec<ParsedTokenAccount>> {
        let pubkey = parse_pubkey(address)?;

        // 1) The list of token accounts is returned as keyed UiAccounts.
        let keyed_accounts: Vec<RpcKeyedAccount> = self
            .client
            .get_token_accounts_by_owner(&pubkey, TokenAccountsFilter::ProgramId(spl_token::ID))
            .await
            .map_err(|e| WalletError::GatewayFailure(e.to_string()))?;

        let mut accounts = Vec::new();

        // 2) Resolve each into a parsed token account with mint and amount.
        for keyed_account in keyed_accounts {
            let account_pubkey = parse_pubkey(&keyed_account.pubkey)?;

            let token_account: UiTokenAccount = self
                .client
                .get_token_account(&account_pubkey)
                .await
                .map_err(|e| WalletError::GatewayFailure(e.to_string()))?
                .ok_or_else(|| anyhow!("Token account {} not parsable", keyed_account.pubkey))?;

            accounts.push(ParsedTokenAccount {
                mint: token_account.mint,
                ui_amount_string: token_account.token_amount.ui_amount_string,
            });
        }

        Ok(accounts)
    }
}
