use serde::{Deserialize, Serialize};

use crate::entity::{KeyMaterial, TokenHolding};

/// The aggregate view of the current account.
///
/// Balance and token holdings are only meaningful while `wallet` is present;
/// generating a new wallet drops all of them atomically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotState {
    pub wallet: Option<KeyMaterial>,
    pub loading: bool,
    pub balance: Option<f64>,
    pub tokens: Vec<TokenHolding>,
    pub error: Option<String>,
}
