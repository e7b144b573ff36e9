// Canonical models produced by the explorer clients and consumed by the
// classifier, the HTTP API, and the CSV export boundary. Immutable once
// constructed; all decimal values are already human-scale strings.

use serde::{Deserialize, Serialize};

/// One normalized transaction from a network's explorer API.
///
/// `to` is `None` for contract deployments (the upstream record carries no
/// recipient). `value` is the native amount as an exact decimal string,
/// already divided by 10^18.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub from: String,
    pub to: Option<String>,
    pub value: String,
    pub timestamp: String,
    pub block_number: u64,
    pub gas_used: String,
    pub status: bool,
    pub method: String,
    pub token_transfers: Vec<TokenTransfer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub internal_transactions: Vec<InternalTransaction>,
    pub explorer_url: String,
}

impl Transaction {
    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenTransfer {
    pub token: TokenInfo,
    pub from: String,
    pub to: String,
    /// Exact decimal string, raw amount divided by 10^decimals.
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalTransaction {
    pub from: String,
    pub to: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A strictly-positive token (or native) balance on one network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBalance {
    pub token: BalanceToken,
    /// Exact decimal string, raw amount divided by 10^decimals.
    pub value: String,
    pub network_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceToken {
    /// Token contract address, or the literal "native" for the base asset.
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nft {
    pub token_id: String,
    pub name: String,
    pub description: String,
    /// May be empty; the display layer filters imageless entries.
    pub image_url: String,
    pub collection: NftCollection,
    /// Display name of the network the NFT was found on.
    pub network: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NftCollection {
    pub name: String,
    pub address: String,
}
