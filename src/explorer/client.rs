use crate::config::Config;
use crate::explorer::models::{
    decode_items, extract_nft, extract_token_balance, extract_transaction, RawNft, RawNumber,
    RawPage, RawTokenBalance, RawTransaction,
};
use crate::models::{Nft, TokenBalance, Transaction};
use crate::networks::Network;
use crate::validation::is_valid_evm_address;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for one network's Blockscout API.
///
/// Every public operation is fail-open: transport failures, non-success
/// statuses, and malformed payloads degrade to the operation's empty value
/// instead of propagating. One network's outage must not abort a
/// multi-network aggregation; partial results beat total failure.
pub struct ExplorerClient {
    http: reqwest::Client,
    network: &'static Network,
}

impl ExplorerClient {
    pub fn new(config: &Config, network: &'static Network) -> Self {
        let timeout = Duration::from_secs(config.request_timeout_secs);

        info!(
            "Initializing explorer client for {} ({})",
            network.name, network.api_url
        );

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { http, network }
    }

    pub fn network(&self) -> &'static Network {
        self.network
    }

    /// One page of the address's transaction history (sent and received),
    /// plus the upstream total count. Invalid addresses short-circuit to
    /// an empty page without touching the network.
    pub async fn fetch_transactions(
        &self,
        address: &str,
        page: u32,
        page_size: u32,
    ) -> (Vec<Transaction>, u64) {
        if !is_valid_evm_address(address) {
            return (Vec::new(), 0);
        }

        let url = format!(
            "{}/addresses/{}/transactions?filter=to%7Cfrom&page={}&offset={}",
            self.network.api_url, address, page, page_size
        );

        let raw_page = match self.get_page(&url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("{}: transaction fetch failed: {}", self.network.name, e);
                return (Vec::new(), 0);
            }
        };

        let transactions: Vec<Transaction> =
            decode_items::<RawTransaction>(raw_page.items(), "transaction")
                .iter()
                .map(|raw| extract_transaction(raw, self.network))
                .collect();

        let total_count = raw_page
            .total_count
            .as_ref()
            .and_then(RawNumber::as_u64)
            .unwrap_or(transactions.len() as u64);

        debug!(
            "{}: {} transactions (total {})",
            self.network.name,
            transactions.len(),
            total_count
        );

        (transactions, total_count)
    }

    /// All strictly-positive token balances for the address.
    pub async fn fetch_token_balances(&self, address: &str) -> Vec<TokenBalance> {
        if !is_valid_evm_address(address) {
            return Vec::new();
        }

        let url = format!(
            "{}/addresses/{}/token-balances",
            self.network.api_url, address
        );

        let raw_page = match self.get_page(&url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("{}: balance fetch failed: {}", self.network.name, e);
                return Vec::new();
            }
        };

        decode_items::<RawTokenBalance>(raw_page.items(), "balance")
            .iter()
            .filter_map(|raw| extract_token_balance(raw, self.network))
            .collect()
    }

    /// NFT holdings for the address; records without a token id are dropped.
    pub async fn fetch_nfts(&self, address: &str) -> Vec<Nft> {
        if !is_valid_evm_address(address) {
            return Vec::new();
        }

        let url = format!("{}/addresses/{}/nft-tokens", self.network.api_url, address);

        let raw_page = match self.get_page(&url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("{}: NFT fetch failed: {}", self.network.name, e);
                return Vec::new();
            }
        };

        decode_items::<RawNft>(raw_page.items(), "NFT")
            .iter()
            .filter_map(|raw| extract_nft(raw, self.network))
            .collect()
    }

    /// Minimal page-size-1 query; true iff the address has any transaction
    /// on this network. A failed probe reads as no activity.
    pub async fn probe_activity(&self, address: &str) -> bool {
        if !is_valid_evm_address(address) {
            return false;
        }

        let url = format!(
            "{}/addresses/{}/transactions?filter=to%7Cfrom&page=1&offset=1",
            self.network.api_url, address
        );

        match self.get_page(&url).await {
            Ok(page) => !page.items().is_empty(),
            Err(e) => {
                debug!("{}: activity probe failed: {}", self.network.name, e);
                false
            }
        }
    }

    async fn get_page(&self, url: &str) -> Result<RawPage, ClientError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        Ok(response.json::<RawPage>().await?)
    }
}
