//! Grouping of already-normalized per-network outputs. Pure joins over
//! client results; the only I/O is delegating to the clients themselves.

use crate::explorer::client::ExplorerClient;
use crate::models::{Nft, TokenBalance};
use futures::future::join_all;
use serde::Serialize;

/// Token balances for one network, in the order the client returned them.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkBalances {
    pub network_id: String,
    pub balances: Vec<TokenBalance>,
}

/// Group balances by network id, preserving first-seen network order.
pub fn group_by_network(balances: Vec<TokenBalance>) -> Vec<NetworkBalances> {
    let mut groups: Vec<NetworkBalances> = Vec::new();

    for balance in balances {
        match groups
            .iter_mut()
            .find(|g| g.network_id == balance.network_id)
        {
            Some(group) => group.balances.push(balance),
            None => groups.push(NetworkBalances {
                network_id: balance.network_id.clone(),
                balances: vec![balance],
            }),
        }
    }

    groups
}

/// Fetch balances from every network concurrently, flattened in registry
/// order. Failed networks contribute nothing (clients fail open).
pub async fn fetch_all_balances(clients: &[ExplorerClient], address: &str) -> Vec<TokenBalance> {
    let fetches = clients
        .iter()
        .map(|client| client.fetch_token_balances(address));

    join_all(fetches).await.into_iter().flatten().collect()
}

/// Balances from every network, grouped by network id.
pub async fn balances_by_network(
    clients: &[ExplorerClient],
    address: &str,
) -> Vec<NetworkBalances> {
    group_by_network(fetch_all_balances(clients, address).await)
}

/// NFT holdings from every network concurrently, flattened in registry order.
pub async fn fetch_all_nfts(clients: &[ExplorerClient], address: &str) -> Vec<Nft> {
    let fetches = clients.iter().map(|client| client.fetch_nfts(address));

    join_all(fetches).await.into_iter().flatten().collect()
}
