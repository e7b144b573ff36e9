//! Static registry of supported networks and their explorer endpoints.
//!
//! Built once, read-only for the process lifetime. Identity is `id`.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Network {
    pub id: &'static str,
    pub name: &'static str,
    /// Native gas-paying asset symbol (ETH, MATIC, xDAI, ...).
    pub symbol: &'static str,
    /// Blockscout v2 API base, no trailing slash.
    pub api_url: &'static str,
    /// Public explorer base used to build per-transaction links.
    pub explorer_url: &'static str,
}

pub const NETWORKS: &[Network] = &[
    Network {
        id: "ethereum",
        name: "Ethereum",
        symbol: "ETH",
        api_url: "https://eth.blockscout.com/api/v2",
        explorer_url: "https://etherscan.io",
    },
    Network {
        id: "polygon",
        name: "Polygon",
        symbol: "MATIC",
        api_url: "https://polygon.blockscout.com/api/v2",
        explorer_url: "https://polygonscan.com",
    },
    Network {
        id: "optimism",
        name: "Optimism",
        symbol: "ETH",
        api_url: "https://optimism.blockscout.com/api/v2",
        explorer_url: "https://optimistic.etherscan.io",
    },
    Network {
        id: "base",
        name: "Base",
        symbol: "ETH",
        api_url: "https://base.blockscout.com/api/v2",
        explorer_url: "https://basescan.org",
    },
    Network {
        id: "zksync",
        name: "zkSync Era",
        symbol: "ETH",
        api_url: "https://zksync.blockscout.com/api/v2",
        explorer_url: "https://explorer.zksync.io",
    },
    Network {
        id: "arbitrum",
        name: "Arbitrum One",
        symbol: "ETH",
        api_url: "https://arbitrum.blockscout.com/api/v2",
        explorer_url: "https://arbiscan.io",
    },
    Network {
        id: "gnosis",
        name: "Gnosis Chain",
        symbol: "xDAI",
        api_url: "https://gnosis.blockscout.com/api/v2",
        explorer_url: "https://gnosisscan.io",
    },
    Network {
        id: "scroll",
        name: "Scroll",
        symbol: "ETH",
        api_url: "https://scroll.blockscout.com/api/v2",
        explorer_url: "https://scrollscan.com",
    },
];

/// Look up a network by its stable id.
pub fn find_network(id: &str) -> Option<&'static Network> {
    NETWORKS.iter().find(|n| n.id == id)
}

impl Network {
    /// Explorer link for a transaction hash on this network.
    pub fn transaction_url(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url, hash)
    }
}
