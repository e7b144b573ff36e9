pub mod aggregate;
pub mod client;
pub mod models;
pub mod prober;

pub use aggregate::{balances_by_network, group_by_network, NetworkBalances};
pub use client::ExplorerClient;
pub use prober::probe_all;
