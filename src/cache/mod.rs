//! Response caches backed by Moka.
//!
//! Probe results and balance snapshots are the expensive queries (one
//! upstream round-trip per network), so both are cached per address with
//! the TTL and capacity from config.

use crate::config::Config;
use crate::explorer::NetworkBalances;
use moka::future::Cache;

#[derive(Clone)]
pub struct AppCache {
    /// address -> ids of networks with any activity
    pub activity: Cache<String, Vec<String>>,
    /// address -> balances grouped by network
    pub balances: Cache<String, Vec<NetworkBalances>>,
}

pub fn init_cache(config: &Config) -> AppCache {
    AppCache {
        activity: Cache::builder()
            .time_to_live(config.cache_ttl)
            .max_capacity(config.cache_max_capacity)
            .build(),
        balances: Cache::builder()
            .time_to_live(config.cache_ttl)
            .max_capacity(config.cache_max_capacity)
            .build(),
    }
}
