// Configuration: server listen address, upstream request timeout, cache
// sizing, and default pagination, all from environment variables with
// per-field defaults.

use dotenv::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Upper bound on one explorer API request so a stalled backend
    /// cannot hold a scatter-gather open indefinitely.
    pub request_timeout_secs: u64,
    pub cache_ttl: Duration,
    pub cache_max_capacity: u64,
    pub default_page_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .map(|v| v.parse().unwrap_or(15))
            .unwrap_or(15);
        let cache_ttl = env::var("CACHE_TTL")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(60));
        let cache_max_capacity = env::var("CACHE_MAX_CAPACITY")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .unwrap_or(1000);
        let default_page_size = env::var("DEFAULT_PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        Self {
            server_host,
            server_port,
            request_timeout_secs,
            cache_ttl,
            cache_max_capacity,
            default_page_size,
        }
    }
}
