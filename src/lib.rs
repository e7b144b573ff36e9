pub mod api;
pub mod cache;
pub mod classify;
pub mod config;
pub mod explorer;
pub mod export;
pub mod models;
pub mod networks;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod tests;

pub use api::error::ApiError;
pub use api::response::ApiResponse;
pub use api::route::{create_router, TransactionsQuery};
pub use classify::{classify, TransactionType};
pub use explorer::ExplorerClient;
pub use models::Transaction;
pub use networks::{find_network, Network, NETWORKS};
pub use validation::{is_valid_evm_address, validate_evm_address};
