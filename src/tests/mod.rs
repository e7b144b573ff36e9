pub mod export_tests;
pub mod normalize_tests;
pub mod prober_tests;
pub mod validation_tests;

use crate::models::Transaction;

/// A minimal canonical transaction for classifier and export tests.
pub fn sample_transaction(method: &str, value: &str, to: Option<&str>) -> Transaction {
    Transaction {
        hash: "0xabc123".to_string(),
        from: "0x1111111111111111111111111111111111111111".to_string(),
        to: to.map(String::from),
        value: value.to_string(),
        timestamp: "2024-01-15T12:30:45.000000Z".to_string(),
        block_number: 19_000_000,
        gas_used: "21000".to_string(),
        status: true,
        method: method.to_string(),
        token_transfers: Vec::new(),
        internal_transactions: Vec::new(),
        explorer_url: "https://etherscan.io/tx/0xabc123".to_string(),
    }
}
