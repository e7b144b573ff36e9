//! CSV serialization boundary for transaction history.

use crate::models::Transaction;
use crate::networks::Network;
use chrono::{DateTime, Utc};

const HEADERS: [&str; 12] = [
    "Hash",
    "Network",
    "Method",
    "From",
    "To",
    "Value",
    "Token Transfers",
    "Status",
    "Gas Used",
    "Block Number",
    "Timestamp",
    "Explorer URL",
];

/// RFC-4180 style: every field double-quoted, internal quotes doubled.
fn escape(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Timestamp as `yyyy-MM-dd HH:mm:ss` UTC; unparsable input passes
/// through untouched.
fn format_timestamp(raw: &str) -> String {
    match raw.parse::<DateTime<Utc>>() {
        Ok(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// One CSV document for a page of transactions on one network, fixed
/// column order, header row first.
pub fn generate_transaction_csv(transactions: &[Transaction], network: &Network) -> String {
    let mut lines = Vec::with_capacity(transactions.len() + 1);
    lines.push(HEADERS.join(","));

    for tx in transactions {
        let token_transfers = tx
            .token_transfers
            .iter()
            .map(|t| {
                format!(
                    "{} {} from {} to {}",
                    t.value, t.token.symbol, t.from, t.to
                )
            })
            .collect::<Vec<_>>()
            .join("; ");

        let fields = [
            tx.hash.clone(),
            network.name.to_string(),
            tx.method.clone(),
            tx.from.clone(),
            tx.to.clone().unwrap_or_else(|| "Contract Creation".to_string()),
            format!("{} {}", tx.value, network.symbol),
            token_transfers,
            if tx.status { "Success" } else { "Failed" }.to_string(),
            tx.gas_used.clone(),
            tx.block_number.to_string(),
            format_timestamp(&tx.timestamp),
            tx.explorer_url.clone(),
        ];

        lines.push(
            fields
                .iter()
                .map(|f| escape(f))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}
