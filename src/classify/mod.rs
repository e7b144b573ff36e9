//! Heuristic transaction classification.
//!
//! `classify` is a deterministic, total, pure function of one transaction:
//! no I/O, no shared state, and it always yields exactly one result.

mod table;

pub use table::{metadata, Level, TransactionMetadata, TransactionType, TRANSACTION_METADATA};

use crate::models::Transaction;
use serde::Serialize;
use std::collections::BTreeMap;

/// True for decimal strings like "1", "0.5"; false for "0", "0.000", "".
fn is_positive_decimal(value: &str) -> bool {
    value.bytes().any(|b| (b'1'..=b'9').contains(&b))
}

/// Classify one transaction. Priority is fixed:
///
/// 1. no recipient -> contract deployment;
/// 2. empty method with positive native value -> native transfer;
/// 3. first table entry whose pattern is "*" or a case-insensitive
///    substring of the method name, in declaration order;
/// 4. otherwise unknown.
///
/// Declaration order is the sole tie-break for overlapping patterns
/// ("mint" resolves to liquidity provision, not token/NFT minting), and
/// the "*" contract-call entry shadows everything declared after it in
/// step 3. Both quirks are inherited behavior and kept as-is.
pub fn classify(tx: &Transaction) -> &'static TransactionMetadata {
    if tx.is_contract_creation() {
        return metadata(TransactionType::ContractDeployment);
    }

    if tx.method.is_empty() && is_positive_decimal(&tx.value) {
        return metadata(TransactionType::NativeTransfer);
    }

    let method = tx.method.to_lowercase();

    for entry in &TRANSACTION_METADATA {
        if entry
            .common_methods
            .iter()
            .any(|pattern| *pattern == "*" || method.contains(&pattern.to_lowercase()))
        {
            return entry;
        }
    }

    metadata(TransactionType::Unknown)
}

pub fn risk_level(tx: &Transaction) -> Level {
    classify(tx).risk_level
}

pub fn gas_usage_level(tx: &Transaction) -> Level {
    classify(tx).gas_usage_level
}

/// Partition transactions into per-type buckets. Every enumeration member
/// is present in the result, empty or not.
pub fn categorize(transactions: Vec<Transaction>) -> BTreeMap<TransactionType, Vec<Transaction>> {
    let mut buckets: BTreeMap<TransactionType, Vec<Transaction>> = TransactionType::ALL
        .iter()
        .map(|kind| (*kind, Vec::new()))
        .collect();

    for tx in transactions {
        let kind = classify(&tx).kind;
        buckets.entry(kind).or_default().push(tx);
    }

    buckets
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct LevelCounts {
    #[serde(rename = "LOW")]
    pub low: usize,
    #[serde(rename = "MEDIUM")]
    pub medium: usize,
    #[serde(rename = "HIGH")]
    pub high: usize,
}

impl LevelCounts {
    fn bump(&mut self, level: Level) {
        match level {
            Level::Low => self.low += 1,
            Level::Medium => self.medium += 1,
            Level::High => self.high += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionStats {
    pub total_transactions: usize,
    pub risk_levels: LevelCounts,
    pub gas_usage_levels: LevelCounts,
    /// Counts for types actually seen in the input.
    pub type_distribution: BTreeMap<TransactionType, usize>,
}

/// Aggregate classification counts. Risk, gas, and type counts each
/// partition the input, so each sums to `total_transactions`.
pub fn stats(transactions: &[Transaction]) -> TransactionStats {
    let mut stats = TransactionStats {
        total_transactions: transactions.len(),
        risk_levels: LevelCounts::default(),
        gas_usage_levels: LevelCounts::default(),
        type_distribution: BTreeMap::new(),
    };

    for tx in transactions {
        let analysis = classify(tx);
        stats.risk_levels.bump(analysis.risk_level);
        stats.gas_usage_levels.bump(analysis.gas_usage_level);
        *stats.type_distribution.entry(analysis.kind).or_insert(0) += 1;
    }

    stats
}
