//! Raw Blockscout v2 payload shapes and their normalization into the
//! canonical models.
//!
//! Every field of the upstream schema is optional here and carries a named
//! default, because the payloads are untrusted and drift between networks:
//! hash/from/to/value/method default to empty or "0", block_number and
//! gas_used default to 0/"0", token decimals default to 18, status is only
//! a success when it equals the literal "ok".

use crate::models::{
    BalanceToken, Nft, NftCollection, TokenBalance, TokenInfo, TokenTransfer, Transaction,
};
use crate::networks::Network;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Decimal precision of the native asset on every supported network.
pub const NATIVE_DECIMALS: u32 = 18;

/// Fallback precision when upstream token metadata omits or mangles
/// the decimals field.
pub const DEFAULT_TOKEN_DECIMALS: u32 = 18;

/// Top-level list envelope: `items` plus an optional `total_count`.
/// A missing or non-array `items` means an empty result, not an error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPage {
    pub items: Option<Value>,
    pub total_count: Option<RawNumber>,
}

impl RawPage {
    pub fn items(&self) -> &[Value] {
        self.items
            .as_ref()
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Some numeric fields arrive as JSON numbers on one network and as quoted
/// strings on another; both are accepted. Amounts are kept as strings
/// because base-unit values overflow u64.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Int(u64),
    Text(String),
}

impl RawNumber {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            RawNumber::Int(n) => Some(*n),
            RawNumber::Text(s) => s.trim().parse().ok(),
        }
    }

    /// The raw base-unit integer string, digits only.
    pub fn as_amount(&self) -> Option<String> {
        match self {
            RawNumber::Int(n) => Some(n.to_string()),
            RawNumber::Text(s) => {
                let s = s.trim();
                (!s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())).then(|| s.to_string())
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawParty {
    pub hash: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawTransaction {
    pub hash: Option<String>,
    pub from: Option<RawParty>,
    /// Absent for contract deployments.
    pub to: Option<RawParty>,
    pub value: Option<RawNumber>,
    pub timestamp: Option<String>,
    pub block_number: Option<RawNumber>,
    pub gas_used: Option<RawNumber>,
    pub status: Option<String>,
    pub method: Option<String>,
    pub token_transfers: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawTokenTransfer {
    pub token: Option<RawToken>,
    pub from: Option<RawParty>,
    pub to: Option<RawParty>,
    pub total: Option<RawTotal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawTotal {
    pub value: Option<RawNumber>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawToken {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<RawNumber>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawTokenBalance {
    pub value: Option<RawNumber>,
    pub token: Option<RawToken>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawNft {
    pub token_id: Option<RawNumber>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub collection: Option<RawCollection>,
    pub token_address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawCollection {
    pub name: Option<String>,
}

fn party_hash(party: &Option<RawParty>) -> String {
    party
        .as_ref()
        .and_then(|p| p.hash.clone())
        .unwrap_or_default()
}

fn token_decimals(token: &Option<RawToken>) -> u32 {
    token
        .as_ref()
        .and_then(|t| t.decimals.as_ref())
        .and_then(|d| d.as_u64())
        .and_then(|d| u32::try_from(d).ok())
        .unwrap_or(DEFAULT_TOKEN_DECIMALS)
}

fn raw_amount(value: &Option<RawNumber>) -> String {
    value
        .as_ref()
        .and_then(RawNumber::as_amount)
        .unwrap_or_else(|| "0".to_string())
}

/// Exact conversion of a base-unit integer string to a decimal string,
/// dividing by 10^decimals by decimal-point placement. Never goes through
/// floating point: 18-decimal amounts routinely exceed the 15-16
/// significant digits an f64 can hold. Unparsable input yields "0".
pub fn format_units(raw: &str, decimals: u32) -> String {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return "0".to_string();
    }

    let digits = raw.trim_start_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }

    let d = decimals as usize;
    let (int_part, frac_part) = if digits.len() > d {
        let (i, f) = digits.split_at(digits.len() - d);
        (i.to_string(), f.to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", digits, width = d))
    };

    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part
    } else {
        format!("{}.{}", int_part, frac_part)
    }
}

/// True when the base-unit amount string holds any non-zero digit.
pub fn is_positive_amount(raw: &str) -> bool {
    let raw = raw.trim();
    !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && raw.bytes().any(|b| b != b'0')
}

/// Map one upstream transaction record onto the canonical model. Total:
/// every malformed or missing field falls back to its documented default.
pub fn extract_transaction(raw: &RawTransaction, network: &Network) -> Transaction {
    let hash = raw.hash.clone().unwrap_or_default();

    let token_transfers = raw
        .token_transfers
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|item| {
            let transfer: RawTokenTransfer =
                serde_json::from_value(item.clone()).unwrap_or_default();
            extract_token_transfer(&transfer)
        })
        .collect();

    Transaction {
        explorer_url: network.transaction_url(&hash),
        from: party_hash(&raw.from),
        to: raw.to.as_ref().and_then(|p| p.hash.clone()),
        value: format_units(&raw_amount(&raw.value), NATIVE_DECIMALS),
        timestamp: raw.timestamp.clone().unwrap_or_default(),
        block_number: raw
            .block_number
            .as_ref()
            .and_then(RawNumber::as_u64)
            .unwrap_or(0),
        gas_used: raw
            .gas_used
            .as_ref()
            .and_then(RawNumber::as_u64)
            .unwrap_or(0)
            .to_string(),
        status: raw.status.as_deref() == Some("ok"),
        method: raw.method.clone().unwrap_or_default(),
        token_transfers,
        internal_transactions: Vec::new(),
        hash,
    }
}

fn extract_token_transfer(raw: &RawTokenTransfer) -> TokenTransfer {
    let decimals = token_decimals(&raw.token);
    let amount = raw
        .total
        .as_ref()
        .map(|t| raw_amount(&t.value))
        .unwrap_or_else(|| "0".to_string());
    let token = raw.token.as_ref();

    TokenTransfer {
        token: TokenInfo {
            address: token.and_then(|t| t.address.clone()).unwrap_or_default(),
            symbol: token.and_then(|t| t.symbol.clone()).unwrap_or_default(),
            name: token.and_then(|t| t.name.clone()).unwrap_or_default(),
            decimals,
        },
        from: party_hash(&raw.from),
        to: party_hash(&raw.to),
        value: format_units(&amount, decimals),
    }
}

/// Map one balance record; returns None for zero, negative, or absent
/// amounts so callers only ever see strictly-positive balances.
pub fn extract_token_balance(raw: &RawTokenBalance, network: &Network) -> Option<TokenBalance> {
    let amount = raw_amount(&raw.value);
    if !is_positive_amount(&amount) {
        return None;
    }

    let decimals = token_decimals(&raw.token);
    let token = raw.token.as_ref();

    Some(TokenBalance {
        token: BalanceToken {
            address: token
                .and_then(|t| t.address.clone())
                .unwrap_or_else(|| "native".to_string()),
            name: token
                .and_then(|t| t.name.clone())
                .unwrap_or_else(|| network.name.to_string()),
            symbol: token
                .and_then(|t| t.symbol.clone())
                .unwrap_or_else(|| network.symbol.to_string()),
            decimals,
            kind: token
                .and_then(|t| t.kind.clone())
                .unwrap_or_else(|| "native".to_string()),
        },
        value: format_units(&amount, decimals),
        network_id: network.id.to_string(),
    })
}

/// Map one NFT record; entries without a token id are dropped.
pub fn extract_nft(raw: &RawNft, network: &Network) -> Option<Nft> {
    let token_id = match &raw.token_id {
        Some(RawNumber::Int(n)) => n.to_string(),
        Some(RawNumber::Text(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => return None,
    };

    Some(Nft {
        name: raw
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("#{}", token_id)),
        description: raw.description.clone().unwrap_or_default(),
        image_url: raw.image_url.clone().unwrap_or_default(),
        collection: NftCollection {
            name: raw
                .collection
                .as_ref()
                .and_then(|c| c.name.clone())
                .unwrap_or_else(|| "Unknown Collection".to_string()),
            address: raw.token_address.clone().unwrap_or_default(),
        },
        network: network.name.to_string(),
        token_id,
    })
}

/// Decode each element of an `items` array, skipping anything that does
/// not even loosely fit the expected shape.
pub fn decode_items<T: for<'de> Deserialize<'de>>(items: &[Value], what: &str) -> Vec<T> {
    items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!("Skipping malformed {} item: {}", what, e);
                None
            }
        })
        .collect()
}
