//! Defensive decoding of upstream payloads and exact decimal scaling.

use crate::explorer::models::{
    decode_items, extract_nft, extract_token_balance, extract_transaction, format_units,
    is_positive_amount, RawNft, RawPage, RawTokenBalance, RawTransaction,
};
use crate::networks::find_network;

fn ethereum() -> &'static crate::networks::Network {
    find_network("ethereum").unwrap()
}

#[test]
fn format_units_known_vectors() {
    // Exact integer arithmetic, never floating point: 10^18 wei is one
    // whole unit, not 0.999999999999999999.
    assert_eq!(format_units("1000000000000000000", 18), "1");
    assert_eq!(format_units("500", 2), "5");
    assert_eq!(format_units("1", 18), "0.000000000000000001");
    assert_eq!(format_units("123456789", 4), "12345.6789");
    assert_eq!(format_units("1500000000000000000", 18), "1.5");
    assert_eq!(format_units("42", 0), "42");
}

#[test]
fn format_units_precision_beyond_f64() {
    // 20 significant digits; an f64 round-trip would corrupt the tail.
    assert_eq!(
        format_units("12345678901234567891", 18),
        "12.345678901234567891"
    );
}

#[test]
fn format_units_defaults_to_zero_on_garbage() {
    assert_eq!(format_units("", 18), "0");
    assert_eq!(format_units("abc", 18), "0");
    assert_eq!(format_units("-5", 18), "0");
    assert_eq!(format_units("0", 18), "0");
    assert_eq!(format_units("000", 18), "0");
}

#[test]
fn positive_amount_filter() {
    assert!(is_positive_amount("1"));
    assert!(is_positive_amount("0500"));
    assert!(!is_positive_amount("0"));
    assert!(!is_positive_amount("000"));
    assert!(!is_positive_amount(""));
    assert!(!is_positive_amount("-3"));
}

#[test]
fn extract_full_transaction_record() {
    let raw: RawTransaction = serde_json::from_value(serde_json::json!({
        "hash": "0xdeadbeef",
        "from": { "hash": "0xaaa" },
        "to": { "hash": "0xbbb" },
        "value": "2500000000000000000",
        "timestamp": "2024-01-15T12:30:45.000000Z",
        "block_number": 19000000,
        "gas_used": "53214",
        "status": "ok",
        "method": "transfer",
        "token_transfers": [{
            "token": { "address": "0xtoken", "name": "Test", "symbol": "TST", "decimals": "6" },
            "from": { "hash": "0xaaa" },
            "to": { "hash": "0xccc" },
            "total": { "value": "1500000" }
        }]
    }))
    .unwrap();

    let tx = extract_transaction(&raw, ethereum());

    assert_eq!(tx.hash, "0xdeadbeef");
    assert_eq!(tx.from, "0xaaa");
    assert_eq!(tx.to.as_deref(), Some("0xbbb"));
    assert_eq!(tx.value, "2.5");
    assert_eq!(tx.block_number, 19000000);
    assert_eq!(tx.gas_used, "53214");
    assert!(tx.status);
    assert_eq!(tx.explorer_url, "https://etherscan.io/tx/0xdeadbeef");

    assert_eq!(tx.token_transfers.len(), 1);
    let transfer = &tx.token_transfers[0];
    assert_eq!(transfer.token.decimals, 6);
    assert_eq!(transfer.value, "1.5");
    assert_eq!(transfer.to, "0xccc");
}

#[test]
fn missing_recipient_means_contract_creation() {
    let raw: RawTransaction = serde_json::from_value(serde_json::json!({
        "hash": "0x1", "from": { "hash": "0xaaa" }, "status": "ok"
    }))
    .unwrap();

    let tx = extract_transaction(&raw, ethereum());
    assert!(tx.to.is_none());
    assert!(tx.is_contract_creation());
}

#[test]
fn empty_record_falls_back_to_field_defaults() {
    let raw: RawTransaction = serde_json::from_value(serde_json::json!({})).unwrap();
    let tx = extract_transaction(&raw, ethereum());

    assert_eq!(tx.hash, "");
    assert_eq!(tx.from, "");
    assert!(tx.to.is_none());
    assert_eq!(tx.value, "0");
    assert_eq!(tx.block_number, 0);
    assert_eq!(tx.gas_used, "0");
    assert!(!tx.status, "anything but the literal \"ok\" is a failure");
    assert_eq!(tx.method, "");
    assert!(tx.token_transfers.is_empty());
}

#[test]
fn page_without_items_array_is_empty() {
    let page: RawPage = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(page.items().is_empty());

    let page: RawPage =
        serde_json::from_value(serde_json::json!({ "items": "not-an-array" })).unwrap();
    assert!(page.items().is_empty());
}

#[test]
fn malformed_items_are_skipped_not_fatal() {
    let page: RawPage = serde_json::from_value(serde_json::json!({
        "items": [
            { "hash": "0x1" },
            { "hash": 42, "from": "not-an-object" },
            { "hash": "0x2" }
        ]
    }))
    .unwrap();

    let decoded: Vec<RawTransaction> = decode_items(page.items(), "transaction");
    assert_eq!(decoded.len(), 2);
}

#[test]
fn zero_balances_are_filtered_out() {
    let raw: RawTokenBalance = serde_json::from_value(serde_json::json!({
        "value": "0",
        "token": { "address": "0xtoken", "symbol": "TST", "decimals": "18" }
    }))
    .unwrap();

    assert!(extract_token_balance(&raw, ethereum()).is_none());
}

#[test]
fn balance_without_token_metadata_defaults_to_native() {
    let raw: RawTokenBalance =
        serde_json::from_value(serde_json::json!({ "value": "3000000000000000000" })).unwrap();

    let balance = extract_token_balance(&raw, ethereum()).unwrap();
    assert_eq!(balance.token.address, "native");
    assert_eq!(balance.token.name, "Ethereum");
    assert_eq!(balance.token.symbol, "ETH");
    assert_eq!(balance.token.decimals, 18);
    assert_eq!(balance.token.kind, "native");
    assert_eq!(balance.value, "3");
    assert_eq!(balance.network_id, "ethereum");
}

#[test]
fn unparsable_decimals_default_to_eighteen() {
    let raw: RawTokenBalance = serde_json::from_value(serde_json::json!({
        "value": "1000000000000000000",
        "token": { "address": "0xtoken", "symbol": "TST", "decimals": "wat" }
    }))
    .unwrap();

    let balance = extract_token_balance(&raw, ethereum()).unwrap();
    assert_eq!(balance.token.decimals, 18);
    assert_eq!(balance.value, "1");
}

#[test]
fn nft_without_token_id_is_dropped() {
    let raw: RawNft =
        serde_json::from_value(serde_json::json!({ "name": "Orphan" })).unwrap();
    assert!(extract_nft(&raw, ethereum()).is_none());
}

#[test]
fn nft_display_defaults() {
    let raw: RawNft = serde_json::from_value(serde_json::json!({
        "token_id": "42",
        "token_address": "0xcollection"
    }))
    .unwrap();

    let nft = extract_nft(&raw, ethereum()).unwrap();
    assert_eq!(nft.token_id, "42");
    assert_eq!(nft.name, "#42");
    assert_eq!(nft.description, "");
    assert_eq!(nft.image_url, "");
    assert_eq!(nft.collection.name, "Unknown Collection");
    assert_eq!(nft.collection.address, "0xcollection");
    assert_eq!(nft.network, "Ethereum");
}

#[test]
fn numeric_token_id_is_accepted() {
    let raw: RawNft = serde_json::from_value(serde_json::json!({ "token_id": 7 })).unwrap();
    let nft = extract_nft(&raw, ethereum()).unwrap();
    assert_eq!(nft.token_id, "7");
    assert_eq!(nft.name, "#7");
}
