use crate::export::generate_transaction_csv;
use crate::models::{TokenInfo, TokenTransfer};
use crate::networks::find_network;
use crate::tests::sample_transaction;

fn ethereum() -> &'static crate::networks::Network {
    find_network("ethereum").unwrap()
}

#[test]
fn header_row_has_fixed_column_order() {
    let csv = generate_transaction_csv(&[], ethereum());
    assert_eq!(
        csv,
        "Hash,Network,Method,From,To,Value,Token Transfers,Status,Gas Used,Block Number,Timestamp,Explorer URL"
    );
}

#[test]
fn row_renders_every_column() {
    let tx = sample_transaction("transfer", "1.5", Some("0xbbb"));
    let csv = generate_transaction_csv(&[tx], ethereum());
    let row = csv.lines().nth(1).unwrap();

    assert!(row.starts_with("\"0xabc123\",\"Ethereum\",\"transfer\""));
    assert!(row.contains("\"1.5 ETH\""));
    assert!(row.contains("\"Success\""));
    assert!(row.contains("\"21000\""));
    assert!(row.contains("\"19000000\""));
    assert!(row.contains("\"2024-01-15 12:30:45\""));
}

#[test]
fn token_transfer_cell_joins_transfers() {
    let mut tx = sample_transaction("transfer", "0", Some("0xbbb"));
    tx.token_transfers = vec![
        TokenTransfer {
            token: TokenInfo {
                address: "0xtoken".to_string(),
                symbol: "ABC".to_string(),
                name: "Abc".to_string(),
                decimals: 18,
            },
            from: "0xaaa".to_string(),
            to: "0xbbb".to_string(),
            value: "3.5".to_string(),
        },
        TokenTransfer {
            token: TokenInfo {
                address: "0xtoken2".to_string(),
                symbol: "XYZ".to_string(),
                name: "Xyz".to_string(),
                decimals: 6,
            },
            from: "0xccc".to_string(),
            to: "0xddd".to_string(),
            value: "10".to_string(),
        },
    ];

    let csv = generate_transaction_csv(&[tx], ethereum());
    assert!(csv.contains("\"3.5 ABC from 0xaaa to 0xbbb; 10 XYZ from 0xccc to 0xddd\""));
}

#[test]
fn internal_double_quotes_are_doubled() {
    let mut tx = sample_transaction("", "0", Some("0xbbb"));
    tx.hash = "0x\"quoted\"".to_string();

    let csv = generate_transaction_csv(&[tx], ethereum());
    assert!(csv.contains("\"0x\"\"quoted\"\"\""));
}

#[test]
fn contract_creation_and_failure_render_as_text() {
    let mut tx = sample_transaction("", "0", None);
    tx.status = false;

    let csv = generate_transaction_csv(&[tx], ethereum());
    let row = csv.lines().nth(1).unwrap();
    assert!(row.contains("\"Contract Creation\""));
    assert!(row.contains("\"Failed\""));
}

#[test]
fn unparsable_timestamp_passes_through() {
    let mut tx = sample_transaction("", "0", Some("0xbbb"));
    tx.timestamp = "not-a-timestamp".to_string();

    let csv = generate_transaction_csv(&[tx], ethereum());
    assert!(csv.contains("\"not-a-timestamp\""));
}
