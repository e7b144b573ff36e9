// Manual integration check: probe every network for an address, fetch a
// page of transactions from each active one, and print the classification.
//
//   cargo run --bin probe_address -- 0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045

use std::sync::Arc;
use tracing::{info, warn, Level};
use wallet_activity_service::{
    classify, config::Config, explorer, state::AppState, validation::validate_evm_address,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let address = match std::env::args().nth(1) {
        Some(addr) => addr,
        None => {
            warn!("Usage: probe_address <evm-address>");
            return Ok(());
        }
    };

    validate_evm_address(&address)?;

    let config = Config::from_env();
    let state = Arc::new(AppState::new(config));

    info!("Probing {} networks for {}", state.clients.len(), address);
    let active = explorer::probe_all(&state.clients, &address).await;
    info!("Active networks: {:?}", active);

    for client in &state.clients {
        if !active.contains(&client.network().id) {
            continue;
        }

        let (transactions, total) = client.fetch_transactions(&address, 1, 10).await;
        info!(
            "{}: {} of {} transactions",
            client.network().name,
            transactions.len(),
            total
        );

        for tx in &transactions {
            let analysis = classify::classify(tx);
            info!(
                "  {} {:?} risk={:?} gas={:?}",
                tx.hash, analysis.kind, analysis.risk_level, analysis.gas_usage_level
            );
        }
    }

    let balances = explorer::balances_by_network(&state.clients, &address).await;
    for group in &balances {
        info!("Balances on {}: {} tokens", group.network_id, group.balances.len());
    }

    Ok(())
}
