//! Concurrent activity probe across all registered networks.

use crate::explorer::client::ExplorerClient;
use crate::validation::is_valid_evm_address;
use futures::future::join_all;
use std::future::Future;
use tracing::info;

/// Launch every probe, await every probe, and keep the ids whose probe
/// returned true. Scatter-gather with no early return and no cancellation:
/// a slow or failing network never cancels the others. Output follows
/// input order regardless of completion order.
pub async fn gather_active<Fut>(probes: Vec<(&'static str, Fut)>) -> Vec<&'static str>
where
    Fut: Future<Output = bool>,
{
    let launched = probes
        .into_iter()
        .map(|(id, probe)| async move { probe.await.then_some(id) });

    join_all(launched).await.into_iter().flatten().collect()
}

/// Probe every network for any activity by the address. A failed probe is
/// indistinguishable from no activity (the clients fail open).
pub async fn probe_all(clients: &[ExplorerClient], address: &str) -> Vec<&'static str> {
    if !is_valid_evm_address(address) {
        return Vec::new();
    }

    let probes = clients
        .iter()
        .map(|client| (client.network().id, client.probe_activity(address)))
        .collect();

    let active = gather_active(probes).await;
    info!(
        "Address {} active on {} of {} networks",
        address,
        active.len(),
        clients.len()
    );
    active
}
