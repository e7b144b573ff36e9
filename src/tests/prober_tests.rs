//! Scatter-gather semantics of the activity prober.
//!
//! Note on the known gaps: a failed probe reads as "no activity" (the
//! clients fail open), and there is no overall gather deadline; only the
//! per-request client timeout bounds a stalled backend.

use crate::explorer::prober::{gather_active, probe_all};
use crate::state::AppState;
use crate::config::Config;
use std::time::Duration;

#[tokio::test]
async fn gather_keeps_exactly_the_true_ids() {
    let probe = |active: bool| async move { active };

    let result = gather_active(vec![
        ("ethereum", probe(true)),
        ("polygon", probe(false)),
        ("base", probe(true)),
    ])
    .await;

    assert_eq!(result, vec!["ethereum", "base"]);
}

#[tokio::test]
async fn gather_is_independent_of_completion_order() {
    // The slowest probe answers last but its id still comes out in input
    // order, and the false probe finishing first changes nothing.
    let probe = |active: bool, delay_ms: u64| async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        active
    };

    let result = gather_active(vec![
        ("ethereum", probe(true, 50)),
        ("polygon", probe(false, 1)),
        ("base", probe(true, 20)),
    ])
    .await;

    assert_eq!(result, vec!["ethereum", "base"]);
}

#[tokio::test]
async fn gather_with_all_false_is_empty() {
    let probe = |active: bool| async move { active };
    let result = gather_active(vec![("ethereum", probe(false)), ("gnosis", probe(false))]).await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn invalid_address_short_circuits_without_probing() {
    let state = AppState::new(Config::from_env());
    // No network access happens here; the validator gates the fan-out.
    let active = probe_all(&state.clients, "not-an-address").await;
    assert!(active.is_empty());
}
