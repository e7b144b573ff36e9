use crate::{
    api::{
        error::ApiError,
        response::{with_total_count, ApiResponse},
    },
    classify,
    explorer::{self, ExplorerClient},
    export,
    networks::NETWORKS,
    state::AppState,
    validation::validate_evm_address,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize)]
pub struct TransactionsQuery {
    pub network: String,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/networks", get(list_networks))
        .route("/addresses/{address}/transactions", get(get_transactions))
        .route(
            "/addresses/{address}/transactions/export",
            get(export_transactions),
        )
        .route(
            "/addresses/{address}/token-balances",
            get(get_token_balances),
        )
        .route("/addresses/{address}/nft-tokens", get(get_nfts))
        .route("/addresses/{address}/activity", get(get_activity))
        .route("/addresses/{address}/stats", get(get_stats))
        .with_state(app_state)
}

fn find_client<'a>(
    state: &'a AppState,
    network_id: &str,
) -> Result<&'a ExplorerClient, ApiError> {
    state
        .clients
        .iter()
        .find(|c| c.network().id == network_id)
        .ok_or_else(|| ApiError::UnknownNetwork(network_id.to_string()))
}

async fn list_networks() -> Response {
    ApiResponse { data: NETWORKS }.into_response()
}

async fn get_transactions(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
    Query(params): Query<TransactionsQuery>,
) -> Result<Response, ApiError> {
    validate_evm_address(&address)?;
    let client = find_client(&state, &params.network)?;

    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(state.config.default_page_size);

    info!(
        "Fetching transactions for {} on {} (page {}, size {})",
        address, params.network, page, page_size
    );

    let (transactions, total_count) = client.fetch_transactions(&address, page, page_size).await;

    Ok(with_total_count(transactions, total_count))
}

async fn export_transactions(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
    Query(params): Query<TransactionsQuery>,
) -> Result<Response, ApiError> {
    validate_evm_address(&address)?;
    let client = find_client(&state, &params.network)?;

    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(state.config.default_page_size);

    let (transactions, _) = client.fetch_transactions(&address, page, page_size).await;
    let csv = export::generate_transaction_csv(&transactions, client.network());

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        csv,
    )
        .into_response())
}

async fn get_token_balances(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Response, ApiError> {
    validate_evm_address(&address)?;

    if let Some(cached) = state.cache.balances.get(&address).await {
        info!("Balance cache hit for {}", address);
        return Ok(ApiResponse { data: cached }.into_response());
    }

    let grouped = explorer::balances_by_network(&state.clients, &address).await;
    state
        .cache
        .balances
        .insert(address.clone(), grouped.clone())
        .await;

    Ok(ApiResponse { data: grouped }.into_response())
}

async fn get_nfts(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Response, ApiError> {
    validate_evm_address(&address)?;

    let nfts = explorer::aggregate::fetch_all_nfts(&state.clients, &address).await;

    Ok(ApiResponse { data: nfts }.into_response())
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Response, ApiError> {
    validate_evm_address(&address)?;

    if let Some(cached) = state.cache.activity.get(&address).await {
        info!("Activity cache hit for {}", address);
        return Ok(ApiResponse { data: cached }.into_response());
    }

    let active: Vec<String> = explorer::probe_all(&state.clients, &address)
        .await
        .into_iter()
        .map(String::from)
        .collect();
    state
        .cache
        .activity
        .insert(address.clone(), active.clone())
        .await;

    Ok(ApiResponse { data: active }.into_response())
}

async fn get_stats(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
    Query(params): Query<TransactionsQuery>,
) -> Result<Response, ApiError> {
    validate_evm_address(&address)?;
    let client = find_client(&state, &params.network)?;

    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(state.config.default_page_size);

    let (transactions, _) = client.fetch_transactions(&address, page, page_size).await;
    let stats = classify::stats(&transactions);

    Ok(ApiResponse { data: stats }.into_response())
}
