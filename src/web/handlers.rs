//! HTTP request handlers

use super::state::AppState;
use crate::simulate::{InjectedResult, SimulationRequest};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Query parameters for the search simulation tool. Input names are the
/// invocation contract of the hosting orchestration layer.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query (required)
    pub query: Option<String>,
    /// Agent objective, reported in logs only
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub injected_title: String,
    #[serde(default)]
    pub injected_url: String,
    #[serde(default)]
    pub injected_description: String,
    #[serde(default = "default_injected_rank")]
    pub injected_rank: i64,
}

fn default_injected_rank() -> i64 {
    1
}

/// Query parameters for the metadata scrape tool
#[derive(Debug, Deserialize)]
pub struct ScrapeParams {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Search simulation handler
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let query = match params.query {
        Some(q) if !q.trim().is_empty() => q,
        _ => return bad_request("missing query parameter"),
    };

    let request_id = Uuid::new_v4();
    info!(%request_id, query = %query, "search simulation request");

    let injected = if params.injected_title.is_empty() && params.injected_url.is_empty() {
        None
    } else {
        Some(InjectedResult::new(
            params.injected_title,
            params.injected_url,
            params.injected_description,
            params.injected_rank,
        ))
    };

    let request = SimulationRequest {
        query,
        objective: params.objective,
        injected,
    };

    let had_injection = request
        .injected
        .as_ref()
        .map(|i| i.is_actionable())
        .unwrap_or(false);

    let result_set = state.simulator.run(&request).await;

    if state.settings.general.enable_metrics {
        if result_set.error.is_some() {
            state
                .metrics
                .record_provider_error(state.simulator.provider_name());
        } else {
            state.metrics.record_simulation(
                state.simulator.provider_name(),
                result_set.search_time,
                had_injection,
            );
        }
    }

    Json(result_set).into_response()
}

/// Metadata scrape handler
pub async fn scrape(State(state): State<AppState>, Query(params): Query<ScrapeParams>) -> Response {
    let url = match params.url {
        Some(u) if !u.trim().is_empty() => u,
        _ => return bad_request("missing url parameter"),
    };

    let request_id = Uuid::new_v4();
    info!(%request_id, url = %url, "metadata scrape request");

    let metadata = state.scraper.scrape(&url).await;

    if state.settings.general.enable_metrics {
        state.metrics.record_scrape(metadata.is_success());
    }

    Json(metadata).into_response()
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    instance: String,
    version: &'static str,
}

/// Liveness probe
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        instance: state.instance_name().to_string(),
        version: crate::VERSION,
    })
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    uptime_seconds: i64,
    started_at: chrono::DateTime<chrono::Utc>,
    provider: String,
    total_simulations: u64,
    injected_simulations: u64,
    provider_errors: u64,
    avg_search_time_ms: Option<u64>,
    total_scrapes: u64,
    scrape_errors: u64,
    cached_pages: u64,
}

/// Metrics snapshot
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    let provider = state.simulator.provider_name().to_string();
    let metrics = &state.metrics;

    Json(StatsResponse {
        uptime_seconds: metrics.uptime_seconds(),
        started_at: metrics.started_at(),
        provider: provider.clone(),
        total_simulations: metrics.total_simulations(),
        injected_simulations: metrics.injected_simulations(),
        provider_errors: metrics.provider_errors(&provider),
        avg_search_time_ms: metrics.avg_latency(&provider),
        total_scrapes: metrics.total_scrapes(),
        scrape_errors: metrics.scrape_errors(),
        cached_pages: state.scraper.cached_pages(),
    })
}
