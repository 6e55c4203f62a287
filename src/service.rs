//! HTTP Service
//!
//! Every endpoint answers `200 OK` with a JSON body; failures are reported in
//! the body (`"ok": false`), never through the status code.

use std::future::Future;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServiceConfig;
use crate::fetch::{FetchBackend, HttpFetcher};
use crate::options::Options;
use crate::result::ExtractionResult;
use crate::suggest::{self, IngredientsRequest, SuggestAiResponse, SuggestResponse};
use crate::url_utils::url_param;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    /// Page source for `/api/extract`.
    pub fetcher: Arc<dyn FetchBackend>,
    /// Extraction thresholds and fetch settings.
    pub options: Arc<Options>,
    /// Whether `/api/suggest-ai` answers with suggestions or `{"disabled": true}`.
    pub enable_ai: bool,
}

impl AppState {
    /// State backed by a real HTTP fetcher, built from the service config.
    pub fn from_config(config: &ServiceConfig) -> anyhow::Result<Self> {
        let options = config.extraction_options();
        let fetcher = HttpFetcher::new(&options)?;
        Ok(Self {
            fetcher: Arc::new(fetcher),
            options: Arc::new(options),
            enable_ai: config.enable_ai,
        })
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/extract", get(extract))
        .route("/api/suggest-ai", post(suggest_ai))
        .route("/api/suggest", post(suggest))
        .route("/healthz", get(|| async { "ok" }))
        .with_state(state)
}

/// Serve the router on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, enable_ai = state.enable_ai, "listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn extract(State(state): State<AppState>, RawQuery(query): RawQuery) -> Json<ExtractionResult> {
    let url = url_param(query.as_deref());
    let result = crate::extract_url(state.fetcher.as_ref(), &url, &state.options).await;
    info!(url = %url, ok = result.ok, error = result.error.as_deref(), "extract");
    Json(result)
}

async fn suggest_ai(State(state): State<AppState>, body: Bytes) -> Json<SuggestAiResponse> {
    let request = IngredientsRequest::from_json_body(&body);
    let today = chrono::Utc::now().date_naive();
    Json(suggest::suggest_ai(&request, state.enable_ai, today))
}

async fn suggest(body: Bytes) -> Json<SuggestResponse> {
    let request = IngredientsRequest::from_json_body(&body);
    let ingredients = suggest::normalize_ingredients(&request.ingredients);
    Json(SuggestResponse {
        ok: true,
        recipes: suggest::fallback_suggest(&ingredients),
    })
}
