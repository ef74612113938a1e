//! HTTP surface of `rtermd`.
//!
//! Four routes, all JSON:
//!
//! * `POST /execute` runs one command line and returns its output
//! * `GET /autocomplete?prefix=` matches registry names, never runs anything
//! * `GET /stats` samples host CPU, memory and network counters
//! * `GET /health` is a liveness probe
//!
//! Interpreter and stats work is blocking and runs on the blocking pool.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use rterm_core::Registry;
use rterm_hal::{StatsProbe, SystemStats};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::session::Sessions;

/// Shared state for HTTP handlers.
pub struct AppState {
    pub sessions: Sessions,
    pub registry: Arc<Registry>,
    pub stats: StatsProbe,
}

impl AppState {
    pub fn new(sessions: Sessions) -> Self {
        let registry = sessions.registry();
        Self {
            sessions,
            registry,
            stats: StatsProbe::new(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        Ok(Self::new(Sessions::from_config(config)?))
    }
}

#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    pub command: String,
    #[serde(default)]
    pub session: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ExecuteResponse {
    pub output: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteParams {
    #[serde(default)]
    pub prefix: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AutocompleteResponse {
    pub suggestions: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Seconds since the Unix epoch
    pub timestamp: f64,
}

pub fn router(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/execute", post(execute_handler))
        .route("/autocomplete", get(autocomplete_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// CORS for the configured origins, any method and header. Origins that
/// are not valid header values are skipped.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Bind `config.bind` and serve until `shutdown` resolves.
pub async fn serve(
    config: &ServerConfig,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr: SocketAddr = config.bind;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;
    serve_on(listener, router(state, &config.allowed_origins), shutdown).await
}

/// Serve `app` on an already bound listener.
pub async fn serve_on(
    listener: tokio::net::TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    info!(addr = %listener.local_addr()?, "rtermd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {e}"))
}

pub async fn execute_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExecuteRequest>,
) -> Json<ExecuteResponse> {
    debug!(command = %req.command, session = ?req.session, "execute request");
    let worker = Arc::clone(&state);
    let ExecuteRequest { command, session } = req;
    let output = match tokio::task::spawn_blocking(move || worker.sessions.execute(session.as_deref(), &command)).await {
        Ok(output) => output,
        Err(err) => {
            error!(error = %err, "execute task failed");
            format!("Error: {err}")
        }
    };
    Json(ExecuteResponse { output })
}

pub async fn autocomplete_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AutocompleteParams>,
) -> Json<AutocompleteResponse> {
    let prefix = params.prefix.unwrap_or_default();
    Json(AutocompleteResponse {
        suggestions: state.registry.complete(&prefix),
    })
}

pub async fn stats_handler(State(state): State<Arc<AppState>>) -> Json<SystemStats> {
    let worker = Arc::clone(&state);
    match tokio::task::spawn_blocking(move || worker.stats.sample()).await {
        Ok(stats) => Json(stats),
        Err(err) => {
            warn!(error = %err, "stats sampling failed, reporting zeros");
            Json(SystemStats::default())
        }
    }
}

pub async fn health_handler() -> Json<HealthResponse> {
    let now = chrono::Utc::now();
    Json(HealthResponse {
        status: "ok",
        timestamp: now.timestamp_micros() as f64 / 1_000_000.0,
    })
}
