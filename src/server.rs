//! HTTP Server and Metrics Collection
//!
//! This module implements the Prometheus exporter HTTP server.
//!
//! # Architecture
//!
//! - **HTTP Server**: Axum-based server exposing `/metrics`, `/health`, and `/` endpoints
//! - **Scrape on request**: every `/metrics` request runs one collection cycle against the switch
//! - **State Management**: the switch client is created once and shared behind a mutex,
//!   so concurrent scrapes run one after another over the same session
//!
//! # Endpoints
//!
//! - `GET /` - HTML landing page with links to metrics and health
//! - `GET /metrics` - Prometheus metrics in text format
//! - `GET /health` - Liveness check (always 200 while the process is serving)

use crate::collectors::{self, CollectionStatus};
use crate::config::Config;
use crate::error::ExporterError;
use crate::metrics::MetricsCollector;
use crate::prosafe::SwitchClient;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct AppState {
    metrics: MetricsCollector,
    client: Arc<Mutex<SwitchClient>>,
}

impl AppState {
    pub fn new(metrics: MetricsCollector, client: SwitchClient) -> Self {
        Self {
            metrics,
            client: Arc::new(Mutex::new(client)),
        }
    }
}

/// Routes of the exporter, without binding a listener
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

pub async fn start(config: Config) -> anyhow::Result<()> {
    let metrics = MetricsCollector::new()?;
    let client = SwitchClient::from_config(&config.switch)?;

    let app = router(AppState::new(metrics, client));

    // Start the server
    let addr = format!("{}:{}", config.server.addr, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        ExporterError::Io(e)
    })?;

    info!("Metrics server listening on {}", addr);
    info!("Metrics available at http://{}/metrics", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ExporterError::Server(e.to_string()))?;

    Ok(())
}

async fn root_handler() -> impl IntoResponse {
    axum::response::Html(
        r#"<html>
<head><title>ProSafe Exporter</title></head>
<body>
<h1>ProSafe Prometheus Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
<p><a href="/health">Health</a></p>
</body>
</html>"#,
    )
}

async fn metrics_handler(State(state): State<AppState>) -> Response {
    {
        let mut client = state.client.lock().await;
        match collectors::collect_switch_metrics(&mut client, &state.metrics).await {
            CollectionStatus::Success => debug!("Scrape of {} succeeded", client.host()),
            CollectionStatus::Failed => {
                error!("Scrape of {} failed, switch marked down", client.host())
            }
        }
    }

    match state.metrics.render() {
        Ok(metrics) => {
            ([(axum::http::header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], metrics).into_response()
        }
        Err(e) => {
            error!("Failed to render metrics: {}", e);
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error rendering metrics: {}", e),
            )
                .into_response()
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "OK")
}
