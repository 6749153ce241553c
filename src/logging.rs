use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Console area a route belongs to, from its first path segment.
fn area_for(path: &str) -> &'static str {
    match path.split('/').find(|segment| !segment.is_empty()) {
        Some("admin") => "admin",
        Some("enseignant") => "teacher",
        Some("etudiant") => "student",
        Some("login" | "logout") => "auth",
        _ => "public",
    }
}

/// Logs each request on arrival and completion, tagged with a request id
/// and the console area. Only 4xx and 5xx raise the level.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let area = area_for(&route);
    let request_id = uuid::Uuid::new_v4();

    debug!(%request_id, %method, %route, area, "Request received");

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        error!(%request_id, %method, %route, area, status, latency_ms, "Request failed");
    } else if response.status().is_client_error() {
        warn!(%request_id, %method, %route, area, status, latency_ms, "Request rejected");
    } else {
        info!(%request_id, %method, %route, area, status, latency_ms, "Request handled");
    }

    response
}

/// Installs the global tracing subscriber.
///
/// - `LOG_LEVEL`: level for this crate (default: "info")
/// - `LOG_FORMAT`: `json` for structured output, anything else for compact
///   console lines
///
/// `RUST_LOG`, when set, overrides the computed filter.
pub fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{crate}={level},presence_db={level},tower_http=warn,hyper=warn,sqlx=warn",
            crate = env!("CARGO_CRATE_NAME"),
            level = log_level
        ))
    });

    if json {
        let layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_filter(env_filter);
        tracing_subscriber::registry().with(layer).init();
    } else {
        let layer = fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter);
        tracing_subscriber::registry().with(layer).init();
    }
}
