use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

/// Returns a router with `GET /health` endpoint.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(|| async { StatusCode::OK }))
}
