mod json_error;
mod trace;

use axum::http::StatusCode;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

use crate::ServerConfig;
use trace::DefaultTraceLayer;

pub use json_error::JsonErrorLayer;

/// Applies the default middleware stack to a router.
pub(crate) fn default_layers(router: Router, config: &ServerConfig) -> Router {
    // Layer execution order for RESPONSES (bottom to top):
    //   Handler -> CatchPanic -> RequestId -> Trace -> Timeout -> Compression -> JsonError
    //
    // In Tower, .layer(X) wraps the service: service.layer(A).layer(B) = B(A(service))
    // The LAST layer added is OUTERMOST and processes responses LAST.
    //
    // JsonErrorLayer MUST be outermost (added LAST) to catch ALL error responses,
    // including panics (from CatchPanicLayer) and timeouts (from TimeoutLayer).
    router
        .layer(CatchPanicLayer::new())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(DefaultTraceLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .layer(CompressionLayer::new())
        .layer(JsonErrorLayer::new(config.environment))
}
