//! Router extension trait for assembling the service.

use axum::Router;

use crate::routes::{fallback_handler, health_routes};
use crate::ServerConfig;

/// Extension trait for Router that wires in the service plumbing.
///
/// Keeps `main` reading like plain axum code with chainable methods on
/// Router.
///
/// # Example
///
/// ```rust,ignore
/// use trading_test_api::{routes, RouterExt, ServerConfig};
///
/// routes::greeting_routes(&config)
///     .with_health_check()
///     .with_fallback()
///     .with_default_layers(&config)
///     .serve(&config)
///     .await?;
/// ```
pub trait RouterExt: Sized {
    /// Adds the `/health` liveness route.
    ///
    /// Equivalent to `.merge(health_routes())`.
    fn with_health_check(self) -> Self;

    /// Adds a JSON 404 fallback handler for unmatched routes.
    ///
    /// Equivalent to `.fallback(fallback_handler)`.
    fn with_fallback(self) -> Self;

    /// Applies the default middleware stack.
    ///
    /// Layers applied (innermost to outermost):
    /// - `CatchPanicLayer` - Converts panics to 500 responses
    /// - `SetRequestIdLayer` / `PropagateRequestIdLayer` - X-Request-Id handling
    /// - `TraceLayer` - Request/response logging with latency
    /// - `TimeoutLayer` - Request timeout from config
    /// - `CompressionLayer` - Response compression
    /// - `JsonErrorLayer` - Converts error responses to JSON (outermost)
    fn with_default_layers(self, config: &impl AsRef<ServerConfig>) -> Self;

    /// Serve the router with graceful shutdown support.
    ///
    /// Handles `SIGINT` (Ctrl+C) and `SIGTERM` signals, waiting for
    /// in-flight requests to complete before shutting down.
    fn serve(
        self,
        config: &(impl AsRef<ServerConfig> + Sync),
    ) -> impl std::future::Future<Output = Result<(), crate::ServerError>> + Send;
}

impl RouterExt for Router {
    fn with_health_check(self) -> Self {
        self.merge(health_routes())
    }

    fn with_fallback(self) -> Self {
        self.fallback(fallback_handler)
    }

    fn with_default_layers(self, config: &impl AsRef<ServerConfig>) -> Self {
        crate::layer::default_layers(self, config.as_ref())
    }

    async fn serve(
        self,
        config: &(impl AsRef<ServerConfig> + Sync),
    ) -> Result<(), crate::ServerError> {
        crate::server::serve_router(self, config).await
    }
}
