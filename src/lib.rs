//! # trading-test-api
//!
//! Greeting API for the Trading-Test platform.
//!
//! The service exposes a single JSON endpoint: `GET /` answers with a
//! greeting payload. Everything else in this crate is the wiring around that
//! route: configuration loading, tracing setup, the default middleware stack,
//! and graceful shutdown.
//!
//! ```ignore
//! use trading_test_api::{routes, RouterExt, ServerConfig};
//!
//! let config: ServerConfig = ServerConfig::builder().with_dotenv().build()?;
//!
//! routes::greeting_routes(&config)
//!     .with_health_check()
//!     .with_fallback()
//!     .with_default_layers(&config)
//!     .serve(&config)
//!     .await?;
//! ```

mod config;
mod environment;
mod error;
pub mod layer;
mod logging;
mod router;
pub mod routes;
mod server;

pub use config::{ConfigBuilder, ConfigError, ConfigFormat, ServerConfig};
pub use environment::Environment;
pub use error::ErrorResponse;
pub use logging::{init_logging, init_logging_from_env, LogFormat};
pub use router::RouterExt;
pub use server::{serve_router, ServerError};
