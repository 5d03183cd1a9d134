//! The greeting endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::ServerConfig;

/// Response body for `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct Greeting {
    pub message: String,
}

#[derive(Clone)]
struct GreetingState {
    message: String,
}

/// Returns a router with the `GET /` greeting endpoint.
///
/// The greeting text is fixed at router construction from config; the handler
/// is a pure function of that state and ignores the request entirely.
pub fn greeting_routes(config: &ServerConfig) -> Router {
    let state = GreetingState {
        message: config.greeting.clone(),
    };
    Router::new().route("/", get(greeting)).with_state(state)
}

async fn greeting(State(state): State<GreetingState>) -> Json<Greeting> {
    Json(Greeting {
        message: state.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn greeting_returns_ok_json() {
        let app = greeting_routes(&ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .contains("application/json"));
    }

    #[tokio::test]
    async fn greeting_body_is_default_message() {
        let app = greeting_routes(&ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Welcome to the Trading-Test API!"})
        );
    }

    #[tokio::test]
    async fn greeting_reflects_configured_text() {
        let config = ServerConfig {
            greeting: "Hello, World!".to_string(),
            ..Default::default()
        };
        let app = greeting_routes(&config);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Hello, World!"}));
    }
}
