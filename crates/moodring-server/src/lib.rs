//! Moodring Server - HTTP API server.
//!
//! This crate provides the HTTP presentation boundary for Moodring.
//!
//! ## Endpoints
//!
//! - `POST /api/mood` - Classify text and return the emoji/message outcome
//! - `GET /api/health` - Liveness and model availability
//!
//! ## Example
//!
//! ```no_run
//! use moodring_server::{Server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = Server::new(ServerConfig::default()).unwrap();
//!     server.run().await.unwrap();
//! }
//! ```

pub mod error;
mod handlers;
pub mod models;
pub mod state;

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use moodring_core::MoodPredictor;
use socket2::{Domain, Protocol, Socket, Type};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub use error::{ApiError, Result};
pub use state::AppState;

/// Default server port.
pub const DEFAULT_PORT: u16 = 48590;

/// Default server host (localhost only).
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: 127.0.0.1).
    pub host: String,
    /// Port to bind to (default: 48590).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Sets the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Server error types.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to address.
    #[error("failed to bind to {0}: {1}")]
    BindError(SocketAddr, std::io::Error),

    /// Server runtime error.
    #[error("server error: {0}")]
    Runtime(String),
}

/// The HTTP API server.
pub struct Server {
    router: Router,
    addr: SocketAddr,
}

impl Server {
    /// Creates a server with the default predictor (loads models if
    /// their files are present).
    pub fn new(config: ServerConfig) -> std::result::Result<Self, ServerError> {
        Self::with_predictor(config, MoodPredictor::with_defaults())
    }

    /// Creates a server around an existing predictor.
    pub fn with_predictor(
        config: ServerConfig,
        predictor: MoodPredictor,
    ) -> std::result::Result<Self, ServerError> {
        Self::with_state(config, AppState::new(predictor))
    }

    /// Creates a server with custom application state.
    pub fn with_state(
        config: ServerConfig,
        state: AppState,
    ) -> std::result::Result<Self, ServerError> {
        // CORS for browser-based front-ends
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let router = Router::new()
            .route("/api/mood", post(handlers::check_mood))
            .route("/api/health", get(handlers::health))
            .layer(cors)
            .with_state(state);

        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| ServerError::Runtime(format!("invalid address: {}", e)))?;

        Ok(Self { router, addr })
    }

    /// Returns the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Runs the server until shutdown.
    pub async fn run(self) -> std::result::Result<(), ServerError> {
        info!("Starting Moodring API server on {}", self.addr);

        // Create socket with SO_REUSEADDR to allow binding even when
        // sockets are lingering
        let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        socket
            .set_reuse_address(true)
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        socket
            .bind(&self.addr.into())
            .map_err(|e| ServerError::BindError(self.addr, e))?;
        socket
            .listen(128)
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        // Set non-blocking for tokio
        socket
            .set_nonblocking(true)
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        let std_listener: std::net::TcpListener = socket.into();
        let listener = tokio::net::TcpListener::from_std(std_listener)
            .map_err(|e| ServerError::BindError(self.addr, e))?;

        axum::serve(listener, self.router)
            .await
            .map_err(|e| ServerError::Runtime(e.to_string()))?;

        Ok(())
    }

    /// Returns the router for testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::rules_only();

        Router::new()
            .route("/api/mood", post(handlers::check_mood))
            .route("/api/health", get(handlers::health))
            .with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn mood_request(text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/mood")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "text": text }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_happy_text() {
        let app = create_test_app();

        let response = app.oneshot(mood_request("I won the match today!")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["emoji"], "😀");
        assert_eq!(json["message"], "Sounds happy!");
        assert_eq!(json["mood"], "joy");
        assert_eq!(json["severity"], "plain");
        assert_eq!(json["stage"], "polarity");
        assert!(json["latency_ms"].is_number());
    }

    #[tokio::test]
    async fn test_crisis_text_gets_alert_severity() {
        let app = create_test_app();

        let response = app
            .oneshot(mood_request("I want to kill myself"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["emoji"], "⚠️");
        assert_eq!(json["severity"], "alert");
        assert_eq!(json["stage"], "self_harm");
        assert!(json.get("mood").is_none());
    }

    #[tokio::test]
    async fn test_bad_words_get_warning_severity() {
        let app = create_test_app();

        let response = app
            .oneshot(mood_request("You are so stupid and dumb"))
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["emoji"], "🚫");
        assert_eq!(json["message"], "Please use kind and respectful words.");
        assert_eq!(json["severity"], "warning");
    }

    #[tokio::test]
    async fn test_gibberish_gets_info_severity() {
        let app = create_test_app();

        let response = app.oneshot(mood_request("xk qz")).await.unwrap();

        let json = body_json(response).await;
        assert_eq!(json["emoji"], "🤔");
        assert_eq!(json["severity"], "info");
        assert_eq!(json["stage"], "gibberish");
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let app = create_test_app();

        let response = app.oneshot(mood_request("")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "bad_request");
    }

    #[tokio::test]
    async fn test_whitespace_text_rejected() {
        let app = create_test_app();

        let response = app.oneshot(mood_request("   ")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_test_app();

        let request = Request::builder()
            .method("GET")
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["emotion_model"], false);
        assert_eq!(json["sentiment_model"], false);
    }

    #[tokio::test]
    async fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[tokio::test]
    async fn test_server_config_with_port() {
        let config = ServerConfig::default().with_port(9000);
        assert_eq!(config.port, 9000);
    }
}
