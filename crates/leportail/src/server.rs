//! Server instance management

use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::handlers::{create_router, AppState};

/// LePortail HTTP server
///
/// Manages the Axum server lifecycle: configuration validation, listener
/// binding, and graceful shutdown.
pub struct LePortailServer {
    /// Server configuration
    config: ServerConfig,
}

impl LePortailServer {
    /// Create new server instance
    pub fn new(config: ServerConfig) -> Result<Self, ApiError> {
        if let Err(e) = config.validate() {
            return Err(ApiError::internal(format!("Invalid config: {}", e)));
        }
        Ok(Self { config })
    }

    /// Get socket address for binding
    pub fn socket_addr(&self) -> Result<SocketAddr, ApiError> {
        self.config
            .socket_addr()
            .map_err(|e| ApiError::internal(format!("Failed to parse address: {}", e)))
    }

    /// Start server
    pub async fn start(&self) -> Result<(), ApiError> {
        let addr = self.socket_addr()?;

        let state = AppState::new(self.config.clone());
        let app = create_router()
            .layer(self.cors_layer())
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind to {}: {:?}", addr, e);
            ApiError::internal(format!("Failed to bind to {}: {}", addr, e))
        })?;

        info!("Server listening on: {}", self.config.server_url());

        axum::serve(listener, app)
            .await
            .map_err(|e| ApiError::internal(format!("Server error: {}", e)))
    }

    /// Wait for shutdown signal
    ///
    /// Blocks until Ctrl+C or TERM is received
    pub async fn wait_for_shutdown(&self) {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
            info!("Received shutdown signal");
        };

        #[cfg(unix)]
        let terminate = async {
            use tokio::signal::unix;
            unix::signal(unix::SignalKind::terminate())
                .expect("Failed to install TERM handler")
                .recv()
                .await;
            info!("Received TERM signal");
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    }

    /// Get server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        self.config.server_url()
    }

    fn cors_layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_default_config() {
        let server = LePortailServer::new(ServerConfig::default());
        assert!(server.is_ok());
    }

    #[test]
    fn test_server_rejects_invalid_config() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(LePortailServer::new(config).is_err());
    }

    #[test]
    fn test_server_socket_addr() {
        let server = LePortailServer::new(ServerConfig::default()).unwrap();
        let addr = server.socket_addr().unwrap();
        assert_eq!(addr.port(), crate::config::DEFAULT_PORT);
    }
}
