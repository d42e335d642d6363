//! Server configuration from environment variables

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use leconseil::DEFAULT_TOP_N;

/// Default host address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port number
pub const DEFAULT_PORT: u16 = 47311;

/// Default CORS origins (localhost for development)
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Allowed CORS origins
    pub cors_origins: Vec<String>,

    /// Maximum recommendations returned per request
    pub top_n: usize,

    /// Log level for tracing
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            top_n: DEFAULT_TOP_N,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load config from environment variables with fallback to defaults
    ///
    /// Environment variables:
    /// - `LEPORTAIL_HOST` - Server host
    /// - `LEPORTAIL_PORT` - Server port
    /// - `LEPORTAIL_TOP_N` - Maximum recommendations per request
    /// - `LEPORTAIL_LOG_LEVEL` - Log level (trace, debug, info, warn, error)
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("LEPORTAIL_HOST") {
            config.host = host;
        }

        if let Ok(port_str) = std::env::var("LEPORTAIL_PORT") {
            if let Ok(port) = port_str.parse::<u16>() {
                config.port = port;
            }
        }

        if let Ok(top_n_str) = std::env::var("LEPORTAIL_TOP_N") {
            if let Ok(top_n) = top_n_str.parse::<usize>() {
                config.top_n = top_n;
            }
        }

        if let Ok(log_level) = std::env::var("LEPORTAIL_LOG_LEVEL") {
            config.log_level = log_level;
        }

        config
    }

    /// Get the socket address for the server
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {}", e))
    }

    /// Get the full server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be zero".to_string());
        }

        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.top_n == 0 {
            return Err("top_n must be greater than zero".to_string());
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.log_level
                ));
            }
        }

        Ok(())
    }
}
