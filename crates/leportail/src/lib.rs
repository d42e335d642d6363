// leportail - HTTP Form & API
//
// *Le Portail* (The Portal) - Axum-based profile form and JSON
// recommendation API for LeParcours

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// API error types
pub mod error;

/// HTTP handlers for the form page and JSON API
pub mod handlers;

/// Server configuration from environment variables
pub mod config;

/// Static profile form page
pub mod form;

/// API response types
pub mod responses;

/// Server instance management
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::LePortailServer;

/// leportail library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
