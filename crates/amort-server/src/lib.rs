//! # Amort Server
//!
//! REST boundary for the Amort schedule engine.
//!
//! ## Features
//!
//! - `POST /calculate-loan`: compute an amortization schedule from loan terms
//! - Health endpoint
//! - Configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use amort_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default());
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
mod de;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;

/// The Amort server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Build the router.
    ///
    /// CORS is permissive: the form UI is served from another origin.
    pub fn router(&self) -> axum::Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("Starting Amort server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
