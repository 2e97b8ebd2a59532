//! # HTTP Server
//!
//! Axum server combining the record, directory, and health routes.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;

use super::config::ServerConfig;
use super::directory_routes::{directory_routes, DirectoryState};
use super::record_routes::{record_routes, RecordsState};

/// HTTP server for the admin API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(records: Arc<RecordsState>) -> Self {
        Self::with_config(ServerConfig::default(), records)
    }

    /// Create a server with custom configuration.
    ///
    /// The records state is injected so the caller can seed the store
    /// before the listener binds.
    pub fn with_config(config: ServerConfig, records: Arc<RecordsState>) -> Self {
        let router = Self::build_router(&config, records);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &ServerConfig, records: Arc<RecordsState>) -> Router {
        let directory = Arc::new(DirectoryState::new());

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health))
            .nest(
                "/api/v1",
                record_routes(records).merge(directory_routes(directory)),
            )
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for in-process tests)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        Logger::info("SERVER_START", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_builds_router() {
        let server = HttpServer::new(Arc::new(RecordsState::new()));
        assert_eq!(server.socket_addr(), "127.0.0.1:4380");
        let _router = server.router();
    }
}
