//! # Admin HTTP API
//!
//! Axum surface for the insurance records admin backend.
//!
//! # Endpoints
//!
//! - `GET /health` — liveness probe
//! - `GET /api/v1/records` — filtered/sorted/paginated listing
//! - `POST /api/v1/records` — create a record (status forced to pending)
//! - `GET /api/v1/records/:id` — single record
//! - `GET /api/v1/customers`, `GET /api/v1/plans` — directory listings

pub mod config;
pub mod directory_routes;
pub mod errors;
pub mod params;
pub mod record_routes;
pub mod response;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult};
pub use record_routes::RecordsState;
pub use server::HttpServer;
