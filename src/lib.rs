//! coverdesk - a small, self-hostable admin backend for insurance records
//!
//! In-memory state for the lifetime of the process: one seed-file read
//! at startup, appends via the creation endpoint, and a pure
//! filter/sort/paginate pipeline behind the listing endpoint.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod query;
pub mod store;
