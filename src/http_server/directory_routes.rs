//! Customer and plan directory routes
//!
//! These entities are inert data shapes: no filtering, no pagination,
//! no mutation. The built-in directory is served verbatim.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::model::{Customer, InsurancePlan};
use crate::store::Directory;

use super::response::ListResponse;

/// Directory state shared across handlers
#[derive(Debug)]
pub struct DirectoryState {
    pub directory: Directory,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self {
            directory: Directory::builtin(),
        }
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the directory routes
pub fn directory_routes(state: Arc<DirectoryState>) -> Router {
    Router::new()
        .route("/customers", get(list_customers))
        .route("/plans", get(list_plans))
        .with_state(state)
}

async fn list_customers(
    State(state): State<Arc<DirectoryState>>,
) -> Json<ListResponse<Customer>> {
    Json(ListResponse::new(state.directory.customers.clone()))
}

async fn list_plans(
    State(state): State<Arc<DirectoryState>>,
) -> Json<ListResponse<InsurancePlan>> {
    Json(ListResponse::new(state.directory.plans.clone()))
}
