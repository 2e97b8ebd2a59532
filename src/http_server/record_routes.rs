//! Insurance record routes
//!
//! The list endpoint runs the full query pipeline on every request;
//! the create endpoint is the only mutation in the system.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::model::{parse_premium, InsuranceRecord, RecordDraft};
use crate::observability::Logger;
use crate::query;
use crate::store::{RecordStore, ValidatedDraft};

use super::errors::{ApiError, ApiResult};
use super::params;
use super::response::{PageResponse, SingleResponse};

/// Record state shared across handlers
#[derive(Debug, Default)]
pub struct RecordsState {
    pub store: RecordStore,
}

impl RecordsState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Build the record routes
pub fn record_routes(state: Arc<RecordsState>) -> Router {
    Router::new()
        .route("/records", get(list_records).post(create_record))
        .route("/records/:id", get(get_record))
        .with_state(state)
}

/// `GET /records` — filtered, sorted, paginated listing
async fn list_records(
    State(state): State<Arc<RecordsState>>,
    Query(raw): Query<HashMap<String, String>>,
) -> ApiResult<Json<PageResponse<InsuranceRecord>>> {
    let record_query = params::parse(&raw)?;
    let snapshot = state.store.snapshot()?;
    let output = query::run(snapshot, &record_query);
    Ok(Json(PageResponse::from(output)))
}

/// `POST /records` — create a record from the form payload
async fn create_record(
    State(state): State<Arc<RecordsState>>,
    Json(draft): Json<RecordDraft>,
) -> ApiResult<(StatusCode, Json<SingleResponse<InsuranceRecord>>)> {
    // Explicit parse-and-validate gate: bad premiums reject the
    // submission instead of entering the store as a sentinel.
    let premium = parse_premium(&draft.premium)?;

    let record = state.store.append(ValidatedDraft {
        name: draft.name,
        email: draft.email,
        phone: draft.phone,
        policy_number: draft.policy_number,
        insurance_type: draft.insurance_type,
        start_date: draft.start_date,
        end_date: draft.end_date,
        premium,
    })?;

    Logger::info(
        "RECORD_CREATED",
        &[
            ("id", record.id.as_str()),
            ("type", record.insurance_type.as_str()),
        ],
    );

    Ok((StatusCode::CREATED, Json(SingleResponse::new(record))))
}

/// `GET /records/:id` — single record lookup
async fn get_record(
    State(state): State<Arc<RecordsState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SingleResponse<InsuranceRecord>>> {
    let record = state.store.get(&id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(SingleResponse::new(record)))
}
