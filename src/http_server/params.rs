//! List query parameter parsing
//!
//! Translates the raw query string of `GET /api/v1/records` into a
//! [`RecordQuery`]. Unknown values reject with a typed 400; unknown
//! keys are ignored.

use std::collections::HashMap;

use crate::query::{RecordQuery, SortKey, SortOrder, SortSpec, StatusFilter};

use super::errors::{ApiError, ApiResult};

/// Parse list-view query parameters.
///
/// Accepted keys: `search`, `status`, `sort`, `order`, `page`. Sort
/// keys use the record's camelCase wire names. `order` without `sort`
/// is accepted and has no effect, matching the list view where the
/// direction control exists independently of a chosen column.
pub fn parse(params: &HashMap<String, String>) -> ApiResult<RecordQuery> {
    let mut query = RecordQuery {
        page: 1,
        ..Default::default()
    };
    let mut order = SortOrder::Asc;
    let mut key = None;

    for (name, value) in params {
        match name.as_str() {
            "search" => query.search = value.clone(),
            "status" => query.status = parse_status(value)?,
            "sort" => key = Some(parse_sort_key(value)?),
            "order" => order = parse_order(value)?,
            "page" => query.page = parse_page(value)?,
            _ => {}
        }
    }

    query.sort = key.map(|key| SortSpec { key, order });
    Ok(query)
}

fn parse_status(value: &str) -> ApiResult<StatusFilter> {
    match value {
        "all" => Ok(StatusFilter::All),
        "active" => Ok(StatusFilter::Active),
        "pending" => Ok(StatusFilter::Pending),
        "expired" => Ok(StatusFilter::Expired),
        other => Err(ApiError::InvalidQueryParam(format!(
            "unknown status filter: {other}"
        ))),
    }
}

fn parse_sort_key(value: &str) -> ApiResult<SortKey> {
    match value {
        "id" => Ok(SortKey::Id),
        "name" => Ok(SortKey::Name),
        "email" => Ok(SortKey::Email),
        "phone" => Ok(SortKey::Phone),
        "policyNumber" => Ok(SortKey::PolicyNumber),
        "insuranceType" => Ok(SortKey::InsuranceType),
        "startDate" => Ok(SortKey::StartDate),
        "endDate" => Ok(SortKey::EndDate),
        "premium" => Ok(SortKey::Premium),
        "status" => Ok(SortKey::Status),
        other => Err(ApiError::InvalidQueryParam(format!(
            "unknown sort key: {other}"
        ))),
    }
}

fn parse_order(value: &str) -> ApiResult<SortOrder> {
    match value {
        "asc" => Ok(SortOrder::Asc),
        "desc" => Ok(SortOrder::Desc),
        other => Err(ApiError::InvalidQueryParam(format!(
            "unknown sort order: {other}"
        ))),
    }
}

fn parse_page(value: &str) -> ApiResult<usize> {
    value
        .parse()
        .map_err(|_| ApiError::InvalidQueryParam(format!("invalid page: {value}")))
}
