//! Response envelopes for the admin API

use serde::Serialize;

use crate::query::{QueryOutput, PAGE_SIZE};

/// Paginated record listing: the visible slice plus everything a
/// client needs to render pagination controls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    /// Pre-slice count of records passing the filters
    pub filtered_total: usize,
    /// Effective (clamped) page
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
}

impl From<QueryOutput> for PageResponse<crate::model::InsuranceRecord> {
    fn from(out: QueryOutput) -> Self {
        Self {
            data: out.rows,
            filtered_total: out.filtered_total,
            page: out.page,
            total_pages: out.total_pages,
            page_size: PAGE_SIZE,
        }
    }
}

/// Plain list response for the directory endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// Single record response
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
