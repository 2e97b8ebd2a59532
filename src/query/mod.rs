//! Record query pipeline
//!
//! Pure transformation over a store snapshot: text filter, status
//! filter, stable sort, page slice — executed in that fixed order on
//! every list request. No caching, no incremental recomputation.

pub mod page;

use std::cmp::Ordering;

use crate::model::{InsuranceRecord, RecordStatus};

pub use page::PAGE_SIZE;

/// Status filter: `all` is the identity transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Pending,
    Expired,
}

impl StatusFilter {
    /// Does a record with this status pass the filter?
    pub fn matches(&self, status: RecordStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == RecordStatus::Active,
            StatusFilter::Pending => status == RecordStatus::Pending,
            StatusFilter::Expired => status == RecordStatus::Expired,
        }
    }
}

/// Attribute used for ordering; absent means insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Email,
    Phone,
    PolicyNumber,
    InsuranceType,
    StartDate,
    EndDate,
    Premium,
    Status,
}

impl SortKey {
    /// Compare two records under this key.
    ///
    /// String fields compare lexicographically, `premium` numerically,
    /// dates chronologically (same result as ISO string order), enums
    /// by their wire string. Incomparable premiums (NaN) report equal
    /// and lean on the explicit index tiebreak in [`run`].
    fn compare(&self, a: &InsuranceRecord, b: &InsuranceRecord) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Email => a.email.cmp(&b.email),
            SortKey::Phone => a.phone.cmp(&b.phone),
            SortKey::PolicyNumber => a.policy_number.cmp(&b.policy_number),
            SortKey::InsuranceType => a.insurance_type.as_str().cmp(b.insurance_type.as_str()),
            SortKey::StartDate => a.start_date.cmp(&b.start_date),
            SortKey::EndDate => a.end_date.cmp(&b.end_date),
            SortKey::Premium => a.premium.partial_cmp(&b.premium).unwrap_or(Ordering::Equal),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

/// Sort direction; only meaningful when a key is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sort key and direction together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

/// One full set of list-view inputs
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    /// Case-insensitive substring match on name or email
    pub search: String,
    pub status: StatusFilter,
    pub sort: Option<SortSpec>,
    /// 1-based requested page; clamped into range before slicing
    pub page: usize,
}

/// Pipeline output: the visible slice plus the pre-slice count.
#[derive(Debug, Clone)]
pub struct QueryOutput {
    pub rows: Vec<InsuranceRecord>,
    pub filtered_total: usize,
    /// Effective page after clamping
    pub page: usize,
    pub total_pages: usize,
}

/// Run the pipeline over a snapshot.
///
/// Pure function of (snapshot, query); same inputs always produce the
/// same output.
pub fn run(snapshot: Vec<InsuranceRecord>, query: &RecordQuery) -> QueryOutput {
    let needle = query.search.to_lowercase();

    let mut filtered: Vec<InsuranceRecord> = snapshot
        .into_iter()
        .filter(|r| {
            needle.is_empty()
                || r.name.to_lowercase().contains(&needle)
                || r.email.to_lowercase().contains(&needle)
        })
        .filter(|r| query.status.matches(r.status))
        .collect();

    if let Some(spec) = query.sort {
        sort_stable(&mut filtered, spec);
    }

    let filtered_total = filtered.len();
    let total_pages = page::total_pages(filtered_total, PAGE_SIZE);
    let page = page::clamp(query.page, total_pages);

    let range = page::bounds(page, PAGE_SIZE, filtered_total);
    let rows = filtered[range].to_vec();

    QueryOutput {
        rows,
        filtered_total,
        page,
        total_pages,
    }
}

/// Sort with guaranteed stability: records are decorated with their
/// snapshot index and ties break on it. Reversing the order reverses
/// key comparisons only, never the index tiebreak, so tied elements
/// keep insertion order in both directions.
fn sort_stable(records: &mut Vec<InsuranceRecord>, spec: SortSpec) {
    let mut decorated: Vec<(usize, InsuranceRecord)> = records.drain(..).enumerate().collect();
    decorated.sort_by(|(ia, a), (ib, b)| {
        let by_key = match spec.order {
            SortOrder::Asc => spec.key.compare(a, b),
            SortOrder::Desc => spec.key.compare(a, b).reverse(),
        };
        by_key.then(ia.cmp(ib))
    });
    records.extend(decorated.into_iter().map(|(_, r)| r));
}
