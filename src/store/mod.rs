//! In-memory record store
//!
//! Holds the authoritative ordered collection for the lifetime of the
//! process. Populated once from the seed file, appended to by the
//! creation form; no update or delete exists. The query pipeline only
//! ever sees read-only snapshots.

pub mod seed;

use std::sync::RwLock;

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{Customer, InsurancePlan, InsuranceRecord, InsuranceType, RecordStatus};

/// Store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Interior lock poisoned by a panicking writer
    #[error("record store lock poisoned")]
    LockPoisoned,
}

/// Validated creation input, ready to become a record.
///
/// Built from a [`crate::model::RecordDraft`] after the premium has
/// passed [`crate::model::parse_premium`]; `id` and `status` are
/// store concerns.
#[derive(Debug, Clone)]
pub struct ValidatedDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub policy_number: String,
    pub insurance_type: InsuranceType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub premium: f64,
}

/// Ordered in-memory collection of insurer records
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<Vec<InsuranceRecord>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with seed contents.
    ///
    /// Only called during startup, before the listener binds.
    pub fn load(&self, records: Vec<InsuranceRecord>) -> Result<(), StoreError> {
        let mut guard = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        *guard = records;
        Ok(())
    }

    /// Append a new record with a freshly generated unique id.
    ///
    /// Status is forced to `pending`; the form cannot set it.
    pub fn append(&self, draft: ValidatedDraft) -> Result<InsuranceRecord, StoreError> {
        let record = InsuranceRecord {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            policy_number: draft.policy_number,
            insurance_type: draft.insurance_type,
            start_date: draft.start_date,
            end_date: draft.end_date,
            premium: draft.premium,
            status: RecordStatus::Pending,
        };

        let mut guard = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        guard.push(record.clone());
        Ok(record)
    }

    /// Clone of the full ordered collection.
    pub fn snapshot(&self) -> Result<Vec<InsuranceRecord>, StoreError> {
        let guard = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard.clone())
    }

    /// Look up a single record by id.
    pub fn get(&self, id: &str) -> Result<Option<InsuranceRecord>, StoreError> {
        let guard = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard.iter().find(|r| r.id == id).cloned())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let guard = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

/// Read-only customer and plan directory.
///
/// These entities have no query logic attached; the built-in entries
/// are served verbatim.
#[derive(Debug, Clone)]
pub struct Directory {
    pub customers: Vec<Customer>,
    pub plans: Vec<InsurancePlan>,
}

impl Directory {
    pub fn builtin() -> Self {
        Self {
            customers: vec![Customer {
                id: "1".to_string(),
                name: "Alice Johnson".to_string(),
                email: "alice@example.com".to_string(),
                phone: "(555) 111-2233".to_string(),
                address: "123 Main St, City, State 12345".to_string(),
                join_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid builtin date"),
            }],
            plans: vec![InsurancePlan {
                id: "1".to_string(),
                name: "Premium Health Care".to_string(),
                plan_type: InsuranceType::Health,
                description: "Comprehensive health coverage including dental and vision"
                    .to_string(),
                coverage: 1_000_000.0,
                monthly_premium: 299.99,
                benefits: vec![
                    "Dental".to_string(),
                    "Vision".to_string(),
                    "Prescription drugs".to_string(),
                    "Mental health".to_string(),
                ],
            }],
        }
    }
}
