//! Domain model for coverdesk
//!
//! The wire format is camelCase JSON, matching the seed file and the
//! admin API. `InsuranceRecord` is the only entity with behavior
//! attached; `Customer` and `InsurancePlan` are inert directory
//! shapes.

pub mod premium;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use premium::{parse as parse_premium, PremiumError, PremiumInput};

/// Kind of coverage an insurer record is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceType {
    Health,
    Life,
    Auto,
    Property,
}

impl InsuranceType {
    /// Get the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceType::Health => "health",
            InsuranceType::Life => "life",
            InsuranceType::Auto => "auto",
            InsuranceType::Property => "property",
        }
    }
}

/// Record lifecycle status
///
/// Not derived from the record's dates; set at creation (always
/// `pending` via the form) or by seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Pending,
    Expired,
}

impl RecordStatus {
    /// Get the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Pending => "pending",
            RecordStatus::Expired => "expired",
        }
    }
}

/// One insurer entry with policy and contact attributes
///
/// `id` is unique within the store and never mutated. No ordering
/// invariant is enforced between `start_date` and `end_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub policy_number: String,
    pub insurance_type: InsuranceType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub premium: f64,
    pub status: RecordStatus,
}

/// Creation-form payload: everything except the server-assigned `id`
/// and the server-forced `status`.
///
/// `premium` arrives as a JSON number or a numeric string and must
/// pass [`premium::parse`] before a record is built from this.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub policy_number: String,
    pub insurance_type: InsuranceType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub premium: PremiumInput,
}

/// Inert customer directory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub join_date: NaiveDate,
}

/// Inert insurance plan directory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePlan {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub plan_type: InsuranceType,
    pub description: String,
    pub coverage: f64,
    pub monthly_premium: f64,
    pub benefits: Vec<String>,
}
