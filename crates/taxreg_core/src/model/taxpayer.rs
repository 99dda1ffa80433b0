//! Taxpayer domain model.
//!
//! # Responsibility
//! - Define the record shape that crosses the presentation boundary.
//! - Provide the single validation rule applied before persistence.
//!
//! # Invariants
//! - Serialized field names and order are `tid`, `firstName`, `lastName`,
//!   `address`.
//! - `tid` is matched byte-for-byte: no trimming, no case folding.
//! - Only an empty `tid` is rejected; name and address fields are free text.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tax identifier. Primary key of the registry.
///
/// Kept as a type alias so signatures read as "a TID" rather than "a string".
pub type Tid = String;

/// Canonical taxpayer record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxPayer {
    /// Unique tax identifier. Immutable once stored.
    pub tid: Tid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Postal or physical address, free text.
    pub address: String,
}

/// Validation failures for taxpayer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxPayerValidationError {
    EmptyTid,
}

impl Display for TaxPayerValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTid => write!(f, "tid must not be empty"),
        }
    }
}

impl Error for TaxPayerValidationError {}

impl TaxPayer {
    /// Builds a record from its four fields without validating them.
    pub fn new(
        tid: impl Into<Tid>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            tid: tid.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
        }
    }

    /// Checks the record against store admission rules.
    ///
    /// # Errors
    /// - `EmptyTid` when `tid` is the empty string. Whitespace-only TIDs are
    ///   accepted verbatim.
    pub fn validate(&self) -> Result<(), TaxPayerValidationError> {
        if self.tid.is_empty() {
            return Err(TaxPayerValidationError::EmptyTid);
        }
        Ok(())
    }
}
