//! Record store contract and its backends.
//!
//! # Responsibility
//! - Define the three-operation store contract (`insert`, `list_all`,
//!   `find_by_tid`).
//! - Keep persistence pluggable: in-memory and SQLite backends honor the same
//!   contract.
//!
//! # Invariants
//! - Writes call `TaxPayer::validate()` before mutating anything.
//! - A failed insert leaves the store unchanged.
//! - Absence is `Ok(None)`, never an error.

pub mod memory_repo;
pub mod taxpayer_repo;
