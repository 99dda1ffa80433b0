//! Domain model for the taxpayer registry.
//!
//! # Responsibility
//! - Define the canonical taxpayer record shared by store, boundary and CLI.
//!
//! # Invariants
//! - Every record is identified by its caller-supplied `tid`.
//! - Records are immutable once stored; there is no update or delete path.

pub mod taxpayer;
