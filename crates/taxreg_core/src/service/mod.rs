//! Use-case services over the record store.
//!
//! # Responsibility
//! - Expose the three registry use-cases to the boundary and CLI.
//! - Keep callers decoupled from the chosen storage backend.

pub mod taxpayer_service;
