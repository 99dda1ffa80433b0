//! Core of the taxpayer registry.
//! Owns the record model, the store contract and its backends.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{StoreBackend, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::taxpayer::{TaxPayer, TaxPayerValidationError, Tid};
pub use repo::memory_repo::InMemoryTaxPayerRepository;
pub use repo::taxpayer_repo::{
    RepoError, RepoResult, SqliteTaxPayerRepository, TaxPayerRepository,
};
pub use service::taxpayer_service::TaxPayerService;

/// Health-check probe for host wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
