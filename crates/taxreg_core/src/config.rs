//! Environment-driven registry configuration.
//!
//! # Responsibility
//! - Choose the storage backend and log level for hosts (FFI, CLI).
//!
//! # Invariants
//! - Unset or blank values fall back to defaults; they are never errors.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// SQLite file path. Blank or unset selects the in-memory backend.
pub const DB_PATH_ENV: &str = "TAXREG_DB_PATH";
/// Log level override (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "TAXREG_LOG_LEVEL";

/// Storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-lifetime store; lost on restart.
    Memory,
    /// Durable SQLite file.
    Sqlite(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            log_level: default_log_level().to_string(),
        }
    }
}

impl StoreConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let backend = match non_blank(DB_PATH_ENV) {
            Some(path) => StoreBackend::Sqlite(PathBuf::from(path)),
            None => StoreBackend::Memory,
        };
        let log_level = non_blank(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());

        Self { backend, log_level }
    }
}
