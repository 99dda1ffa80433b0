//! Use-case API for UI hosts.
//!
//! # Responsibility
//! - Map the three registry calls onto `TaxPayerService`.
//! - Translate store errors into plain response envelopes.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Input strings are forwarded verbatim; the store owns validation.
//! - The backend is chosen once per process from `StoreConfig::from_env()`.

use log::error;
use once_cell::sync::{Lazy, OnceCell};
use taxreg_core::db::open_db;
use taxreg_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    InMemoryTaxPayerRepository, RepoResult, SqliteTaxPayerRepository, StoreBackend, StoreConfig,
    TaxPayer, TaxPayerRepository, TaxPayerService,
};

static STORE_CONFIG: OnceCell<StoreConfig> = OnceCell::new();
static MEMORY_STORE: Lazy<InMemoryTaxPayerRepository> = Lazy::new(InMemoryTaxPayerRepository::new);

/// Health-check probe.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes file logging once per process.
///
/// A blank `level` uses the configured level (`TAXREG_LOG_LEVEL` or the
/// build default). Returns an empty string on success, the error otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = if level.trim().is_empty() {
        store_config().log_level.clone()
    } else {
        level
    };
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One taxpayer record as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxPayerItem {
    pub tid: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

impl From<TaxPayer> for TaxPayerItem {
    fn from(record: TaxPayer) -> Self {
        Self {
            tid: record.tid,
            first_name: record.first_name,
            last_name: record.last_name,
            address: record.address,
        }
    }
}

/// Response for `get_tax_payers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxPayerListResponse {
    /// False only when the backend could not be read.
    pub ok: bool,
    /// Every record in insertion order.
    pub items: Vec<TaxPayerItem>,
    pub message: String,
}

/// Response for `add_tax_payer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxPayerActionResponse {
    pub ok: bool,
    /// `duplicate_key | invalid_argument | store_error` on failure.
    pub error_code: Option<String>,
    pub message: String,
}

/// Response for `search_tax_payer`. `item == None` with `ok == true` means
/// no record has that TID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxPayerSearchResponse {
    pub ok: bool,
    pub item: Option<TaxPayerItem>,
    pub message: String,
}

/// Lists every registered taxpayer.
#[flutter_rust_bridge::frb(sync)]
pub fn get_tax_payers() -> TaxPayerListResponse {
    match with_service(|service| service.get_tax_payers()) {
        Ok(records) => TaxPayerListResponse {
            ok: true,
            message: format!("{} taxpayer(s).", records.len()),
            items: records.into_iter().map(TaxPayerItem::from).collect(),
        },
        Err(err) => TaxPayerListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("get_tax_payers failed: {err}"),
        },
    }
}

/// Registers a new taxpayer. Duplicate TIDs are rejected, never overwritten.
#[flutter_rust_bridge::frb(sync)]
pub fn add_tax_payer(
    tid: String,
    first_name: String,
    last_name: String,
    address: String,
) -> TaxPayerActionResponse {
    match with_service(|service| service.add_tax_payer(tid, first_name, last_name, address)) {
        Ok(()) => TaxPayerActionResponse {
            ok: true,
            error_code: None,
            message: "Taxpayer added.".to_string(),
        },
        Err(err) => TaxPayerActionResponse {
            ok: false,
            error_code: Some(err.code().to_string()),
            message: format!("add_tax_payer failed: {err}"),
        },
    }
}

/// Looks up one taxpayer by exact TID.
#[flutter_rust_bridge::frb(sync)]
pub fn search_tax_payer(tid: String) -> TaxPayerSearchResponse {
    match with_service(|service| service.search_tax_payer(tid.as_str())) {
        Ok(Some(record)) => TaxPayerSearchResponse {
            ok: true,
            item: Some(record.into()),
            message: "Found 1 taxpayer.".to_string(),
        },
        Ok(None) => TaxPayerSearchResponse {
            ok: true,
            item: None,
            message: "No taxpayer found.".to_string(),
        },
        Err(err) => TaxPayerSearchResponse {
            ok: false,
            item: None,
            message: format!("search_tax_payer failed: {err}"),
        },
    }
}

fn store_config() -> &'static StoreConfig {
    STORE_CONFIG.get_or_init(StoreConfig::from_env)
}

fn with_service<T>(
    f: impl FnOnce(&TaxPayerService<&dyn TaxPayerRepository>) -> RepoResult<T>,
) -> RepoResult<T> {
    match &store_config().backend {
        StoreBackend::Memory => {
            let repo: &dyn TaxPayerRepository = &*MEMORY_STORE;
            f(&TaxPayerService::new(repo))
        }
        StoreBackend::Sqlite(path) => {
            let conn = open_db(path).map_err(|err| {
                error!("event=store_open module=ffi status=error error={err}");
                err
            })?;
            let repo = SqliteTaxPayerRepository::new(&conn);
            f(&TaxPayerService::new(&repo as &dyn TaxPayerRepository))
        }
    }
}
