//! Taxpayer registry use-case service.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Log events carry metadata only: no TID, name or address values.

use crate::model::taxpayer::TaxPayer;
use crate::repo::taxpayer_repo::{RepoResult, TaxPayerRepository};
use log::{debug, info, warn};

/// Registry operations as seen by the presentation layer.
pub struct TaxPayerService<R: TaxPayerRepository> {
    repo: R,
}

impl<R: TaxPayerRepository> TaxPayerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new taxpayer.
    ///
    /// # Contract
    /// - Fields are stored verbatim.
    /// - Returns `DuplicateKey` / `InvalidArgument` unchanged from the store.
    pub fn add_tax_payer(
        &self,
        tid: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
    ) -> RepoResult<()> {
        let record = TaxPayer::new(tid, first_name, last_name, address);
        match self.repo.insert(&record) {
            Ok(()) => {
                info!("event=taxpayer_add module=service status=ok");
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=taxpayer_add module=service status=error error_code={}",
                    err.code()
                );
                Err(err)
            }
        }
    }

    /// Lists every registered taxpayer in insertion order.
    pub fn get_tax_payers(&self) -> RepoResult<Vec<TaxPayer>> {
        let records = self.repo.list_all()?;
        debug!(
            "event=taxpayer_list module=service status=ok count={}",
            records.len()
        );
        Ok(records)
    }

    /// Looks up one taxpayer by exact TID.
    pub fn search_tax_payer(&self, tid: &str) -> RepoResult<Option<TaxPayer>> {
        let found = self.repo.find_by_tid(tid)?;
        debug!(
            "event=taxpayer_search module=service status=ok found={}",
            found.is_some()
        );
        Ok(found)
    }
}
