//! In-memory taxpayer store.
//!
//! # Responsibility
//! - Serve the store contract without any storage engine, for process-wide
//!   registries and tests.
//!
//! # Invariants
//! - One mutex guards both the ordered records and the TID index, so readers
//!   never observe a half-applied insert.
//! - `index[tid]` is always the position of that record in `records`.

use crate::model::taxpayer::{TaxPayer, Tid};
use crate::repo::taxpayer_repo::{RepoError, RepoResult, TaxPayerRepository};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Table {
    records: Vec<TaxPayer>,
    index: HashMap<Tid, usize>,
}

/// Mutex-guarded in-memory taxpayer store. `Send + Sync`.
#[derive(Debug, Default)]
pub struct InMemoryTaxPayerRepository {
    table: Mutex<Table>,
}

impl InMemoryTaxPayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every mutation finishes before the guard drops, so a poisoned table is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TaxPayerRepository for InMemoryTaxPayerRepository {
    fn insert(&self, record: &TaxPayer) -> RepoResult<()> {
        record.validate()?;

        let mut table = self.lock();
        let position = table.records.len();
        match table.index.entry(record.tid.clone()) {
            Entry::Occupied(_) => return Err(RepoError::DuplicateKey(record.tid.clone())),
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
        }
        table.records.push(record.clone());
        Ok(())
    }

    fn list_all(&self) -> RepoResult<Vec<TaxPayer>> {
        Ok(self.lock().records.clone())
    }

    fn find_by_tid(&self, tid: &str) -> RepoResult<Option<TaxPayer>> {
        let table = self.lock();
        Ok(table
            .index
            .get(tid)
            .and_then(|&position| table.records.get(position))
            .cloned())
    }
}
