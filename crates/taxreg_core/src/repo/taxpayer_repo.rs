//! Taxpayer store contract and SQLite implementation.
//!
//! # Responsibility
//! - Declare the store contract every backend implements.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - TID uniqueness is enforced by the `UNIQUE` column, so the check and the
//!   write are one atomic statement.
//! - TID comparison uses SQLite's default BINARY collation (case-sensitive).
//! - Listing follows the autoincrement `seq` column, i.e. insertion order.
//! - Read paths reject rows that fail model validation.

use crate::db::DbError;
use crate::model::taxpayer::{TaxPayer, TaxPayerValidationError};
use rusqlite::{params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TAXPAYER_SELECT_SQL: &str = "SELECT
    tid,
    first_name,
    last_name,
    address
FROM taxpayers";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error taxonomy shared by every store backend.
#[derive(Debug)]
pub enum RepoError {
    /// A record with this TID already exists; nothing was written.
    DuplicateKey(String),
    /// Input rejected by model validation; nothing was written.
    InvalidArgument(TaxPayerValidationError),
    Db(DbError),
    InvalidData(String),
}

impl RepoError {
    /// Stable machine-readable code for boundary envelopes and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateKey(_) => "duplicate_key",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Db(_) | Self::InvalidData(_) => "store_error",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey(tid) => write!(f, "taxpayer with tid `{tid}` already exists"),
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted taxpayer data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::DuplicateKey(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<TaxPayerValidationError> for RepoError {
    fn from(value: TaxPayerValidationError) -> Self {
        Self::InvalidArgument(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store contract for taxpayer records.
pub trait TaxPayerRepository {
    /// Adds a new record; fails with `DuplicateKey` if the TID is taken.
    fn insert(&self, record: &TaxPayer) -> RepoResult<()>;
    /// Snapshot of every record in insertion order.
    fn list_all(&self) -> RepoResult<Vec<TaxPayer>>;
    /// Exact-match lookup by TID.
    fn find_by_tid(&self, tid: &str) -> RepoResult<Option<TaxPayer>>;
}

impl<R: TaxPayerRepository + ?Sized> TaxPayerRepository for &R {
    fn insert(&self, record: &TaxPayer) -> RepoResult<()> {
        (**self).insert(record)
    }

    fn list_all(&self) -> RepoResult<Vec<TaxPayer>> {
        (**self).list_all()
    }

    fn find_by_tid(&self, tid: &str) -> RepoResult<Option<TaxPayer>> {
        (**self).find_by_tid(tid)
    }
}

/// SQLite-backed taxpayer store.
pub struct SqliteTaxPayerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaxPayerRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaxPayerRepository for SqliteTaxPayerRepository<'_> {
    fn insert(&self, record: &TaxPayer) -> RepoResult<()> {
        record.validate()?;

        let result = self.conn.execute(
            "INSERT INTO taxpayers (tid, first_name, last_name, address)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                record.tid.as_str(),
                record.first_name.as_str(),
                record.last_name.as_str(),
                record.address.as_str(),
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(RepoError::DuplicateKey(record.tid.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn list_all(&self) -> RepoResult<Vec<TaxPayer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TAXPAYER_SELECT_SQL} ORDER BY seq ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_taxpayer_row(row)?);
        }

        Ok(records)
    }

    fn find_by_tid(&self, tid: &str) -> RepoResult<Option<TaxPayer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TAXPAYER_SELECT_SQL} WHERE tid = ?1;"))?;
        let mut rows = stmt.query([tid])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_taxpayer_row(row)?));
        }

        Ok(None)
    }
}

fn parse_taxpayer_row(row: &Row<'_>) -> RepoResult<TaxPayer> {
    let record = TaxPayer {
        tid: row.get("tid")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        address: row.get("address")?,
    };
    record
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("{err} in taxpayers.tid")))?;
    Ok(record)
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.code == ErrorCode::ConstraintViolation
                && inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
