use taxreg_core::db::{open_db, open_db_in_memory};
use taxreg_core::{RepoError, SqliteTaxPayerRepository, TaxPayer, TaxPayerRepository};

#[test]
fn records_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteTaxPayerRepository::new(&conn);
        repo.insert(&TaxPayer::new("T2", "Bo", "Ng", "2 Oak Ave"))
            .unwrap();
        repo.insert(&TaxPayer::new("T1", "Ann", "Lee", "1 Main St"))
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteTaxPayerRepository::new(&conn);
    let tids: Vec<String> = repo
        .list_all()
        .unwrap()
        .into_iter()
        .map(|record| record.tid)
        .collect();
    assert_eq!(tids, vec!["T2", "T1"]);

    let err = repo
        .insert(&TaxPayer::new("T1", "Other", "Person", "Elsewhere"))
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateKey(_)));
    assert_eq!(err.code(), "duplicate_key");
}

#[test]
fn two_connections_share_uniqueness() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.sqlite3");

    let first = open_db(&path).unwrap();
    let second = open_db(&path).unwrap();
    SqliteTaxPayerRepository::new(&first)
        .insert(&TaxPayer::new("T1", "Ann", "Lee", "1 Main St"))
        .unwrap();

    let err = SqliteTaxPayerRepository::new(&second)
        .insert(&TaxPayer::new("T1", "Bob", "Kim", "9 Elm Rd"))
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateKey(_)));
}

#[test]
fn corrupt_persisted_row_is_reported_not_masked() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO taxpayers (tid, first_name, last_name, address) VALUES ('', 'X', 'Y', 'Z');",
        [],
    )
    .unwrap();
    let repo = SqliteTaxPayerRepository::new(&conn);

    let err = repo.list_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
    assert_eq!(err.code(), "store_error");
}

#[test]
fn non_unique_constraint_failures_stay_db_errors() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE taxpayers;").unwrap();
    let repo = SqliteTaxPayerRepository::new(&conn);

    let err = repo
        .insert(&TaxPayer::new("T1", "Ann", "Lee", "1 Main St"))
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}
