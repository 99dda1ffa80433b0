use taxreg_core::{InMemoryTaxPayerRepository, RepoError, TaxPayer, TaxPayerService};

#[test]
fn service_covers_add_list_and_search() {
    let service = TaxPayerService::new(InMemoryTaxPayerRepository::new());

    service
        .add_tax_payer("T1", "Ann", "Lee", "1 Main St")
        .unwrap();
    assert_eq!(
        service.get_tax_payers().unwrap(),
        vec![TaxPayer::new("T1", "Ann", "Lee", "1 Main St")]
    );
    assert_eq!(
        service.search_tax_payer("T1").unwrap(),
        Some(TaxPayer::new("T1", "Ann", "Lee", "1 Main St"))
    );
    assert_eq!(service.search_tax_payer("T9").unwrap(), None);
}

#[test]
fn service_passes_store_errors_through() {
    let repo = InMemoryTaxPayerRepository::new();
    let service = TaxPayerService::new(&repo);

    service.add_tax_payer("T1", "Ann", "Lee", "1 Main St").unwrap();
    let duplicate = service
        .add_tax_payer("T1", "Bob", "Kim", "9 Elm Rd")
        .unwrap_err();
    assert!(matches!(duplicate, RepoError::DuplicateKey(_)));

    let invalid = service.add_tax_payer("", "Ann", "Lee", "1 Main St").unwrap_err();
    assert_eq!(invalid.code(), "invalid_argument");
    assert_eq!(repo.len(), 1);
}

#[test]
fn record_serializes_with_boundary_field_names_in_order() {
    let record = TaxPayer::new("T1", "Ann", "Lee", "1 Main St");
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json,
        r#"{"tid":"T1","firstName":"Ann","lastName":"Lee","address":"1 Main St"}"#
    );

    let parsed: TaxPayer = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
}
