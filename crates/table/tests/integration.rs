use registro_table::{schema, EntryFields, FieldDisplay, Table, TableChange, TableError};

fn entry(institute: &str, email: &str, phone: &str) -> EntryFields {
    EntryFields {
        institute: institute.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        ..EntryFields::default()
    }
}

fn consult_table() -> Table {
    let mut table = Table::new();
    table.add_record(&entry("Liceo A", "a@x.it", "123"));
    table.add_record(&entry("Liceo B", "b@x.it", "456"));
    table
}

// ===== Filter Engine Tests =====

#[test]
fn test_filter_scenario() {
    let table = consult_table();

    let by_email = table.filter("a@x");
    assert_eq!(by_email.row_count(), 1);
    assert_eq!(by_email.row(0).unwrap().institute(), "Liceo A");

    let by_phone = table.filter("456");
    assert_eq!(by_phone.row_count(), 1);
    assert_eq!(by_phone.row(0).unwrap().institute(), "Liceo B");
}

#[test]
fn test_filter_identity_and_idempotence() {
    let table = consult_table();

    assert_eq!(table.filter(""), table);

    let once = table.filter("x.it");
    assert_eq!(once.filter("x.it"), once);
}

#[test]
fn test_filter_preserves_row_order() {
    let mut table = consult_table();
    table.add_record(&entry("Liceo C", "c@x.it", "789"));

    let filtered = table.filter("Liceo");
    let institutes: Vec<&str> = filtered.rows().iter().map(|r| r.institute()).collect();
    assert_eq!(institutes, vec!["Liceo A", "Liceo B", "Liceo C"]);
}

// ===== Editor Tests =====

#[test]
fn test_delete_then_add_ordering() {
    let mut table = consult_table();

    table.delete_record("Liceo A").unwrap();
    table.add_record(&entry("Liceo C", "c@x.it", "789"));

    let institutes: Vec<&str> = table.rows().iter().map(|r| r.institute()).collect();
    assert_eq!(institutes, vec!["Liceo B", "Liceo C"]);
}

#[test]
fn test_mutations_report_changes() {
    let mut table = Table::new();

    assert_eq!(
        table.add_record(&entry("Liceo A", "a@x.it", "123")),
        TableChange::Added
    );
    assert_eq!(
        table
            .update_record("Liceo A", &entry("Liceo A", "nuovo@x.it", "123"))
            .unwrap(),
        TableChange::Updated
    );
    assert_eq!(table.delete_record("Liceo A").unwrap(), TableChange::Deleted);
    assert!(table.is_empty());
}

#[test]
fn test_update_missing_leaves_table_unchanged() {
    let mut table = consult_table();
    let before = table.clone();

    let err = table
        .update_record("Liceo Z", &entry("Liceo Z", "", ""))
        .unwrap_err();
    assert!(matches!(err, TableError::RecordNotFound { .. }));
    assert_eq!(table, before);
}

// ===== Detail View Tests =====

#[test]
fn test_detail_lookup_and_link_rendering() {
    let mut table = Table::new();
    table.add_record(&EntryFields {
        institute: "Liceo A".to_string(),
        link: "https://liceoa.edu.it/concorsi".to_string(),
        official_site: "liceoa.edu.it".to_string(),
        ..EntryFields::default()
    });

    let record = table.find_record("Liceo A").unwrap();
    assert_eq!(
        record.display(schema::LINK),
        FieldDisplay::Hyperlink("https://liceoa.edu.it/concorsi")
    );
    assert_eq!(
        record.display(schema::OFFICIAL_SITE),
        FieldDisplay::Text("liceoa.edu.it")
    );
    assert!(table.find_record("Liceo Z").is_none());
}

// ===== Import/Export Tests =====

#[test]
fn test_edit_survives_roundtrip() {
    let mut table = consult_table();
    table
        .update_record("Liceo B", &entry("Liceo B", "nuovo@x.it", "456"))
        .unwrap();

    let bytes = table.to_xlsx_bytes().unwrap();
    let loaded = Table::from_xlsx_bytes(&bytes).unwrap();

    assert_eq!(loaded, table);
    assert_eq!(
        loaded.find_record("Liceo B").unwrap().get(schema::EMAIL),
        "nuovo@x.it"
    );
}

#[test]
fn test_export_carries_all_canonical_columns() {
    let table = consult_table();
    let loaded = Table::from_xlsx_bytes(&table.to_xlsx_bytes().unwrap()).unwrap();

    for column in schema::CANONICAL_COLUMNS {
        assert!(loaded.columns().iter().any(|c| c == column));
    }
}
