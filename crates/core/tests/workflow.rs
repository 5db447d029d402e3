use registro_core::{
    download, login, logout, schema, upload, CoreError, CredentialStore, EntryFields, MemoryStore,
    Session, Table, TableChange, DOWNLOAD_FILE_NAME, XLSX_MIME,
};

fn upload_bytes() -> Vec<u8> {
    let mut table = Table::new();
    table.add_record(&EntryFields {
        institute: "Liceo A".to_string(),
        email: "a@x.it".to_string(),
        phone: "123".to_string(),
        ..EntryFields::default()
    });
    table.add_record(&EntryFields {
        institute: "Liceo B".to_string(),
        email: "b@x.it".to_string(),
        phone: "456".to_string(),
        ..EntryFields::default()
    });
    table.to_xlsx_bytes().unwrap()
}

#[test]
fn test_full_session_workflow() {
    let store = MemoryStore::new();
    store
        .register("user@example.it", "segreta", "segreta")
        .unwrap();

    let mut session = Session::new();

    // Auth gates access.
    assert!(login(&store, &mut session, "user@example.it", "sbagliata").is_err());
    assert!(!session.is_authenticated());
    login(&store, &mut session, "user@example.it", "segreta").unwrap();

    // Upload populates the table.
    let rows = upload(&mut session, &upload_bytes()).unwrap();
    assert_eq!(rows, 2);

    // Consult: filter the loaded table.
    let found = session.table().unwrap().filter("a@x");
    assert_eq!(found.row_count(), 1);
    assert_eq!(found.row(0).unwrap().institute(), "Liceo A");

    // Edit: delete one row, add another.
    let table = session.table_mut().unwrap();
    assert_eq!(table.delete_record("Liceo A").unwrap(), TableChange::Deleted);
    table.add_record(&EntryFields {
        institute: "Liceo C".to_string(),
        ..EntryFields::default()
    });

    // Download and re-import: edits survive the round trip.
    let bytes = download(&session).unwrap();
    let reloaded = Table::from_xlsx_bytes(&bytes).unwrap();
    let institutes: Vec<&str> = reloaded.rows().iter().map(|r| r.institute()).collect();
    assert_eq!(institutes, vec!["Liceo B", "Liceo C"]);
}

#[test]
fn test_download_before_upload_fails() {
    let session = Session::new();
    assert!(matches!(download(&session), Err(CoreError::NoTable)));
}

#[test]
fn test_failed_upload_keeps_previous_table() {
    let mut session = Session::new();
    upload(&mut session, &upload_bytes()).unwrap();

    let err = upload(&mut session, b"garbage").unwrap_err();
    assert!(matches!(err, CoreError::Table(_)));
    assert_eq!(session.table().unwrap().row_count(), 2);
}

#[test]
fn test_logout_requires_new_login_but_keeps_table() {
    let store = MemoryStore::new();
    store
        .register("user@example.it", "segreta", "segreta")
        .unwrap();

    let mut session = Session::new();
    login(&store, &mut session, "user@example.it", "segreta").unwrap();
    upload(&mut session, &upload_bytes()).unwrap();

    logout(&mut session);
    assert!(!session.is_authenticated());
    assert!(session.has_table());

    login(&store, &mut session, "user@example.it", "segreta").unwrap();
    assert_eq!(session.current_user(), Some("user@example.it"));
}

#[test]
fn test_download_conventions() {
    assert_eq!(DOWNLOAD_FILE_NAME, "enti_aggiornato.xlsx");
    assert!(XLSX_MIME.contains("spreadsheetml"));
}

#[test]
fn test_session_serializes_for_hosts() {
    let mut session = Session::new();
    session.set_current_user("user@example.it");
    upload(&mut session, &upload_bytes()).unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.current_user(), Some("user@example.it"));
    assert_eq!(restored.table().unwrap().row_count(), 2);
    assert_eq!(
        restored.table().unwrap().row(0).unwrap().get(schema::EMAIL),
        "a@x.it"
    );
}
