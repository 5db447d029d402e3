//! # registro-core
//!
//! Session state and workflows for the registro institution registry.
//!
//! This crate ties the pieces together for a host presentation layer:
//! - [`Session`]: per-user identity + loaded table
//! - login/logout against an injected [`CredentialStore`]
//! - upload/download of the session's table as a workbook
//! - error union for everything a workflow can report
//!
//! The core never touches a UI framework; the host calls these functions
//! and decides how to render results.
//!
//! # Examples
//!
//! ```
//! use registro_core::{login, logout, Session};
//! use registro_auth::{CredentialStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.register("user@example.it", "segreta", "segreta").unwrap();
//!
//! let mut session = Session::new();
//! login(&store, &mut session, "user@example.it", "segreta").unwrap();
//! assert_eq!(session.current_user(), Some("user@example.it"));
//!
//! logout(&mut session);
//! assert!(session.current_user().is_none());
//! ```

/// Error types and result aliases.
pub mod error;
/// Per-user session state.
pub mod session;

/// Re-export core error types.
pub use error::{CoreError, CoreResult};
/// Re-export the session type.
pub use session::Session;

/// Re-export the table crate's public surface.
pub use registro_table::{
    schema, EntryFields, FieldDisplay, Record, Table, TableChange, TableError,
    DOWNLOAD_FILE_NAME, XLSX_MIME,
};

/// Re-export the auth crate's public surface.
pub use registro_auth::{AuthError, CredentialStore, MemoryStore, ValidationError};

/// Verify credentials against the injected store and bind the identity to
/// the session.
///
/// On failure the session is left untouched.
pub fn login<S: CredentialStore>(
    store: &S,
    session: &mut Session,
    identity: &str,
    password: &str,
) -> CoreResult<()> {
    store.verify(identity, password)?;
    session.set_current_user(identity);
    tracing::debug!(identity, "login succeeded");
    Ok(())
}

/// Clear the session's identity. The loaded table, if any, is retained;
/// table state is independent of auth state.
pub fn logout(session: &mut Session) {
    if let Some(identity) = session.current_user() {
        tracing::debug!(identity, "logout");
    }
    session.clear_user();
}

/// Parse an uploaded workbook and install it as the session's table,
/// returning the imported row count.
///
/// A parse failure is terminal for the upload attempt and leaves any
/// previously loaded table untouched.
pub fn upload(session: &mut Session, bytes: &[u8]) -> CoreResult<usize> {
    let table = Table::from_xlsx_bytes(bytes)?;
    let rows = table.row_count();
    session.set_table(table);
    Ok(rows)
}

/// Serialize the session's table for download as a workbook.
///
/// Use [`DOWNLOAD_FILE_NAME`] and [`XLSX_MIME`] for the artifact's name and
/// content type.
pub fn download(session: &Session) -> CoreResult<Vec<u8>> {
    let table = session.table().ok_or(CoreError::NoTable)?;
    Ok(table.to_xlsx_bytes()?)
}
