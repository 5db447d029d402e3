//! Table module for registro
//!
//! Provides the in-memory institution registry: an ordered table of records
//! over the canonical eleven-column schema, a case-insensitive free-text
//! filter, single-row editing keyed by Institute name, and xlsx
//! import/export.
//!
//! # Examples
//!
//! ## Editing and filtering
//!
//! ```
//! use registro_table::{EntryFields, Table};
//!
//! let mut table = Table::new();
//! table.add_record(&EntryFields {
//!     institute: "Liceo A".to_string(),
//!     email: "a@x.it".to_string(),
//!     ..EntryFields::default()
//! });
//!
//! let found = table.filter("a@x");
//! assert_eq!(found.row_count(), 1);
//! ```
//!
//! ## Round-tripping a workbook
//!
//! ```
//! use registro_table::{EntryFields, Table};
//!
//! let mut table = Table::new();
//! table.add_record(&EntryFields {
//!     institute: "Liceo A".to_string(),
//!     ..EntryFields::default()
//! });
//!
//! let bytes = table.to_xlsx_bytes().unwrap();
//! let loaded = Table::from_xlsx_bytes(&bytes).unwrap();
//! assert_eq!(loaded, table);
//! ```

mod editor;
mod error;
mod record;
pub mod schema;
mod table;
mod xlsx;

/// Re-export editor types.
pub use editor::{EntryFields, TableChange};
/// Re-export table error types.
pub use error::{Result, TableError};
/// Re-export record types.
pub use record::{FieldDisplay, Record};
/// Re-export the table type.
pub use table::Table;
/// Re-export download conventions.
pub use xlsx::{DOWNLOAD_FILE_NAME, XLSX_MIME};
