//! Error types for registro.

use registro_auth::{AuthError, ValidationError};
use registro_table::TableError;
use thiserror::Error;

/// Result type for registro workflows.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors surfaced by the registro workflows.
///
/// All variants are recoverable: the caller reports the message and the user
/// re-attempts the action. Nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Bad registration input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Bad credentials.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Malformed upload or missing edit/delete target.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Download or edit requested before any upload.
    #[error("No table loaded; upload a workbook first")]
    NoTable,
}
