use thiserror::Error;

/// Errors that can occur during table operations
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Workbook write error: {0}")]
    Xlsx(String),

    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    #[error("No record found for institute '{institute}'")]
    RecordNotFound { institute: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
