use crate::error::{Result, TableError};
use crate::record::Record;
use crate::schema;
use serde::{Deserialize, Serialize};

/// An ordered sequence of [`Record`]s sharing one column set.
///
/// The column set is always a superset of the canonical eleven columns:
/// [`Table::normalize`] appends any missing canonical column (with empty
/// values) while preserving extra columns from the source workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    /// Create an empty table with the canonical column set
    #[must_use]
    pub fn new() -> Self {
        Table {
            columns: schema::CANONICAL_COLUMNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Create a table with the given source columns, normalized to the
    /// canonical superset
    #[must_use]
    pub fn with_columns(columns: Vec<String>) -> Self {
        let mut table = Table {
            columns,
            rows: Vec::new(),
        };
        table.normalize();
        table
    }

    /// Column names, in table order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The rows of the table, in order
    #[must_use]
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Get a row by index (0-based)
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Record> {
        self.rows.get(index)
    }

    /// Number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of one column, in row order
    pub fn column_values(&self, column: &str) -> Result<Vec<String>> {
        if !self.columns.iter().any(|c| c == column) {
            return Err(TableError::ColumnNotFound {
                name: column.to_string(),
            });
        }
        Ok(self
            .rows
            .iter()
            .map(|record| record.get(column).to_string())
            .collect())
    }

    /// Append a row, conforming it to the table's column set
    pub fn push_row(&mut self, mut record: Record) {
        record.conform_to(&self.columns);
        self.rows.push(record);
    }

    /// Ensure the column set covers the canonical schema.
    ///
    /// Missing canonical columns are appended in canonical order after the
    /// source columns; every row is conformed to the resulting set, so no
    /// cell is ever absent.
    pub fn normalize(&mut self) {
        for canonical in schema::CANONICAL_COLUMNS {
            if !self.columns.iter().any(|c| c == canonical) {
                self.columns.push(canonical.to_string());
            }
        }
        for record in &mut self.rows {
            record.conform_to(&self.columns);
        }
    }

    /// Filter rows by a free-text query over the searched columns.
    ///
    /// An empty query returns the table unchanged. Otherwise a row is kept
    /// when the query appears case-insensitively as a substring of Entity
    /// Type, Institute, Email or Phone. Row order is preserved (stable
    /// filter), which makes the operation idempotent.
    #[must_use]
    pub fn filter(&self, query: &str) -> Table {
        if query.is_empty() {
            return self.clone();
        }
        let needle = query.to_lowercase();
        let rows = self
            .rows
            .iter()
            .filter(|record| {
                schema::SEARCHED_COLUMNS
                    .iter()
                    .any(|column| record.get(column).to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// First record whose Institute equals `institute` (exact,
    /// case-sensitive), as used by the detail view
    #[must_use]
    pub fn find_record(&self, institute: &str) -> Option<&Record> {
        self.rows
            .iter()
            .find(|record| record.institute() == institute)
    }

    /// Index of the first record matching `institute`
    pub(crate) fn position_of(&self, institute: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|record| record.institute() == institute)
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Record> {
        &mut self.rows
    }
}
