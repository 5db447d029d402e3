use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One registry row: an ordered map from column name to string value.
///
/// Records inside a [`Table`](crate::Table) always carry the table's full
/// column set; missing values are materialized as empty strings, never
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: IndexMap<String, String>,
}

/// How a field should be rendered in a detail view.
///
/// A display contract only: link detection never affects filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDisplay<'a> {
    /// Render as an actionable hyperlink.
    Hyperlink(&'a str),
    /// Render as plain text.
    Text(&'a str),
}

impl Record {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Record {
            fields: IndexMap::new(),
        }
    }

    /// Get a field value, or `""` if the column is not present
    #[must_use]
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map_or("", String::as_str)
    }

    /// Set a field value
    pub fn set<S: Into<String>>(&mut self, column: &str, value: S) {
        self.fields.insert(column.to_string(), value.into());
    }

    /// The Institute value, the informal lookup key of the registry
    #[must_use]
    pub fn institute(&self) -> &str {
        self.get(crate::schema::INSTITUTE)
    }

    /// Column names carried by this record, in order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields carried by this record
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// How the given column should be rendered in a detail view.
    ///
    /// Columns whose name contains `"link"` (case-insensitive) render as a
    /// hyperlink when the value starts with `http://` or `https://`;
    /// everything else is plain text.
    #[must_use]
    pub fn display(&self, column: &str) -> FieldDisplay<'_> {
        let value = self.get(column);
        let is_link_column = column.to_ascii_lowercase().contains("link");
        if is_link_column && (value.starts_with("http://") || value.starts_with("https://")) {
            FieldDisplay::Hyperlink(value)
        } else {
            FieldDisplay::Text(value)
        }
    }

    /// Reorder fields to the given column order, filling gaps with `""`.
    ///
    /// Fields not named in `columns` are dropped; the table owns the column
    /// set, not the record.
    pub(crate) fn conform_to(&mut self, columns: &[String]) {
        let mut conformed = IndexMap::with_capacity(columns.len());
        for column in columns {
            let value = self.fields.shift_remove(column).unwrap_or_default();
            conformed.insert(column.clone(), value);
        }
        self.fields = conformed;
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}
