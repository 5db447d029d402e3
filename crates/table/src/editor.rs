use crate::error::{Result, TableError};
use crate::record::Record;
use crate::schema;
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// The six fields a user can set through the editor forms.
///
/// The remaining canonical columns (entity type, population figures) are
/// only ever populated by import and are untouched by edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFields {
    pub institute: String,
    pub official_site: String,
    pub email: String,
    pub phone: String,
    pub link: String,
    pub manager: String,
}

impl EntryFields {
    fn apply_to(&self, record: &mut Record) {
        record.set(schema::INSTITUTE, self.institute.trim());
        record.set(schema::OFFICIAL_SITE, self.official_site.trim());
        record.set(schema::EMAIL, self.email.trim());
        record.set(schema::PHONE, self.phone.trim());
        record.set(schema::LINK, self.link.trim());
        record.set(schema::MANAGER, self.manager.trim());
    }
}

/// Explicit notification that a mutating operation changed the table,
/// so the caller can decide how to refresh its view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableChange {
    /// A row was appended.
    Added,
    /// An existing row was overwritten in place.
    Updated,
    /// A row was removed.
    Deleted,
}

impl Table {
    /// Append a new record built from the editable fields.
    ///
    /// Each field is trimmed; every other column is filled with `""`. No
    /// uniqueness check is made on the Institute name.
    pub fn add_record(&mut self, fields: &EntryFields) -> TableChange {
        let mut record = Record::new();
        fields.apply_to(&mut record);
        self.push_row(record);
        TableChange::Added
    }

    /// Overwrite the editable fields of the first record whose Institute
    /// equals `institute` (exact, case-sensitive).
    ///
    /// The Institute field itself may change, which moves the row to a new
    /// lookup key. Duplicate Institute names target the first match. On a
    /// missing target the table is left unchanged.
    pub fn update_record(&mut self, institute: &str, fields: &EntryFields) -> Result<TableChange> {
        let index = self
            .position_of(institute)
            .ok_or_else(|| TableError::RecordNotFound {
                institute: institute.to_string(),
            })?;
        fields.apply_to(&mut self.rows_mut()[index]);
        Ok(TableChange::Updated)
    }

    /// Remove the first record whose Institute equals `institute`.
    ///
    /// Remaining rows stay a contiguous 0-based sequence. Duplicate
    /// Institute names target the first match.
    pub fn delete_record(&mut self, institute: &str) -> Result<TableChange> {
        let index = self
            .position_of(institute)
            .ok_or_else(|| TableError::RecordNotFound {
                institute: institute.to_string(),
            })?;
        self.rows_mut().remove(index);
        Ok(TableChange::Deleted)
    }

    /// Distinct Institute values, in first-occurrence order.
    ///
    /// With a filter, only values containing it case-insensitively are
    /// returned.
    #[must_use]
    pub fn distinct_institutes(&self, filter: Option<&str>) -> Vec<String> {
        let needle = filter.map(str::to_lowercase);
        let mut seen: Vec<String> = Vec::new();
        for record in self.rows() {
            let institute = record.institute();
            if seen.iter().any(|s| s == institute) {
                continue;
            }
            if let Some(needle) = &needle {
                if !institute.to_lowercase().contains(needle.as_str()) {
                    continue;
                }
            }
            seen.push(institute.to_string());
        }
        seen
    }
}
