use crate::error::{Result, TableError};
use crate::record::Record;
use crate::table::Table;
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use rust_xlsxwriter::Workbook;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

/// File name used for the re-exported workbook download.
pub const DOWNLOAD_FILE_NAME: &str = "enti_aggiornato.xlsx";

/// MIME type identifying the download as a spreadsheet workbook.
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Convert a calamine cell to its textual representation.
///
/// The registry treats every cell as text; numbers read back from Excel are
/// rendered without a trailing `.0` so a phone number stored as `123`
/// round-trips as `"123"`.
fn data_to_string(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::Bool(b) => b.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_to_string(*f),
        Data::String(s) => s.clone(),
        Data::DateTime(dt) => float_to_string(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#ERROR: {e:?}"),
    }
}

fn float_to_string(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 9e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

fn parse_err(e: &XlsxError) -> TableError {
    TableError::Parse(e.to_string())
}

impl Table {
    /// Parse an uploaded workbook's first sheet into a table.
    ///
    /// Row 0 is the header row. Missing cells become `""` and missing
    /// canonical columns are appended, so the result always carries the full
    /// schema. Fails with [`TableError::Parse`] when the byte stream is not
    /// a well-formed workbook.
    pub fn from_xlsx_bytes(bytes: &[u8]) -> Result<Self> {
        let mut workbook: Xlsx<Cursor<&[u8]>> =
            Xlsx::new(Cursor::new(bytes)).map_err(|e| parse_err(&e))?;

        let sheet_names = workbook.sheet_names().to_vec();
        let first = sheet_names
            .first()
            .ok_or_else(|| TableError::Parse("workbook has no sheets".to_string()))?;
        let range = workbook
            .worksheet_range(first)
            .map_err(|e| parse_err(&e))?;

        Self::from_range(range.rows())
    }

    /// Load a table from a workbook on disk (first sheet)
    pub fn from_xlsx_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut workbook: Xlsx<BufReader<File>> =
            open_workbook(path.as_ref()).map_err(|e| parse_err(&e))?;

        let sheet_names = workbook.sheet_names().to_vec();
        let first = sheet_names
            .first()
            .ok_or_else(|| TableError::Parse("workbook has no sheets".to_string()))?;
        let range = workbook
            .worksheet_range(first)
            .map_err(|e| parse_err(&e))?;

        Self::from_range(range.rows())
    }

    fn from_range<'a, I>(mut rows: I) -> Result<Self>
    where
        I: Iterator<Item = &'a [Data]>,
    {
        let Some(header) = rows.next() else {
            return Ok(Table::new());
        };
        let columns: Vec<String> = header.iter().map(data_to_string).collect();
        let mut table = Table::with_columns(columns.clone());

        for row in rows {
            let record: Record = columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let value = row.get(i).map(data_to_string).unwrap_or_default();
                    (column.clone(), value)
                })
                .collect();
            table.push_row(record);
        }

        tracing::debug!(
            rows = table.row_count(),
            columns = table.columns().len(),
            "imported workbook"
        );
        Ok(table)
    }

    /// Serialize the table to workbook bytes: one sheet, header row plus
    /// data rows, in the current column set and row order.
    pub fn to_xlsx_bytes(&self) -> Result<Vec<u8>> {
        let mut workbook = self.build_workbook()?;
        let bytes = workbook
            .save_to_buffer()
            .map_err(|e| TableError::Xlsx(e.to_string()))?;
        tracing::debug!(bytes = bytes.len(), rows = self.row_count(), "exported workbook");
        Ok(bytes)
    }

    /// Save the table as a workbook on disk
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = self.build_workbook()?;
        workbook
            .save(path.as_ref())
            .map_err(|e| TableError::Xlsx(e.to_string()))?;
        Ok(())
    }

    fn build_workbook(&self) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col_idx, column) in self.columns().iter().enumerate() {
            let col = u16::try_from(col_idx)
                .map_err(|_| TableError::Xlsx("column index overflow".to_string()))?;
            worksheet
                .write_string(0, col, column)
                .map_err(|e| TableError::Xlsx(e.to_string()))?;
        }

        for (row_idx, record) in self.rows().iter().enumerate() {
            let row = u32::try_from(row_idx + 1)
                .map_err(|_| TableError::Xlsx("row index overflow".to_string()))?;
            for (col_idx, column) in self.columns().iter().enumerate() {
                let col = u16::try_from(col_idx)
                    .map_err(|_| TableError::Xlsx("column index overflow".to_string()))?;
                worksheet
                    .write_string(row, col, record.get(column))
                    .map_err(|e| TableError::Xlsx(e.to_string()))?;
            }
        }

        Ok(workbook)
    }
}
