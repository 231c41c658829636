//! Ordered record collection
//!
//! A `RecordCollection` holds the exact header of the record file plus its
//! rows in file order. Load, mutate, and save all go through this type, and
//! none of them reorder anything, which is what keeps a zero-match update
//! byte-identical on disk.

use crate::domain::record::HospitalRecord;

/// Full contents of one record file
///
/// The header is the column list exactly as read, and rows keep their file
/// order. A collection is created fresh on every load and serialized in full
/// on save; there is no incremental persistence.
#[derive(Debug, Clone)]
pub struct RecordCollection {
    header: Vec<String>,
    rows: Vec<HospitalRecord>,
}

impl RecordCollection {
    /// Creates a collection from a header and rows in file order
    pub fn new(header: Vec<String>, rows: Vec<HospitalRecord>) -> Self {
        Self { header, rows }
    }

    /// Column names in file order
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Rows in file order
    pub fn rows(&self) -> &[HospitalRecord] {
        &self.rows
    }

    /// Mutable rows, still in file order
    pub fn rows_mut(&mut self) -> &mut [HospitalRecord] {
        &mut self.rows
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders each record as a `(column -> text)` mapping in header order
    ///
    /// This is the shape the HTTP surface serves. `serde_json`'s
    /// `preserve_order` feature keeps the insertion order, so clients see
    /// the columns exactly as the file lays them out.
    pub fn to_mappings(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .map(|record| {
                self.header
                    .iter()
                    .map(|column| {
                        let text = record.field_text(column).unwrap_or("");
                        (column.clone(), serde_json::Value::String(text.to_string()))
                    })
                    .collect()
            })
            .collect()
    }
}
