//! CSV record store implementation
//!
//! Loads hospital records from a comma-separated file with a header row and
//! writes them back atomically (temp file in the same directory, then rename
//! into place).

use crate::adapters::store::traits::RecordStore;
use crate::domain::errors::DataSourceError;
use crate::domain::record::columns;
use crate::domain::Result;
use crate::domain::{HospitalRecord, RecordCollection};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// CSV-backed record store
///
/// One store instance owns one file path. The file is read in full on every
/// load and rewritten in full on every save; there is no caching between
/// calls.
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    /// Creates a store for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for CsvRecordStore {
    async fn load(&self) -> Result<RecordCollection> {
        let collection = read_collection(&self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            records = collection.len(),
            "Loaded record collection"
        );
        Ok(collection)
    }

    async fn save(&self, collection: &RecordCollection) -> Result<()> {
        write_collection(&self.path, collection)?;
        tracing::debug!(
            path = %self.path.display(),
            records = collection.len(),
            "Persisted record collection"
        );
        Ok(())
    }
}

/// Reads a full collection from a CSV file
///
/// The header row determines the column set; every required column must be
/// present. Rows are parsed in file order and the whole read fails on the
/// first malformed row, never returning a partial collection.
fn read_collection(path: &Path) -> std::result::Result<RecordCollection, DataSourceError> {
    if !path.exists() {
        return Err(DataSourceError::NotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| DataSourceError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let header: Vec<String> = reader
        .headers()
        .map_err(|e| DataSourceError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if header.is_empty() || header.iter().all(|h| h.is_empty()) {
        return Err(DataSourceError::MissingHeader(path.display().to_string()));
    }

    for required in columns::REQUIRED {
        if !header.iter().any(|h| h == required) {
            return Err(DataSourceError::MissingColumn {
                column: required.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = (index + 1) as u64;
        let record = result.map_err(|e| map_row_error(path, row, e))?;

        if record.len() != header.len() {
            return Err(DataSourceError::InconsistentRow {
                row,
                expected: header.len(),
                found: record.len(),
            });
        }

        let pairs = header.iter().map(String::as_str).zip(record.iter());
        rows.push(HospitalRecord::from_columns(pairs, row)?);
    }

    Ok(RecordCollection::new(header, rows))
}

/// Writes a full collection back to a CSV file atomically
///
/// The serialized bytes go to a temp file in the target's directory first,
/// then rename into place, so a crash mid-write leaves the previous file
/// intact.
fn write_collection(
    path: &Path,
    collection: &RecordCollection,
) -> std::result::Result<(), DataSourceError> {
    let write_failed = |reason: String| DataSourceError::WriteFailed {
        path: path.display().to_string(),
        reason,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(collection.header())
        .map_err(|e| write_failed(e.to_string()))?;

    for record in collection.rows() {
        let fields = collection
            .header()
            .iter()
            .map(|column| record.field_text(column).unwrap_or(""));
        writer
            .write_record(fields)
            .map_err(|e| write_failed(e.to_string()))?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| write_failed(e.to_string()))?;

    // Temp file must live on the same filesystem as the target for the
    // rename to be atomic.
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut temp = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))
        .map_err(|e| write_failed(e.to_string()))?;
    temp.write_all(&data).map_err(|e| write_failed(e.to_string()))?;
    temp.flush().map_err(|e| write_failed(e.to_string()))?;

    temp.persist(path)
        .map_err(|e| DataSourceError::PersistFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(())
}

/// Maps a csv crate row error onto the store error taxonomy
fn map_row_error(path: &Path, row: u64, error: csv::Error) -> DataSourceError {
    match error.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => DataSourceError::InconsistentRow {
            row,
            expected: *expected_len as usize,
            found: *len as usize,
        },
        _ => DataSourceError::Unreadable {
            path: path.display().to_string(),
            reason: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FIXTURE: &str = "\
NAME,BEDS,TTL_STAFF,TRAUMA,HELIPAD,No of Access Points connected,Patients,Suggestive_Factor,WEBSITE
MERCY MEDICAL CENTER,200,500,1,0,12,300,0.51,https://mercy.example.com
JOHNS HOPKINS HOSPITAL,1000,3000,1,1,40,800,0.9,https://hopkins.example.com
";

    fn fixture_path(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("hospitals.csv");
        std::fs::write(&path, FIXTURE).unwrap();
        path
    }

    #[test]
    fn test_read_collection() {
        let dir = TempDir::new().unwrap();
        let path = fixture_path(&dir);

        let collection = read_collection(&path).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.header().len(), 9);
        assert_eq!(collection.rows()[0].name, "MERCY MEDICAL CENTER");
        assert_eq!(collection.rows()[1].beds.value(), 1000.0);
        assert_eq!(
            collection.rows()[0].field_text("WEBSITE"),
            Some("https://mercy.example.com")
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_collection(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, DataSourceError::NotFound(_)));
    }

    #[test]
    fn test_read_missing_required_column() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "NAME,BEDS\nA,1\n").unwrap();

        let err = read_collection(&path).unwrap_err();
        match err {
            DataSourceError::MissingColumn { column } => assert_eq!(column, "TTL_STAFF"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_inconsistent_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ragged.csv");
        let mut contents = FIXTURE.to_string();
        contents.push_str("SHORT ROW,1,2\n");
        std::fs::write(&path, contents).unwrap();

        let err = read_collection(&path).unwrap_err();
        match err {
            DataSourceError::InconsistentRow { row, expected, found } => {
                assert_eq!(row, 3);
                assert_eq!(expected, 9);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_invalid_number() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.csv");
        let contents = FIXTURE.replace(",300,", ",many,");
        std::fs::write(&path, contents).unwrap();

        let err = read_collection(&path).unwrap_err();
        assert!(matches!(err, DataSourceError::InvalidNumber { .. }));
    }

    #[test]
    fn test_write_round_trip_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = fixture_path(&dir);

        let collection = read_collection(&path).unwrap();
        write_collection(&path, &collection).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, FIXTURE);
    }

    #[test]
    fn test_write_creates_no_leftover_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = fixture_path(&dir);

        let collection = read_collection(&path).unwrap();
        write_collection(&path, &collection).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_store_trait_load_and_save() {
        let dir = TempDir::new().unwrap();
        let path = fixture_path(&dir);

        let store = CsvRecordStore::new(&path);
        let collection = store.load().await.unwrap();
        assert_eq!(collection.len(), 2);

        store.save(&collection).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), FIXTURE);
    }
}
