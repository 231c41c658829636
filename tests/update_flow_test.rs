//! Integration tests for the full update cycle against a real CSV file
//!
//! These tests verify that:
//! - A matched update mutates exactly the expected cells on disk
//! - Zero matches and dry runs leave the file byte-identical
//! - A failed computation never corrupts the file
//! - Matching is a case-insensitive substring check

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use triage::adapters::store::{CsvRecordStore, RecordStore};
use triage::core::update::UpdateCoordinator;
use triage::domain::errors::TriageError;
use triage::domain::NameFragment;

const FIXTURE: &str = "\
X,Y,NAME,CITY,BEDS,TTL_STAFF,TRAUMA,HELIPAD,No of Access Points connected,Patients,Suggestive_Factor
-76.60,39.29,MERCY MEDICAL CENTER,BALTIMORE,200,500,1,0,12,300,0.51
-76.59,39.30,JOHNS HOPKINS HOSPITAL,BALTIMORE,1000,3000,1,1,40,800,0.9
-76.63,39.31,UNION MEMORIAL HOSPITAL,BALTIMORE,240,700,0,1,8,250,0.47
";

fn write_fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("us_hospital_locations.csv");
    std::fs::write(&path, FIXTURE).unwrap();
    path
}

#[tokio::test]
async fn test_update_writes_expected_cells() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let store = Arc::new(CsvRecordStore::new(&path));
    let coordinator = UpdateCoordinator::new(store.clone());
    let fragment = NameFragment::new("MERCY").unwrap();

    let summary = coordinator.execute(&fragment, 10).await.unwrap();
    assert_eq!(summary.records_updated, 1);
    assert_eq!(summary.updates[0].name, "MERCY MEDICAL CENTER");
    assert_eq!(summary.updates[0].access_points_connected, 22.0);
    assert_eq!(summary.updates[0].patients, 306.0);

    let collection = store.load().await.unwrap();
    let mercy = &collection.rows()[0];
    assert_eq!(mercy.access_points_connected.value(), 22.0);
    assert_eq!(mercy.patients.value(), 306.0);

    // Same arithmetic the updater performs, so exact equality holds.
    let expected = ((200.0 / 306.0) * (500.0 / 306.0) + (1.0 + 0.0)) / 2.0;
    assert_eq!(mercy.suggestive_factor.value(), expected);

    // Untouched rows and passthrough columns survive verbatim.
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("-76.59,39.30,JOHNS HOPKINS HOSPITAL,BALTIMORE,1000,3000,1,1,40,800,0.9"));
    assert!(written.contains("-76.60,39.29,MERCY MEDICAL CENTER,BALTIMORE,200,500,1,0,22,306,"));
}

#[tokio::test]
async fn test_zero_matches_leaves_file_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let coordinator = UpdateCoordinator::new(Arc::new(CsvRecordStore::new(&path)));
    let fragment = NameFragment::new("SAINT NOWHERE").unwrap();

    let summary = coordinator.execute(&fragment, 25).await.unwrap();
    assert!(summary.is_noop());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), FIXTURE);
}

#[tokio::test]
async fn test_dry_run_leaves_file_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let coordinator =
        UpdateCoordinator::new(Arc::new(CsvRecordStore::new(&path))).with_dry_run(true);
    let fragment = NameFragment::new("HOPKINS").unwrap();

    let summary = coordinator.execute(&fragment, 10).await.unwrap();
    assert_eq!(summary.records_updated, 1);
    assert!(summary.dry_run);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), FIXTURE);
}

#[tokio::test]
async fn test_matching_is_case_insensitive_substring() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let coordinator = UpdateCoordinator::new(Arc::new(CsvRecordStore::new(&path)));
    let fragment = NameFragment::new("union memorial").unwrap();

    let summary = coordinator.execute(&fragment, 5).await.unwrap();
    assert_eq!(summary.records_updated, 1);
    assert_eq!(summary.updates[0].name, "UNION MEMORIAL HOSPITAL");
}

#[tokio::test]
async fn test_fragment_matching_multiple_records_updates_all() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let store = Arc::new(CsvRecordStore::new(&path));
    let coordinator = UpdateCoordinator::new(store.clone());
    let fragment = NameFragment::new("HOSPITAL").unwrap();

    let summary = coordinator.execute(&fragment, 4).await.unwrap();
    assert_eq!(summary.records_updated, 2);

    let collection = store.load().await.unwrap();
    assert_eq!(collection.rows()[0].access_points_connected.value(), 12.0);
    assert_eq!(collection.rows()[1].access_points_connected.value(), 44.0);
    assert_eq!(collection.rows()[2].access_points_connected.value(), 12.0);
}

#[tokio::test]
async fn test_computation_failure_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty_hospital.csv");
    let fixture = FIXTURE.replace(",12,300,", ",12,0,");
    std::fs::write(&path, &fixture).unwrap();

    let coordinator = UpdateCoordinator::new(Arc::new(CsvRecordStore::new(&path)));
    let fragment = NameFragment::new("MERCY").unwrap();

    // Zero devices on a zero-patient record leaves patients at 0, so the
    // factor is undefined and the cycle must abort before the write.
    let err = coordinator.execute(&fragment, 0).await.unwrap_err();
    assert!(matches!(err, TriageError::Computation(_)));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), fixture);
}

#[tokio::test]
async fn test_repeated_updates_accumulate() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    let store = Arc::new(CsvRecordStore::new(&path));
    let coordinator = UpdateCoordinator::new(store.clone());
    let fragment = NameFragment::new("MERCY").unwrap();

    coordinator.execute(&fragment, 10).await.unwrap();
    coordinator.execute(&fragment, 10).await.unwrap();

    let collection = store.load().await.unwrap();
    assert_eq!(collection.rows()[0].access_points_connected.value(), 32.0);
    assert_eq!(collection.rows()[0].patients.value(), 312.0);
}

#[tokio::test]
async fn test_missing_file_is_a_data_source_error() {
    let coordinator =
        UpdateCoordinator::new(Arc::new(CsvRecordStore::new("/no/such/hospitals.csv")));
    let fragment = NameFragment::new("MERCY").unwrap();

    let err = coordinator.execute(&fragment, 10).await.unwrap_err();
    assert!(matches!(err, TriageError::DataSource(_)));
}
