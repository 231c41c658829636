//! Integration tests for the HTTP read surface
//!
//! Each test binds an ephemeral port, serves the router over a real socket,
//! and exercises it with a real HTTP client.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::watch;
use triage::adapters::store::CsvRecordStore;
use triage::server::{build_router, serve, AppState};

const FIXTURE: &str = "\
X,NAME,BEDS,TTL_STAFF,TRAUMA,HELIPAD,No of Access Points connected,Patients,Suggestive_Factor
-76.60,MERCY MEDICAL CENTER,200,500,1,0,12,300,0.51
-76.59,JOHNS HOPKINS HOSPITAL,1000,3000,1,1,40,800,0.9
";

fn write_fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("hospitals.csv");
    std::fs::write(&path, FIXTURE).unwrap();
    path
}

/// Serves the router for `path` on an ephemeral port, returning the base URL
async fn spawn_server(path: PathBuf) -> String {
    let state = AppState::new(Arc::new(CsvRecordStore::new(path)));
    let router = build_router(state, false);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_list_hospitals_returns_full_collection() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(write_fixture(&dir)).await;

    let response = reqwest::get(format!("{base}/api/hospitals")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let hospitals = body["hospitals"].as_array().unwrap();
    assert_eq!(hospitals.len(), 2);
    assert_eq!(hospitals[0]["NAME"], "MERCY MEDICAL CENTER");
    assert_eq!(hospitals[0]["Patients"], "300");
    assert_eq!(hospitals[1]["NAME"], "JOHNS HOPKINS HOSPITAL");
    assert_eq!(hospitals[1]["No of Access Points connected"], "40");
}

#[tokio::test]
async fn test_list_hospitals_preserves_column_order() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(write_fixture(&dir)).await;

    let body = reqwest::get(format!("{base}/api/hospitals"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // serde_json's preserve_order feature keeps keys in file column order.
    let x = body.find("\"X\"").unwrap();
    let name = body.find("\"NAME\"").unwrap();
    let factor = body.find("\"Suggestive_Factor\"").unwrap();
    assert!(x < name);
    assert!(name < factor);
}

#[tokio::test]
async fn test_missing_record_file_returns_500() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(dir.path().join("no-such-file.csv")).await;

    let response = reqwest::get(format!("{base}/api/hospitals")).await.unwrap();
    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(write_fixture(&dir)).await;

    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_service_info_endpoint() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(write_fixture(&dir)).await;

    let body: serde_json::Value = reqwest::get(format!("{base}/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["service"], "triage");
}

#[tokio::test]
async fn test_updates_are_visible_on_next_request() {
    use triage::core::update::UpdateCoordinator;
    use triage::domain::NameFragment;

    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    let base = spawn_server(path.clone()).await;

    let store = Arc::new(CsvRecordStore::new(path));
    let coordinator = UpdateCoordinator::new(store);
    let fragment = NameFragment::new("MERCY").unwrap();
    coordinator.execute(&fragment, 10).await.unwrap();

    // Every request re-reads the file, so the update shows up immediately.
    let body: serde_json::Value = reqwest::get(format!("{base}/api/hospitals"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["hospitals"][0]["No of Access Points connected"], "22");
    assert_eq!(body["hospitals"][0]["Patients"], "306");
}

#[tokio::test]
async fn test_serve_stops_on_shutdown_signal() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    // Find a free port, then hand the address to serve.
    let probe = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = probe.local_addr().unwrap();
    drop(probe);

    let state = AppState::new(Arc::new(CsvRecordStore::new(path)));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handle = tokio::spawn(serve(addr, state, false, shutdown_rx));

    // Give the listener a moment to come up, then signal shutdown.
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    shutdown_tx.send(true).unwrap();

    let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
        .await
        .expect("server did not shut down in time")
        .unwrap();
    assert!(result.is_ok());
}
