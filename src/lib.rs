// Triage - Hospital capacity signals from WiFi device counts
// Copyright (c) 2025 Triage Contributors
// Licensed under the MIT License

//! # Triage - Hospital capacity signals from WiFi device counts
//!
//! Triage maintains a CSV of hospital location records and keeps each
//! record's "suggestive factor" (a capacity/triage heuristic) current by
//! folding in the number of WiFi devices seen near the hospital.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Loading** hospital records from a CSV file into an ordered collection
//! - **Updating** matching records with a device count and recomputing the
//!   suggestive factor
//! - **Persisting** the full collection back atomically (temp file + rename)
//! - **Discovering** device counts via arp-scan behind an injectable trait
//! - **Serving** the collection over a minimal HTTP read surface
//!
//! ## Architecture
//!
//! Triage follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (update orchestration, formula, reporting)
//! - [`adapters`] - External integrations (record file, device scanning)
//! - [`server`] - HTTP read surface
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use triage::adapters::store::CsvRecordStore;
//! use triage::core::update::UpdateCoordinator;
//! use triage::domain::NameFragment;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = triage::config::load_config("triage.toml")?;
//!
//!     // Create the update coordinator
//!     let store = Arc::new(CsvRecordStore::new(&config.store.path));
//!     let coordinator = UpdateCoordinator::new(store);
//!
//!     // Apply a device count to every record matching the fragment
//!     let fragment = NameFragment::new("union memorial")?;
//!     let summary = coordinator.execute(&fragment, 10).await?;
//!
//!     println!("Updated {} records", summary.records_updated);
//!     Ok(())
//! }
//! ```
//!
//! ## The Suggestive Factor
//!
//! The derived field is recomputed on every update with a fixed formula:
//!
//! ```text
//! suggestive_factor = ((beds / patients) * (total_staff / patients)
//!                      + (trauma + helipad)) / 2
//! ```
//!
//! using the post-update patient count (`patients += devices * 0.6`). Both
//! constants are compatibility-critical; see [`core::update::formula`].
//!
//! ## Device Discovery
//!
//! Device counts come from [`adapters::scan::DeviceScanner`]. The strict
//! interface returns typed errors; the best-effort interface preserves the
//! historical policy of degrading every failure to a count of zero:
//!
//! ```rust,no_run
//! use triage::adapters::scan::{ArpScanScanner, DeviceScanner};
//! use std::time::Duration;
//!
//! # async fn example() {
//! let scanner = ArpScanScanner::new("arp-scan", true, Duration::from_secs(30));
//! let count = scanner.discover_count_or_zero("wlan0").await;
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Triage uses the [`domain::TriageError`] type for all errors:
//!
//! ```rust,no_run
//! use triage::domain::TriageError;
//!
//! fn example() -> Result<(), TriageError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = triage::config::load_config("triage.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Triage uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting update");
//! warn!(fragment = "union memorial", "No records matched");
//! error!(error = "scan failed", "Update aborted");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod server;
