//! External system integrations for Triage.
//!
//! This module provides adapters for the two outside dependencies:
//!
//! - [`store`] - Record file storage (trait-based, CSV implementation)
//! - [`scan`] - WiFi device discovery (trait-based, arp-scan implementation)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with in-memory implementations. The update flow never
//! talks to a file or a subprocess directly; it goes through the
//! [`store::RecordStore`] and [`scan::DeviceScanner`] traits.
//!
//! ```rust,no_run
//! use triage::adapters::scan::{DeviceScanner, FixedCountScanner};
//! use triage::adapters::store::CsvRecordStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = CsvRecordStore::new("us_hospital_locations.csv");
//! let scanner = FixedCountScanner::new(10);
//!
//! let count = scanner.discover_count_or_zero("wlan0").await;
//! # Ok(())
//! # }
//! ```

pub mod scan;
pub mod store;
