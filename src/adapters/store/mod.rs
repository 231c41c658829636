//! Record store adapters
//!
//! This module provides the record store abstraction and its CSV
//! implementation:
//! - [`RecordStore`] - trait the updater and HTTP surface depend on
//! - [`CsvRecordStore`] - CSV file implementation with atomic saves

pub mod csv;
pub mod traits;

pub use csv::CsvRecordStore;
pub use traits::RecordStore;
