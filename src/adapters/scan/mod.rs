//! Device scan adapters
//!
//! This module provides device discovery behind a trait seam:
//! - [`DeviceScanner`] - trait with strict and best-effort interfaces
//! - [`ArpScanScanner`] - arp-scan subprocess implementation with a timeout
//! - [`FixedCountScanner`] - injectable preset-count implementation

pub mod arp;
pub mod models;
pub mod traits;

pub use arp::{parse_scan_output, ArpScanScanner};
pub use models::{DiscoveredDevice, ScanReport};
pub use traits::{DeviceScanner, FixedCountScanner};
