//! Device scanner abstraction
//!
//! This module defines the trait that device discovery implementations must
//! provide, so the update flow can be tested without invoking a real network
//! scan.

use crate::adapters::scan::models::{DiscoveredDevice, ScanReport};
use crate::domain::Result;
use async_trait::async_trait;

/// Device scanner trait
///
/// `discover` is the strict interface with typed errors. Callers that want
/// the historical swallow-everything behavior use `discover_count_or_zero`,
/// which logs the failure and reports zero devices.
#[async_trait]
pub trait DeviceScanner: Send + Sync {
    /// Run a scan and return the full report
    ///
    /// # Errors
    ///
    /// Returns `ScanError` when the tool is missing, fails to launch, runs
    /// past its deadline, exits non-zero, or produces undecodable output.
    async fn discover(&self, interface: &str) -> Result<ScanReport>;

    /// Best-effort device count: any failure degrades to zero
    ///
    /// Callers needing strict error signaling should use [`discover`]
    /// instead.
    ///
    /// [`discover`]: DeviceScanner::discover
    async fn discover_count_or_zero(&self, interface: &str) -> u64 {
        match self.discover(interface).await {
            Ok(report) => report.device_count(),
            Err(e) => {
                tracing::warn!(
                    interface,
                    error = %e,
                    "Device scan failed, reporting zero devices"
                );
                0
            }
        }
    }
}

/// Scanner that reports a preset device count
///
/// Used by tests and by `triage update --device-count`, where the caller
/// already knows the count and no live scan should run.
pub struct FixedCountScanner {
    count: u64,
}

impl FixedCountScanner {
    /// Creates a scanner that always reports `count` devices
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

#[async_trait]
impl DeviceScanner for FixedCountScanner {
    async fn discover(&self, interface: &str) -> Result<ScanReport> {
        // Locally-administered placeholder addresses, one per counted device.
        let devices = (0..self.count)
            .map(|i| DiscoveredDevice {
                mac: format!("02:00:00:00:{:02x}:{:02x}", i / 256, i % 256),
                ip: None,
                name: None,
            })
            .collect();
        Ok(ScanReport::new(interface, devices))
    }
}
