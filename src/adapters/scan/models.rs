//! Scan result models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One device seen on the network
///
/// Only the MAC is guaranteed; IP and name are best-effort extras pulled
/// from the same output line and may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredDevice {
    /// Hardware address, lowercased
    pub mac: String,

    /// IPv4 address, when the line carried one
    pub ip: Option<String>,

    /// Vendor or host name text, when the line carried one
    pub name: Option<String>,
}

/// Result of one device scan
///
/// Devices are deduplicated by hardware address, so `device_count` is the
/// number of unique MACs seen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Interface that was scanned
    pub interface: String,

    /// Unique devices, in first-seen order
    pub devices: Vec<DiscoveredDevice>,

    /// When the scan finished
    pub scanned_at: DateTime<Utc>,
}

impl ScanReport {
    /// Creates a report stamped with the current time
    pub fn new(interface: impl Into<String>, devices: Vec<DiscoveredDevice>) -> Self {
        Self {
            interface: interface.into(),
            devices,
            scanned_at: Utc::now(),
        }
    }

    /// Number of unique devices found
    pub fn device_count(&self) -> u64 {
        self.devices.len() as u64
    }
}
