//! Scan command implementation
//!
//! This module implements the `scan` command for counting WiFi-connected
//! devices on an interface.

use crate::adapters::scan::{ArpScanScanner, DeviceScanner};
use crate::config::load_config;
use clap::Args;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Network interface to scan (defaults to the configured interface)
    pub interface: Option<String>,

    /// Fail with an error instead of reporting zero devices
    #[arg(long)]
    pub strict: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting scan command");

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let interface = self
            .interface
            .clone()
            .unwrap_or_else(|| config.scan.interface.clone());

        let scanner = ArpScanScanner::from_config(&config.scan);

        println!("📡 Scanning {interface} for connected devices...");
        println!();

        if self.strict {
            let report = match scanner.discover(&interface).await {
                Ok(r) => r,
                Err(e) => {
                    tracing::error!(error = %e, "Scan failed");
                    eprintln!("Scan failed: {e}");
                    return Ok(5); // Fatal error exit code
                }
            };

            for device in &report.devices {
                println!(
                    "  {}  {}  {}",
                    device.mac,
                    device.ip.as_deref().unwrap_or("-"),
                    device.name.as_deref().unwrap_or("-")
                );
            }
            println!();
            println!("Number of connected devices: {}", report.device_count());
        } else {
            // Best-effort mode: any failure counts as zero devices
            let count = scanner.discover_count_or_zero(&interface).await;
            println!("Number of connected devices: {count}");
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_args_defaults() {
        let args = ScanArgs {
            interface: None,
            strict: false,
        };

        assert!(args.interface.is_none());
        assert!(!args.strict);
    }

    #[test]
    fn test_scan_args_with_interface() {
        let args = ScanArgs {
            interface: Some("en0".to_string()),
            strict: true,
        };

        assert_eq!(args.interface, Some("en0".to_string()));
        assert!(args.strict);
    }
}
