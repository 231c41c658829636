//! Update command implementation
//!
//! This module implements the `update` command for applying a WiFi device
//! count to matching hospital records.

use crate::adapters::scan::{ArpScanScanner, DeviceScanner, FixedCountScanner};
use crate::adapters::store::CsvRecordStore;
use crate::config::load_config;
use crate::core::update::UpdateCoordinator;
use crate::domain::errors::TriageError;
use crate::domain::NameFragment;
use clap::Args;
use std::sync::Arc;

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Hospital name fragment to match (case-insensitive substring)
    pub name_fragment: String,

    /// Override the record file path from configuration
    #[arg(long)]
    pub file: Option<String>,

    /// Use this device count instead of running a live scan
    #[arg(long)]
    pub device_count: Option<u64>,

    /// Override the scan interface from configuration
    #[arg(long)]
    pub interface: Option<String>,

    /// Dry run mode - apply updates in memory, never write the record file
    #[arg(long)]
    pub dry_run: bool,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl UpdateArgs {
    /// Execute the update command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting update command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(file) = &self.file {
            tracing::info!(file = %file, "Overriding record file from CLI");
            config.store.path = file.clone();
        }
        if let Some(interface) = &self.interface {
            tracing::info!(interface = %interface, "Overriding scan interface from CLI");
            config.scan.interface = interface.clone();
        }
        let dry_run = self.dry_run || config.application.dry_run;

        // Validate the name fragment
        let fragment = match NameFragment::new(self.name_fragment.clone()) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Invalid name fragment: {e}");
                return Ok(2);
            }
        };

        // Determine the device count: caller-supplied, or a live best-effort
        // scan (which reports zero on any failure, per policy)
        let scanner: Arc<dyn DeviceScanner> = match self.device_count {
            Some(count) => {
                tracing::info!(count, "Using device count from CLI");
                Arc::new(FixedCountScanner::new(count))
            }
            None => Arc::new(ArpScanScanner::from_config(&config.scan)),
        };
        let device_count = scanner.discover_count_or_zero(&config.scan.interface).await;

        // Dry run mode
        if dry_run {
            tracing::info!("Dry run mode enabled - the record file will not be written");
            println!("🔍 DRY RUN MODE - The record file will not be written");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !dry_run {
            println!("Update Configuration:");
            println!("  Record file: {}", config.store.path);
            println!("  Name fragment: {fragment}");
            println!("  Device count: {device_count}");
            println!();
            print!("Proceed with update? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Update cancelled.");
                return Ok(0);
            }
        }

        // Execute the update
        let store = Arc::new(CsvRecordStore::new(&config.store.path));
        let coordinator = UpdateCoordinator::new(store).with_dry_run(dry_run);

        println!("🚀 Applying device count {device_count} to records matching '{fragment}'...");
        println!();

        let summary = match coordinator.execute(&fragment, device_count).await {
            Ok(s) => s,
            Err(e @ TriageError::DataSource(_)) => {
                tracing::error!(error = %e, "Update failed");
                eprintln!("Update failed: {e}");
                return Ok(4); // Data source error exit code
            }
            Err(e) => {
                tracing::error!(error = %e, "Update failed");
                eprintln!("Update failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        // Display summary
        println!("📊 Update Summary:");
        println!("  Device count: {}", summary.device_count);
        println!("  Records updated: {}", summary.records_updated);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        for update in &summary.updates {
            println!();
            println!("  {}", update.name);
            println!("    Access points: {}", update.access_points_connected);
            println!("    Patients: {:.1}", update.patients);
            println!("    Suggestive factor: {:.4}", update.suggestive_factor);
        }
        println!();

        if summary.is_noop() {
            println!("⚠️  No records matched '{fragment}'. File left untouched.");
        } else if summary.dry_run {
            println!("✅ Dry run completed. No changes were written.");
        } else {
            println!("✅ Update completed successfully!");
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_args_defaults() {
        let args = UpdateArgs {
            name_fragment: "mercy".to_string(),
            file: None,
            device_count: None,
            interface: None,
            dry_run: false,
            yes: false,
        };

        assert_eq!(args.name_fragment, "mercy");
        assert!(args.file.is_none());
        assert!(args.device_count.is_none());
        assert!(!args.dry_run);
        assert!(!args.yes);
    }

    #[test]
    fn test_update_args_with_overrides() {
        let args = UpdateArgs {
            name_fragment: "union memorial".to_string(),
            file: Some("other.csv".to_string()),
            device_count: Some(10),
            interface: Some("en0".to_string()),
            dry_run: true,
            yes: true,
        };

        assert_eq!(args.file, Some("other.csv".to_string()));
        assert_eq!(args.device_count, Some(10));
        assert_eq!(args.interface, Some("en0".to_string()));
        assert!(args.dry_run);
        assert!(args.yes);
    }
}
