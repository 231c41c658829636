//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Triage configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Load configuration (load_config validates on success)
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Environment: {:?}", config.environment);
        println!("  Record File: {}", config.store.path);
        println!("  Scan Interface: {}", config.scan.interface);
        println!("  Scan Command: {}", config.scan.command);
        println!("  Scan Timeout: {}s", config.scan.timeout_seconds);
        println!("  Server Bind: {}", config.server.bind);
        println!("  CORS Enabled: {}", config.server.cors_enabled);
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_creation() {
        let args = ValidateArgs {};
        // Just ensure it compiles and can be created
        let _ = format!("{args:?}");
    }
}
