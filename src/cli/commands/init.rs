//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "triage.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Triage configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Generate configuration content
        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        // Write to file
        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Point store.path at your hospital record CSV");
                println!("  3. Set scan.interface to your WiFi interface (wlan0, en0, ...)");
                println!("  4. Validate configuration: triage validate-config");
                println!("  5. Run an update: triage update <name-fragment>");
                println!("  6. Serve the records: triage serve");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Triage Configuration File
# Hospital capacity signals from WiFi device counts

# Runtime environment (development, staging, production)
environment = "development"

[application]
name = "triage"
log_level = "info"
dry_run = false

[store]
path = "us_hospital_locations.csv"

[scan]
interface = "wlan0"
command = "arp-scan"
use_sudo = true
timeout_seconds = 30

[server]
bind = "127.0.0.1:8000"
cors_enabled = true

[logging]
local_enabled = true
local_path = "/var/log/triage"
local_rotation = "daily"
local_max_size_mb = 100
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Triage Configuration File
# Hospital capacity signals from WiFi device counts
#
# This file contains all configuration options with examples and explanations.

# ============================================================================
# Runtime Environment
# ============================================================================
# One of: development, staging, production.
# Production forbids wildcard CORS on the HTTP surface.
environment = "development"

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Application name (used in logging and the service-info endpoint)
name = "triage"

# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode: apply updates in memory, never write the record file
dry_run = false

# ============================================================================
# Record Store
# ============================================================================
[store]
# Path to the hospital record CSV file. The header row must carry at least:
# NAME, BEDS, TTL_STAFF, TRAUMA, HELIPAD,
# "No of Access Points connected", Patients, Suggestive_Factor.
# Any other columns pass through untouched.
path = "us_hospital_locations.csv"

# ============================================================================
# Device Scan
# ============================================================================
[scan]
# WiFi interface to scan (wlan0 on most Linux systems, en0 on macOS)
interface = "wlan0"

# Scan tool command. Must emit one line per responding host carrying a
# MAC address, the way arp-scan does.
command = "arp-scan"

# Run the scan tool through sudo (arp-scan needs raw socket access)
use_sudo = true

# Deadline for one scan invocation; a hung tool fails with a timeout
# instead of blocking forever
timeout_seconds = 30

# ============================================================================
# HTTP Read Surface
# ============================================================================
[server]
# Bind address for `triage serve`
bind = "127.0.0.1:8000"

# Allow any origin via CORS. Required by the map frontend in development;
# forbidden when environment = "production".
cors_enabled = true

# ============================================================================
# Logging
# ============================================================================
[logging]
# Enable JSON file logging alongside console output
local_enabled = true

# Log directory
local_path = "/var/log/triage"

# Rotation strategy (daily, hourly, size)
local_rotation = "daily"

# Maximum log file size in MB
local_max_size_mb = 100
"#
        .to_string()
    }
}
