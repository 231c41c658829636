//! Configuration management for Triage.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Triage uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`TRIAGE_*` prefix)
//! - Default values for optional settings
//! - Comprehensive validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use triage::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("triage.toml")?;
//!
//! // Access configuration sections
//! println!("Record file: {}", config.store.path);
//! println!("Scan interface: {}", config.scan.interface);
//! println!("Server bind: {}", config.server.bind);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`ApplicationConfig`] - Application settings (name, log level, dry run)
//! - [`StoreConfig`] - Record file location
//! - [`ScanConfig`] - Device scan tool, interface, and timeout
//! - [`ServerConfig`] - HTTP bind address and CORS policy
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "triage"
//! log_level = "info"
//!
//! [store]
//! path = "us_hospital_locations.csv"
//!
//! [scan]
//! interface = "wlan0"
//! timeout_seconds = 30
//!
//! [server]
//! bind = "127.0.0.1:8000"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution, and
//! `TRIAGE_<SECTION>_<KEY>` variables to override individual settings:
//!
//! ```bash
//! export TRIAGE_STORE_PATH="/data/hospitals.csv"
//! export TRIAGE_SCAN_INTERFACE="en0"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, Environment, LoggingConfig, ScanConfig, ServerConfig, StoreConfig,
    TriageConfig,
};
