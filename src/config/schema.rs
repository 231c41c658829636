//! Configuration schema types
//!
//! This module defines the configuration structure for Triage.

use serde::{Deserialize, Serialize};

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main Triage configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// Record store configuration
    pub store: StoreConfig,

    /// Device scan configuration
    #[serde(default)]
    pub scan: ScanConfig,

    /// HTTP read surface configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TriageConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.store.validate()?;
        self.scan.validate()?;
        self.server.validate(&self.environment)?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name (used in logging and the service-info endpoint)
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (apply updates in memory, never write the record file)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("application.name cannot be empty".to_string());
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the hospital record CSV file
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl StoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.is_empty() {
            return Err("store.path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Device scan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Network interface to scan (e.g. wlan0, en0)
    #[serde(default = "default_interface")]
    pub interface: String,

    /// Scan tool command name
    #[serde(default = "default_scan_command")]
    pub command: String,

    /// Run the scan tool through sudo
    ///
    /// arp-scan needs raw socket access, which usually means root. Disable
    /// this when the binary carries the capability itself or when running
    /// as root already.
    #[serde(default = "default_true")]
    pub use_sudo: bool,

    /// Scan timeout in seconds
    ///
    /// A hung scan tool would otherwise block the caller indefinitely, so
    /// every invocation runs under this deadline.
    #[serde(default = "default_scan_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ScanConfig {
    fn validate(&self) -> Result<(), String> {
        if self.interface.is_empty() {
            return Err("scan.interface cannot be empty".to_string());
        }

        if self.command.is_empty() {
            return Err("scan.command cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("scan.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            command: default_scan_command(),
            use_sudo: true,
            timeout_seconds: default_scan_timeout_seconds(),
        }
    }
}

/// HTTP read surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Allow any origin via CORS
    ///
    /// The map frontend is served from a different origin, so this is on by
    /// default. It MUST be disabled in production environments (enforced by
    /// validation); put a reverse proxy with an explicit allow list in front
    /// instead.
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

impl ServerConfig {
    fn validate(&self, environment: &Environment) -> Result<(), String> {
        if self.bind.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!(
                "server.bind must be a socket address like 127.0.0.1:8000, got '{}'",
                self.bind
            ));
        }

        // Wildcard CORS in production exposes the record data to any page
        // the browser visits.
        if *environment == Environment::Production && self.cors_enabled {
            return Err(
                "Wildcard CORS cannot be enabled in production environments. \
                Set 'cors_enabled = false' and front the service with a reverse proxy \
                that allows only the origins you trust. \
                For development/testing environments, set 'environment = \"development\"' \
                or 'environment = \"staging\"'."
                    .to_string(),
            );
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_enabled: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,

    /// Maximum log file size in MB
    #[serde(default = "default_local_max_size_mb")]
    pub local_max_size_mb: usize,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "size"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_max_size_mb == 0 {
            return Err("logging.local_max_size_mb must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
            local_max_size_mb: default_local_max_size_mb(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "triage".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_store_path() -> String {
    "us_hospital_locations.csv".to_string()
}

fn default_interface() -> String {
    "wlan0".to_string()
}

fn default_scan_command() -> String {
    "arp-scan".to_string()
}

fn default_true() -> bool {
    true
}

fn default_scan_timeout_seconds() -> u64 {
    30
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_local_path() -> String {
    "/var/log/triage".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

fn default_local_max_size_mb() -> usize {
    100
}
