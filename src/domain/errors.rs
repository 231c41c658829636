//! Domain error types
//!
//! This module defines the error hierarchy for Triage. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Triage error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum TriageError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Record store errors (file missing, unreadable, malformed)
    #[error("Data source error: {0}")]
    DataSource(#[from] DataSourceError),

    /// Derived-field computation errors
    #[error("Computation error: {0}")]
    Computation(#[from] ComputationError),

    /// Device discovery errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Record-store specific errors
///
/// Errors raised while loading or persisting the hospital record file.
/// A load that fails never returns a partial collection; a save that fails
/// never leaves a truncated file behind.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// Record file does not exist
    #[error("Record file not found: {0}")]
    NotFound(String),

    /// Record file exists but could not be read
    #[error("Failed to read record file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    /// Header row is missing or empty
    #[error("Record file {0} has no header row")]
    MissingHeader(String),

    /// A required column is absent from the header
    #[error("Record file is missing required column '{column}'")]
    MissingColumn { column: String },

    /// A data row has a different number of fields than the header
    #[error("Row {row} has {found} fields, expected {expected}")]
    InconsistentRow {
        row: u64,
        expected: usize,
        found: usize,
    },

    /// A known numeric column holds an unparseable value
    #[error("Row {row}, column '{column}': cannot parse '{value}' as a number")]
    InvalidNumber {
        row: u64,
        column: String,
        value: String,
    },

    /// Serializing a row back to the file failed
    #[error("Failed to write record file {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    /// Moving the finished temp file into place failed
    #[error("Failed to replace record file {path}: {reason}")]
    PersistFailed { path: String, reason: String },
}

/// Computation errors for derived fields
///
/// The suggestive-factor formula divides by the post-update patient count,
/// so a non-positive count makes the formula undefined. The whole update
/// aborts before anything is written.
#[derive(Debug, Error)]
pub enum ComputationError {
    /// Post-update patient count is zero or negative
    #[error("Record '{name}': patient count {patients} after update; suggestive factor is undefined for counts <= 0")]
    NonPositivePatients { name: String, patients: f64 },
}

/// Device discovery errors
///
/// Raised by the strict scanner interface. The best-effort interface maps
/// all of these to a count of zero.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Scan tool binary is not installed or not on PATH
    #[error("Scan tool '{0}' not found; is arp-scan installed?")]
    ToolNotFound(String),

    /// Scan tool could not be launched
    #[error("Failed to launch scan tool: {0}")]
    LaunchFailed(String),

    /// Scan tool ran past the configured deadline
    #[error("Scan timed out after {0} seconds")]
    Timeout(u64),

    /// Scan tool exited with a failure status
    #[error("Scan tool exited with {status}: {stderr}")]
    ToolFailed { status: String, stderr: String },

    /// Scan tool produced output that is not valid UTF-8
    #[error("Scan tool produced undecodable output: {0}")]
    OutputDecode(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for TriageError {
    fn from(err: std::io::Error) -> Self {
        TriageError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TriageError {
    fn from(err: serde_json::Error) -> Self {
        TriageError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for TriageError {
    fn from(err: toml::de::Error) -> Self {
        TriageError::Configuration(format!("TOML parse error: {err}"))
    }
}
