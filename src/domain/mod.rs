//! Domain models and types for Triage.
//!
//! This module contains the core domain models, types, and business rules for
//! Triage.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Record model** ([`HospitalRecord`], [`NumericCell`], [`RecordCollection`])
//! - **Matching policy** ([`NameFragment`])
//! - **Error types** ([`TriageError`], [`DataSourceError`], [`ComputationError`], [`ScanError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Triage uses the newtype pattern for the name fragment so the matching
//! policy (non-empty, case-insensitive substring) lives in one place:
//!
//! ```rust
//! use triage::domain::NameFragment;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fragment = NameFragment::new("union memorial")?;
//! assert!(fragment.matches("MEDSTAR UNION MEMORIAL HOSPITAL"));
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, TriageError>`]:
//!
//! ```rust
//! use triage::domain::{Result, TriageError};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = triage::config::load_config("triage.toml")?;
//!     Ok(())
//! }
//! ```

pub mod collection;
pub mod errors;
pub mod fragment;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use collection::RecordCollection;
pub use errors::{ComputationError, DataSourceError, ScanError, TriageError};
pub use fragment::NameFragment;
pub use record::{columns, HospitalRecord, NumericCell};
pub use result::Result;
