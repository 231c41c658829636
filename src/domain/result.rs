//! Result type alias for Triage
//!
//! This module provides a convenient Result type alias that uses TriageError
//! as the error type.

use super::errors::TriageError;

/// Result type alias for Triage operations
///
/// This is a convenience type alias that uses `TriageError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use triage::domain::result::Result;
/// use triage::domain::errors::TriageError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(TriageError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, TriageError>;
