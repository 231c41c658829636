//! Name fragment matching
//!
//! This module provides the newtype wrapper that carries the record-matching
//! policy: a record is selected when its name contains the fragment as a
//! case-insensitive substring.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hospital name fragment newtype wrapper
///
/// A validated, non-empty search fragment. Matching is a case-insensitive
/// substring test against a record's `NAME` column, so `"union memorial"`
/// selects `"MEDSTAR UNION MEMORIAL HOSPITAL"`.
///
/// # Examples
///
/// ```
/// use triage::domain::fragment::NameFragment;
/// use std::str::FromStr;
///
/// let fragment = NameFragment::from_str("union memorial").unwrap();
/// assert!(fragment.matches("MEDSTAR UNION MEMORIAL HOSPITAL"));
/// assert!(!fragment.matches("JOHNS HOPKINS HOSPITAL"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameFragment(String);

impl NameFragment {
    /// Creates a new NameFragment from a string
    ///
    /// # Arguments
    ///
    /// * `fragment` - The search fragment
    ///
    /// # Returns
    ///
    /// Returns `Ok(NameFragment)` if the fragment is non-empty, `Err` otherwise
    pub fn new(fragment: impl Into<String>) -> Result<Self, String> {
        let fragment = fragment.into();
        if fragment.trim().is_empty() {
            return Err("Name fragment cannot be empty".to_string());
        }
        Ok(Self(fragment))
    }

    /// Returns the fragment as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Tests whether `name` contains this fragment, ignoring case
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.0.to_lowercase())
    }
}

impl fmt::Display for NameFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NameFragment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for NameFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
