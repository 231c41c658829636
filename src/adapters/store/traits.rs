//! Record store abstraction
//!
//! This module defines the trait that record store implementations must
//! provide. The updater and the HTTP surface both work against this trait,
//! so they can be tested with in-memory doubles instead of a real file.

use crate::domain::RecordCollection;
use crate::domain::Result;
use async_trait::async_trait;

/// Record store trait for loading and persisting hospital records
///
/// A load never returns a partial collection; a save writes the full
/// collection or leaves the previous contents untouched.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Load the full record collection
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError` when the file is missing, unreadable, or
    /// malformed.
    async fn load(&self) -> Result<RecordCollection>;

    /// Persist the full record collection, replacing the previous contents
    ///
    /// The write must be atomic with respect to failure: a crash mid-write
    /// must not leave a truncated file.
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError` when the collection cannot be serialized or
    /// moved into place.
    async fn save(&self, collection: &RecordCollection) -> Result<()>;
}
