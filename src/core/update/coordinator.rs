//! Update coordinator - orchestrates the load/apply/save cycle
//!
//! One `execute` call is one full cycle: load the collection, apply the
//! device count in memory, and persist only when something actually changed
//! and the run is not a dry run. An error anywhere aborts before the write,
//! so the on-disk file is either the old contents or the fully-updated ones.

use crate::adapters::store::RecordStore;
use crate::core::update::summary::UpdateSummary;
use crate::core::update::updater::apply_device_count;
use crate::domain::{NameFragment, Result};
use crate::{log_update_complete, log_update_start};
use std::sync::Arc;
use std::time::Instant;

/// Update coordinator
///
/// The record file is a single shared mutable resource; callers must
/// serialize concurrent `execute` calls targeting the same store.
pub struct UpdateCoordinator {
    store: Arc<dyn RecordStore>,
    dry_run: bool,
}

impl UpdateCoordinator {
    /// Create a new update coordinator
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Apply updates in memory but never write the record file
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Execute one update cycle
    ///
    /// Loads the collection, updates every record matching `fragment`, and
    /// persists the full collection. Zero matches skips the write entirely,
    /// leaving the file byte-identical.
    ///
    /// # Errors
    ///
    /// - `DataSourceError` when the load or save fails
    /// - `ComputationError` when the formula is undefined for a matched
    ///   record; nothing is written in that case
    pub async fn execute(
        &self,
        fragment: &NameFragment,
        device_count: u64,
    ) -> Result<UpdateSummary> {
        let start_time = Instant::now();
        log_update_start!(fragment, device_count);

        let mut collection = self.store.load().await?;
        let updates = apply_device_count(&mut collection, fragment, device_count)?;

        if updates.is_empty() {
            tracing::info!(fragment = %fragment, "No records matched, file left untouched");
        } else if self.dry_run {
            tracing::info!(
                records = updates.len(),
                "Dry run, skipping record file write"
            );
        } else {
            self.store.save(&collection).await?;
        }

        let summary = UpdateSummary::new(device_count)
            .with_updates(updates)
            .with_dry_run(self.dry_run)
            .with_duration(start_time.elapsed());

        log_update_complete!(summary.records_updated, summary.duration);
        summary.log_summary();
        Ok(summary)
    }
}
