//! Update summary and reporting
//!
//! This module defines structures for tracking and reporting update results.

use std::time::Duration;

/// Post-update state of one matched record
#[derive(Debug, Clone)]
pub struct RecordUpdate {
    /// Record name, verbatim from the file
    pub name: String,

    /// Access point count after the update
    pub access_points_connected: f64,

    /// Patient count after the update
    pub patients: f64,

    /// Recomputed suggestive factor
    pub suggestive_factor: f64,
}

/// Summary of an update operation
#[derive(Debug, Clone)]
pub struct UpdateSummary {
    /// Device count that was applied
    pub device_count: u64,

    /// Number of records matched and updated
    pub records_updated: usize,

    /// Per-record results, in file order
    pub updates: Vec<RecordUpdate>,

    /// Duration of the whole load/apply/save cycle
    pub duration: Duration,

    /// Whether the file write was skipped for a dry run
    pub dry_run: bool,
}

impl UpdateSummary {
    /// Create a new empty update summary
    pub fn new(device_count: u64) -> Self {
        Self {
            device_count,
            records_updated: 0,
            updates: Vec::new(),
            duration: Duration::from_secs(0),
            dry_run: false,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record the per-record results
    pub fn with_updates(mut self, updates: Vec<RecordUpdate>) -> Self {
        self.records_updated = updates.len();
        self.updates = updates;
        self
    }

    /// Mark the summary as a dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether nothing matched (a valid outcome, never an error)
    pub fn is_noop(&self) -> bool {
        self.records_updated == 0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            device_count = self.device_count,
            records_updated = self.records_updated,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis(),
            "Update completed"
        );

        for update in &self.updates {
            tracing::info!(
                name = %update.name,
                access_points = update.access_points_connected,
                patients = update.patients,
                suggestive_factor = update.suggestive_factor,
                "Record updated"
            );
        }
    }
}

impl Default for UpdateSummary {
    fn default() -> Self {
        Self::new(0)
    }
}
