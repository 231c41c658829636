//! Record update orchestration
//!
//! This module provides the core update logic for Triage, including:
//! - The suggestive factor formula and scaling constant
//! - In-memory application of a device count to matching records
//! - Load/apply/save coordination with dry-run support
//! - Summary and reporting

pub mod coordinator;
pub mod formula;
pub mod summary;
pub mod updater;

pub use coordinator::UpdateCoordinator;
pub use formula::{suggestive_factor, PATIENTS_PER_DEVICE};
pub use summary::{RecordUpdate, UpdateSummary};
pub use updater::apply_device_count;
