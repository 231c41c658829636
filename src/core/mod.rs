//! Core business logic for Triage.
//!
//! This module contains the core business logic and orchestration for record
//! updates.
//!
//! # Modules
//!
//! - [`update`] - Update orchestration, the suggestive factor formula, and
//!   reporting
//!
//! # Update Workflow
//!
//! The typical update workflow:
//!
//! 1. **Discover**: Count WiFi devices via the scan adapter (or take a
//!    caller-supplied count)
//! 2. **Load**: Read the full record collection from the store
//! 3. **Apply**: Adjust access points and patients for every record matching
//!    the name fragment, then recompute the suggestive factor
//! 4. **Persist**: Atomically write the full collection back, unless nothing
//!    matched or the run is a dry run
//! 5. **Report**: Generate an update summary
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use triage::adapters::store::CsvRecordStore;
//! use triage::core::update::UpdateCoordinator;
//! use triage::domain::NameFragment;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(CsvRecordStore::new("us_hospital_locations.csv"));
//! let coordinator = UpdateCoordinator::new(store);
//!
//! let fragment = NameFragment::new("union memorial")?;
//! let summary = coordinator.execute(&fragment, 10).await?;
//!
//! println!("Updated: {}", summary.records_updated);
//! # Ok(())
//! # }
//! ```

pub mod update;
