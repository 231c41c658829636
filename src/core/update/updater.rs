//! In-memory record update application
//!
//! Pure mutation of a loaded collection. Matching, the two field
//! adjustments, and the derived-field recomputation all happen here;
//! persistence is the coordinator's job.

use crate::core::update::formula::{suggestive_factor, PATIENTS_PER_DEVICE};
use crate::core::update::summary::RecordUpdate;
use crate::domain::errors::ComputationError;
use crate::domain::{NameFragment, RecordCollection};
use crate::domain::Result;

/// Applies a device count to every record matching the fragment
///
/// Per matched record, in order:
/// 1. `access_points_connected += device_count`
/// 2. `patients += device_count * 0.6`
/// 3. `suggestive_factor` recomputed from the post-update patient count
///
/// Zero matches is a valid outcome and returns an empty list. A record whose
/// post-update patient count is not positive fails the whole call with a
/// `ComputationError`; the caller must not persist the collection in that
/// case.
pub fn apply_device_count(
    collection: &mut RecordCollection,
    fragment: &NameFragment,
    device_count: u64,
) -> Result<Vec<RecordUpdate>> {
    let mut updates = Vec::new();

    for record in collection.rows_mut() {
        if !fragment.matches(&record.name) {
            continue;
        }

        let access_points = record.access_points_connected.value() + device_count as f64;
        let patients = record.patients.value() + device_count as f64 * PATIENTS_PER_DEVICE;

        let factor = suggestive_factor(
            record.beds.value(),
            record.total_staff.value(),
            record.trauma_level.value(),
            record.helipad.value(),
            patients,
        )
        .ok_or_else(|| ComputationError::NonPositivePatients {
            name: record.name.clone(),
            patients,
        })?;

        record.access_points_connected.set(access_points);
        record.patients.set(patients);
        record.suggestive_factor.set(factor);

        tracing::debug!(
            name = %record.name,
            access_points,
            patients,
            suggestive_factor = factor,
            "Applied device count to record"
        );

        updates.push(RecordUpdate {
            name: record.name.clone(),
            access_points_connected: access_points,
            patients,
            suggestive_factor: factor,
        });
    }

    Ok(updates)
}
