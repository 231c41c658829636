//! Suggestive factor formula
//!
//! The fixed heuristic that scores a hospital from its bed, staff, and
//! patient counts plus its trauma/helipad flags. The constants here are
//! compatibility-critical: downstream consumers of the record file expect
//! exactly these numbers.

/// Patients added per additional connected device
///
/// Device traffic is assumed to correlate with patient load at 0.6 patients
/// per device. A heuristic, not a measurement; do not tune it without
/// versioning the record file.
pub const PATIENTS_PER_DEVICE: f64 = 0.6;

/// Computes the suggestive factor for one record
///
/// `((beds / patients) * (total_staff / patients) + (trauma + helipad)) / 2`
///
/// Returns `None` when `patients` is zero or negative, which makes the
/// formula undefined. Callers decide what that means; the updater treats it
/// as a fatal computation error.
pub fn suggestive_factor(
    beds: f64,
    total_staff: f64,
    trauma: f64,
    helipad: f64,
    patients: f64,
) -> Option<f64> {
    if patients <= 0.0 {
        return None;
    }
    Some(((beds / patients) * (total_staff / patients) + (trauma + helipad)) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_reference_example() {
        // beds=200, staff=500, trauma=1, helipad=0, patients after update=306
        // ((200/306)*(500/306) + 1)/2
        let factor = suggestive_factor(200.0, 500.0, 1.0, 0.0, 306.0).unwrap();
        assert!((factor - 1.0340).abs() < 1e-3, "got {factor}");
    }

    #[test_case(0.0 ; "zero patients")]
    #[test_case(-4.0 ; "negative patients")]
    fn test_undefined_for_non_positive_patients(patients: f64) {
        assert!(suggestive_factor(200.0, 500.0, 1.0, 0.0, patients).is_none());
    }

    #[test_case(100.0, 100.0, 0.0, 0.0, 100.0, 0.5 ; "ratios of one")]
    #[test_case(0.0, 500.0, 1.0, 1.0, 300.0, 1.0 ; "no beds leaves only flags")]
    #[test_case(100.0, 200.0, 1.0, 0.0, 10.0, 100.5 ; "small patient count dominates")]
    fn test_formula_values(
        beds: f64,
        staff: f64,
        trauma: f64,
        helipad: f64,
        patients: f64,
        expected: f64,
    ) {
        let factor = suggestive_factor(beds, staff, trauma, helipad, patients).unwrap();
        assert!((factor - expected).abs() < 1e-9, "got {factor}");
    }

    #[test]
    fn test_scaling_constant_is_fixed() {
        assert_eq!(PATIENTS_PER_DEVICE, 0.6);
    }
}
