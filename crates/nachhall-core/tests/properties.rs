//! Property-based tests for nachhall-core DSP primitives.
//!
//! Tests filter stability, regression bounds, and level-conversion
//! invariants using proptest for randomized input generation.

use proptest::prelude::*;
use nachhall_core::{BandpassFilter, amplitude_to_db, energy_to_db, linear_regression};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any band center in the audible range and common sample rates,
    /// the band-pass filter produces finite output for random in-range
    /// input.
    #[test]
    fn bandpass_stability(
        center in 30.0f32..16000.0f32,
        sample_rate in prop::sample::select(vec![22050.0f32, 44100.0, 48000.0, 96000.0]),
        input in prop::collection::vec(-1.0f32..=1.0f32, 64..1024),
    ) {
        prop_assume!(center < sample_rate / 2.0);

        let mut filter = BandpassFilter::third_octave(center, sample_rate);
        for sample in filter.apply(&input) {
            prop_assert!(
                sample.is_finite(),
                "filter at {center} Hz / {sample_rate} Hz produced {sample}"
            );
        }
    }

    /// Explicit band edges never produce non-finite coefficients, even
    /// when pushed outside the representable range.
    #[test]
    fn bandpass_from_arbitrary_edges_stays_finite(
        low in 0.0f32..30000.0f32,
        width in 0.0f32..10000.0f32,
        sample_rate in prop::sample::select(vec![22050.0f32, 44100.0, 48000.0]),
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut filter = BandpassFilter::from_band_edges(low, low + width, sample_rate);
        for sample in filter.apply(&input) {
            prop_assert!(sample.is_finite());
        }
    }

    /// R² is always within [0, 1] for any fit that succeeds.
    #[test]
    fn regression_r_squared_is_bounded(
        y in prop::collection::vec(-100.0f64..=100.0, 2..128),
    ) {
        let x: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
        if let Some(fit) = linear_regression(&x, &y) {
            prop_assert!((0.0..=1.0).contains(&fit.r_squared), "R² = {}", fit.r_squared);
            prop_assert!(fit.slope.is_finite());
            prop_assert!(fit.intercept.is_finite());
        }
    }

    /// Level conversions are finite for any non-negative input and never
    /// fall below the floor.
    #[test]
    fn level_conversions_are_floored(value in 0.0f64..=1.0e12) {
        let energy_db = energy_to_db(value);
        let amplitude_db = amplitude_to_db(value);
        prop_assert!(energy_db.is_finite());
        prop_assert!(amplitude_db.is_finite());
        prop_assert!(energy_db >= -100.0 - 1e-9);
        prop_assert!(amplitude_db >= -200.0 - 1e-9);
    }

    /// More energy never reads as a lower level.
    #[test]
    fn energy_to_db_is_monotone(a in 0.0f64..=1.0e6, b in 0.0f64..=1.0e6) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(energy_to_db(lo) <= energy_to_db(hi));
    }
}
