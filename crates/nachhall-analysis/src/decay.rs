//! Schroeder energy decay curve construction.
//!
//! The decay curve is built by backward (tail-to-head) integration of the
//! squared signal, which smooths a noisy impulse response into a monotone
//! energy decay. Accumulation runs in f64 regardless of the f32 sample
//! format so long tails do not lose precision.

use nachhall_core::energy_to_db;

use crate::error::AnalysisError;

/// Compute the normalized Schroeder energy decay curve.
///
/// Each output value is `Σ_{k=i}^{N-1} x[k]²`, divided by the curve maximum
/// so the first sample equals 1.0. The result is monotonically
/// non-increasing by construction.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] for an empty buffer and
/// [`AnalysisError::InsufficientSamples`] for a single-sample buffer.
pub fn energy_decay_curve(samples: &[f32]) -> Result<Vec<f64>, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if samples.len() < 2 {
        return Err(AnalysisError::InsufficientSamples(samples.len()));
    }

    let mut curve = vec![0.0f64; samples.len()];
    let mut sum = 0.0f64;
    for (i, &sample) in samples.iter().enumerate().rev() {
        sum += f64::from(sample) * f64::from(sample);
        curve[i] = sum;
    }

    // All energy accumulates at index 0, so the maximum is the head value.
    let max = curve[0];
    if max > 0.0 {
        for value in &mut curve {
            *value /= max;
        }
    }

    Ok(curve)
}

/// Convert a linear energy decay curve to decibels relative to its peak.
///
/// `db[i] = 10·log10(max(curve[i], 1e-10))`. An empty curve yields an empty
/// result here; emptiness is the builder's concern, not the converter's.
pub fn decibel_curve(curve: &[f64]) -> Vec<f64> {
    curve.iter().map(|&v| energy_to_db(v)).collect()
}

/// Find the first index at which the decibel curve crosses a level.
///
/// Scans forward from index 0 for the first value ≤ `level_db`. Returns
/// `None` when the decay never reaches that depth, which is a normal
/// outcome for short or noisy recordings.
pub fn level_crossing(db_curve: &[f64], level_db: f64) -> Option<usize> {
    db_curve.iter().position(|&db| db <= level_db)
}
