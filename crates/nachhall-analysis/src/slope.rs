//! Decay slope estimation via least-squares extrapolation.
//!
//! T20 fits the −5..−25 dB window, T30 the −5..−35 dB window. The fitted
//! slope (dB/s) is extrapolated to a full 60 dB decay: `RT60 = −60 / slope`.
//! A non-decaying fit (slope ≥ 0) rejects the estimate instead of producing
//! a negative time.

use nachhall_core::linear_regression;

use crate::decay::level_crossing;
use crate::error::AnalysisError;

/// Upper edge of the evaluation window, per ISO 3382-1.
const WINDOW_START_DB: f64 = -5.0;
/// Lower edge for the T20 window.
const T20_END_DB: f64 = -25.0;
/// Lower edge for the T30 window.
const T30_END_DB: f64 = -35.0;

/// T20/T30 decay estimates with a fit-quality indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayEstimate {
    /// RT60 extrapolated from the 20 dB window, when computable.
    pub t20: Option<f64>,
    /// RT60 extrapolated from the 30 dB window, when computable.
    pub t30: Option<f64>,
    /// R² of the better of the two fits, as a percentage (0–100).
    pub correlation: f64,
}

impl DecayEstimate {
    /// Preferred reverberation time: T30 when available, else T20.
    pub fn rt60(&self) -> Option<f64> {
        self.t30.or(self.t20)
    }
}

/// Estimate T20/T30 from a decibel decay curve.
///
/// Returns absent values (not errors) when the curve never reaches the
/// required depth or does not decay over the window.
///
/// # Errors
///
/// [`AnalysisError::InvalidSampleRate`] when `sample_rate` is not positive.
pub fn estimate_decay(db_curve: &[f64], sample_rate: f64) -> Result<DecayEstimate, AnalysisError> {
    if sample_rate <= 0.0 {
        return Err(AnalysisError::InvalidSampleRate(sample_rate));
    }

    let mut correlation = 0.0f64;

    let t20 = fit_window(db_curve, sample_rate, T20_END_DB).map(|(rt60, r2)| {
        correlation = correlation.max(r2 * 100.0);
        rt60
    });
    let t30 = fit_window(db_curve, sample_rate, T30_END_DB).map(|(rt60, r2)| {
        correlation = correlation.max(r2 * 100.0);
        rt60
    });

    Ok(DecayEstimate {
        t20,
        t30,
        correlation,
    })
}

/// Fit one evaluation window, returning `(rt60, r_squared)`.
fn fit_window(db_curve: &[f64], sample_rate: f64, end_db: f64) -> Option<(f64, f64)> {
    let start = level_crossing(db_curve, WINDOW_START_DB)?;
    let end = level_crossing(db_curve, end_db)?;
    if end <= start {
        return None;
    }

    let time: Vec<f64> = (start..end).map(|i| i as f64 / sample_rate).collect();
    let level = &db_curve[start..end];

    let fit = linear_regression(&time, level)?;
    if fit.slope >= 0.0 {
        return None;
    }

    Some((-60.0 / fit.slope, fit.r_squared))
}
