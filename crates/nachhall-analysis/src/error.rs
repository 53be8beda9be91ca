//! Error types for the reverberation analysis engine.

use thiserror::Error;

/// Structural precondition failures surfaced to the caller.
///
/// Inconclusive measurements (decay too shallow for T20/T30) are *not*
/// errors; they come back as absent values so they are never conflated with
/// caller misuse.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AnalysisError {
    /// The sample buffer contained no samples at all.
    #[error("input buffer is empty")]
    EmptyInput,

    /// The sample buffer is too short for decay integration.
    ///
    /// Kept distinct from [`AnalysisError::EmptyInput`] because callers
    /// report the two cases differently.
    #[error("decay analysis needs at least 2 samples, got {0}")]
    InsufficientSamples(usize),

    /// The supplied sample rate was zero or negative.
    #[error("sample rate must be positive, got {0}")]
    InvalidSampleRate(f64),
}
