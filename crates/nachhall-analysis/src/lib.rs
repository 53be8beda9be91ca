//! Nachhall Analysis - Reverberation time estimation from impulse responses
//!
//! This crate turns a recorded room response into frequency-banded decay
//! metrics following the Schroeder method of ISO 3382-1:
//!
//! - [`decay`] - Backward-integrated energy decay curve, decibel conversion,
//!   level-crossing search
//! - [`slope`] - Least-squares decay slope estimation (T20/T30 with R²)
//! - [`analyzer`] - Per-octave-band orchestration producing
//!   [`Rt60Measurement`] results with quality classification
//!
//! # Example
//!
//! ```rust,ignore
//! use nachhall_analysis::ReverberationAnalyzer;
//!
//! let analyzer = ReverberationAnalyzer::new(44100.0)?;
//! let measurements = analyzer.analyze(&impulse_response)?;
//! for m in &measurements {
//!     println!("{} Hz: RT60 {:?} ({:?})", m.frequency, m.rt60(), m.quality());
//! }
//! ```
//!
//! The engine is a pure computation layer: it never logs, retries, or
//! swallows. Structural misuse (empty buffer, bad sample rate) surfaces as
//! [`AnalysisError`]; physically valid but inconclusive data (decay never
//! reaching the required depth) surfaces as absent values, not errors.

pub mod analyzer;
pub mod decay;
pub mod error;
pub mod slope;

pub use analyzer::{
    MeasurementQuality, ReverberationAnalyzer, Rt60Measurement, overall_quality,
};
pub use nachhall_core::{EXTENDED_OCTAVE_BANDS, OCTAVE_BANDS};
pub use decay::{decibel_curve, energy_decay_curve, level_crossing};
pub use error::AnalysisError;
pub use slope::{DecayEstimate, estimate_decay};

/// ISO 3382-1 correlation acceptance threshold, in percent.
///
/// A linear fit with correlation at or above this value is considered an
/// acceptable decay estimate. The engine still reports lower values so
/// callers can classify quality themselves.
pub const ISO3382_CORRELATION_THRESHOLD: f64 = 95.0;
