//! Level conversions between linear quantities and decibels.
//!
//! Energy-like quantities (squared samples, integrated energy) use the
//! `10·log10` law; amplitude-like quantities (sample peaks, RMS) use
//! `20·log10`. Both clamp at a small floor so exact zeros map to a finite
//! level instead of negative infinity.

use libm::log10;

/// Floor applied before taking logarithms.
///
/// Maps a zero energy value to -100 dB and a zero amplitude to -200 dB.
pub const DB_FLOOR_EPSILON: f64 = 1e-10;

/// Convert a linear energy value to decibels: `10·log10(max(v, ε))`.
///
/// # Example
/// ```rust
/// use nachhall_core::energy_to_db;
///
/// assert!((energy_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((energy_to_db(0.5) - (-3.01)).abs() < 0.01);
/// ```
#[inline]
pub fn energy_to_db(energy: f64) -> f64 {
    10.0 * log10(energy.max(DB_FLOOR_EPSILON))
}

/// Convert a linear amplitude value to decibels: `20·log10(max(v, ε))`.
#[inline]
pub fn amplitude_to_db(amplitude: f64) -> f64 {
    20.0 * log10(amplitude.max(DB_FLOOR_EPSILON))
}
