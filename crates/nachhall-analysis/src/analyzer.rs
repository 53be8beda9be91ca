//! Per-band reverberation analysis.
//!
//! Orchestrates the single-band pipeline (band-pass filter → energy decay
//! curve → slope estimate) across the standard octave bands and attaches
//! noise-floor and peak-level metrics to each result. Bands are independent;
//! callers may key results by frequency without any ordering assumption.

use serde::{Deserialize, Serialize};

use nachhall_core::{BandpassFilter, EXTENDED_OCTAVE_BANDS, OCTAVE_BANDS, amplitude_to_db};

use crate::ISO3382_CORRELATION_THRESHOLD;
use crate::decay::{decibel_curve, energy_decay_curve};
use crate::error::AnalysisError;
use crate::slope::estimate_decay;

/// Fraction of the tail used for the noise-floor estimate.
const NOISE_TAIL_FRACTION: f64 = 0.9;

/// One octave band's reverberation measurement.
///
/// Created once per band per analysis run; immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rt60Measurement {
    /// Octave-band center frequency in Hz.
    pub frequency: u32,
    /// RT60 extrapolated from the 20 dB decay window, if computable.
    pub t20: Option<f64>,
    /// RT60 extrapolated from the 30 dB decay window, if computable.
    pub t30: Option<f64>,
    /// Linear-fit quality as a percentage (0–100).
    pub correlation: f64,
    /// Background noise level in dB (RMS of the signal tail).
    pub noise_floor: f64,
    /// Peak signal level in dB.
    pub peak_level: f64,
}

impl Rt60Measurement {
    /// Reverberation time, preferring T30 over T20.
    pub fn rt60(&self) -> Option<f64> {
        self.t30.or(self.t20)
    }

    /// Quality classification for this single measurement.
    ///
    /// Buckets follow the batch thresholds but additionally require the
    /// noise floor to sit below a bucket-specific ceiling; a marginal
    /// rating needs only the correlation bound.
    pub fn quality(&self) -> MeasurementQuality {
        if self.rt60().is_none() {
            return MeasurementQuality::Invalid;
        }

        if self.correlation >= 99.0 && self.noise_floor < -60.0 {
            MeasurementQuality::Excellent
        } else if self.correlation >= ISO3382_CORRELATION_THRESHOLD && self.noise_floor < -50.0 {
            MeasurementQuality::Good
        } else if self.correlation >= 90.0 && self.noise_floor < -40.0 {
            MeasurementQuality::Acceptable
        } else if self.correlation >= 80.0 {
            MeasurementQuality::Marginal
        } else {
            MeasurementQuality::Invalid
        }
    }
}

/// Measurement quality levels derived from fit correlation and noise floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementQuality {
    /// Correlation ≥ 99 % with a very low noise floor.
    Excellent,
    /// Correlation ≥ 95 %, the ISO 3382-1 acceptance bound.
    Good,
    /// Correlation ≥ 90 %.
    Acceptable,
    /// Correlation ≥ 80 %; usable with caution.
    Marginal,
    /// No decay estimate, or correlation below 80 %.
    Invalid,
}

/// Overall quality verdict for a batch of measurements.
///
/// Derived from the mean correlation across all bands; an empty batch is
/// invalid.
pub fn overall_quality(measurements: &[Rt60Measurement]) -> MeasurementQuality {
    if measurements.is_empty() {
        return MeasurementQuality::Invalid;
    }

    let mean_correlation =
        measurements.iter().map(|m| m.correlation).sum::<f64>() / measurements.len() as f64;

    if mean_correlation >= 99.0 {
        MeasurementQuality::Excellent
    } else if mean_correlation >= ISO3382_CORRELATION_THRESHOLD {
        MeasurementQuality::Good
    } else if mean_correlation >= 90.0 {
        MeasurementQuality::Acceptable
    } else if mean_correlation >= 80.0 {
        MeasurementQuality::Marginal
    } else {
        MeasurementQuality::Invalid
    }
}

/// Stateless per-band RT60 analyzer.
///
/// Holds only the analysis configuration; every call to
/// [`ReverberationAnalyzer::analyze`] produces a fresh, independent result
/// set.
#[derive(Debug, Clone)]
pub struct ReverberationAnalyzer {
    sample_rate: f64,
    bands: Vec<u32>,
}

impl ReverberationAnalyzer {
    /// Create an analyzer over the six standard octave bands.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidSampleRate`] when `sample_rate` is not
    /// positive.
    pub fn new(sample_rate: f64) -> Result<Self, AnalysisError> {
        Self::with_bands(sample_rate, &OCTAVE_BANDS)
    }

    /// Create an analyzer that also covers the 8 kHz band.
    pub fn with_extended_bands(sample_rate: f64) -> Result<Self, AnalysisError> {
        Self::with_bands(sample_rate, &EXTENDED_OCTAVE_BANDS)
    }

    /// Create an analyzer over an explicit set of center frequencies.
    pub fn with_bands(sample_rate: f64, bands: &[u32]) -> Result<Self, AnalysisError> {
        if sample_rate <= 0.0 {
            return Err(AnalysisError::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            sample_rate,
            bands: bands.to_vec(),
        })
    }

    /// Center frequencies this analyzer covers.
    pub fn bands(&self) -> &[u32] {
        &self.bands
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Analyze a recorded room response across all configured bands.
    ///
    /// Bands whose filtered signal is empty are skipped rather than
    /// reported as zeroed measurements.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::EmptyInput`] or
    /// [`AnalysisError::InsufficientSamples`] for buffers too short to
    /// integrate.
    pub fn analyze(&self, samples: &[f32]) -> Result<Vec<Rt60Measurement>, AnalysisError> {
        if samples.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        if samples.len() < 2 {
            return Err(AnalysisError::InsufficientSamples(samples.len()));
        }

        let mut measurements = Vec::with_capacity(self.bands.len());
        for &frequency in &self.bands {
            if let Some(measurement) = self.analyze_band(samples, frequency)? {
                measurements.push(measurement);
            }
        }
        Ok(measurements)
    }

    /// Run the single-band pipeline: filter → decay curve → slope estimate.
    fn analyze_band(
        &self,
        samples: &[f32],
        frequency: u32,
    ) -> Result<Option<Rt60Measurement>, AnalysisError> {
        let mut filter = BandpassFilter::third_octave(frequency as f32, self.sample_rate as f32);
        let filtered = filter.apply(samples);
        if filtered.is_empty() {
            return Ok(None);
        }

        let curve = energy_decay_curve(&filtered)?;
        let db = decibel_curve(&curve);
        let estimate = estimate_decay(&db, self.sample_rate)?;

        Ok(Some(Rt60Measurement {
            frequency,
            t20: estimate.t20,
            t30: estimate.t30,
            correlation: estimate.correlation,
            noise_floor: noise_floor(&filtered),
            peak_level: peak_level(&filtered),
        }))
    }
}

/// RMS of the final ~10 % of the signal, in dB.
fn noise_floor(samples: &[f32]) -> f64 {
    let start = (samples.len() as f64 * NOISE_TAIL_FRACTION) as usize;
    let tail = &samples[start.min(samples.len().saturating_sub(1))..];

    let mean_square =
        tail.iter().map(|&x| f64::from(x) * f64::from(x)).sum::<f64>() / tail.len() as f64;
    amplitude_to_db(mean_square.sqrt())
}

/// Maximum absolute sample value, in dB.
fn peak_level(samples: &[f32]) -> f64 {
    let peak = samples.iter().map(|x| f64::from(x.abs())).fold(0.0, f64::max);
    amplitude_to_db(peak)
}
