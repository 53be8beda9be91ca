//! Second-order IIR band-pass filter for octave-band isolation.
//!
//! A single biquad stage (Direct Form I) with coefficients derived from the
//! low/high band edges via a bilinear `tan`-warped design at a fixed
//! Q of 1/√2 (maximally flat Butterworth-style response). Applied as a
//! single forward pass; band isolation quality is verified by attenuation
//! tests rather than bit-exact coefficient values.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::f32::consts::PI;
use libm::{cosf, tanf};

/// Fixed Q for the band-pass stage (1/√2).
const BUTTERWORTH_Q: f32 = core::f32::consts::FRAC_1_SQRT_2;

/// Nominal 1/3-octave bandwidth as a fraction of the center frequency.
pub const THIRD_OCTAVE_BANDWIDTH_RATIO: f32 = 0.23;

/// Second-order band-pass filter stage.
///
/// Direct Form I structure:
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]
///                - a1*y[n-1] - a2*y[n-2]
/// ```
#[derive(Debug, Clone)]
pub struct BandpassFilter {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,

    /// Input delay line: x[n-1], x[n-2]
    x1: f32,
    x2: f32,

    /// Output delay line: y[n-1], y[n-2]
    y1: f32,
    y2: f32,
}

impl BandpassFilter {
    /// Create a band-pass filter from explicit low/high band edges.
    ///
    /// Frequencies are in Hz. Edges are clamped into the open interval
    /// `(0, nyquist)` so extreme bands near the sample-rate limit stay
    /// stable.
    pub fn from_band_edges(low_hz: f32, high_hz: f32, sample_rate: f32) -> Self {
        let nyquist = sample_rate / 2.0;
        let low_norm = (low_hz / nyquist).clamp(1e-6, 0.999);
        let high_norm = (high_hz / nyquist).clamp(low_norm, 0.999);

        // Bilinear transform with frequency pre-warping
        let w0 = tanf(PI * (high_norm - low_norm) / 2.0);
        let alpha = w0 / (2.0 * BUTTERWORTH_Q);
        let cos_w0 = cosf(PI * (high_norm + low_norm) / 2.0);

        let a0 = 1.0 + alpha;
        let a0_inv = 1.0 / a0;

        Self {
            b0: alpha * a0_inv,
            b1: 0.0,
            b2: -alpha * a0_inv,
            a1: -2.0 * cos_w0 * a0_inv,
            a2: (1.0 - alpha) * a0_inv,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Create a 1/3-octave band-pass filter around a center frequency.
    ///
    /// The nominal bandwidth is `0.23 × center`, split evenly around the
    /// center frequency.
    pub fn third_octave(center_hz: f32, sample_rate: f32) -> Self {
        let bandwidth = center_hz * THIRD_OCTAVE_BANDWIDTH_RATIO;
        Self::from_band_edges(
            center_hz - bandwidth / 2.0,
            center_hz + bandwidth / 2.0,
            sample_rate,
        )
    }

    /// Process a single sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let output = self.b0 * input + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Filter an entire signal in a single forward pass.
    ///
    /// Resets the delay lines first so repeated calls are independent.
    pub fn apply(&mut self, signal: &[f32]) -> Vec<f32> {
        self.reset();
        signal.iter().map(|&sample| self.process(sample)).collect()
    }

    /// Clear the filter delay lines without changing coefficients.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq_hz: f32, sample_rate: f32, num_samples: usize) -> Vec<f32> {
        (0..num_samples)
            .map(|i| (2.0 * PI * freq_hz * i as f32 / sample_rate).sin())
            .collect()
    }

    fn rms(signal: &[f32]) -> f32 {
        (signal.iter().map(|x| x * x).sum::<f32>() / signal.len() as f32).sqrt()
    }

    #[test]
    fn coefficients_are_finite() {
        let filter = BandpassFilter::third_octave(1000.0, 44100.0);
        assert!(filter.b0.is_finite());
        assert!(filter.b2.is_finite());
        assert!(filter.a1.is_finite());
        assert!(filter.a2.is_finite());
    }

    #[test]
    fn passband_tone_survives() {
        let sample_rate = 44100.0;
        let mut filter = BandpassFilter::third_octave(1000.0, sample_rate);

        let signal = sine(1000.0, sample_rate, 44100);
        let filtered = filter.apply(&signal);

        // Skip settling time before comparing levels
        let settled = &filtered[4410..];
        let ratio = rms(settled) / rms(&signal[4410..]);
        assert!(ratio > 0.5, "passband tone attenuated too much: {ratio}");
    }

    #[test]
    fn stopband_tone_is_attenuated() {
        let sample_rate = 44100.0;
        let mut filter = BandpassFilter::third_octave(1000.0, sample_rate);

        // Two octaves above the passband
        let signal = sine(4000.0, sample_rate, 44100);
        let filtered = filter.apply(&signal);

        let settled = &filtered[4410..];
        let ratio = rms(settled) / rms(&signal[4410..]);
        assert!(ratio < 0.3, "stopband tone not attenuated: {ratio}");
    }

    #[test]
    fn apply_resets_state_between_calls() {
        let sample_rate = 44100.0;
        let mut filter = BandpassFilter::third_octave(500.0, sample_rate);

        let signal = sine(500.0, sample_rate, 2048);
        let first = filter.apply(&signal);
        let second = filter.apply(&signal);

        assert_eq!(first, second);
    }

    #[test]
    fn output_length_matches_input() {
        let mut filter = BandpassFilter::third_octave(125.0, 48000.0);
        let signal = vec![0.25; 1000];
        assert_eq!(filter.apply(&signal).len(), 1000);
    }

    #[test]
    fn silence_in_silence_out() {
        let mut filter = BandpassFilter::third_octave(2000.0, 48000.0);
        let filtered = filter.apply(&[0.0; 512]);
        assert!(filtered.iter().all(|&x| x.abs() < 1e-12));
    }
}
