//! Parsed log data model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One frequency band read from a measurement log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rt60Band {
    /// Band center frequency in Hz.
    pub frequency: u32,
    /// T20 reverberation time in seconds, clamped to the plausible range.
    ///
    /// `None` when the instrument logged a failed measurement or the
    /// value could not be read.
    pub t20: Option<f64>,
    /// Decay-fit correlation as a fraction in `[0, 1]`, if logged.
    pub correlation: Option<f64>,
    /// Whether the T20 value was read cleanly.
    ///
    /// A band can carry a clamped T20 and still be flagged invalid, for
    /// instance when the instrument logged a negative time.
    pub valid: bool,
}

/// A fully parsed measurement log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rt60LogModel {
    /// Key-value pairs from the `Setup:` section.
    pub metadata: BTreeMap<String, String>,
    /// Per-band measurements, in file order.
    pub bands: Vec<Rt60Band>,
    /// Verbatim contents of the `CheckSum:` section, empty if absent.
    pub checksum: String,
}

impl Rt60LogModel {
    /// Look up a band by center frequency.
    pub fn band(&self, frequency: u32) -> Option<&Rt60Band> {
        self.bands.iter().find(|b| b.frequency == frequency)
    }
}
