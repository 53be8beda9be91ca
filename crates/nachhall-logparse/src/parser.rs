//! Section-oriented log parser.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::model::{Rt60Band, Rt60LogModel};

/// Shortest reverberation time an instrument can plausibly report.
pub const RT60_MIN_SECONDS: f64 = 0.1;
/// Longest reverberation time an instrument can plausibly report.
pub const RT60_MAX_SECONDS: f64 = 10.0;

/// Active section while walking the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Setup,
    T20,
    Correlation,
    Checksum,
}

impl Section {
    fn from_header(name: &str) -> Self {
        match name {
            "Setup" => Self::Setup,
            "T20" => Self::T20,
            "Correltn" => Self::Correlation,
            "CheckSum" => Self::Checksum,
            _ => Self::None,
        }
    }
}

/// Parse a measurement log.
///
/// Malformed lines are skipped rather than treated as errors; the
/// result is whatever could be read.
pub fn parse_log(text: &str) -> Rt60LogModel {
    let mut metadata = BTreeMap::new();
    let mut bands: Vec<Rt60Band> = Vec::new();
    let mut checksum = String::new();
    let mut section = Section::None;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }

        if let Some(header) = trimmed.strip_suffix(':') {
            section = Section::from_header(header);
            continue;
        }

        match section {
            Section::Setup => parse_setup_line(trimmed, &mut metadata),
            Section::T20 => {
                if let Some(band) = parse_t20_line(trimmed) {
                    bands.push(band);
                }
            }
            Section::Correlation => parse_correlation_line(trimmed, &mut bands),
            Section::Checksum => checksum = trimmed.to_owned(),
            Section::None => {}
        }
    }

    info!(bands = bands.len(), "parsed measurement log");
    Rt60LogModel {
        metadata,
        bands,
        checksum,
    }
}

fn parse_setup_line(line: &str, metadata: &mut BTreeMap<String, String>) {
    if let Some((key, value)) = line.split_once('=') {
        metadata.insert(key.trim().to_owned(), value.trim().to_owned());
    }
}

fn parse_t20_line(line: &str) -> Option<Rt60Band> {
    let mut parts = line.split_whitespace();
    let frequency = parse_frequency(parts.next()?)?;
    let raw = parts.next()?;

    let (t20, valid) = parse_t20_value(raw);
    if !valid {
        debug!(frequency, raw, "unusable T20 value");
    }

    Some(Rt60Band {
        frequency,
        t20,
        correlation: None,
        valid,
    })
}

fn parse_correlation_line(line: &str, bands: &mut [Rt60Band]) {
    let mut parts = line.split_whitespace();
    let Some(frequency) = parts.next().and_then(parse_frequency) else {
        return;
    };
    let Some(percent) = parts.next().and_then(parse_locale_aware) else {
        return;
    };

    if let Some(band) = bands.iter_mut().find(|b| b.frequency == frequency) {
        band.correlation = validate_correlation(percent / 100.0);
    }
}

fn parse_frequency(token: &str) -> Option<u32> {
    token.trim_end_matches("Hz").parse().ok()
}

/// Read a T20 value, returning the (possibly clamped) time and whether
/// the reading is trustworthy.
fn parse_t20_value(token: &str) -> (Option<f64>, bool) {
    // Instrument sentinel for a failed measurement
    if token.contains("-.--") || token.contains("-.-") {
        return (None, false);
    }

    let Some(value) = parse_locale_aware(token) else {
        return (None, false);
    };
    if !value.is_finite() {
        return (None, false);
    }

    let clamped = value.clamp(RT60_MIN_SECONDS, RT60_MAX_SECONDS);
    // A negative time is physically impossible; keep the clamped value
    // for display but flag the band.
    (Some(clamped), value >= 0.0)
}

/// Parse a float accepting both `.` and `,` as the decimal separator.
fn parse_locale_aware(token: &str) -> Option<f64> {
    token
        .parse()
        .or_else(|_| token.replace(',', ".").parse())
        .ok()
}

/// A correlation is a fraction; anything outside `[0, 1]` is discarded.
fn validate_correlation(value: f64) -> Option<f64> {
    (value.is_finite() && (0.0..=1.0).contains(&value)).then_some(value)
}
