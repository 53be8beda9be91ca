//! Compliance evaluation against DIN 18041 targets.

use serde::{Deserialize, Serialize};

use crate::targets::{Din18041Target, RoomType, targets_for};

/// One band's measured reverberation time, as fed to the evaluator.
///
/// Both the analysis engine and the log-ingestion path reduce to this
/// shape before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandRt60 {
    /// Octave-band center frequency in Hz.
    pub frequency: u32,
    /// Measured RT60 in seconds.
    pub rt60: f64,
}

/// Compliance status of a measurement relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    /// Within the symmetric tolerance band.
    WithinTolerance,
    /// Room too reverberant at this band.
    TooHigh,
    /// Room too dry at this band.
    TooLow,
    /// Overall verdict only: most but not all bands comply.
    PartiallyCompliant,
}

/// Deviation of one measured band from its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rt60Deviation {
    /// Octave-band center frequency in Hz.
    pub frequency: u32,
    /// Measured RT60 in seconds.
    pub measured_rt60: f64,
    /// Target RT60 in seconds.
    pub target_rt60: f64,
    /// Classification of `measured − target` against the tolerance.
    pub status: EvaluationStatus,
}

/// Classify a single deviation against a symmetric tolerance.
fn classify(measured: f64, target: &Din18041Target) -> EvaluationStatus {
    let deviation = measured - target.target_rt60;
    if deviation.abs() <= target.tolerance {
        EvaluationStatus::WithinTolerance
    } else if deviation > 0.0 {
        EvaluationStatus::TooHigh
    } else {
        EvaluationStatus::TooLow
    }
}

/// Evaluate measured bands against the targets for a room type and volume.
///
/// Bands without a matching target frequency are silently excluded.
pub fn evaluate_compliance(
    measurements: &[BandRt60],
    room_type: RoomType,
    volume: f64,
) -> Vec<Rt60Deviation> {
    let targets = targets_for(room_type, volume);

    measurements
        .iter()
        .filter_map(|measurement| {
            let target = targets.iter().find(|t| t.frequency == measurement.frequency)?;
            Some(Rt60Deviation {
                frequency: measurement.frequency,
                measured_rt60: measurement.rt60,
                target_rt60: target.target_rt60,
                status: classify(measurement.rt60, target),
            })
        })
        .collect()
}

/// Aggregate per-band deviations into an overall verdict.
///
/// All bands within tolerance (or no bands at all) is compliant; strictly
/// more than half within is partially compliant; otherwise the majority
/// non-compliant direction wins, with an even split reported as too high
/// (the reverberant case is the one treatment planning cares about).
pub fn overall_compliance(deviations: &[Rt60Deviation]) -> EvaluationStatus {
    let within = deviations
        .iter()
        .filter(|d| d.status == EvaluationStatus::WithinTolerance)
        .count();

    if within == deviations.len() {
        return EvaluationStatus::WithinTolerance;
    }
    if within * 2 > deviations.len() {
        return EvaluationStatus::PartiallyCompliant;
    }

    let too_high = deviations
        .iter()
        .filter(|d| d.status == EvaluationStatus::TooHigh)
        .count();
    let too_low = deviations
        .iter()
        .filter(|d| d.status == EvaluationStatus::TooLow)
        .count();

    if too_high >= too_low {
        EvaluationStatus::TooHigh
    } else {
        EvaluationStatus::TooLow
    }
}

/// Remediation priority from the current/target RT60 ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentPriority {
    /// Ratio below 1.05; no treatment needed.
    None,
    /// Ratio at least 1.05.
    Low,
    /// Ratio at least 1.2.
    Medium,
    /// Ratio at least 1.5.
    High,
    /// Ratio at least 2.0.
    Critical,
}

/// Bucket a room for remediation planning by its current/target ratio.
pub fn treatment_priority(current_rt60: f64, target_rt60: f64) -> TreatmentPriority {
    if target_rt60 <= 0.0 {
        return TreatmentPriority::None;
    }

    let ratio = current_rt60 / target_rt60;
    if ratio >= 2.0 {
        TreatmentPriority::Critical
    } else if ratio >= 1.5 {
        TreatmentPriority::High
    } else if ratio >= 1.2 {
        TreatmentPriority::Medium
    } else if ratio >= 1.05 {
        TreatmentPriority::Low
    } else {
        TreatmentPriority::None
    }
}
