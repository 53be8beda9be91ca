//! DIN 18041 target reverberation times.
//!
//! Two independently tunable tables encode the standard:
//!
//! 1. The *compliance table* ([`targets_for`]): per-band targets with fixed
//!    tolerances for the six evaluated room types, including the
//!    frequency-dependent adjustments for speech rooms.
//! 2. The *planning table* ([`planning_target_rt60`]): a single target per
//!    usage type, scaled by room volume relative to a 100 m³ reference.
//!
//! The numeric values reproduce the standard and are asserted exactly by
//! tests; do not "clean them up".

use serde::{Deserialize, Serialize};

use nachhall_core::EXTENDED_OCTAVE_BANDS;

/// Reference volume for the planning table, in m³.
const REFERENCE_VOLUME: f64 = 100.0;

/// One frequency band's target with its tolerance.
///
/// Recomputed on demand for a (room type, volume) pair; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Din18041Target {
    /// Octave-band center frequency in Hz.
    pub frequency: u32,
    /// Target RT60 in seconds.
    pub target_rt60: f64,
    /// Symmetric tolerance in seconds.
    pub tolerance: f64,
}

/// Room types evaluated for DIN 18041 compliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    /// Classroom or teaching room.
    Classroom,
    /// Office space for speech communication.
    Office,
    /// Conference room for meetings and presentations.
    Conference,
    /// Lecture hall or auditorium.
    Lecture,
    /// Music room or rehearsal space.
    Music,
    /// Sports hall or gymnasium.
    Sports,
}

impl RoomType {
    /// All evaluated room types.
    pub const ALL: [RoomType; 6] = [
        RoomType::Classroom,
        RoomType::Office,
        RoomType::Conference,
        RoomType::Lecture,
        RoomType::Music,
        RoomType::Sports,
    ];

    /// Base target RT60 and tolerance, in seconds.
    fn base_target(self) -> (f64, f64) {
        match self {
            RoomType::Classroom => (0.6, 0.1),
            RoomType::Office => (0.5, 0.1),
            RoomType::Conference => (0.7, 0.15),
            RoomType::Lecture => (0.8, 0.15),
            RoomType::Music => (1.5, 0.2),
            RoomType::Sports => (2.0, 0.3),
        }
    }
}

/// Per-band DIN 18041 targets for a room type and volume.
///
/// Classrooms get the speech-clarity adjustments: +20 % RT60 allowance at
/// and below 250 Hz, −20 % requirement at and above 2000 Hz. The other
/// types are flat across bands.
pub fn targets_for(room_type: RoomType, _volume: f64) -> Vec<Din18041Target> {
    let (base, tolerance) = room_type.base_target();

    EXTENDED_OCTAVE_BANDS
        .iter()
        .map(|&frequency| {
            let mut target = base;
            if room_type == RoomType::Classroom {
                if frequency <= 250 {
                    target *= 1.2;
                } else if frequency >= 2000 {
                    target *= 0.8;
                }
            }
            Din18041Target {
                frequency,
                target_rt60: target,
                tolerance,
            }
        })
        .collect()
}

/// Room usage types for the volume-scaled planning table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomUsage {
    /// Teaching room for 20-40 people.
    Classroom,
    /// Single or small team office.
    Office,
    /// Meeting room for 6-20 people.
    ConferenceRoom,
    /// Lecture hall or auditorium.
    LectureHall,
    /// Music practice or rehearsal room.
    MusicRoom,
    /// Gymnasium or multi-purpose hall.
    SportsHall,
    /// Dining room or canteen.
    Restaurant,
    /// Open-plan office with many workstations.
    OpenPlanOffice,
    /// Private cinema room.
    HomeTheater,
    /// Professional recording studio.
    RecordingStudio,
}

impl RoomUsage {
    /// All planning usage types.
    pub const ALL: [RoomUsage; 10] = [
        RoomUsage::Classroom,
        RoomUsage::Office,
        RoomUsage::ConferenceRoom,
        RoomUsage::LectureHall,
        RoomUsage::MusicRoom,
        RoomUsage::SportsHall,
        RoomUsage::Restaurant,
        RoomUsage::OpenPlanOffice,
        RoomUsage::HomeTheater,
        RoomUsage::RecordingStudio,
    ];

    /// Base target at the 100 m³ reference volume, and the volume exponent.
    fn base_and_exponent(self) -> (f64, f64) {
        match self {
            RoomUsage::Classroom => (0.55, 0.1),
            RoomUsage::Office => (0.50, 0.08),
            RoomUsage::ConferenceRoom => (0.60, 0.1),
            RoomUsage::LectureHall => (0.70, 0.12),
            RoomUsage::MusicRoom => (1.00, 0.15),
            RoomUsage::SportsHall => (1.50, 0.1),
            RoomUsage::Restaurant => (0.70, 0.08),
            RoomUsage::OpenPlanOffice => (0.45, 0.05),
            RoomUsage::HomeTheater => (0.40, 0.1),
            RoomUsage::RecordingStudio => (0.30, 0.05),
        }
    }
}

/// Planning target RT60 for a usage type at a given volume.
///
/// `target = base · (V / 100)^exponent`.
pub fn planning_target_rt60(usage: RoomUsage, volume: f64) -> f64 {
    let (base, exponent) = usage.base_and_exponent();
    base * (volume / REFERENCE_VOLUME).powf(exponent)
}
