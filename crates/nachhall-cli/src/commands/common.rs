//! Shared CLI helpers used across multiple commands.

use std::path::Path;

use anyhow::Context;
use hound::{SampleFormat, WavReader};
use nachhall_din18041::{RoomType, RoomUsage};
use tracing::debug;

/// Read a WAV file as mono f32 samples plus the sample rate.
///
/// Multi-channel files are mixed down by averaging channels.
pub fn read_wav_mono(path: &Path) -> anyhow::Result<(Vec<f32>, u32)> {
    let reader = WavReader::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    debug!(
        samples = mono.len(),
        sample_rate = spec.sample_rate,
        channels,
        "loaded WAV"
    );
    Ok((mono, spec.sample_rate))
}

/// Parse a room type name for the compliance table.
pub fn parse_room_type(name: &str) -> anyhow::Result<RoomType> {
    match name.to_lowercase().as_str() {
        "classroom" => Ok(RoomType::Classroom),
        "office" => Ok(RoomType::Office),
        "conference" | "conference-room" => Ok(RoomType::Conference),
        "lecture" | "lecture-hall" => Ok(RoomType::Lecture),
        "music" | "music-room" => Ok(RoomType::Music),
        "sports" | "sports-hall" => Ok(RoomType::Sports),
        _ => anyhow::bail!(
            "unknown room type '{name}' (expected classroom, office, conference, lecture, music, or sports)"
        ),
    }
}

/// Parse a room usage name for the planning table.
pub fn parse_room_usage(name: &str) -> anyhow::Result<RoomUsage> {
    match name.to_lowercase().as_str() {
        "classroom" => Ok(RoomUsage::Classroom),
        "office" => Ok(RoomUsage::Office),
        "conference" | "conference-room" => Ok(RoomUsage::ConferenceRoom),
        "lecture" | "lecture-hall" => Ok(RoomUsage::LectureHall),
        "music" | "music-room" => Ok(RoomUsage::MusicRoom),
        "sports" | "sports-hall" => Ok(RoomUsage::SportsHall),
        "restaurant" => Ok(RoomUsage::Restaurant),
        "open-plan-office" | "open-plan" => Ok(RoomUsage::OpenPlanOffice),
        "home-theater" => Ok(RoomUsage::HomeTheater),
        "recording-studio" | "studio" => Ok(RoomUsage::RecordingStudio),
        _ => anyhow::bail!("unknown room usage '{name}'"),
    }
}

/// Format an optional reverberation time for table output.
pub fn format_seconds(value: Option<f64>) -> String {
    value.map_or_else(|| "  -.--".to_owned(), |v| format!("{v:6.2}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_type_aliases() {
        assert_eq!(parse_room_type("Classroom").unwrap(), RoomType::Classroom);
        assert_eq!(
            parse_room_type("conference-room").unwrap(),
            RoomType::Conference
        );
        assert!(parse_room_type("cathedral").is_err());
    }

    #[test]
    fn room_usage_aliases() {
        assert_eq!(
            parse_room_usage("studio").unwrap(),
            RoomUsage::RecordingStudio
        );
        assert_eq!(
            parse_room_usage("open-plan").unwrap(),
            RoomUsage::OpenPlanOffice
        );
    }

    #[test]
    fn missing_values_render_as_sentinel() {
        assert_eq!(format_seconds(None), "  -.--");
        assert_eq!(format_seconds(Some(0.5)), "  0.50");
    }
}
