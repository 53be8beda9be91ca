//! Impulse response analysis command.

use std::path::PathBuf;

use clap::Args;
use nachhall_analysis::{MeasurementQuality, ReverberationAnalyzer, overall_quality};

use super::common::{format_seconds, read_wav_mono};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input WAV file (impulse response recording)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Include the 8 kHz band
    #[arg(long)]
    extended: bool,

    /// Emit results as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let (samples, sample_rate) = read_wav_mono(&args.input)?;
    println!(
        "Analyzing {} ({} samples, {} Hz, {:.2}s)",
        args.input.display(),
        samples.len(),
        sample_rate,
        samples.len() as f64 / f64::from(sample_rate)
    );

    let analyzer = if args.extended {
        ReverberationAnalyzer::with_extended_bands(f64::from(sample_rate))?
    } else {
        ReverberationAnalyzer::new(f64::from(sample_rate))?
    };
    let measurements = analyzer.analyze(&samples)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&measurements)?);
        return Ok(());
    }

    println!();
    println!("  Band      T20     T30    RT60   Corr   Noise   Quality");
    for m in &measurements {
        println!(
            "  {:>5} Hz {} {} {}  {:5.1}  {:6.1}   {}",
            m.frequency,
            format_seconds(m.t20),
            format_seconds(m.t30),
            format_seconds(m.rt60()),
            m.correlation,
            m.noise_floor,
            quality_label(m.quality()),
        );
    }
    println!();
    println!("  Overall quality: {}", quality_label(overall_quality(&measurements)));

    Ok(())
}

fn quality_label(quality: MeasurementQuality) -> &'static str {
    match quality {
        MeasurementQuality::Excellent => "excellent",
        MeasurementQuality::Good => "good",
        MeasurementQuality::Acceptable => "acceptable",
        MeasurementQuality::Marginal => "marginal",
        MeasurementQuality::Invalid => "invalid",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_decay_wav(dir: &tempfile::TempDir) -> PathBuf {
        let sample_rate = 44100u32;
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let path = dir.path().join("decay.wav");
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        let mut state = 0x2545f491u32;
        for i in 0..sample_rate * 2 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let noise = (state as i32 as f32) / (i32::MAX as f32);
            let t = f64::from(i) / f64::from(sample_rate);
            writer
                .write_sample(noise * (-6.91 * t).exp() as f32)
                .unwrap();
        }
        writer.finalize().unwrap();
        path
    }

    #[test]
    fn analyzes_a_wav_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = AnalyzeArgs {
            input: write_decay_wav(&dir),
            extended: false,
            json: true,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn missing_wav_is_an_error() {
        let args = AnalyzeArgs {
            input: PathBuf::from("/nonexistent/decay.wav"),
            extended: false,
            json: false,
        };
        assert!(run(args).is_err());
    }
}
