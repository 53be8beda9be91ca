//! DIN 18041 compliance evaluation command.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use nachhall_din18041::{
    BandRt60, EvaluationStatus, TreatmentPriority, evaluate_compliance, overall_compliance,
    recommend_products, treatment_priority,
};
use nachhall_logparse::parse_log;

use super::common::parse_room_type;

#[derive(Args)]
pub struct EvaluateArgs {
    /// Measurement log file
    #[arg(value_name = "LOG")]
    log: PathBuf,

    /// Room type (classroom, office, conference, lecture, music, sports)
    #[arg(long, value_name = "TYPE")]
    room_type: String,

    /// Room volume in m³
    #[arg(long)]
    volume: f64,

    /// Suggest absorber products for non-compliant bands
    #[arg(long)]
    recommend: bool,
}

pub fn run(args: EvaluateArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.log)
        .with_context(|| format!("cannot read {}", args.log.display()))?;
    let model = parse_log(&text);
    let room_type = parse_room_type(&args.room_type)?;

    let measurements: Vec<BandRt60> = model
        .bands
        .iter()
        .filter(|b| b.valid)
        .filter_map(|b| {
            b.t20.map(|rt60| BandRt60 {
                frequency: b.frequency,
                rt60,
            })
        })
        .collect();

    if measurements.is_empty() {
        anyhow::bail!("no usable measurements in {}", args.log.display());
    }

    let deviations = evaluate_compliance(&measurements, room_type, args.volume);

    println!("  Band     Measured  Target  Status    Priority");
    for d in &deviations {
        println!(
            "  {:>5} Hz   {:4.2} s  {:4.2} s  {:<8}  {}",
            d.frequency,
            d.measured_rt60,
            d.target_rt60,
            status_label(d.status),
            priority_label(treatment_priority(d.measured_rt60, d.target_rt60)),
        );
    }
    println!();
    println!("  Overall: {}", status_label(overall_compliance(&deviations)));

    if args.recommend {
        for d in deviations
            .iter()
            .filter(|d| d.status == EvaluationStatus::TooHigh)
        {
            // Shortfall in seconds stands in for absorption demand here;
            // any positive value selects the same product ranking.
            let products = recommend_products(d.frequency, d.measured_rt60 - d.target_rt60);
            if products.is_empty() {
                continue;
            }
            println!();
            println!("  Treatment options for {} Hz:", d.frequency);
            for product in products {
                println!(
                    "    {} ({}), α = {:.2}",
                    product.name,
                    product.manufacturer,
                    product.absorption_at(d.frequency)
                );
            }
        }
    }

    Ok(())
}

fn status_label(status: EvaluationStatus) -> &'static str {
    match status {
        EvaluationStatus::WithinTolerance => "ok",
        EvaluationStatus::TooHigh => "too high",
        EvaluationStatus::TooLow => "too low",
        EvaluationStatus::PartiallyCompliant => "partial",
    }
}

fn priority_label(priority: TreatmentPriority) -> &'static str {
    match priority {
        TreatmentPriority::Critical => "critical",
        TreatmentPriority::High => "high",
        TreatmentPriority::Medium => "medium",
        TreatmentPriority::Low => "low",
        TreatmentPriority::None => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LOG: &str = "Setup:\nRoom = Test\n\nT20:\n125Hz 0.9\n500Hz 1.4\n1000Hz -.--\n";

    fn write_log(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("measurement.log");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(LOG.as_bytes()).unwrap();
        path
    }

    #[test]
    fn evaluates_a_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = EvaluateArgs {
            log: write_log(&dir),
            room_type: "classroom".into(),
            volume: 150.0,
            recommend: true,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = EvaluateArgs {
            log: PathBuf::from("/nonexistent/measurement.log"),
            room_type: "classroom".into(),
            volume: 150.0,
            recommend: false,
        };
        assert!(run(args).is_err());
    }

    #[test]
    fn log_without_usable_bands_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.log");
        std::fs::write(&path, "T20:\n125Hz -.--\n").unwrap();

        let args = EvaluateArgs {
            log: path,
            room_type: "office".into(),
            volume: 100.0,
            recommend: false,
        };
        assert!(run(args).is_err());
    }
}
