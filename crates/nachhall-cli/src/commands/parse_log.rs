//! Measurement log inspection command.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use nachhall_logparse::parse_log;

use super::common::format_seconds;

#[derive(Args)]
pub struct ParseLogArgs {
    /// Input log file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Emit the parsed model as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ParseLogArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let model = parse_log(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    if !model.metadata.is_empty() {
        println!("Setup:");
        for (key, value) in &model.metadata {
            println!("  {key} = {value}");
        }
        println!();
    }

    println!("  Band      T20    Corr   Valid");
    for band in &model.bands {
        let correlation = band
            .correlation
            .map_or_else(|| "    -".to_owned(), |c| format!("{:5.1}", c * 100.0));
        println!(
            "  {:>5} Hz {}  {}   {}",
            band.frequency,
            format_seconds(band.t20),
            correlation,
            if band.valid { "yes" } else { "no" }
        );
    }

    if !model.checksum.is_empty() {
        println!();
        println!("  Checksum: {}", model.checksum);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "Setup:\nDevice = XL2\n\nT20:\n125Hz 0,70\n500Hz -.--\n\nCorreltn:\n125Hz 98.5\n\nCheckSum:\nABC123\n";

    #[test]
    fn renders_a_log_as_table_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.log");
        std::fs::write(&path, LOG).unwrap();

        let table = ParseLogArgs {
            input: path.clone(),
            json: false,
        };
        assert!(run(table).is_ok());

        let json = ParseLogArgs { input: path, json: true };
        assert!(run(json).is_ok());
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = ParseLogArgs {
            input: PathBuf::from("/nonexistent/export.log"),
            json: false,
        };
        assert!(run(args).is_err());
    }
}
