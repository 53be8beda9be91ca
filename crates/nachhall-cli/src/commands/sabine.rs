//! Sabine prediction command.

use clap::Args;
use nachhall_din18041::{required_absorption, rt60_sabine};

#[derive(Args)]
pub struct SabineArgs {
    /// Room volume in m³
    #[arg(long)]
    volume: f64,

    /// Total equivalent absorption area in m² Sabine
    #[arg(long)]
    absorption: f64,

    /// Target RT60 in seconds; when given, also report the absorption
    /// shortfall
    #[arg(long)]
    target: Option<f64>,
}

pub fn run(args: SabineArgs) -> anyhow::Result<()> {
    let Some(rt60) = rt60_sabine(args.volume, args.absorption) else {
        anyhow::bail!("volume and absorption must both be positive");
    };

    println!("Predicted RT60: {rt60:.2} s");

    if let Some(target) = args.target {
        let needed = required_absorption(rt60, target, args.volume, args.absorption);
        if needed > 0.0 {
            println!("Additional absorption to reach {target:.2} s: {needed:.1} m² Sabine");
        } else {
            println!("Target of {target:.2} s already met");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicts_and_reports_shortfall() {
        let args = SabineArgs {
            volume: 100.0,
            absorption: 8.05,
            target: Some(1.0),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn prediction_without_target() {
        let args = SabineArgs {
            volume: 100.0,
            absorption: 16.1,
            target: None,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn nonpositive_inputs_are_an_error() {
        let args = SabineArgs {
            volume: 100.0,
            absorption: 0.0,
            target: None,
        };
        assert!(run(args).is_err());
    }
}
