//! DIN 18041 target lookup command.

use clap::Args;
use nachhall_din18041::{planning_target_rt60, targets_for};

use super::common::{parse_room_type, parse_room_usage};

#[derive(Args)]
pub struct TargetsArgs {
    /// Room type for the per-band compliance table
    /// (classroom, office, conference, lecture, music, sports)
    #[arg(long, value_name = "TYPE")]
    room_type: Option<String>,

    /// Room usage for the volume-scaled planning target
    /// (classroom, office, conference, lecture, music, sports,
    /// restaurant, open-plan-office, home-theater, recording-studio)
    #[arg(long, value_name = "USAGE")]
    usage: Option<String>,

    /// Room volume in m³
    #[arg(long, default_value = "100")]
    volume: f64,
}

pub fn run(args: TargetsArgs) -> anyhow::Result<()> {
    if args.room_type.is_none() && args.usage.is_none() {
        anyhow::bail!("specify --room-type and/or --usage");
    }

    if let Some(name) = &args.room_type {
        let room_type = parse_room_type(name)?;
        println!("DIN 18041 targets for {name} ({} m³):", args.volume);
        println!("  Band     Target  Tolerance");
        for target in targets_for(room_type, args.volume) {
            println!(
                "  {:>5} Hz  {:4.2} s    ±{:.2} s",
                target.frequency, target.target_rt60, target.tolerance
            );
        }
    }

    if let Some(name) = &args.usage {
        let usage = parse_room_usage(name)?;
        let target = planning_target_rt60(usage, args.volume);
        println!(
            "Planning target for {name} at {} m³: {target:.2} s",
            args.volume
        );
    }

    Ok(())
}
