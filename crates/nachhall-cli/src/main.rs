//! Nachhall CLI - Room acoustics measurement and DIN 18041 planning.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nachhall")]
#[command(author, version, about = "Room acoustics analysis and DIN 18041 planning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an impulse response recording for per-band RT60
    Analyze(commands::analyze::AnalyzeArgs),

    /// Parse an RT60 measurement log file
    ParseLog(commands::parse_log::ParseLogArgs),

    /// Show DIN 18041 target reverberation times
    Targets(commands::targets::TargetsArgs),

    /// Predict RT60 from room volume and absorption (Sabine)
    Sabine(commands::sabine::SabineArgs),

    /// Evaluate a measurement log against DIN 18041 targets
    Evaluate(commands::evaluate::EvaluateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::ParseLog(args) => commands::parse_log::run(args),
        Commands::Targets(args) => commands::targets::run(args),
        Commands::Sabine(args) => commands::sabine::run(args),
        Commands::Evaluate(args) => commands::evaluate::run(args),
    }
}
