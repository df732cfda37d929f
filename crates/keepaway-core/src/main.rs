//! Keep-away simulation
//!
//! Reads monkey notes, runs the configured number of rounds and prints how
//! busy every monkey was.
//!
//! Examples:
//!   keepaway data/monkeys.ini
//!   keepaway data/monkeys.ini --rounds 20 --checkpoint-interval 5
//!   keepaway --config keepaway.toml --json

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use keepaway_core::config::{Config, DEFAULT_CONFIG_PATH};
use keepaway_core::{load_notes, simulate, KeepawayError, ReportFormat};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "keepaway")]
#[command(about = "Simulates monkeys playing keep-away with worry values")]
struct Args {
    /// Notes describing the monkeys (overrides the config file)
    notes: Option<PathBuf>,

    /// Number of rounds to simulate
    #[arg(long)]
    rounds: Option<u64>,

    /// Record counters every N rounds (0 disables)
    #[arg(long)]
    checkpoint_interval: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Run settings file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log every round
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<String, KeepawayError> {
    let mut config = Config::load_or_default(&args.config);

    if let Some(notes) = args.notes {
        config.input.notes = notes;
    }
    if let Some(rounds) = args.rounds {
        config.simulation.rounds = rounds;
    }
    if let Some(interval) = args.checkpoint_interval {
        config.simulation.checkpoint_interval = interval;
    }
    if args.json {
        config.report.format = ReportFormat::Json;
    }

    tracing::info!("Reading notes from {}", config.input.notes.display());
    let specs = load_notes(&config.input.notes)?;

    let output = simulate(
        specs,
        config.simulation.rounds,
        config.simulation.checkpoint_interval,
    )?;
    Ok(output.render(config.report.format)?)
}
