//! Crumple CLI: scripted simulation, benchmarking, and inspection.

use clap::{Parser, Subcommand};
use tracing::Level;

mod commands;

#[derive(Parser)]
#[command(name = "crumple")]
#[command(version, about = "Crumple: paper fold and puff deformation engine")]
struct Cli {
    /// Log verbosity (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a simulation script.
    Simulate {
        /// Path to simulation script (TOML).
        #[arg(short, long, default_value = "simulation.toml")]
        script: String,

        /// Write every geometry frame to this JSON file.
        #[arg(short, long)]
        output: Option<String>,

        /// Write a state snapshot of the final tick to this file.
        #[arg(long)]
        snapshot: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (flat_settle, corner_fold, fold_then_puff,
        /// repeated_folds, breathing, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a simulation script.
    Validate {
        /// Path to script (TOML).
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Simulate {
            script,
            output,
            snapshot,
        } => commands::simulate(&script, output.as_deref(), snapshot.as_deref()),
        Commands::Benchmark { scenario, output } => commands::benchmark(&scenario, output.as_deref()),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
