//! Stead CLI - drive the village simulation from the command line.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Stead - a deterministic incremental village engine
#[derive(Parser, Debug)]
#[command(name = "stead")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Save-slot directory
    #[arg(short = 'd', long, default_value = "save", global = true)]
    save_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Advance the simulation by N economic steps
    Run {
        /// Number of economic steps (one step is 60 ticks, ~1 second)
        #[arg(short, long, default_value = "1")]
        steps: u64,

        /// Random seed for battle resolution (default: random)
        #[arg(long)]
        seed: Option<u64>,

        /// Load the dev fixture (huge stockpiles) before stepping
        #[arg(long)]
        dev: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress step-by-step output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Apply one player action to the save slot
    Act {
        /// The action to apply
        #[arg(value_enum)]
        action: cli::act::PlayerAction,
    },

    /// Display the save slot
    Status {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Reset the save slot to first-run defaults
    Reset,
}

fn main() -> ExitCode {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .try_init();

    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            steps,
            seed,
            dev,
            format,
            quiet,
        } => cli::run::execute(&args.save_dir, steps, seed, dev, format, quiet),

        Commands::Act { action } => cli::act::execute(&args.save_dir, action),

        Commands::Status { format } => cli::status::execute(&args.save_dir, format),

        Commands::Reset => cli::reset::execute(&args.save_dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
