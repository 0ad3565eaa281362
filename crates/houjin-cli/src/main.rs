//! # houjin CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use houjin_cli::check::{run_check, CheckArgs};
use houjin_cli::complete::{run_complete, CompleteArgs};
use houjin_cli::digit::{run_digit, DigitArgs};
use houjin_cli::output::OutputFormat;

/// Corporate number check digit toolkit.
///
/// Computes, verifies, and completes the check digit of 13-digit Japanese
/// corporate numbers.
#[derive(Parser, Debug)]
#[command(name = "houjin", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit a single JSON document instead of text lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the check digit implied by each number's body.
    Digit(DigitArgs),

    /// Verify the check digit of each number.
    Check(CheckArgs),

    /// Prefix 12-digit bodies with their check digit.
    Complete(CompleteArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "houjin CLI starting");

    let format = OutputFormat::from_json_flag(cli.json);
    let mut stdout = std::io::stdout().lock();

    let result = match cli.command {
        Commands::Digit(args) => run_digit(&args, format, &mut stdout),
        Commands::Check(args) => run_check(&args, format, &mut stdout),
        Commands::Complete(args) => run_complete(&args, format, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(houjin_cli::EXIT_MALFORMED)
        }
    }
}
