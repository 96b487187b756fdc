//! polycalc - command-line driver for the polynomial stack calculator.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::FmtSubscriber;

use polycalc::Config;

/// Line-oriented stack calculator for multivariate polynomials.
#[derive(Debug, Parser)]
#[command(name = "polycalc", version, about)]
struct Args {
    /// Script to execute; reads standard input when omitted
    file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::from_flags(args.file, args.verbose, args.quiet) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("polycalc: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(level) = config.log_level {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("polycalc: failed to set tracing subscriber: {e}");
        }
    }

    match polycalc::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("polycalc: {e}");
            ExitCode::FAILURE
        }
    }
}
