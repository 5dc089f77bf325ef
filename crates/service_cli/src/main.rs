//! Numerus CLI - Perfect-Number Survey
//!
//! This is the operational entry point for the numerus workspace.
//!
//! # Commands
//!
//! - `numerus` - Survey the fixed candidate range, reporting each perfect
//!   number with its divisor decomposition and both square-root computations
//! - `numerus --verbose` - Same survey with per-candidate diagnostics
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate owns the process
//! surface (argument parsing, logging, exit status) and drives the
//! numerus_core kernel. The survey range and output precision are
//! compiled-in constants (`config::SurveyConfig`); the command line carries
//! only observability switches.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::SurveyConfig;

/// Numerus Perfect-Number Survey CLI
#[derive(Parser)]
#[command(name = "numerus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; diagnostics go to stderr so the survey report
    // owns stdout. RUST_LOG overrides the --verbose default.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    commands::survey::run(&SurveyConfig::default())
}
