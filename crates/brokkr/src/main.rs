//! Brokkr CLI - interactive workstation provisioning
//!
//! This is the main entry point for the Brokkr command-line interface.

mod cli;
mod commands;
mod output;
mod utils;
mod version;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Provision(args) => commands::provision::run(args).await,
        Commands::Version(args) => commands::version::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Keep the default at warn: the interactive flow already
            // narrates itself on stdout.
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
