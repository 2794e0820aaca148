//! Randkit CLI - Command Line Access to the Generators
//!
//! This is the operational entry point for the randkit libraries.
//!
//! # Commands
//!
//! - `randkit draw <kind>` - Draw integers, doubles, shaped values or bytes
//! - `randkit table <file>` - Print a weighted table as a percentile table and draw from it
//! - `randkit roll <formula>` - Roll a dice formula such as `3d6+2`
//! - `randkit check` - Show the effective configuration
//!
//! # Configuration
//!
//! Settings come from built-in defaults, then the file given by `--config`
//! (`randkit.toml` by default, optional), then `RANDKIT_*` environment
//! variables. `--seed` overrides the generator section for one run.
//! `RUST_LOG` takes precedence over the configured log level.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires `randkit_core` and
//! `randkit_extras` into a command-line interface.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::{draw::DrawArgs, roll::RollArgs, table::TableArgs};
use config::{CliConfig, LogLevel};

/// Randkit random value generation CLI
#[derive(Parser)]
#[command(name = "randkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "randkit.toml")]
    config: String,

    /// Seed the generator for a reproducible run
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw random values
    Draw(DrawArgs),

    /// Print and sample a weighted table file
    Table(TableArgs),

    /// Roll a dice formula
    Roll(RollArgs),

    /// Check configuration and generator setup
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config))?
        .with_seed(cli.seed);

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };

    // Initialise tracing; logs go to stderr so command output stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    if let Commands::Check = cli.command {
        return commands::check::run(&config).context("configuration check failed");
    }

    let mut rng = config
        .generator
        .build()
        .context("failed to build the random generator")?;

    match cli.command {
        Commands::Draw(args) => commands::draw::run(&mut rng, &args).context("draw failed"),
        Commands::Table(args) => {
            commands::table::run(&mut rng, &config, &args).context("table command failed")
        }
        Commands::Roll(args) => commands::roll::run(&mut rng, &args).context("roll failed"),
        Commands::Check => Ok(()),
    }
}
