//! Table command implementation
//!
//! Loads a weighted table from a TOML file, prints it with its percentile
//! conversion and optionally draws from it.
//!
//! ```toml
//! scale = "d20"
//! scan_cutoff = 0.0
//!
//! [[entries]]
//! item = "orc"
//! weight = 50.0
//! ```

use clap::Args;
use rand::RngCore;
use randkit_core::config::TableConfig;
use randkit_core::tables::{WeightedEntry, WeightedTable};
use randkit_core::{DiceType, RandomGenerator};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Arguments of the table command
#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    /// Path to the table file
    pub file: PathBuf,

    /// Number of items to draw
    #[arg(short, long, default_value_t = 0)]
    pub picks: usize,

    /// Remove each drawn item from the table
    #[arg(long)]
    pub remove: bool,

    /// Die used for the percentile table (overrides file and config)
    #[arg(long)]
    pub scale: Option<DiceType>,
}

/// Contents of a table file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableFile {
    /// Die for the percentile table
    #[serde(default)]
    pub scale: Option<DiceType>,
    /// Scan cutoff for selection
    #[serde(default)]
    pub scan_cutoff: Option<f32>,
    /// Weighted items
    pub entries: Vec<WeightedEntry<String>>,
}

impl TableFile {
    /// Parse a table file from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a table file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let text = std::fs::read_to_string(path)?;
        let file = Self::parse(&text)?;
        debug!(path = %path.display(), entries = file.entries.len(), "loaded table file");
        Ok(file)
    }

    /// Build the weighted table, file settings taking precedence over `defaults`.
    pub fn build(&self, defaults: &TableConfig) -> Result<WeightedTable<String>> {
        let config = TableConfig {
            scan_cutoff: self.scan_cutoff.unwrap_or(defaults.scan_cutoff),
        };
        let mut table = config.table()?;
        for entry in &self.entries {
            table.add_entry(entry.item.clone(), entry.weight)?;
        }
        Ok(table)
    }
}

/// Render the table, its percentile form and any draws.
pub fn render<R: RngCore>(
    rng: &mut RandomGenerator<R>,
    config: &CliConfig,
    file: &TableFile,
    args: &TableArgs,
) -> Result<Vec<String>> {
    let scale = args.scale.or(file.scale).unwrap_or(config.scale);
    let mut table = file.build(&config.table)?;

    let mut lines: Vec<String> = table.to_string().lines().map(str::to_string).collect();
    let percentile = table.to_percentile_table(scale)?;
    lines.extend(percentile.to_string().lines().map(str::to_string));

    for pick in 1..=args.picks {
        let item = table.select_random_item(rng, args.remove)?;
        lines.push(format!("pick {}: {}", pick, item));
    }
    Ok(lines)
}

/// Run the table command
pub fn run<R: RngCore>(
    rng: &mut RandomGenerator<R>,
    config: &CliConfig,
    args: &TableArgs,
) -> Result<()> {
    info!(file = %args.file.display(), picks = args.picks, "loading weighted table");
    let file = TableFile::load(&args.file)?;
    super::print_lines(&render(rng, config, &file, args)?);
    Ok(())
}
