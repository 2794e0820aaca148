//! CLI configuration management
//!
//! Layers built-in defaults, an optional TOML file and `RANDKIT_*`
//! environment variables (later layers win). Nested keys use a double
//! underscore: `RANDKIT_GENERATOR__SEED=42`.

use randkit_core::config::{GeneratorConfig, TableConfig};
use randkit_core::DiceType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::error::{CliError, Result};

/// Prefix of environment variables read by the CLI.
pub const ENV_PREFIX: &str = "RANDKIT";

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::invalid(format!(
                "invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Effective CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Bit source for every command
    pub generator: GeneratorConfig,
    /// Weighted-table tuning
    pub table: TableConfig,
    /// Default die for percentile tables
    pub scale: DiceType,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            generator: GeneratorConfig::default(),
            table: TableConfig::default(),
            scale: DiceType::D100,
        }
    }
}

impl CliConfig {
    /// Load configuration from defaults, `path` (if it exists) and the environment.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(
                config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        debug!(path = %path.display(), ?loaded, "loaded configuration");
        Ok(loaded)
    }

    /// Override the generator with a fixed seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            self.generator = GeneratorConfig::seeded(seed);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use randkit_core::rng::SourceKind;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.generator.source, SourceKind::Entropy);
        assert_eq!(config.table.scan_cutoff, 1.0);
        assert_eq!(config.scale, DiceType::D100);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert!(LogLevel::from_str("loud").is_err());
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("randkit-config-does-not-exist.toml");
        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.scale, DiceType::D100);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("randkit-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "log_level = \"debug\"\nscale = \"d20\"\n\n[generator]\nsource = \"seeded\"\nseed = 7\n\n[table]\nscan_cutoff = 0.0"
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.scale, DiceType::D20);
        assert_eq!(config.generator, GeneratorConfig::seeded(7));
        assert_eq!(config.table.scan_cutoff, 0.0);
    }

    #[test]
    fn test_seed_override() {
        let config = CliConfig::default().with_seed(Some(3));
        assert_eq!(config.generator, GeneratorConfig::seeded(3));
        let config = CliConfig::default().with_seed(None);
        assert_eq!(config.generator.source, SourceKind::Entropy);
    }
}
