//! Configuration management for the stamp dispenser
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.stamp-dispenser/config.toml

use crate::cli::Verbosity;
use crate::denominations::DenominationSet;
use crate::errors::{DispenserError, Result};
use crate::solver::StampDispenser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory under the home directory holding the config file
pub const CONFIG_DIR: &str = ".stamp-dispenser";

/// Config file name
pub const CONFIG_FILE: &str = "config.toml";

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dispenser: DispenserConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Stamps loaded into the machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispenserConfig {
    pub denominations: Vec<i64>,
}

/// Solver execution settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Batch threads; 0 uses one per logical CPU
    #[serde(default)]
    pub worker_threads: usize,
}

/// Terminal output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub default_verbosity: String,
    pub color_output: bool,
}

impl Default for DispenserConfig {
    fn default() -> Self {
        Self {
            denominations: vec![90, 30, 24, 10, 6, 2, 1],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_verbosity: Verbosity::Normal.as_str().to_string(),
            color_output: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Self::load_default(),
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DispenserError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| DispenserError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from the standard location, or fall back to built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config file location, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.denomination_set().map_err(|e| {
            DispenserError::ConfigError(format!("dispenser.denominations: {}", e))
        })?;

        if Verbosity::from_name(&self.output.default_verbosity).is_none() {
            return Err(DispenserError::ConfigError(format!(
                "Invalid verbosity level: {}",
                self.output.default_verbosity
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DispenserError::ConfigError(format!("Failed to create config dir: {}", e))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DispenserError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| DispenserError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Validated denomination set from the config
    pub fn denomination_set(&self) -> Result<DenominationSet> {
        DenominationSet::new(&self.dispenser.denominations)
    }

    /// Build a dispenser from the configured denominations and threads
    pub fn dispenser(&self) -> Result<StampDispenser> {
        Ok(StampDispenser::new(self.denomination_set()?)
            .with_worker_threads(self.solver.worker_threads))
    }

    /// Configured default verbosity
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_name(&self.output.default_verbosity).unwrap_or(Verbosity::Normal)
    }
}
