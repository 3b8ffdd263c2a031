//! Serializable analysis configuration.

use serde::{Deserialize, Serialize};
use smalab_core::domain::Direction;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for one analysis run.
///
/// Captures everything needed to reproduce the run; `run_id()` hashes the
/// serialized form so identical configs share an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub data: DataConfig,
    #[serde(default)]
    pub strategy: StrategyConfig,
    pub output: OutputConfig,
}

/// Input table settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Input price table (CSV with Date, Open, High, Low, Close columns).
    pub input: PathBuf,

    /// Use SMA_20/SMA_50 columns from the input instead of recomputing,
    /// when the table carries them.
    #[serde(default)]
    pub use_precomputed_sma: bool,
}

/// Strategy settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Fast SMA window.
    pub fast_period: usize,

    /// Slow SMA window.
    pub slow_period: usize,

    /// Which setup directions to scan.
    pub directions: DirectionMode,

    /// Target distance as a multiple of initial risk.
    pub reward_multiple: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            fast_period: 20,
            slow_period: 50,
            directions: DirectionMode::Bullish,
            reward_multiple: 2.0,
        }
    }
}

/// Which setup directions the scan evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionMode {
    Bullish,
    Bearish,
    Both,
}

impl DirectionMode {
    pub fn directions(self) -> Vec<Direction> {
        match self {
            DirectionMode::Bullish => vec![Direction::Bullish],
            DirectionMode::Bearish => vec![Direction::Bearish],
            DirectionMode::Both => vec![Direction::Bullish, Direction::Bearish],
        }
    }
}

/// Output artifact settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory all artifacts are written into.
    pub dir: PathBuf,

    /// Enriched table name; written as `<name>.csv`, replacing any prior
    /// file of that name.
    #[serde(default = "default_enriched_table")]
    pub enriched_table: String,

    /// Report file name.
    #[serde(default = "default_report_file")]
    pub report_file: String,

    /// Title line of the text report.
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

fn default_enriched_table() -> String {
    "prices_with_sma".to_string()
}

fn default_report_file() -> String {
    "trade_stats.txt".to_string()
}

fn default_report_title() -> String {
    "* BULLISH SMA TRADE STATISTICAL ANALYSIS RESULTS *".to_string()
}

impl AnalysisConfig {
    /// Load and validate a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategy.fast_period < 1 {
            return Err(ConfigError::Invalid("fast_period must be >= 1".into()));
        }
        if self.strategy.slow_period <= self.strategy.fast_period {
            return Err(ConfigError::Invalid(
                "slow_period must be > fast_period".into(),
            ));
        }
        if self.strategy.reward_multiple <= 0.0 {
            return Err(ConfigError::Invalid("reward_multiple must be > 0".into()));
        }
        if self.output.enriched_table.is_empty() {
            return Err(ConfigError::Invalid("enriched_table must be named".into()));
        }
        Ok(())
    }

    /// Deterministic fingerprint of this configuration.
    ///
    /// Two runs with identical configs get the same id, so artifacts can be
    /// traced back to the exact settings that produced them.
    pub fn run_id(&self) -> String {
        let json = serde_json::to_string(self).expect("AnalysisConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
