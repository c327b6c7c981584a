//! Settings for a rota solve.
//!
//! A [`SolverConfig`] is read from TOML or YAML and controls how the score
//! director evaluates constraints and how much the crate logs. Termination
//! settings are carried through untouched for the optimizer to honour; the
//! scoring core never stops a search on its own.
//!
//! # Examples
//!
//! ```
//! use rota_config::SolverConfig;
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     best_score_limit = "0hard/0medium/0soft"
//!
//!     [score_director]
//!     parallel_evaluation = true
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert!(config.parallel_evaluation());
//! ```
//!
//! A missing file falls back to the defaults:
//!
//! ```
//! use rota_config::SolverConfig;
//!
//! let config = SolverConfig::load("rota.toml").unwrap_or_default();
//! assert_eq!(config.logging.filter, "rota=info");
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use rota_core::{HardMediumSoftScore, ParseableScore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to read or accept a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("malformed YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Everything a solve can be tuned with.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Seed forwarded to the optimizer.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// When the optimizer should stop.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    #[serde(default)]
    pub score_director: ScoreDirectorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, is not valid TOML, or carries a
    /// setting [`validate`](Self::validate) rejects.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate().map(|()| config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_yaml_str(&fs::read_to_string(path)?)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate().map(|()| config)
    }

    /// Rejects values that deserialize but make no sense: an unparseable
    /// best score limit or an empty log filter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            termination.best_score_limit()?;
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logging filter is empty".to_string()));
        }
        Ok(())
    }

    /// Caps solving time, keeping any other termination settings.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        let mut termination = self.termination.take().unwrap_or_default();
        termination.seconds_spent_limit = Some(seconds);
        self.termination = Some(termination);
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_parallel_evaluation(mut self, enabled: bool) -> Self {
        self.score_director.parallel_evaluation = enabled;
        self
    }

    /// Total wall-clock budget, if termination sets one.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref()?.time_limit()
    }

    /// Whether constraints are evaluated on the rayon pool.
    pub fn parallel_evaluation(&self) -> bool {
        self.score_director.parallel_evaluation
    }
}

/// Stop conditions for the optimizer. Unset fields impose no limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    pub seconds_spent_limit: Option<u64>,
    pub minutes_spent_limit: Option<u64>,
    /// Stop after this long without a better score.
    pub unimproved_seconds_spent_limit: Option<u64>,
    pub step_count_limit: Option<u64>,
    /// Stop once this score is reached, written as "0hard/0medium/0soft".
    pub best_score_limit: Option<String>,
}

impl TerminationConfig {
    /// Seconds and minutes limits added together; `None` when both are
    /// unset or zero.
    pub fn time_limit(&self) -> Option<Duration> {
        let minutes = self.minutes_spent_limit.unwrap_or(0);
        let total = self
            .seconds_spent_limit
            .unwrap_or(0)
            .saturating_add(minutes.saturating_mul(60));
        (total > 0).then(|| Duration::from_secs(total))
    }

    pub fn unimproved_time_limit(&self) -> Option<Duration> {
        self.unimproved_seconds_spent_limit.map(Duration::from_secs)
    }

    /// Parses `best_score_limit`.
    pub fn best_score_limit(&self) -> Result<Option<HardMediumSoftScore>, ConfigError> {
        let Some(text) = self.best_score_limit.as_deref() else {
            return Ok(None);
        };
        HardMediumSoftScore::parse(text)
            .map(Some)
            .map_err(|e| ConfigError::Invalid(format!("best_score_limit: {}", e)))
    }
}

/// How the score director computes scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoreDirectorConfig {
    #[serde(default)]
    pub parallel_evaluation: bool,

    /// Log the per-constraint breakdown of the final score.
    #[serde(default)]
    pub constraint_match_enabled: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "rota=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}
