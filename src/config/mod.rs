//! Configuration system with YAML schema and validation.
//!
//! Configuration is type-checked by serde, range-checked by `validator`,
//! and then passed through a semantic pass for cross-field constraints.
//! Every field has a default, so an empty document is a valid config.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::engine::{Algorithm, Direction};
use crate::error::{SortError, SortResult};

/// Top-level visualizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VisualizerConfig {
    /// Seed for the sequence generator.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Shape of generated sequences.
    #[validate(nested)]
    #[serde(default)]
    pub sequence: SequenceConfig,

    /// Algorithm selected at startup.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Direction selected at startup.
    #[serde(default)]
    pub direction: Direction,

    /// Playback speed settings.
    #[validate(nested)]
    #[serde(default)]
    pub speed: SpeedConfig,
}

const fn default_seed() -> u64 {
    42
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            sequence: SequenceConfig::default(),
            algorithm: Algorithm::default(),
            direction: Direction::default(),
            speed: SpeedConfig::default(),
        }
    }
}

impl VisualizerConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> SortResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> SortResult<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.check()?;
        Ok(config)
    }

    /// Run field and cross-field validation.
    ///
    /// # Errors
    ///
    /// Returns the first failing constraint.
    pub fn check(&self) -> SortResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> VisualizerConfigBuilder {
        VisualizerConfigBuilder::default()
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> SortResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate_semantic(&self) -> SortResult<()> {
        if self.sequence.min_value > self.sequence.max_value {
            return Err(SortError::config(format!(
                "sequence.min_value ({}) exceeds sequence.max_value ({})",
                self.sequence.min_value, self.sequence.max_value
            )));
        }
        if self.speed.initial < self.speed.min {
            return Err(SortError::config(format!(
                "speed.initial ({}) is below speed.min ({})",
                self.speed.initial, self.speed.min
            )));
        }
        Ok(())
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct VisualizerConfigBuilder {
    seed: Option<u64>,
    length: Option<usize>,
    range: Option<(i64, i64)>,
    algorithm: Option<Algorithm>,
    direction: Option<Direction>,
    speed: Option<SpeedConfig>,
}

impl VisualizerConfigBuilder {
    /// Set the generator seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the sequence length.
    #[must_use]
    pub const fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the inclusive value range.
    #[must_use]
    pub const fn value_range(mut self, min: i64, max: i64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Set the startup algorithm.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the startup direction.
    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Set speed settings.
    #[must_use]
    pub const fn speed(mut self, speed: SpeedConfig) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> VisualizerConfig {
        let mut config = VisualizerConfig::default();

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(length) = self.length {
            config.sequence.length = length;
        }
        if let Some((min, max)) = self.range {
            config.sequence.min_value = min;
            config.sequence.max_value = max;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }

        config
    }
}

/// Shape of generated sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SequenceConfig {
    /// Number of values.
    #[validate(range(max = 10_000))]
    #[serde(default = "default_length")]
    pub length: usize,
    /// Smallest value that may be drawn.
    #[serde(default)]
    pub min_value: i64,
    /// Largest value that may be drawn.
    #[serde(default = "default_max_value")]
    pub max_value: i64,
}

const fn default_length() -> usize {
    50
}

const fn default_max_value() -> i64 {
    100
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            min_value: 0,
            max_value: default_max_value(),
        }
    }
}

/// Playback speed, in scheduler ticks per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SpeedConfig {
    /// Speed at startup.
    #[validate(range(min = 1))]
    #[serde(default = "default_initial_speed")]
    pub initial: u32,
    /// Increment per speed command.
    #[validate(range(min = 1))]
    #[serde(default = "default_speed_step")]
    pub step: u32,
    /// Floor below which speed never drops.
    #[validate(range(min = 1))]
    #[serde(default = "default_min_speed")]
    pub min: u32,
}

const fn default_initial_speed() -> u32 {
    60
}

const fn default_speed_step() -> u32 {
    5
}

const fn default_min_speed() -> u32 {
    5
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            initial: default_initial_speed(),
            step: default_speed_step(),
            min: default_min_speed(),
        }
    }
}
