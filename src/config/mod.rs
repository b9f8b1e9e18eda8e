//! Program wide configuration.
//!
//! The CLI turns its arguments (and an optional TOML file) into a [`Config`]
//! and stores it globally. Library users can either do the same with
//! [`set_global_config`] or pass a `Config` straight to
//! [`crate::crack_with_config`].
//! ```rust
//! use kasiski::config::get_config;
//! // Without initialisation the defaults are used
//! let config = get_config();
//! assert_eq!(config.fallback_key_length, 5);
//! ```

use crate::error::KasiskiError;
use crate::key_length::{DEFAULT_IC_THRESHOLD, DEFAULT_MAX_KEY_LENGTH, DEFAULT_MIN_KEY_LENGTH};
use log::trace;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Key length used when no length clears the IoC threshold
pub const DEFAULT_FALLBACK_KEY_LENGTH: usize = 5;

/// Largest key length a config may ask for, for both the scan and the fallback
pub const KEY_LENGTH_CEILING: usize = 1000;

/// Which plausible key length wins when there are several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateStrategy {
    /// The shortest plausible length, nothing else is tried
    #[default]
    First,
    /// Try every plausible length and keep the plaintext closest to English
    LowestChiSquared,
}

/// What the recovered key is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DecryptTarget {
    /// The ciphertext as given, punctuation, spacing and case kept
    Original,
    /// The uppercased, letters only form used for key detection
    #[default]
    Normalised,
}

/// The Config object is a default configuration object
/// for the entire program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// A level of verbosity to determine.
    /// How much we print in logs.
    pub verbose: u8,
    /// Return results as JSON instead of pretty printing them
    pub api_mode: bool,
    /// Shortest key length the Kasiski examination tries
    pub min_key_length: usize,
    /// Longest key length the Kasiski examination tries
    pub max_key_length: usize,
    /// Average column IoC a key length has to beat
    pub ic_threshold: f64,
    /// Key length used when nothing clears the threshold
    pub fallback_key_length: usize,
    /// How to choose between plausible key lengths
    pub strategy: CandidateStrategy,
    /// Whether the final plaintext keeps the original formatting
    pub decrypt_target: DecryptTarget,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: 0,
            api_mode: false,
            min_key_length: DEFAULT_MIN_KEY_LENGTH,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            ic_threshold: DEFAULT_IC_THRESHOLD,
            fallback_key_length: DEFAULT_FALLBACK_KEY_LENGTH,
            strategy: CandidateStrategy::default(),
            decrypt_target: DecryptTarget::default(),
        }
    }
}

impl Config {
    /// Checks the numbers make sense together
    pub fn validate(&self) -> Result<(), KasiskiError> {
        if self.min_key_length == 0 {
            return Err(KasiskiError::Config(
                "min_key_length must be at least 1".to_string(),
            ));
        }
        if self.min_key_length > self.max_key_length {
            return Err(KasiskiError::Config(format!(
                "min_key_length ({}) is larger than max_key_length ({})",
                self.min_key_length, self.max_key_length
            )));
        }
        if self.max_key_length > KEY_LENGTH_CEILING {
            return Err(KasiskiError::Config(format!(
                "max_key_length ({}) is larger than {}",
                self.max_key_length, KEY_LENGTH_CEILING
            )));
        }
        if self.fallback_key_length == 0 {
            return Err(KasiskiError::Config(
                "fallback_key_length must be at least 1".to_string(),
            ));
        }
        if self.fallback_key_length > KEY_LENGTH_CEILING {
            return Err(KasiskiError::Config(format!(
                "fallback_key_length ({}) is larger than {}",
                self.fallback_key_length, KEY_LENGTH_CEILING
            )));
        }
        if !self.ic_threshold.is_finite() || self.ic_threshold < 0.0 {
            return Err(KasiskiError::Config(format!(
                "ic_threshold must be a non-negative number, got {}",
                self.ic_threshold
            )));
        }
        Ok(())
    }

    /// Parses a TOML document, missing keys take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Config, KasiskiError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }
}

/// Reads and validates a TOML config file
pub fn load_config_file(path: &Path) -> Result<Config, KasiskiError> {
    trace!("Loading config from {}", path.display());
    let contents = fs::read_to_string(path)?;
    Config::from_toml_str(&contents)
}

/// Cell for storing global Config
static CONFIG: OnceCell<Config> = OnceCell::new();

/// To initialize global config with custom values
pub fn set_global_config(config: Config) {
    CONFIG.set(config).ok(); // ok() used to make compiler happy about using Result
}

/// Get the global config.
/// This will return default config if the config isn't initialized
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
