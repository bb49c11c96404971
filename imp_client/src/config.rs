//! Client configuration management.
//!
//! Command-line values win over environment variables, which win over the
//! built-in defaults.

use impostor::{DEFAULT_PLAYERS, GameMode, GameSettings, MAX_PLAYERS, MIN_PLAYERS};
use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "IMPOSTOR_DATA_DIR";
pub const SEED_VAR: &str = "IMPOSTOR_SEED";
pub const LOG_FILE_VAR: &str = "IMPOSTOR_LOG";

const DEFAULT_DATA_DIR: &str = ".impostor";
const DEFAULT_LOG_FILE: &str = "impostor.log";

/// Everything the terminal client needs to start
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub player_count: usize,
    pub mode: Option<GameMode>,
    /// Where preferences are stored
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    /// Start with sound effects off
    pub muted: bool,
}

/// Values given on the command line
#[derive(Debug, Default)]
pub struct Overrides {
    pub player_count: Option<usize>,
    pub mode: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub muted: bool,
}

impl ClientConfig {
    /// Resolve the configuration from command-line overrides and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is present but malformed, or the
    /// player count is out of range.
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        let mode = overrides
            .mode
            .map(|mode| {
                mode.parse::<GameMode>().map_err(|error| ConfigError::Invalid {
                    var: "--mode".to_string(),
                    reason: error.to_string(),
                })
            })
            .transpose()?;

        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => match std::env::var(SEED_VAR) {
                Ok(value) => Some(value.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: SEED_VAR.to_string(),
                    reason: format!("'{value}' is not a number"),
                })?),
                Err(_) => None,
            },
        };

        let data_dir = overrides
            .data_dir
            .or_else(|| std::env::var_os(DATA_DIR_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let log_file = overrides
            .log_file
            .or_else(|| std::env::var_os(LOG_FILE_VAR).map(PathBuf::from))
            .unwrap_or_else(|| data_dir.join(DEFAULT_LOG_FILE));

        let config = Self {
            player_count: overrides.player_count.unwrap_or(DEFAULT_PLAYERS),
            mode,
            data_dir,
            seed,
            log_file,
            muted: overrides.muted,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::Invalid {
                var: "--players".to_string(),
                reason: format!(
                    "must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {}",
                    self.player_count
                ),
            });
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                var: DATA_DIR_VAR.to_string(),
                reason: "path is empty".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn game_settings(&self) -> GameSettings {
        GameSettings::new(self.player_count, self.mode, self.seed)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYERS,
            mode: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed: None,
            log_file: PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_LOG_FILE),
            muted: false,
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}
