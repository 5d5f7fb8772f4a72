//! Run configuration
//!
//! Settings come from an optional RON file, falling back to defaults for
//! anything missing. The file lives in the platform config directory unless
//! `DELVE_CONFIG` points elsewhere; `DELVE_SEED` overrides the seed.

use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "DELVE_CONFIG";
/// Environment variable overriding the RNG seed
pub const SEED_ENV: &str = "DELVE_SEED";

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid seed {raw:?}: {source}")]
    InvalidSeed {
        raw: String,
        #[source]
        source: ParseIntError,
    },
}

/// Settings for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed seed for a reproducible dungeon; random when absent
    pub seed: Option<u64>,
    /// `env_logger` filter directive
    pub log_filter: String,
    /// Where log output goes, so it doesn't mix with the game text
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: "info".to_string(),
            log_file: PathBuf::from("delve.log"),
        }
    }
}

impl Config {
    /// Load from the usual location and apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_path);

        let mut config = Self::load_from(&path)?;
        if let Ok(raw) = std::env::var(SEED_ENV) {
            config.override_seed(&raw)?;
        }
        Ok(config)
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the seed with a decimal value
    pub fn override_seed(&mut self, raw: &str) -> Result<(), ConfigError> {
        let seed = raw.trim().parse().map_err(|source| ConfigError::InvalidSeed {
            raw: raw.to_string(),
            source,
        })?;
        self.seed = Some(seed);
        Ok(())
    }
}

/// Get the config file path
fn default_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "delve", "Delve") {
        proj_dirs.config_dir().join("config.ron")
    } else {
        PathBuf::from("./config.ron")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("delve-{}-{}.ron", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("delve-definitely-not-here.ron");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_file("partial", "(seed: Some(42))");
        let config = Config::load_from(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_file("broken", "(seed: \"lots\"");
        let err = Config::load_from(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_seed_override() {
        let mut config = Config::default();
        config.override_seed(" 1234 ").unwrap();
        assert_eq!(config.seed, Some(1234));
        assert!(matches!(
            config.override_seed("abc"),
            Err(ConfigError::InvalidSeed { .. })
        ));
        assert_eq!(config.seed, Some(1234));
    }
}
