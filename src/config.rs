use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ai_player::Strategy;
use crate::board::{COLS, ROWS};
use crate::eval::HeuristicWeights;

/// Search depth in plies of the computer player.
pub const DEFAULT_DEPTH: u32 = 6;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Engine configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub depth: u32,
    /// Search the root columns on the rayon thread pool.
    pub parallel: bool,
    pub strategy: Strategy,
    pub weights: HeuristicWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            parallel: false,
            strategy: Strategy::default(),
            weights: HeuristicWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be > 0".to_string()));
        }
        if self.depth as usize > ROWS * COLS {
            return Err(ConfigError::Validation(format!(
                "depth must be <= {}",
                ROWS * COLS
            )));
        }
        if self.weights.four <= 0 {
            return Err(ConfigError::Validation(
                "weights.four must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.depth, 6);
        assert!(!config.parallel);
        assert_eq!(config.strategy, Strategy::Minimax);
        assert_eq!(config.weights, HeuristicWeights::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml(
            r#"
            depth = 4
            strategy = "greedy"

            [weights]
            opponent_two = -20
            "#,
        )
        .unwrap();
        assert_eq!(config.depth, 4);
        assert_eq!(config.strategy, Strategy::Greedy);
        assert_eq!(config.weights.opponent_two, -20);
        assert_eq!(config.weights.three, 30);
        assert!(!config.parallel);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = EngineConfig::from_toml("depth = 0").unwrap_err();
        assert_eq!(err.to_string(), "config validation error: depth must be > 0");

        let err = EngineConfig::from_toml("depth = 43").unwrap_err();
        assert_eq!(err.to_string(), "config validation error: depth must be <= 42");

        assert!(matches!(
            EngineConfig::from_toml("depth = \"deep\""),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = Path::new("does/not/exist/engine.toml");
        assert_eq!(
            EngineConfig::load_or_default(path).unwrap(),
            EngineConfig::default()
        );
        assert!(matches!(
            EngineConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
    }
}
