//! Configuration for lexis
//!
//! Settings live in `lexis.toml`. Every key is optional; missing keys take their
//! defaults, so an empty file is a valid configuration.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{LexisError, Result};

pub use types::{LexisConfig, VectorConfig, CONFIG_FILE_NAME};

impl LexisConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| LexisError::io_operation("read config", path.display(), e))?;
        let config: LexisConfig = toml::from_str(&content)?;
        config.validate().map_err(|e| LexisError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LexisError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load `lexis.toml` from `dir`, or fall back to defaults when there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values that parse but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.min_token_len == 0 {
            bail_invalid!("min_token_len (must be at least 1)", self.min_token_len);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stemmer::Language;
    use crate::vector::Weighting;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = LexisConfig::default();
        assert_eq!(config.language, Language::Hungarian);
        assert!(config.stop_words);
        assert_eq!(config.min_token_len, 1);
        assert_eq!(config.vector.initial_capacity, 11);
        assert_eq!(config.vector.weighting, Weighting::Tf);
        assert!(!config.vector.normalize);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lexis.toml");

        let config = LexisConfig {
            language: Language::German,
            vector: VectorConfig {
                weighting: Weighting::TfIdf,
                normalize: true,
                ..Default::default()
            },
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = LexisConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lexis.toml");
        fs::write(&path, "stop_words = false\n\n[vector]\nweighting = \"tfidf\"\n").unwrap();

        let loaded = LexisConfig::load(&path).unwrap();
        assert!(!loaded.stop_words);
        assert_eq!(loaded.language, Language::Hungarian);
        assert_eq!(loaded.vector.weighting, Weighting::TfIdf);
        assert_eq!(loaded.vector.initial_capacity, 11);
    }

    #[test]
    fn test_unknown_language_is_data_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lexis.toml");
        fs::write(&path, "language = \"klingon\"\n").unwrap();

        let err = LexisConfig::load(&path).unwrap_err();
        assert!(matches!(err, LexisError::Toml(_)));
        assert_eq!(err.exit_code(), crate::error::ExitCode::Data);
    }

    #[test]
    fn test_zero_min_token_len_is_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lexis.toml");
        fs::write(&path, "min_token_len = 0\n").unwrap();

        let err = LexisConfig::load(&path).unwrap_err();
        assert!(matches!(err, LexisError::InvalidConfig { .. }));
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();
        assert_eq!(
            LexisConfig::discover(dir.path()).unwrap(),
            LexisConfig::default()
        );

        fs::write(dir.path().join(CONFIG_FILE_NAME), "language = \"english\"\n").unwrap();
        assert_eq!(
            LexisConfig::discover(dir.path()).unwrap().language,
            Language::English
        );
    }
}
