//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub matching: MatchingConfig,
    pub history: HistoryConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Keywords must be strictly longer than this
    pub min_keyword_length: usize,
    pub max_keywords: usize,
    /// Appended to the built-in ignore list
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub path: PathBuf,
    pub max_entries: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_keyword_length: 2,
            max_keywords: 15,
            extra_stopwords: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let history_path = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("history.json");

        Self {
            matching: MatchingConfig::default(),
            history: HistoryConfig {
                enabled: true,
                path: history_path,
                max_entries: 5,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.history.max_entries == 0 && self.history.enabled {
            return Err(ResumeMatcherError::Configuration(
                "history.max_entries must be at least 1 when history is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.matching.min_keyword_length, 2);
        assert_eq!(config.matching.max_keywords, 15);
        assert_eq!(config.history.max_entries, 5);
        assert!(config.history.path.ends_with("resume-matcher/history.json"));
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.matching, MatchingConfig::default());
    }

    #[test]
    fn test_round_trip_keeps_custom_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.matching.max_keywords = 7;
        config.matching.extra_stopwords = vec!["agile".to_string()];
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.matching.max_keywords, 7);
        assert_eq!(loaded.matching.extra_stopwords, vec!["agile"]);
        assert_eq!(loaded.output.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "matching = [not valid").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ResumeMatcherError::Configuration(_)));
    }

    #[test]
    fn test_zero_history_entries_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.history.max_entries = 0;
        config.save_to(&path).unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
