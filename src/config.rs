//! Configuration loading for roadmapr
//!
//! Loads from an explicit path, then ~/.config/roadmapr/roadmapr.yml, then
//! ./roadmapr.yml, falling back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RoadmaprError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub llm: LlmConfig,
    pub planning: PlanningConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model for research and curation stages
    pub worker_model: String,
    /// Model for planning and revision stages
    pub critic_model: String,
    pub max_tokens: u32,
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            worker_model: "gemini-2.5-flash".to_string(),
            critic_model: "gemini-2.5-pro".to_string(),
            max_tokens: 8192,
            timeout_ms: 300000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Round budget for validated stages
    pub max_rounds: u32,
    /// Default roadmap length in weeks
    pub default_weeks: u32,
    /// Feed a failed round's issues into the next attempt
    pub feed_issues_forward: bool,
    /// Retain per-round history in outcomes
    pub keep_history: bool,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            max_rounds: 3,
            default_weeks: 4,
            feed_issues_forward: true,
            keep_history: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            llm: LlmConfig::default(),
            planning: PlanningConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        // Primary location: ~/.config/roadmapr/roadmapr.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Fallback location: ./roadmapr.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| RoadmaprError::Configuration(format!("failed to parse config file: {}", e)))?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.worker_model, "gemini-2.5-flash");
        assert_eq!(config.llm.critic_model, "gemini-2.5-pro");
        assert_eq!(config.llm.max_tokens, 8192);
        assert_eq!(config.planning.max_rounds, 3);
        assert_eq!(config.planning.default_weeks, 4);
        assert!(config.planning.feed_issues_forward);
        assert!(!config.planning.keep_history);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yml");
        fs::write(
            &path,
            "llm:\n  worker_model: gemini-2.0-flash\nplanning:\n  max_rounds: 5\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.llm.worker_model, "gemini-2.0-flash");
        // Unspecified fields keep their defaults
        assert_eq!(config.llm.critic_model, "gemini-2.5-pro");
        assert_eq!(config.planning.max_rounds, 5);
        assert_eq!(config.planning.default_weeks, 4);
    }

    #[test]
    fn test_load_missing_explicit_path_errors() {
        let result = Config::load(Some(&PathBuf::from("/nonexistent/roadmapr.yml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_yaml_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yml");
        fs::write(&path, "llm: [not, a, map").unwrap();

        let result = Config::load(Some(&path));
        assert!(matches!(result, Err(RoadmaprError::Configuration(_))));
    }

    #[test]
    fn test_config_yaml_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let restored: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored.llm.worker_model, config.llm.worker_model);
        assert_eq!(restored.planning.max_rounds, config.planning.max_rounds);
    }
}
