use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AiTextError, AiTextResult};
use crate::language::Language;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // AI Host
    pub host: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub request_timeout_secs: u64,

    // Capability probe
    pub probe_interval_ms: u64,

    // UI
    pub default_target: Language,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "ollama".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.2".to_string(),
            request_timeout_secs: 60,
            probe_interval_ms: 1000,
            default_target: Language::En,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or use defaults
    pub fn load() -> AiTextResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`; a corrupt file is moved aside
    pub fn load_from(path: &Path) -> AiTextResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> AiTextResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the host cannot work with
    pub fn validate(&self) -> AiTextResult<()> {
        if self.host == "ollama"
            && !(self.ollama_url.starts_with("http://") || self.ollama_url.starts_with("https://"))
        {
            return Err(AiTextError::Config(format!(
                "ollama_url must start with http:// or https:// (got '{}')",
                self.ollama_url
            )));
        }
        if self.host == "ollama" && self.ollama_model.trim().is_empty() {
            return Err(AiTextError::Config("ollama_model is empty".to_string()));
        }
        Ok(())
    }

    pub fn probe_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.probe_interval_ms).max(crate::probe::MIN_INTERVAL)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aitext")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_interval_has_floor() {
        let config = Config {
            probe_interval_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.probe_interval(), crate::probe::MIN_INTERVAL);
        assert_eq!(Config::default().probe_interval(), std::time::Duration::from_millis(1000));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "ollama");
        assert_eq!(config.ollama_url, "http://localhost:11434");
        assert_eq!(config.probe_interval_ms, 1000);
        assert_eq!(config.default_target, Language::En);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested/config.json");

        let config = Config {
            ollama_model: "mistral".to_string(),
            default_target: Language::Tr,
            ..Config::default()
        };
        config.save_to(&path).expect("Failed to save");

        let restored = Config::load_from(&path).expect("Failed to load");
        assert_eq!(restored.ollama_model, "mistral");
        assert_eq!(restored.default_target, Language::Tr);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"ollama_model": "phi3"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ollama_model, "phi3");
        assert_eq!(config.host, "ollama");
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.host, "ollama");
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = Config {
            ollama_url: "localhost:11434".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AiTextError::Config(_))));
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.log_level, "info");
    }
}
