//! AI Host Module
//!
//! The capability surface the application calls out to. A host hands out a
//! language detector, a summarizer and translators; each does one async job.

use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::AiTextResult;
use crate::language::DetectedLanguage;

pub mod disabled;
pub mod ollama;

/// Detects the language of a text
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    async fn detect(&self, text: &str) -> Result<DetectedLanguage>;
}

/// Produces a short summary of a text
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String>;
}

/// Translates between a fixed source and target language
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String>;
}

/// Source and target codes a translator is created for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorOptions {
    pub source_language: String,
    pub target_language: String,
}

/// Trait for AI hosts
#[async_trait]
pub trait AiHost: Send + Sync + std::fmt::Debug {
    /// Whether the host is present and reachable
    async fn is_available(&self) -> bool;

    async fn create_detector(&self) -> Result<Box<dyn LanguageDetector>>;

    /// Whether this host offers summarization at all
    fn supports_summarization(&self) -> bool {
        true
    }

    async fn create_summarizer(&self) -> Result<Box<dyn Summarizer>>;

    async fn create_translator(&self, options: TranslatorOptions) -> Result<Box<dyn Translator>>;

    /// Get the host name
    fn name(&self) -> &str;
}

/// Factory to create the configured host
pub fn create_host(config: &Config) -> AiTextResult<Arc<dyn AiHost>> {
    info!("🛠️ Creating AI host: {}", config.host);
    let host: Arc<dyn AiHost> = match config.host.as_str() {
        "ollama" => {
            info!(
                "  - Using Ollama at {} (Model: {})",
                config.ollama_url, config.ollama_model
            );
            Arc::new(ollama::OllamaHost::new(config)?)
        }
        "disabled" | "none" => {
            info!("  - AI host disabled");
            Arc::new(disabled::DisabledHost)
        }
        _ => {
            warn!(
                "  - Unknown host '{}', falling back to disabled",
                config.host
            );
            Arc::new(disabled::DisabledHost)
        }
    };
    info!("✅ AI host '{}' initialized", host.name());
    Ok(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_host_falls_back() {
        let config = Config {
            host: "chrome".to_string(),
            ..Config::default()
        };
        let host = create_host(&config).unwrap();
        assert_eq!(host.name(), "disabled");
    }

    #[tokio::test]
    async fn test_disabled_host_is_never_available() {
        let config = Config {
            host: "disabled".to_string(),
            ..Config::default()
        };
        let host = create_host(&config).unwrap();
        assert_eq!(host.name(), "disabled");
        assert!(!host.is_available().await);
    }

    #[test]
    fn test_default_host_is_ollama() {
        let host = create_host(&Config::default()).unwrap();
        assert_eq!(host.name(), "ollama");
    }
}
