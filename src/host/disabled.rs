//! Host used when AI is switched off; never becomes available

use super::{AiHost, LanguageDetector, Summarizer, Translator, TranslatorOptions};
use anyhow::{bail, Result};
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct DisabledHost;

#[async_trait]
impl AiHost for DisabledHost {
    async fn is_available(&self) -> bool {
        false
    }

    async fn create_detector(&self) -> Result<Box<dyn LanguageDetector>> {
        bail!("AI host is disabled")
    }

    fn supports_summarization(&self) -> bool {
        false
    }

    async fn create_summarizer(&self) -> Result<Box<dyn Summarizer>> {
        bail!("AI host is disabled")
    }

    async fn create_translator(&self, _options: TranslatorOptions) -> Result<Box<dyn Translator>> {
        bail!("AI host is disabled")
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_host_never_available() {
        let host = DisabledHost;
        assert!(!host.is_available().await);
        assert!(host.create_detector().await.is_err());
        assert!(!host.supports_summarization());
    }
}
