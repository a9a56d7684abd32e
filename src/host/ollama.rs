//! Ollama AI Host
//!
//! Runs detection, summarization and translation as prompts against a
//! local Ollama server (`/api/generate`, non-streaming).

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::{AiHost, LanguageDetector, Summarizer, Translator, TranslatorOptions};
use crate::config::Config;
use crate::error::{AiTextError, AiTextResult};
use crate::language::{DetectedLanguage, Language};

const HEALTH_TIMEOUT: Duration = Duration::from_secs(2);

/// Ollama API response
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}

/// Connection shared by the host and every capability it hands out
#[derive(Debug, Clone)]
struct OllamaClient {
    client: reqwest::Client,
    url: String,
    model: String,
}

impl OllamaClient {
    async fn generate(&self, prompt: String, temperature: f32) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.url))
            .json(&serde_json::json!({
                "model": self.model,
                "prompt": prompt,
                "stream": false,
                "options": {
                    "temperature": temperature
                }
            }))
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            warn!("❌ Ollama API Error ({}): {}", status, body_text);
            bail!("Ollama API error ({status})");
        }

        debug!("🧠 Ollama raw body: {}", body_text);

        let ollama_resp: OllamaResponse = serde_json::from_str(&body_text)
            .with_context(|| format!("Failed to deserialize Ollama response: {body_text}"))?;
        Ok(ollama_resp.response)
    }
}

/// Host backed by an Ollama server
#[derive(Debug, Clone)]
pub struct OllamaHost {
    inner: OllamaClient,
}

impl OllamaHost {
    /// Create new Ollama host from config
    pub fn new(config: &Config) -> AiTextResult<Self> {
        let url = config.ollama_url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(AiTextError::Host("Ollama URL is empty".to_string()));
        }

        let mut builder = reqwest::Client::builder();
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        let client = builder.build()?;

        Ok(Self {
            inner: OllamaClient {
                client,
                url: url.to_string(),
                model: config.ollama_model.clone(),
            },
        })
    }

    pub fn url(&self) -> &str {
        &self.inner.url
    }
}

#[async_trait]
impl AiHost for OllamaHost {
    async fn is_available(&self) -> bool {
        match self
            .inner
            .client
            .get(format!("{}/api/tags", self.inner.url))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!("Ollama health check failed: {}", e);
                false
            }
        }
    }

    async fn create_detector(&self) -> Result<Box<dyn LanguageDetector>> {
        Ok(Box::new(OllamaDetector {
            inner: self.inner.clone(),
        }))
    }

    async fn create_summarizer(&self) -> Result<Box<dyn Summarizer>> {
        Ok(Box::new(OllamaSummarizer {
            inner: self.inner.clone(),
        }))
    }

    async fn create_translator(&self, options: TranslatorOptions) -> Result<Box<dyn Translator>> {
        if options.target_language.trim().is_empty() {
            bail!("translator needs a target language");
        }
        Ok(Box::new(OllamaTranslator {
            inner: self.inner.clone(),
            options,
        }))
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

struct OllamaDetector {
    inner: OllamaClient,
}

#[async_trait]
impl LanguageDetector for OllamaDetector {
    async fn detect(&self, text: &str) -> Result<DetectedLanguage> {
        let reply = self.inner.generate(detection_prompt(text), 0.0).await?;
        parse_detection(&reply).ok_or_else(|| anyhow!("Unrecognized detection reply: {reply}"))
    }
}

struct OllamaSummarizer {
    inner: OllamaClient,
}

#[async_trait]
impl Summarizer for OllamaSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        let reply = self.inner.generate(summary_prompt(text), 0.3).await?;
        non_empty(reply, "summary")
    }
}

struct OllamaTranslator {
    inner: OllamaClient,
    options: TranslatorOptions,
}

#[async_trait]
impl Translator for OllamaTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        let prompt = translation_prompt(text, &self.options);
        let reply = self.inner.generate(prompt, 0.3).await?;
        non_empty(reply, "translation")
    }
}

fn non_empty(reply: String, what: &str) -> Result<String> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        bail!("Ollama returned an empty {what}");
    }
    Ok(trimmed.to_string())
}

fn detection_prompt(text: &str) -> String {
    format!(
        r#"Identify the language of the text below. Respond with ONLY valid JSON in this exact format:
{{"language": "<ISO 639-1 code>", "confidence": <number between 0 and 1>}}

Text:
{text}

JSON response:"#
    )
}

fn summary_prompt(text: &str) -> String {
    format!(
        "Summarize the following text in two or three sentences, in the same language as the text. Respond with the summary only.\n\nText:\n{}",
        text.trim()
    )
}

fn translation_prompt(text: &str, options: &TranslatorOptions) -> String {
    format!(
        "Translate from {} to {}. Respond with the translation only.\n\nText:\n{}",
        Language::name_for_code(&options.source_language),
        Language::name_for_code(&options.target_language),
        text.trim()
    )
}

/// Normalize a detection reply: embedded JSON first, then a bare code.
fn parse_detection(reply: &str) -> Option<DetectedLanguage> {
    // Ollama may include extra text around the JSON
    if let (Some(start), Some(end)) = (reply.find('{'), reply.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&reply[start..=end]) {
                return Some(DetectedLanguage::from_value(&value));
            }
        }
    }

    let bare = reply
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '.' || c.is_whitespace());
    if (2..=3).contains(&bare.len()) && bare.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(DetectedLanguage::from_code(bare));
    }

    None
}
