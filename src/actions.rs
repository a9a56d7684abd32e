//! Action Dispatcher
//!
//! One host round-trip per user action. The futures own their inputs so the
//! GUI can run several of them side by side.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::ActionError;
use crate::host::{AiHost, TranslatorOptions};
use crate::language::DetectedLanguage;

/// Everything a translate call needs, captured when the action starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

/// Detect the language of `text`.
///
/// Never fails: any host error is logged and reported as `Unknown`.
pub async fn detect_language(host: Arc<dyn AiHost>, text: String) -> DetectedLanguage {
    let detector = match host.create_detector().await {
        Ok(detector) => detector,
        Err(e) => {
            warn!("Could not create language detector: {:#}", e);
            return DetectedLanguage::Unknown;
        }
    };

    match detector.detect(&text).await {
        Ok(detected) => {
            debug!("🌐 Detected language: {}", detected);
            detected
        }
        Err(e) => {
            warn!("Error detecting language: {:#}", e);
            DetectedLanguage::Unknown
        }
    }
}

pub async fn summarize(host: Arc<dyn AiHost>, text: String) -> Result<String, ActionError> {
    if !host.supports_summarization() {
        warn!("Summarizer API not found on host '{}'", host.name());
        return Err(ActionError::SummarizerUnavailable);
    }

    debug!("Attempting to summarize {} chars", text.chars().count());
    let summarizer = host.create_summarizer().await.map_err(|e| {
        warn!("Could not create summarizer: {:#}", e);
        ActionError::SummarizeFailed
    })?;

    let summary = summarizer.summarize(&text).await.map_err(|e| {
        warn!("Error summarizing text: {:#}", e);
        ActionError::SummarizeFailed
    })?;
    info!("📝 Summary ready ({} chars)", summary.chars().count());
    Ok(summary)
}

pub async fn translate(
    host: Arc<dyn AiHost>,
    request: TranslateRequest,
) -> Result<String, ActionError> {
    let options = TranslatorOptions {
        source_language: request.source_language,
        target_language: request.target_language,
    };
    debug!(
        "Translating {} -> {}",
        options.source_language, options.target_language
    );

    let translator = host.create_translator(options).await.map_err(|e| {
        warn!("Could not create translator: {:#}", e);
        ActionError::TranslateFailed
    })?;

    let translation = translator.translate(&request.text).await.map_err(|e| {
        warn!("Error translating text: {:#}", e);
        ActionError::TranslateFailed
    })?;
    info!("🔤 Translation ready ({} chars)", translation.chars().count());
    Ok(translation)
}
