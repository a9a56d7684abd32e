//! Mock AI Host for Testing
//!
//! Returns scripted answers and records every call for verification.

use aitext::host::{AiHost, LanguageDetector, Summarizer, Translator, TranslatorOptions};
use aitext::language::DetectedLanguage;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A call that reached the host
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Detect(String),
    Summarize(String),
    Translate {
        source: String,
        target: String,
        text: String,
    },
}

#[derive(Debug, Default)]
struct Script {
    /// `None` makes detection fail
    detection: Option<DetectedLanguage>,
    /// `None` makes summarization fail
    summary: Option<String>,
    /// `None` makes translation fail
    translation: Option<String>,
    calls: Vec<Call>,
}

/// Mock host with scripted answers
#[derive(Debug, Clone)]
pub struct MockHost {
    script: Arc<Mutex<Script>>,
    /// Number of health checks answered "absent" before "present"
    absent_checks: usize,
    checks: Arc<AtomicUsize>,
    summarizer: bool,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script::default())),
            absent_checks: 0,
            checks: Arc::new(AtomicUsize::new(0)),
            summarizer: true,
        }
    }

    /// Report absent for the first `n` checks
    pub fn absent_for(mut self, n: usize) -> Self {
        self.absent_checks = n;
        self
    }

    pub fn without_summarizer(mut self) -> Self {
        self.summarizer = false;
        self
    }

    pub fn detect_as(&self, detected: Option<DetectedLanguage>) {
        self.script.lock().unwrap().detection = detected;
    }

    pub fn summarize_as(&self, summary: Option<&str>) {
        self.script.lock().unwrap().summary = summary.map(str::to_string);
    }

    pub fn translate_as(&self, translation: Option<&str>) {
        self.script.lock().unwrap().translation = translation.map(str::to_string);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }

    pub fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }

    pub fn shared(&self) -> Arc<dyn AiHost> {
        Arc::new(self.clone())
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiHost for MockHost {
    async fn is_available(&self) -> bool {
        let seen = self.checks.fetch_add(1, Ordering::SeqCst);
        seen >= self.absent_checks
    }

    async fn create_detector(&self) -> Result<Box<dyn LanguageDetector>> {
        Ok(Box::new(MockCapability {
            script: self.script.clone(),
            options: None,
        }))
    }

    fn supports_summarization(&self) -> bool {
        self.summarizer
    }

    async fn create_summarizer(&self) -> Result<Box<dyn Summarizer>> {
        Ok(Box::new(MockCapability {
            script: self.script.clone(),
            options: None,
        }))
    }

    async fn create_translator(&self, options: TranslatorOptions) -> Result<Box<dyn Translator>> {
        Ok(Box::new(MockCapability {
            script: self.script.clone(),
            options: Some(options),
        }))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

struct MockCapability {
    script: Arc<Mutex<Script>>,
    options: Option<TranslatorOptions>,
}

#[async_trait]
impl LanguageDetector for MockCapability {
    async fn detect(&self, text: &str) -> Result<DetectedLanguage> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(Call::Detect(text.to_string()));
        script
            .detection
            .clone()
            .ok_or_else(|| anyhow!("Mock detection failure"))
    }
}

#[async_trait]
impl Summarizer for MockCapability {
    async fn summarize(&self, text: &str) -> Result<String> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(Call::Summarize(text.to_string()));
        script
            .summary
            .clone()
            .ok_or_else(|| anyhow!("Mock summarize failure"))
    }
}

#[async_trait]
impl Translator for MockCapability {
    async fn translate(&self, text: &str) -> Result<String> {
        let options = self
            .options
            .clone()
            .ok_or_else(|| anyhow!("translator created without options"))?;
        let mut script = self.script.lock().unwrap();
        script.calls.push(Call::Translate {
            source: options.source_language,
            target: options.target_language,
            text: text.to_string(),
        });
        script
            .translation
            .clone()
            .ok_or_else(|| anyhow!("Mock translate failure"))
    }
}
