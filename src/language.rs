//! Language codes and detection results
//!
//! Hosts answer detection requests in more than one shape. Everything is
//! normalized into [`DetectedLanguage`] right where the answer arrives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source code used when an entry carries no usable detection.
pub const DEFAULT_SOURCE: &str = "en";

/// Result of a language detection
#[derive(Debug, Clone, PartialEq)]
pub enum DetectedLanguage {
    /// Detection failed or the host could not tell
    Unknown,
    /// Plain language code without a score
    Code(String),
    /// Language code with a confidence in [0, 1]
    Scored { code: String, confidence: f64 },
}

impl DetectedLanguage {
    /// Normalize a raw host answer.
    ///
    /// Accepts `{"detectedLanguage": "fr", "confidence": 0.9}`,
    /// `{"language": "fr", ...}`, the bare string `"fr"`, or an array of such
    /// candidates (the first one wins).
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::from_code(s),
            serde_json::Value::Object(map) => {
                let code = map
                    .get("detectedLanguage")
                    .or_else(|| map.get("language"))
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                match map.get("confidence").and_then(|v| v.as_f64()) {
                    Some(confidence) => Self::scored(code, confidence),
                    None => Self::from_code(code),
                }
            }
            serde_json::Value::Array(items) => items
                .first()
                .map(Self::from_value)
                .unwrap_or(Self::Unknown),
            _ => Self::Unknown,
        }
    }

    /// Build from a bare code; empty or "unknown" become [`Self::Unknown`].
    pub fn from_code(code: &str) -> Self {
        let code = normalize_code(code);
        if is_unknown(&code) {
            Self::Unknown
        } else {
            Self::Code(code)
        }
    }

    /// Build a scored result, clamping the confidence into [0, 1].
    pub fn scored(code: &str, confidence: f64) -> Self {
        let code = normalize_code(code);
        if is_unknown(&code) {
            return Self::Unknown;
        }
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self::Scored { code, confidence }
    }

    /// The detected code, if the host produced one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Unknown => None,
            Self::Code(code) => Some(code),
            Self::Scored { code, .. } => Some(code),
        }
    }

    /// Code to hand to a translator as the source language.
    pub fn source_code(&self) -> &str {
        self.code().unwrap_or(DEFAULT_SOURCE)
    }
}

impl fmt::Display for DetectedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Code(code) => write!(f, "{code}"),
            Self::Scored { code, confidence } if *confidence > 0.0 => {
                write!(
                    f,
                    "{code} (Confidence: {}%)",
                    (confidence * 100.0).round() as u32
                )
            }
            Self::Scored { code, .. } => write!(f, "{code}"),
        }
    }
}

/// Label shown under each entry.
pub fn display_language(detected: Option<&DetectedLanguage>) -> String {
    match detected {
        Some(lang) => lang.to_string(),
        None => "Unknown".to_string(),
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}

fn is_unknown(code: &str) -> bool {
    code.is_empty() || code == "unknown" || code == "und"
}

/// Target languages offered in the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
    Es,
    Ru,
    Tr,
    Fr,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Pt,
        Language::Es,
        Language::Ru,
        Language::Tr,
        Language::Fr,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
            Language::Es => "es",
            Language::Ru => "ru",
            Language::Tr => "tr",
            Language::Fr => "fr",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Pt => "Portuguese",
            Language::Es => "Spanish",
            Language::Ru => "Russian",
            Language::Tr => "Turkish",
            Language::Fr => "French",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = normalize_code(code);
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// English name for any ISO 639-1 code we may see as a source.
    pub fn name_for_code(code: &str) -> String {
        match Self::from_code(code) {
            Some(lang) => lang.name().to_string(),
            None => match code {
                "de" => "German".to_string(),
                "it" => "Italian".to_string(),
                "ja" => "Japanese".to_string(),
                "zh" => "Chinese".to_string(),
                "ko" => "Korean".to_string(),
                "ar" => "Arabic".to_string(),
                "nl" => "Dutch".to_string(),
                "pl" => "Polish".to_string(),
                other => other.to_string(),
            },
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
