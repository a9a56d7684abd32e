//! AIText Error Types
//!
//! Infrastructure errors and the user-visible action failures.

use thiserror::Error;

use crate::entry::EntryId;

/// Central error type for AIText infrastructure
#[derive(Error, Debug)]
pub enum AiTextError {
    #[error("AI host error: {0}")]
    Host(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for AIText operations
pub type AiTextResult<T> = Result<T, AiTextError>;

/// Failure of a single user action.
///
/// The `Display` text is what the alert banner shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Please enter some text.")]
    EmptyInput,

    #[error("The AI host is not available. Check that Ollama is running and enabled in the settings.")]
    HostUnavailable,

    #[error("The summarizer is not available on this AI host.")]
    SummarizerUnavailable,

    #[error("An error occurred while processing your text. Please try again.")]
    ProcessingFailed,

    #[error("Could not summarize text. Please try again.")]
    SummarizeFailed,

    #[error("Could not translate text. Please try again.")]
    TranslateFailed,

    #[error("The text is already in the selected language.")]
    SameLanguage,

    #[error("Entry {0} no longer exists.")]
    UnknownEntry(EntryId),
}
