//! Message types for the AIText GUI
//!
//! All messages that can be sent to update the application state.

use iced::widget::text_editor;

use crate::entry::EntryId;
use crate::error::ActionError;
use crate::language::{DetectedLanguage, Language};

/// Messages that drive the application
#[derive(Debug, Clone)]
pub enum Message {
    None,

    // Capability probe
    ProbeTick,
    ProbeResult(bool),

    // Composer
    EditorAction(text_editor::Action),
    Submit,
    Detected {
        text: String,
        detected: DetectedLanguage,
    },

    // Entry actions
    Summarize(EntryId),
    Summarized(EntryId, Result<String, ActionError>),
    TargetSelected(Language),
    Translate(EntryId),
    Translated(EntryId, Result<String, ActionError>),

    // Alerts
    DismissAlert,
}
