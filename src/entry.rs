//! Entry Store
//!
//! Newest-first list of submitted texts and what the host derived from them.

use std::fmt;

use crate::language::{DetectedLanguage, Language};

/// Texts longer than this (in characters) can be summarized
pub const SUMMARY_MIN_CHARS: usize = 150;

/// Stable entry key: creation time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One submitted text
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub text: String,
    pub detected_language: DetectedLanguage,
    pub summary: Option<String>,
    pub translation: Option<String>,
}

impl Entry {
    /// Summarize is offered for long texts that have no summary yet
    pub fn can_summarize(&self) -> bool {
        self.text.chars().count() > SUMMARY_MIN_CHARS && self.summary.is_none()
    }

    /// Translate is offered unless the target is the detected language
    pub fn can_translate_to(&self, target: Language) -> bool {
        self.detected_language.code() != Some(target.code())
    }

    fn apply(&mut self, patch: EntryPatch) {
        if let Some(summary) = patch.summary {
            self.summary = Some(summary);
        }
        if let Some(translation) = patch.translation {
            self.translation = Some(translation);
        }
    }
}

/// Fields merged into an existing entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub summary: Option<String>,
    pub translation: Option<String>,
}

impl EntryPatch {
    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Default::default()
        }
    }

    pub fn translation(translation: impl Into<String>) -> Self {
        Self {
            translation: Some(translation.into()),
            ..Default::default()
        }
    }
}

/// Ordered entries, newest first
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
    last_id: Option<EntryId>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Create an entry at the front of the list and return its id
    pub fn prepend(&mut self, text: String, detected_language: DetectedLanguage) -> EntryId {
        let id = self.next_id(chrono::Utc::now().timestamp_millis());
        self.entries.insert(
            0,
            Entry {
                id,
                text,
                detected_language,
                summary: None,
                translation: None,
            },
        );
        id
    }

    /// Shallow-merge `patch` into the entry at `index`.
    ///
    /// Returns false when the index is out of range.
    pub fn update_at(&mut self, index: usize, patch: EntryPatch) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Merge by id, resolving the position at merge time
    pub fn update(&mut self, id: EntryId, patch: EntryPatch) -> bool {
        match self.position(id) {
            Some(index) => self.update_at(index, patch),
            None => false,
        }
    }

    fn next_id(&mut self, now_ms: i64) -> EntryId {
        let id = match self.last_id {
            Some(EntryId(last)) if now_ms <= last => EntryId(last + 1),
            _ => EntryId(now_ms),
        };
        self.last_id = Some(id);
        id
    }
}
