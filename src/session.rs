//! Session state
//!
//! The input buffer, the entry store, the global target language and the
//! availability flag, plus the rules that gate and merge every action.
//!
//! Each action is split into a `prepare_*` step (validation, capture of what
//! the host call needs) and an `apply_*` step (merge of the result). The
//! async helpers at the bottom chain both around the host call.

use std::sync::Arc;
use tracing::{info, warn};

use crate::actions::{self, TranslateRequest};
use crate::entry::{Entry, EntryId, EntryPatch, EntryStore};
use crate::error::ActionError;
use crate::host::AiHost;
use crate::language::{DetectedLanguage, Language};
use crate::probe::CapabilityProbe;

#[derive(Debug, Default)]
pub struct Session {
    store: EntryStore,
    input: String,
    target: Language,
    probe: CapabilityProbe,
}

impl Session {
    pub fn new(target: Language) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.entries()
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.store.get(id)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn target(&self) -> Language {
        self.target
    }

    pub fn select_target(&mut self, target: Language) {
        self.target = target;
    }

    pub fn is_available(&self) -> bool {
        self.probe.is_available()
    }

    pub fn probe(&self) -> &CapabilityProbe {
        &self.probe
    }

    pub fn probe_mut(&mut self) -> &mut CapabilityProbe {
        &mut self.probe
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.is_available() && !self.input.trim().is_empty()
    }

    /// Whether the translate control for `id` should be enabled
    pub fn can_translate(&self, id: EntryId) -> bool {
        self.is_available()
            && self
                .store
                .get(id)
                .is_some_and(|e| e.can_translate_to(self.target))
    }

    /// Whether the summarize control for `id` should be shown
    pub fn can_summarize(&self, id: EntryId) -> bool {
        self.store.get(id).is_some_and(Entry::can_summarize)
    }

    /// Validate the input buffer and return the text to detect
    pub fn prepare_submit(&self) -> Result<String, ActionError> {
        if self.input.trim().is_empty() {
            return Err(ActionError::EmptyInput);
        }
        if !self.is_available() {
            return Err(ActionError::HostUnavailable);
        }
        Ok(self.input.clone())
    }

    /// Create the entry for a finished detection and clear the input
    pub fn complete_submit(
        &mut self,
        text: String,
        detected: DetectedLanguage,
    ) -> Result<EntryId, ActionError> {
        if text.trim().is_empty() {
            return Err(ActionError::ProcessingFailed);
        }
        let id = self.store.prepend(text, detected);
        self.input.clear();
        info!("➕ Entry {} created ({} total)", id, self.store.len());
        Ok(id)
    }

    pub fn prepare_summarize(
        &self,
        id: EntryId,
        host_supports_summaries: bool,
    ) -> Result<String, ActionError> {
        if !self.is_available() {
            return Err(ActionError::HostUnavailable);
        }
        if !host_supports_summaries {
            return Err(ActionError::SummarizerUnavailable);
        }
        let entry = self.store.get(id).ok_or(ActionError::UnknownEntry(id))?;
        Ok(entry.text.clone())
    }

    /// Merge a summary result; failures leave the entry untouched
    pub fn apply_summary(
        &mut self,
        id: EntryId,
        result: Result<String, ActionError>,
    ) -> Result<(), ActionError> {
        let summary = result?;
        if self.store.update(id, EntryPatch::summary(summary)) {
            Ok(())
        } else {
            Err(ActionError::UnknownEntry(id))
        }
    }

    pub fn prepare_translate(&self, id: EntryId) -> Result<TranslateRequest, ActionError> {
        if !self.is_available() {
            return Err(ActionError::HostUnavailable);
        }
        let entry = self.store.get(id).ok_or(ActionError::UnknownEntry(id))?;
        if !entry.can_translate_to(self.target) {
            return Err(ActionError::SameLanguage);
        }
        Ok(TranslateRequest {
            text: entry.text.clone(),
            source_language: entry.detected_language.source_code().to_string(),
            target_language: self.target.code().to_string(),
        })
    }

    /// Merge a translation result; failures leave the entry untouched
    pub fn apply_translation(
        &mut self,
        id: EntryId,
        result: Result<String, ActionError>,
    ) -> Result<(), ActionError> {
        let translation = result?;
        if self.store.update(id, EntryPatch::translation(translation)) {
            Ok(())
        } else {
            Err(ActionError::UnknownEntry(id))
        }
    }

    pub async fn submit(&mut self, host: Arc<dyn AiHost>) -> Result<EntryId, ActionError> {
        let text = self.prepare_submit().inspect_err(log_rejected)?;
        let detected = actions::detect_language(host, text.clone()).await;
        self.complete_submit(text, detected)
    }

    pub async fn summarize(
        &mut self,
        host: Arc<dyn AiHost>,
        id: EntryId,
    ) -> Result<(), ActionError> {
        let text = self
            .prepare_summarize(id, host.supports_summarization())
            .inspect_err(log_rejected)?;
        let result = actions::summarize(host, text).await;
        self.apply_summary(id, result)
    }

    pub async fn translate(
        &mut self,
        host: Arc<dyn AiHost>,
        id: EntryId,
    ) -> Result<(), ActionError> {
        let request = self.prepare_translate(id).inspect_err(log_rejected)?;
        let result = actions::translate(host, request).await;
        self.apply_translation(id, result)
    }
}

fn log_rejected(e: &ActionError) {
    warn!("Action rejected: {}", e);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available_session() -> Session {
        let mut session = Session::new(Language::En);
        session.probe_mut().record(true);
        session
    }

    #[test]
    fn test_prepare_submit_validates_before_availability() {
        let mut session = Session::new(Language::En);
        session.set_input("   \n\t");
        assert_eq!(session.prepare_submit(), Err(ActionError::EmptyInput));

        session.set_input("hello");
        assert_eq!(session.prepare_submit(), Err(ActionError::HostUnavailable));
    }

    #[test]
    fn test_complete_submit_clears_input() {
        let mut session = available_session();
        session.set_input("Bonjour tout le monde");
        let text = session.prepare_submit().unwrap();
        let id = session
            .complete_submit(text, DetectedLanguage::scored("fr", 0.95))
            .unwrap();

        assert_eq!(session.input(), "");
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].id, id);
    }

    #[test]
    fn test_failed_summary_keeps_entry() {
        let mut session = available_session();
        let id = session
            .complete_submit("text".into(), DetectedLanguage::Unknown)
            .unwrap();
        session.apply_summary(id, Ok("first".into())).unwrap();

        let err = session.apply_summary(id, Err(ActionError::SummarizeFailed));
        assert_eq!(err, Err(ActionError::SummarizeFailed));
        assert_eq!(session.entry(id).unwrap().summary.as_deref(), Some("first"));
    }

    #[test]
    fn test_prepare_translate_rejects_same_language() {
        let mut session = available_session();
        let id = session
            .complete_submit("Hola".into(), DetectedLanguage::scored("es", 0.9))
            .unwrap();

        session.select_target(Language::Es);
        assert!(!session.can_translate(id));
        assert_eq!(session.prepare_translate(id), Err(ActionError::SameLanguage));

        session.select_target(Language::Ru);
        let req = session.prepare_translate(id).unwrap();
        assert_eq!(req.source_language, "es");
        assert_eq!(req.target_language, "ru");
    }

    #[test]
    fn test_unknown_detection_translates_from_default() {
        let mut session = available_session();
        let id = session
            .complete_submit("???".into(), DetectedLanguage::Unknown)
            .unwrap();
        session.select_target(Language::En);
        assert!(session.can_translate(id));
        assert_eq!(session.prepare_translate(id).unwrap().source_language, "en");
    }
}
