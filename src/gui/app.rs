//! Main application state for the AIText GUI
//!
//! Contains the AiTextApp struct and initialization logic.

use iced::widget::text_editor;
use iced::{Task, Theme};
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::host::{self, AiHost};
use crate::session::Session;

use super::messages::Message;

/// Main application state
pub struct AiTextApp {
    /// Entries, input buffer, target language and availability
    pub(crate) session: Session,
    /// Host every action calls out to
    pub(crate) host: Arc<dyn AiHost>,
    /// Configuration
    pub(crate) config: Config,
    /// Multi-line input widget state, mirrored into the session
    pub(crate) editor: text_editor::Content,
    /// Last user-visible failure
    pub(crate) alert: Option<String>,
    /// A health check is running
    pub(crate) probe_in_flight: bool,
}

impl AiTextApp {
    /// Create a new AiTextApp instance
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let (host, alert) = match host::create_host(&config) {
            Ok(host) => (host, None),
            Err(e) => {
                error!("❌ Failed to create AI host: {:#}", e);
                let fallback: Arc<dyn AiHost> = Arc::new(host::disabled::DisabledHost);
                (fallback, Some(format!("Could not set up the AI host: {e}")))
            }
        };

        let app = Self {
            session: Session::new(config.default_target),
            host,
            config,
            editor: text_editor::Content::new(),
            alert,
            probe_in_flight: false,
        };

        info!("🚀 AIText app initialized (host: {})", app.host.name());

        // First check right away; the subscription takes over afterwards
        let init_task = Task::done(Message::ProbeTick);

        (app, init_task)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub(crate) fn reset_editor(&mut self) {
        self.editor = text_editor::Content::new();
        self.session.set_input(String::new());
    }
}
