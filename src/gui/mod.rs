//! GUI module using iced
//!
//! Single window: composer at the bottom, entries newest first above it.

use iced::widget::{column, container};
use iced::{Element, Length, Subscription, Task};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::actions;
use crate::host::AiHost;

// Sub-modules
pub mod app;
pub mod messages;
pub mod panels;

// Re-exports for convenience
pub use app::AiTextApp;
pub use messages::Message;

async fn check_host(host: Arc<dyn AiHost>) -> bool {
    host.is_available().await
}

impl AiTextApp {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::None => {}
            Message::ProbeTick => {
                if self.session.probe().needs_polling() && !self.probe_in_flight {
                    self.probe_in_flight = true;
                    return Task::perform(check_host(self.host.clone()), Message::ProbeResult);
                }
            }
            Message::ProbeResult(present) => {
                self.probe_in_flight = false;
                self.session.probe_mut().record(present);
            }
            Message::EditorAction(action) => {
                self.editor.perform(action);
                self.session.set_input(self.editor.text());
            }
            Message::Submit => match self.session.prepare_submit() {
                Ok(text) => {
                    let future = actions::detect_language(self.host.clone(), text.clone());
                    return Task::perform(future, move |detected| Message::Detected {
                        text: text.clone(),
                        detected,
                    });
                }
                Err(e) => self.show_alert(e),
            },
            Message::Detected { text, detected } => {
                match self.session.complete_submit(text, detected) {
                    Ok(_) => self.reset_editor(),
                    Err(e) => self.show_alert(e),
                }
            }
            Message::Summarize(id) => {
                match self
                    .session
                    .prepare_summarize(id, self.host.supports_summarization())
                {
                    Ok(text) => {
                        return Task::perform(
                            actions::summarize(self.host.clone(), text),
                            move |result| Message::Summarized(id, result),
                        );
                    }
                    Err(e) => self.show_alert(e),
                }
            }
            Message::Summarized(id, result) => {
                if let Err(e) = self.session.apply_summary(id, result) {
                    self.show_alert(e);
                }
            }
            Message::TargetSelected(target) => {
                debug!("🌐 Target language: {}", target.code());
                self.session.select_target(target);
            }
            Message::Translate(id) => match self.session.prepare_translate(id) {
                Ok(request) => {
                    return Task::perform(
                        actions::translate(self.host.clone(), request),
                        move |result| Message::Translated(id, result),
                    );
                }
                Err(e) => self.show_alert(e),
            },
            Message::Translated(id, result) => {
                if let Err(e) = self.session.apply_translation(id, result) {
                    self.show_alert(e);
                }
            }
            Message::DismissAlert => {
                self.alert = None;
            }
        }
        Task::none()
    }

    fn show_alert(&mut self, e: crate::error::ActionError) {
        warn!("⚠️ {}", e);
        self.alert = Some(e.to_string());
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Exists only while the host is missing; dropping it stops the timer
        if self.session.probe().needs_polling() {
            iced::time::every(self.config.probe_interval()).map(|_| Message::ProbeTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut page = column![panels::header::view(self)].spacing(10);

        if !self.session.is_available() {
            page = page.push(panels::banner::unavailable(self));
        }
        if let Some(alert) = &self.alert {
            page = page.push(panels::banner::alert(alert));
        }

        page = page
            .push(
                container(panels::entries::view(self))
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(panels::composer::view(self));

        container(page.padding(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
