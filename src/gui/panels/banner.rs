use crate::gui::{AiTextApp, Message};
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

/// Shown while the capability probe has not seen the host
pub fn unavailable(app: &AiTextApp) -> Element<'_, Message> {
    let hint = match app.host.name() {
        "ollama" => format!(
            "Start Ollama at {} with model '{}' to unleash the power of this app.",
            app.config.ollama_url, app.config.ollama_model
        ),
        _ => "The AI host is disabled. Set \"host\": \"ollama\" in the config file.".to_string(),
    };

    container(
        column![
            text("⚠️ AI Host Not Available").size(18).style(text::danger),
            text(hint).size(14),
        ]
        .spacing(4),
    )
    .width(Length::Fill)
    .padding(12)
    .style(container::rounded_box)
    .into()
}

pub fn alert(message: &str) -> Element<'_, Message> {
    container(
        row![
            text(message).size(16).style(text::danger),
            Space::with_width(Length::Fill),
            button(text("Dismiss"))
                .style(button::secondary)
                .on_press(Message::DismissAlert),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(12)
    .style(container::rounded_box)
    .into()
}
