use crate::gui::{AiTextApp, Message};
use iced::widget::{column, text};
use iced::{Alignment, Element, Length};

pub fn view(app: &AiTextApp) -> Element<'_, Message> {
    column![
        text("AIText Processor").size(36),
        text(format!("Detect, summarize and translate · host: {}", app.host.name()))
            .size(14)
            .style(text::secondary),
    ]
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .spacing(4)
    .into()
}
