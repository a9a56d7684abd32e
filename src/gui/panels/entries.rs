use crate::entry::Entry;
use crate::gui::{AiTextApp, Message};
use crate::language::{display_language, Language};

use iced::widget::{button, column, container, pick_list, row, scrollable, text, Column};
use iced::{Alignment, Element, Font, Length};

pub fn view(app: &AiTextApp) -> Element<'_, Message> {
    let entries = app.session.entries();

    if entries.is_empty() {
        return container(text("Submit some text to see it here...").style(text::secondary))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let cards: Vec<Element<Message>> = entries.iter().map(|e| card(app, e)).collect();

    scrollable(Column::with_children(cards).spacing(16).padding(4))
        .height(Length::Fill)
        .into()
}

fn card<'a>(app: &'a AiTextApp, entry: &'a Entry) -> Element<'a, Message> {
    let available = app.session.is_available();
    let id = entry.id;

    let mut body = Column::new().spacing(10);
    body = body.push(text(&entry.text).size(18));
    body = body.push(
        row![
            text("Detected Language: ").size(14).style(text::secondary),
            text(display_language(Some(&entry.detected_language)))
                .size(14)
                .font(Font::MONOSPACE),
        ]
        .align_y(Alignment::Center),
    );

    if app.session.can_summarize(id) {
        body = body.push(
            button(text("Summarize"))
                .padding([6, 14])
                .style(button::secondary)
                .on_press_maybe(available.then_some(Message::Summarize(id))),
        );
    }

    if let Some(summary) = &entry.summary {
        body = body.push(result_box("Summary:", summary));
    }

    let target_picker = pick_list(Language::ALL, Some(app.session.target()), move |lang| {
        if available {
            Message::TargetSelected(lang)
        } else {
            Message::None
        }
    })
    .width(Length::Fixed(150.0));

    let translate_btn = button(text("Translate"))
        .padding([6, 18])
        .style(button::primary)
        .on_press_maybe(
            app.session
                .can_translate(id)
                .then_some(Message::Translate(id)),
        );

    body = body.push(
        row![target_picker, translate_btn]
            .spacing(12)
            .align_y(Alignment::Center),
    );

    if let Some(translation) = &entry.translation {
        body = body.push(result_box("Translation:", translation));
    }

    container(body)
        .width(Length::Fill)
        .padding(16)
        .style(container::rounded_box)
        .into()
}

fn result_box<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(label).size(14).style(text::primary),
            text(value).size(14),
        ]
        .spacing(4),
    )
    .width(Length::Fill)
    .padding(10)
    .style(container::bordered_box)
    .into()
}
