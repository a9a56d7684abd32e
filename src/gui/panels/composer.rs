use crate::gui::{AiTextApp, Message};
use iced::keyboard::{self, key};
use iced::widget::{button, row, text, text_editor};
use iced::{Alignment, Element, Length};

pub fn view(app: &AiTextApp) -> Element<'_, Message> {
    let available = app.session.is_available();

    let mut editor = text_editor(&app.editor)
        .placeholder("Text here")
        .height(Length::Fixed(90.0))
        .padding(10)
        .key_binding(|key_press| {
            let is_enter = matches!(key_press.key, keyboard::Key::Named(key::Named::Enter));
            let focused = matches!(key_press.status, text_editor::Status::Focused);
            if is_enter && focused && !key_press.modifiers.shift() {
                Some(text_editor::Binding::Custom(Message::Submit))
            } else {
                text_editor::Binding::from_key_press(key_press)
            }
        });

    // Without an action handler the editor is read-only
    if available {
        editor = editor.on_action(Message::EditorAction);
    }

    let process_btn = button(text("✨ Process").size(18))
        .padding(14)
        .style(button::primary)
        .on_press_maybe(app.session.can_submit().then_some(Message::Submit));

    row![editor, process_btn]
        .spacing(12)
        .align_y(Alignment::End)
        .into()
}
