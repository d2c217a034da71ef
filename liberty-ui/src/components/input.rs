use iced::{
    widget::{column, text, text_input, TextInput},
    Background, Border, Color, Element, Theme,
};

use crate::Message;

use super::{darken, lighten};

pub struct InputArgs<'a> {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: &'a str,
    pub on_input: fn(String) -> Message,
    pub on_submit: Option<Message>,
    pub disabled: bool,
    pub secure: bool,
}

impl Default for InputArgs<'_> {
    fn default() -> Self {
        Self {
            label: "",
            placeholder: "",
            value: "",
            on_input: |_| Message::Noop,
            on_submit: None,
            disabled: false,
            secure: false,
        }
    }
}

pub fn h_input(args: InputArgs<'_>) -> Element<Message, Theme> {
    let InputArgs {
        label,
        placeholder,
        value,
        on_input,
        on_submit,
        disabled,
        secure,
    } = args;

    let on_submit = on_submit.unwrap_or(Message::Noop);

    let input = TextInput::new(placeholder, value)
        .style(|theme: &Theme, status| {
            let gray = lighten(theme.palette().background, 0.5);
            let border_color = match status {
                text_input::Status::Active => Color::WHITE,
                text_input::Status::Focused => theme.palette().primary,
                text_input::Status::Hovered => darken(Color::WHITE, 0.2),
                text_input::Status::Disabled => gray,
            };
            let border = Border {
                color: border_color,
                width: 2.,
                radius: (8.).into(),
            };

            let value = if text_input::Status::Disabled == status {
                gray
            } else {
                Color::WHITE
            };

            let placeholder = if text_input::Status::Disabled == status {
                darken(gray, 0.1)
            } else {
                gray
            };

            text_input::Style {
                background: Background::Color(Color::BLACK),
                border,
                placeholder,
                value,
                icon: Color::WHITE,
                selection: theme.palette().primary,
            }
        })
        .size(24)
        .padding(8)
        .secure(secure);

    // Without handlers the input renders as disabled
    let input = if disabled {
        input
    } else {
        input.on_input(on_input).on_submit(on_submit)
    };

    if label.is_empty() {
        input.into()
    } else {
        column![text(label).size(24), input].spacing(8).into()
    }
}
