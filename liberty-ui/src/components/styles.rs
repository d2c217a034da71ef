use iced::widget::container;
use iced::{widget::text::Style, Border, Theme};

use super::lighten;

pub fn subtitle(theme: &Theme) -> Style {
    let gray = lighten(theme.palette().background, 0.5);
    Style { color: Some(gray) }
}

pub fn tag_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(lighten(theme.palette().background, 0.05).into()),
        border: Border {
            radius: (8.).into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
