use iced::widget::button::{self, Status};
use iced::widget::{center, horizontal_space, row, text, Button};
use iced::{Alignment, Border, Color, Length, Shadow, Theme};

use crate::{Message, Route};

use super::{darken, lighten};

/// How a button reacts to the pointer
#[derive(Debug, Clone, Copy)]
enum Look {
    /// Outlined action, greyed out while a submission is running
    Primary { busy: bool },
    Small,
    Nav { active: bool },
}

fn look_style(look: Look, theme: &Theme, status: Status) -> button::Style {
    let base = theme.palette().background;
    let gray = lighten(base, 0.5);
    let inert =
        matches!(status, Status::Disabled) || matches!(look, Look::Primary { busy: true });

    let fill = match look {
        Look::Nav { active: true } => lighten(base, 0.1),
        Look::Nav { active: false } => lighten(base, 0.05),
        _ => base,
    };
    let background = match (look, status) {
        (Look::Primary { busy: true }, _) | (Look::Nav { active: true }, _) => fill,
        (Look::Nav { .. }, Status::Hovered) => lighten(fill, 0.05),
        (Look::Nav { .. }, Status::Pressed) => darken(fill, 0.1),
        (_, Status::Hovered) => lighten(fill, 0.1),
        (_, Status::Pressed) => darken(Color::BLACK, 0.1),
        _ => fill,
    };

    let (border_width, border_color) = match look {
        Look::Primary { .. } => (2., if inert { gray } else { Color::WHITE }),
        Look::Small => (1., Color::WHITE),
        Look::Nav { .. } => (0., Color::TRANSPARENT),
    };

    button::Style {
        background: Some(background.into()),
        text_color: if inert { gray } else { Color::WHITE },
        border: Border {
            color: border_color,
            width: border_width,
            radius: (8.).into(),
        },
        shadow: Shadow::default(),
    }
}

/// Full width form button, `busy` keeps it greyed out
pub fn h_button(label: &str, busy: bool) -> Button<'_, Message, Theme> {
    Button::new(center(text(label).size(24.)))
        .style(move |theme, status| look_style(Look::Primary { busy }, theme, status))
        .width(Length::Fill)
        .height(Length::Fixed(64.))
}

pub fn h_small_button(label: &str) -> Button<'_, Message, Theme> {
    Button::new(text(label).size(16))
        .style(|theme, status| look_style(Look::Small, theme, status))
        .padding([8, 16])
}

pub fn sidebar_button(
    label: &str,
    self_route: Route,
    active_route: Route,
) -> Button<'_, Message, Theme> {
    let active = self_route == active_route;
    let content = row![text(label).size(24.), horizontal_space()]
        .align_y(Alignment::Center)
        .padding(8);

    Button::new(content)
        .style(move |theme, status| look_style(Look::Nav { active }, theme, status))
        .width(Length::Fixed(192.))
}
