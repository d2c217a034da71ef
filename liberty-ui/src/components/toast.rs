use std::fmt;
use std::time::{Duration, Instant};

use iced::alignment::{Horizontal, Vertical};
use iced::widget::button::Status;
use iced::widget::{button, column, container, horizontal_space, row, stack, text, Column};
use iced::{Alignment, Border, Color, Element, Font, Length, Shadow, Theme, Vector};

use uuid::Uuid;

use crate::Message;

use super::{darken, lighten};

pub const DEFAULT_TIMEOUT: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastStatus {
    #[default]
    Neutral,
    Good,
    Bad,
}

impl fmt::Display for ToastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => "Neutral",
            Self::Good => "Good",
            Self::Bad => "Bad",
        }
        .fmt(f)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Toast {
    pub title: String,
    pub body: Option<String>,
    pub status: ToastStatus,
}

/// A toast on screen along with the moment it appeared
#[derive(Debug, Clone)]
pub struct ActiveToast {
    pub id: Uuid,
    pub toast: Toast,
    pub shown_at: Instant,
}

impl ActiveToast {
    pub fn new(toast: Toast, now: Instant) -> Self {
        Self {
            id: Uuid::new_v4(),
            toast,
            shown_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= timeout
    }
}

/// Drops every toast older than `timeout`
pub fn expire_toasts(toasts: &mut Vec<ActiveToast>, now: Instant, timeout: Duration) {
    toasts.retain(|t| !t.is_expired(now, timeout));
}

/// Closes the toast with `id`, a toast that already expired is left alone
pub fn close_toast(toasts: &mut Vec<ActiveToast>, id: Uuid) -> bool {
    let before = toasts.len();
    toasts.retain(|t| t.id != id);
    toasts.len() != before
}

pub fn toast_overlay<'a>(
    content: impl Into<Element<'a, Message>>,
    toasts: &'a [ActiveToast],
    on_close: impl Fn(Uuid) -> Message + 'a,
) -> Element<'a, Message> {
    if toasts.is_empty() {
        return content.into();
    }

    let toast_column = Column::with_children(
        toasts
            .iter()
            .map(|active| toast_card(&active.toast, on_close(active.id))),
    )
    .spacing(8)
    .align_x(Alignment::End);

    let overlay = container(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(16);

    stack![content.into(), overlay].into()
}

fn toast_card(toast: &Toast, on_close: Message) -> Element<'_, Message> {
    let close_button = button(text("x").size(14))
        .style(|theme: &Theme, status| {
            let border = Border {
                color: Color::WHITE,
                width: 0.,
                radius: (4.).into(),
            };

            let background = match status {
                Status::Hovered => darken(theme.palette().background, 0.1),
                Status::Pressed => darken(Color::BLACK, 0.1),
                _ => theme.palette().background,
            };
            button::Style {
                background: Some(background.into()),
                text_color: Color::WHITE,
                border,
                shadow: Shadow::default(),
            }
        })
        .padding([2, 8])
        .on_press(on_close);

    let body = toast.body.clone().map(text);

    container(
        column![row![
            text(toast.title.as_str()).font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::default()
            }),
            horizontal_space(),
            close_button
        ]
        .align_y(Alignment::Center)]
        .push_maybe(body)
        .spacing(4),
    )
    .width(Length::Fixed(256.))
    .padding(16)
    .style(match toast.status {
        ToastStatus::Neutral => neutral,
        ToastStatus::Good => good,
        ToastStatus::Bad => bad,
    })
    .into()
}

fn styled(background: Color, border: Color) -> container::Style {
    container::Style {
        background: Some(background.into()),
        text_color: Color::WHITE.into(),
        border: Border {
            color: border,
            width: 1.,
            radius: (4.).into(),
        },
        shadow: Shadow {
            color: Color::from_rgba8(0, 0, 0, 0.25),
            offset: Vector::new(-2., -2.),
            blur_radius: 4.,
        },
    }
}

fn neutral(theme: &Theme) -> container::Style {
    let gray = lighten(theme.palette().background, 0.1);

    styled(gray, gray)
}

fn good(theme: &Theme) -> container::Style {
    let gray = lighten(theme.palette().background, 0.1);

    styled(gray, theme.palette().success)
}

fn bad(theme: &Theme) -> container::Style {
    let gray = lighten(theme.palette().background, 0.1);

    styled(gray, theme.palette().danger)
}
