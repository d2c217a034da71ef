use iced::widget::{container, text};
use iced::{Element, Length};

use crate::Message;

use super::{subtitle, tag_style};

/// Inline status line under a form, nothing when there is no message
pub fn status_message(message: Option<&str>) -> Option<Element<'_, Message>> {
    let message = message.filter(|m| !m.is_empty())?;

    Some(
        container(text(message).size(18).style(subtitle))
            .width(Length::Fill)
            .padding(8)
            .style(tag_style)
            .into(),
    )
}
