use iced::widget::container::Style;
use iced::widget::{column, container, text, vertical_space};
use iced::{Alignment, Border, Element, Length, Shadow};

use crate::{LibertyBridge, Message, Route};

use super::{lighten, sidebar_button, subtitle, truncate_text};

pub fn sidebar(bridge: &LibertyBridge) -> Element<Message> {
    let sidebar = container(
        column![
            text("Liberty Bridge").size(24),
            sidebar_button("ETH 2 GETH", Route::Transfer, bridge.active_route)
                .on_press(Message::Navigate(Route::Transfer)),
            sidebar_button("GETH 2 ETH", Route::Deposit, bridge.active_route)
                .on_press(Message::Navigate(Route::Deposit)),
            vertical_space(),
            text(truncate_text(&bridge.config.rpc_url, 28))
                .size(14)
                .style(subtitle),
        ]
        .spacing(8)
        .align_x(Alignment::Start),
    )
    .padding(8)
    .height(Length::Fill)
    .style(|theme| -> Style {
        Style {
            text_color: None,
            background: Some(lighten(theme.palette().background, 0.05).into()),
            border: Border::default(),
            shadow: Shadow::default(),
        }
    });
    sidebar.into()
}
