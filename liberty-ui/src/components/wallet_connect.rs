use iced::widget::{column, horizontal_space, row, text};
use iced::{Alignment, Element};
use liberty_client::PRIVATE_KEY_ENV;

use crate::{ConnectStatus, LibertyBridge, Message};

use super::{h_input, h_small_button, subtitle, truncate_text, InputArgs};

pub fn wallet_connect(bridge: &LibertyBridge) -> Element<Message> {
    if let Some(info) = &bridge.wallet {
        let address = truncate_text(&info.address.to_string(), 16);
        return row![
            text(address).size(18),
            horizontal_space(),
            h_small_button("Disconnect").on_press(Message::DisconnectWallet),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into();
    }

    let connecting = bridge.connect_status == ConnectStatus::Connecting;

    let key_input = h_input(InputArgs {
        label: "Private key",
        placeholder: "0x...",
        value: &bridge.private_key_str,
        on_input: Message::PrivateKeyChanged,
        on_submit: Some(Message::ConnectWallet),
        disabled: connecting,
        secure: true,
    });

    let connect_button = h_small_button(if connecting {
        "Connecting..."
    } else {
        "Connect"
    })
    .on_press_maybe((!connecting).then_some(Message::ConnectWallet));

    let hint = match &bridge.connect_status {
        ConnectStatus::Failed(e) => text(format!("Could not connect: {e}")).size(14),
        _ => text(format!("Leave empty to use {PRIVATE_KEY_ENV}"))
            .size(14)
            .style(subtitle),
    };

    column![key_input, row![connect_button, hint].spacing(16).align_y(Alignment::Center)]
        .spacing(8)
        .into()
}
