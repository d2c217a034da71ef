use iced::widget::{column, container, horizontal_space, row, text};
use iced::{Alignment, Element};
use liberty_client::WalletInfo;

use crate::Message;

use super::{subtitle as subtitle_style, tag_style};

pub fn network_label(wallet: Option<&WalletInfo>) -> String {
    match wallet {
        Some(info) => format!("Chain {}", info.chain_id),
        None => "Not connected".to_string(),
    }
}

/// Form title with the network chip pinned to the right
pub fn h_header<'a>(
    title: &'a str,
    subtitle: &'a str,
    wallet: Option<&WalletInfo>,
) -> Element<'a, Message> {
    let chip = container(text(network_label(wallet)).size(14))
        .padding([4, 8])
        .style(tag_style);

    row![
        column![
            text(title).size(32),
            text(subtitle).size(18).style(subtitle_style)
        ]
        .spacing(8),
        horizontal_space(),
        chip,
    ]
    .align_y(Alignment::Start)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use liberty_client::alloy_primitives::Address;

    #[test]
    fn test_network_label() {
        assert_eq!(network_label(None), "Not connected");

        let info = WalletInfo {
            address: Address::ZERO,
            chain_id: 31337,
        };
        assert_eq!(network_label(Some(&info)), "Chain 31337");
    }
}
