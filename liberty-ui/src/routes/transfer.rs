use iced::widget::{column, horizontal_rule};
use iced::Element;
use liberty_client::SubmissionKind;

use crate::components::{
    basic_layout, h_button, h_header, h_input, status_message, wallet_connect, InputArgs,
};
use crate::{LibertyBridge, Message};

pub fn transfer(bridge: &LibertyBridge) -> Element<Message> {
    let form = &bridge.transfer_form;
    let header = h_header(
        "ETH 2 GETH",
        "Send ETH to an address on the other side.",
        bridge.wallet.as_ref(),
    );

    let address_input = h_input(InputArgs {
        label: "Address",
        placeholder: "0x...",
        value: &form.address,
        on_input: Message::TransferAddressChanged,
        disabled: form.is_busy(),
        ..InputArgs::default()
    });

    let value_input = h_input(InputArgs {
        label: "Amount",
        placeholder: "0.1",
        value: &form.value,
        on_input: Message::TransferValueChanged,
        on_submit: Some(Message::Submit(SubmissionKind::Transfer)),
        disabled: form.is_busy(),
        ..InputArgs::default()
    });

    let transfer_button = h_button(form.button_label(), form.is_busy()).on_press_maybe(
        (!form.is_busy()).then_some(Message::Submit(SubmissionKind::Transfer)),
    );

    let content = column![
        wallet_connect(bridge),
        horizontal_rule(1),
        header,
        address_input,
        value_input,
        transfer_button
    ]
    .push_maybe(status_message(form.message()))
    .spacing(48);

    basic_layout(content)
}
