use iced::widget::{column, horizontal_rule};
use iced::Element;
use liberty_client::SubmissionKind;

use crate::components::{basic_layout, h_button, h_header, h_input, wallet_connect, InputArgs};
use crate::{LibertyBridge, Message};

pub fn deposit(bridge: &LibertyBridge) -> Element<Message> {
    let form = &bridge.deposit_form;
    let header = h_header(
        "GETH 2 ETH",
        "Deposit into the bridge contract for an address.",
        bridge.wallet.as_ref(),
    );

    let address_input = h_input(InputArgs {
        label: "Address",
        placeholder: "0x...",
        value: &form.address,
        on_input: Message::DepositAddressChanged,
        disabled: form.is_busy(),
        ..InputArgs::default()
    });

    let value_input = h_input(InputArgs {
        label: "Amount",
        placeholder: "0.1",
        value: &form.value,
        on_input: Message::DepositValueChanged,
        on_submit: Some(Message::Submit(SubmissionKind::Deposit)),
        disabled: form.is_busy(),
        ..InputArgs::default()
    });

    let deposit_button = h_button(form.button_label(), form.is_busy()).on_press_maybe(
        (!form.is_busy()).then_some(Message::Submit(SubmissionKind::Deposit)),
    );

    let content = column![
        wallet_connect(bridge),
        horizontal_rule(1),
        header,
        address_input,
        value_input,
        deposit_button
    ]
    .spacing(48);

    basic_layout(content)
}
