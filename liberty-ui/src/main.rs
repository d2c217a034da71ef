#![windows_subsystem = "windows"]

use crate::bridge::run_core;
use crate::components::{
    close_toast, expire_toasts, toast_overlay, ActiveToast, Toast, ToastStatus, BACKGROUND_GREY, BRIDGE_BLUE,
    BRIDGE_GREEN, BRIDGE_RED, DEFAULT_TIMEOUT,
};
use crate::config::Config;
use iced::widget::row;
use iced::{Color, Element, Subscription, Task};
use liberty_client::{
    CoreUIMsg, CoreUIMsgPacket, Notification, NotificationLevel, SubmissionForm, SubmissionKind,
    SubmitRejected, UICoreMsg, WalletInfo,
};
use log::{debug, error, info, warn};
use routes::Route;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

pub mod bridge;
pub mod components;
mod config;
pub mod routes;

pub fn main() -> iced::Result {
    pretty_env_logger::init();

    iced::application("Liberty Bridge", LibertyBridge::update, LibertyBridge::view)
        .theme(LibertyBridge::theme)
        .subscription(LibertyBridge::subscription)
        .run()
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum ConnectStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    // Setup
    UIHandlerLoaded(Arc<bridge::UIHandle>),
    ConfigLoaded(Config),
    // Local state changes
    Navigate(Route),
    PrivateKeyChanged(String),
    TransferAddressChanged(String),
    TransferValueChanged(String),
    DepositAddressChanged(String),
    DepositValueChanged(String),
    AddToast(Toast),
    CloseToast(Uuid),
    Tick(Instant),
    // Async commands we fire from the UI to core
    Noop,
    ConnectWallet,
    DisconnectWallet,
    Submit(SubmissionKind),
    // Core messages we get from core
    CoreMessage(CoreUIMsgPacket),
}

// Only what the UI renders lives here, submissions themselves run in the core
#[derive(Debug)]
pub struct LibertyBridge {
    ui_handle: Option<Arc<bridge::UIHandle>>,
    config: Config,
    active_route: Route,
    toasts: Vec<ActiveToast>,
    // Wallet
    wallet: Option<WalletInfo>,
    connect_status: ConnectStatus,
    private_key_str: String,
    // Forms
    transfer_form: SubmissionForm,
    deposit_form: SubmissionForm,
}

impl Default for LibertyBridge {
    fn default() -> Self {
        Self {
            ui_handle: None,
            config: Config::default(),
            active_route: Route::default(),
            toasts: Vec::new(),
            wallet: None,
            connect_status: ConnectStatus::default(),
            private_key_str: String::new(),
            transfer_form: SubmissionForm::new(SubmissionKind::Transfer),
            deposit_form: SubmissionForm::new(SubmissionKind::Deposit),
        }
    }
}

impl LibertyBridge {
    fn subscription(&self) -> Subscription<Message> {
        let core = Subscription::run(run_core);
        if self.toasts.is_empty() {
            core
        } else {
            Subscription::batch([
                core,
                iced::time::every(Duration::from_millis(500)).map(Message::Tick),
            ])
        }
    }

    fn form_mut(&mut self, kind: SubmissionKind) -> &mut SubmissionForm {
        match kind {
            SubmissionKind::Transfer => &mut self.transfer_form,
            SubmissionKind::Deposit => &mut self.deposit_form,
        }
    }

    fn route_form_mut(&mut self, route: Route) -> &mut SubmissionForm {
        match route {
            Route::Transfer => self.form_mut(SubmissionKind::Transfer),
            Route::Deposit => self.form_mut(SubmissionKind::Deposit),
        }
    }

    fn send_with_id(&self, id: Uuid, msg: UICoreMsg) -> Task<Message> {
        let Some(handle) = self.ui_handle.clone() else {
            error!("UI handle is not loaded, could not reach the core");
            return Task::none();
        };
        Task::perform(async move { handle.send_msg(id, msg).await }, |_| {
            Message::Noop
        })
    }

    fn send_from_ui(&self, msg: UICoreMsg) -> (Uuid, Task<Message>) {
        let id = Uuid::new_v4();
        (id, self.send_with_id(id, msg))
    }

    fn toast(toast: Toast) -> Task<Message> {
        Task::perform(async {}, move |_| Message::AddToast(toast.clone()))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Setup
            Message::UIHandlerLoaded(ui_handle) => {
                self.ui_handle = Some(ui_handle);
                Task::none()
            }
            Message::ConfigLoaded(config) => {
                self.config = config;
                Task::none()
            }
            // Internal app state stuff like navigation and text inputs
            Message::Navigate(route) => {
                if route == self.active_route {
                    return Task::none();
                }

                // The form being left is torn down along with whatever it was waiting on
                let abandoned = self.route_form_mut(self.active_route).abandon();
                self.active_route = route;

                match abandoned {
                    Some(id) => {
                        info!("Abandoning submission {id} on navigation");
                        let (_, task) = self.send_from_ui(UICoreMsg::Abandon(id));
                        task
                    }
                    None => Task::none(),
                }
            }
            Message::PrivateKeyChanged(key) => {
                self.private_key_str = key;
                Task::none()
            }
            Message::TransferAddressChanged(address) => {
                self.transfer_form.address = address;
                Task::none()
            }
            Message::TransferValueChanged(value) => {
                self.transfer_form.value = value;
                Task::none()
            }
            Message::DepositAddressChanged(address) => {
                self.deposit_form.address = address;
                Task::none()
            }
            Message::DepositValueChanged(value) => {
                self.deposit_form.value = value;
                Task::none()
            }
            Message::AddToast(toast) => {
                self.toasts.push(ActiveToast::new(toast, Instant::now()));
                Task::none()
            }
            Message::CloseToast(id) => {
                if !close_toast(&mut self.toasts, id) {
                    debug!("Toast {id} already gone");
                }
                Task::none()
            }
            Message::Tick(now) => {
                expire_toasts(
                    &mut self.toasts,
                    now,
                    Duration::from_secs(DEFAULT_TIMEOUT),
                );
                Task::none()
            }
            // Async commands we fire from the UI to core
            Message::Noop => Task::none(),
            Message::ConnectWallet => {
                if self.connect_status == ConnectStatus::Connecting {
                    return Task::none();
                }
                let key = std::mem::take(&mut self.private_key_str);
                let private_key = Some(key).filter(|k| !k.trim().is_empty());
                self.connect_status = ConnectStatus::Connecting;
                let (_, task) = self.send_from_ui(UICoreMsg::ConnectWallet { private_key });
                task
            }
            Message::DisconnectWallet => {
                let (_, task) = self.send_from_ui(UICoreMsg::DisconnectWallet);
                task
            }
            Message::Submit(kind) => {
                if self.ui_handle.is_none() {
                    warn!("Submit before the core is ready");
                    return Task::none();
                }

                let id = Uuid::new_v4();
                match self.form_mut(kind).begin(id) {
                    Ok(request) => {
                        info!("Submitting {kind:?} {id}");
                        self.send_with_id(id, UICoreMsg::Submit { kind, request })
                    }
                    Err(SubmitRejected::Busy) => {
                        debug!("Ignoring {kind:?} submit while busy");
                        Task::none()
                    }
                    Err(e) => {
                        error!("Rejected {kind:?} submit: {e}");
                        Self::toast(Toast {
                            title: "Cannot submit".to_string(),
                            body: Some(e.to_string()),
                            status: ToastStatus::Bad,
                        })
                    }
                }
            }
            // Core messages we get from core
            Message::CoreMessage(msg) => match msg.msg {
                CoreUIMsg::Connecting => {
                    self.connect_status = ConnectStatus::Connecting;
                    Task::none()
                }
                CoreUIMsg::WalletConnected(info) => {
                    info!("Wallet connected: {} on chain {}", info.address, info.chain_id);
                    self.wallet = Some(info);
                    self.connect_status = ConnectStatus::Connected;
                    Self::toast(Toast {
                        title: "Wallet connected".to_string(),
                        body: None,
                        status: ToastStatus::Good,
                    })
                }
                CoreUIMsg::WalletConnectFailed(reason) => {
                    self.wallet = None;
                    self.connect_status = ConnectStatus::Failed(reason.clone());
                    Self::toast(Toast {
                        title: "Failed to connect wallet".to_string(),
                        body: Some(reason),
                        status: ToastStatus::Bad,
                    })
                }
                CoreUIMsg::WalletDisconnected => {
                    info!("Wallet disconnected");
                    self.wallet = None;
                    self.connect_status = ConnectStatus::Disconnected;
                    // The core already dropped everything in flight
                    self.transfer_form.abandon();
                    self.deposit_form.abandon();
                    Task::none()
                }
                other => {
                    let notifications: Vec<Notification> = [
                        self.transfer_form.apply(msg.id, &other),
                        self.deposit_form.apply(msg.id, &other),
                    ]
                    .into_iter()
                    .flatten()
                    .collect();

                    Task::batch(notifications.into_iter().map(|n| {
                        Self::toast(Toast {
                            title: n.title,
                            body: n.body,
                            status: match n.level {
                                NotificationLevel::Info => ToastStatus::Neutral,
                                NotificationLevel::Success => ToastStatus::Good,
                                NotificationLevel::Error => ToastStatus::Bad,
                            },
                        })
                    }))
                }
            },
        }
    }

    fn view(&self) -> Element<Message> {
        let sidebar = crate::components::sidebar(self);

        let active_route = match self.active_route {
            Route::Transfer => row![sidebar, crate::routes::transfer(self)],
            Route::Deposit => row![sidebar, crate::routes::deposit(self)],
        };

        toast_overlay(active_route, &self.toasts, Message::CloseToast)
    }

    fn theme(&self) -> iced::Theme {
        iced::Theme::custom(
            String::from("Custom"),
            iced::theme::Palette {
                background: BACKGROUND_GREY,
                primary: BRIDGE_BLUE,
                text: Color::WHITE,
                success: BRIDGE_GREEN,
                danger: BRIDGE_RED,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liberty_client::alloy_primitives::{address, B256};
    use liberty_client::{ReceiptStatus, SubmissionPhase, TransactionHandle, WalletError};

    fn core_msg(id: Option<Uuid>, msg: CoreUIMsg) -> Message {
        Message::CoreMessage(CoreUIMsgPacket { id, msg })
    }

    fn fill(bridge: &mut LibertyBridge, kind: SubmissionKind) {
        let form = bridge.form_mut(kind);
        form.address = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbb".to_string();
        form.value = "1.5".to_string();
    }

    fn start(bridge: &mut LibertyBridge, kind: SubmissionKind) -> Uuid {
        fill(bridge, kind);
        let id = Uuid::new_v4();
        bridge.form_mut(kind).begin(id).unwrap();
        id
    }

    #[test]
    fn test_core_messages_only_reach_their_form() {
        let mut bridge = LibertyBridge::default();
        let transfer_id = start(&mut bridge, SubmissionKind::Transfer);
        let deposit_id = start(&mut bridge, SubmissionKind::Deposit);

        let _ = bridge.update(core_msg(
            Some(transfer_id),
            CoreUIMsg::Submitted(TransactionHandle(B256::ZERO)),
        ));
        assert_eq!(bridge.transfer_form.phase(), SubmissionPhase::Confirming);
        assert_eq!(bridge.deposit_form.phase(), SubmissionPhase::Pending);
        assert!(bridge.transfer_form.address.is_empty());
        assert!(!bridge.deposit_form.address.is_empty());

        let _ = bridge.update(core_msg(
            Some(deposit_id),
            CoreUIMsg::SubmissionFailed(WalletError::new("insufficient funds")),
        ));
        assert_eq!(bridge.deposit_form.phase(), SubmissionPhase::Failed);
        assert_eq!(bridge.transfer_form.phase(), SubmissionPhase::Confirming);

        let _ = bridge.update(core_msg(
            Some(transfer_id),
            CoreUIMsg::ReceiptReceived(ReceiptStatus::Success),
        ));
        assert_eq!(bridge.transfer_form.message(), Some("Transaction successful!"));
    }

    #[test]
    fn test_navigation_tears_down_the_form_left_behind() {
        let mut bridge = LibertyBridge::default();
        let id = start(&mut bridge, SubmissionKind::Transfer);
        assert!(bridge.transfer_form.is_busy());

        let _ = bridge.update(Message::Navigate(Route::Deposit));
        assert_eq!(bridge.active_route, Route::Deposit);
        assert_eq!(bridge.transfer_form.phase(), SubmissionPhase::Idle);

        // Late results for the abandoned cycle change nothing
        let _ = bridge.update(core_msg(
            Some(id),
            CoreUIMsg::ReceiptReceived(ReceiptStatus::Success),
        ));
        assert_eq!(bridge.transfer_form.message(), None);
        assert_eq!(bridge.transfer_form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_submit_without_core_does_nothing() {
        let mut bridge = LibertyBridge::default();
        fill(&mut bridge, SubmissionKind::Deposit);
        let _ = bridge.update(Message::Submit(SubmissionKind::Deposit));
        assert_eq!(bridge.deposit_form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_wallet_lifecycle() {
        let mut bridge = LibertyBridge::default();
        bridge.private_key_str = "  ".to_string();
        let _ = bridge.update(Message::ConnectWallet);
        assert_eq!(bridge.connect_status, ConnectStatus::Connecting);
        assert!(bridge.private_key_str.is_empty());

        let info = WalletInfo {
            address: address!("742d35Cc6634C0532925a3b844Bc9e7595f0bEbb"),
            chain_id: 1337,
        };
        let _ = bridge.update(core_msg(None, CoreUIMsg::WalletConnected(info.clone())));
        assert_eq!(bridge.wallet, Some(info));
        assert_eq!(bridge.connect_status, ConnectStatus::Connected);

        start(&mut bridge, SubmissionKind::Deposit);
        let _ = bridge.update(core_msg(None, CoreUIMsg::WalletDisconnected));
        assert!(bridge.wallet.is_none());
        assert!(!bridge.deposit_form.is_busy());
    }

    #[test]
    fn test_toasts_expire_and_close() {
        let mut bridge = LibertyBridge::default();
        for title in ["one", "two", "three"] {
            let _ = bridge.update(Message::AddToast(Toast {
                title: title.to_string(),
                ..Toast::default()
            }));
        }
        let first = bridge.toasts[0].id;
        let third = bridge.toasts[2].id;

        // "one" expires between rendering and the click on "three"
        bridge.toasts[0].shown_at -= Duration::from_secs(DEFAULT_TIMEOUT + 1);
        let _ = bridge.update(Message::Tick(Instant::now()));
        let _ = bridge.update(Message::CloseToast(third));
        assert_eq!(bridge.toasts.len(), 1);
        assert_eq!(bridge.toasts[0].toast.title, "two");

        let _ = bridge.update(Message::CloseToast(first));
        assert_eq!(bridge.toasts.len(), 1);

        let later = Instant::now() + Duration::from_secs(DEFAULT_TIMEOUT + 1);
        let _ = bridge.update(Message::Tick(later));
        assert!(bridge.toasts.is_empty());
    }

}
