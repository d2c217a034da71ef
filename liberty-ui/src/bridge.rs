use crate::config::{read_config, Config};
use crate::Message;
use iced::futures::channel::mpsc::Sender;
use iced::futures::{SinkExt, Stream, StreamExt};
use liberty_client::{
    CoreUIMsg, CoreUIMsgPacket, LibertyCore, UICoreMsg, UICoreMsgPacket, PRIVATE_KEY_ENV,
};
use log::{error, info};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

#[derive(Debug)]
pub struct UIHandle {
    ui_to_core_tx: mpsc::Sender<UICoreMsgPacket>,
}

impl UIHandle {
    pub async fn send_msg(&self, id: Uuid, msg: UICoreMsg) {
        if let Err(e) = self.ui_to_core_tx.send(UICoreMsgPacket { msg, id }).await {
            error!("Could not reach the core: {e}");
        }
    }
}

#[derive(Debug)]
pub struct CoreHandle {
    core_from_ui_rx: mpsc::Receiver<UICoreMsgPacket>,
}

impl CoreHandle {
    pub async fn recv(&mut self) -> Option<UICoreMsgPacket> {
        self.core_from_ui_rx.recv().await
    }
}

pub fn create_handles() -> (UIHandle, CoreHandle) {
    let (ui_to_core_tx, core_from_ui_rx) = mpsc::channel::<UICoreMsgPacket>(50);

    let ui_handle = UIHandle { ui_to_core_tx };

    let core_handle = CoreHandle { core_from_ui_rx };

    (ui_handle, core_handle)
}

pub fn run_core() -> impl Stream<Item = Message> {
    iced::stream::channel(100, |mut tx: Sender<Message>| async move {
        // Setup UI Handle
        let (ui_handle, mut core_handle) = create_handles();
        let arc_ui_handle = Arc::new(ui_handle);
        tx.send(Message::UIHandlerLoaded(arc_ui_handle))
            .await
            .expect("should send");

        let config = read_config().unwrap_or_else(|e| {
            error!("Could not read config, using defaults: {e}");
            Config::default()
        });
        info!("Using RPC endpoint: {}", config.rpc_url);

        tx.send(Message::ConfigLoaded(config.clone()))
            .await
            .expect("should send");

        // Setup core message channel
        let (core_tx, mut core_rx) = iced::futures::channel::mpsc::channel::<CoreUIMsgPacket>(128);
        let mut tx_clone = tx.clone();
        tokio::spawn(async move {
            while let Some(rev) = core_rx.next().await {
                tx_clone
                    .send(Message::CoreMessage(rev))
                    .await
                    .expect("should send");
            }
        });

        let core = LibertyCore::new(core_tx, config.chain_settings());

        // Connect straight away when a key is in the environment
        if std::env::var(PRIVATE_KEY_ENV).is_ok() {
            log::info!("Found private key in environment, attempting auto-connect");
            connect_wallet(&core, None, None).await;
        }

        process_core(&mut core_handle, &core).await;
    })
}

async fn connect_wallet(core: &LibertyCore, id: Option<Uuid>, private_key: Option<String>) {
    core.msg(id, CoreUIMsg::Connecting).await;
    match core.connect_wallet(private_key).await {
        Ok(info) => {
            core.msg(id, CoreUIMsg::WalletConnected(info)).await;
        }
        Err(e) => {
            error!("Error connecting wallet: {e}");
            core.msg(id, CoreUIMsg::WalletConnectFailed(e.to_string()))
                .await;
        }
    }
}

async fn process_core(core_handle: &mut CoreHandle, core: &LibertyCore) {
    while let Some(msg) = core_handle.recv().await {
        match msg.msg {
            UICoreMsg::Submit { kind, request } => {
                log::info!("Got UICoreMsg::Submit for {kind:?}");
                core.submit(msg.id, kind, request);
            }
            UICoreMsg::Abandon(id) => {
                core.abandon(id);
            }
            UICoreMsg::ConnectWallet { private_key } => {
                let core = core.clone();
                tokio::spawn(async move {
                    connect_wallet(&core, Some(msg.id), private_key).await;
                });
            }
            UICoreMsg::DisconnectWallet => {
                core.disconnect_wallet().await;
                core.msg(Some(msg.id), CoreUIMsg::WalletDisconnected).await;
            }
        }
    }
}
