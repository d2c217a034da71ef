use std::path::PathBuf;

use uuid::Uuid;

pub use alloy_primitives;

pub mod amount;
pub mod contract;
pub mod core;
pub mod evm;
pub mod session;
pub mod submission;

pub use crate::core::{ChainSettings, LibertyCore, PRIVATE_KEY_ENV};
pub use crate::session::{
    ContractCall, ReceiptStatus, TransactionHandle, WalletError, WalletInfo, WalletSession,
};
pub use crate::submission::{
    ConfirmationStatus, Notification, NotificationLevel, SubmissionForm, SubmissionKind,
    SubmissionPhase, SubmitRejected, TransferRequest,
};

/// The directory where all application data is stored
/// Defaults to ~/.liberty-bridge
pub fn data_dir() -> PathBuf {
    let home = home::home_dir().expect("Could not find home directory");
    home.join(".liberty-bridge")
}

#[derive(Debug, Clone)]
pub struct UICoreMsgPacket {
    pub id: Uuid,
    pub msg: UICoreMsg,
}

#[derive(Debug, Clone)]
pub enum UICoreMsg {
    ConnectWallet {
        private_key: Option<String>,
    },
    DisconnectWallet,
    Submit {
        kind: SubmissionKind,
        request: TransferRequest,
    },
    /// Stop tracking the submission with the given id
    Abandon(Uuid),
}

#[derive(Debug, Clone)]
pub struct CoreUIMsgPacket {
    pub id: Option<Uuid>,
    pub msg: CoreUIMsg,
}

#[derive(Debug, Clone)]
pub enum CoreUIMsg {
    Connecting,
    WalletConnected(WalletInfo),
    WalletConnectFailed(String),
    WalletDisconnected,
    Submitting,
    Submitted(TransactionHandle),
    SubmissionFailed(WalletError),
    ReceiptReceived(ReceiptStatus),
    ReceiptFailed(WalletError),
}
