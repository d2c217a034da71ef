use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy_primitives::Address;
use anyhow::anyhow;
use futures::{channel::mpsc::Sender, SinkExt};
use log::{error, info, warn};
use tokio::sync::RwLock;
use tokio::task::AbortHandle;
use uuid::Uuid;

use crate::amount::parse_amount;
use crate::contract::deposit_call;
use crate::evm::RpcWalletSession;
use crate::session::{TransactionHandle, WalletError, WalletInfo, WalletSession};
use crate::submission::{SubmissionKind, TransferRequest};
use crate::{CoreUIMsg, CoreUIMsgPacket};

/// Fallback for the signing key when none is typed into the connect control
pub const PRIVATE_KEY_ENV: &str = "LIBERTY_PRIVATE_KEY";

#[derive(Debug, Clone)]
pub struct ChainSettings {
    pub rpc_url: String,
    pub deposit_contract: Address,
    pub confirmations: u64,
    pub poll_interval: Duration,
}

#[derive(Clone)]
pub struct LibertyCore {
    pub tx: Sender<CoreUIMsgPacket>,
    pub settings: ChainSettings,
    pub session: Arc<RwLock<Option<Arc<dyn WalletSession>>>>,
    in_flight: Arc<Mutex<HashMap<Uuid, AbortHandle>>>,
}

impl LibertyCore {
    pub fn new(tx: Sender<CoreUIMsgPacket>, settings: ChainSettings) -> Self {
        Self {
            tx,
            settings,
            session: Arc::new(RwLock::new(None)),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    // Panics if fails to send
    pub async fn msg(&self, id: Option<Uuid>, msg: CoreUIMsg) {
        self.tx
            .clone()
            .send(CoreUIMsgPacket { id, msg })
            .await
            .expect("Could not communicate with the UI");
    }

    pub async fn set_session(&self, session: Arc<dyn WalletSession>) -> WalletInfo {
        let info = session.info();
        *self.session.write().await = Some(session);
        info
    }

    async fn current_session(&self) -> Option<Arc<dyn WalletSession>> {
        self.session.read().await.clone()
    }

    /// Connects over RPC with the given key, or the one in the environment
    pub async fn connect_wallet(&self, private_key: Option<String>) -> anyhow::Result<WalletInfo> {
        let key = match private_key.filter(|k| !k.trim().is_empty()) {
            Some(key) => key,
            None => std::env::var(PRIVATE_KEY_ENV)
                .map_err(|_| anyhow!("No private key given and {PRIVATE_KEY_ENV} is not set"))?,
        };

        let session = RpcWalletSession::connect(&self.settings, &key).await?;
        Ok(self.set_session(Arc::new(session)).await)
    }

    /// Drops the session and stops tracking every submission
    pub async fn disconnect_wallet(&self) {
        self.session.write().await.take();
        if let Ok(mut in_flight) = self.in_flight.lock() {
            for (id, task) in in_flight.drain() {
                info!("Abandoning submission {id} on disconnect");
                task.abort();
            }
        }
    }

    /// Starts a submission in the background, progress is reported with `id`
    pub fn submit(&self, id: Uuid, kind: SubmissionKind, request: TransferRequest) {
        let core = self.clone();
        // Hold the lock so the task can't remove itself before it is registered
        let mut in_flight = match self.in_flight.lock() {
            Ok(in_flight) => in_flight,
            Err(e) => {
                error!("In-flight submissions poisoned: {e}");
                return;
            }
        };
        let task = tokio::spawn(async move {
            core.run_submission(id, kind, request).await;
            if let Ok(mut in_flight) = core.in_flight.lock() {
                in_flight.remove(&id);
            }
        });
        in_flight.insert(id, task.abort_handle());
    }

    /// Stops tracking a submission, nothing more is reported for it
    pub fn abandon(&self, id: Uuid) -> bool {
        let task = self
            .in_flight
            .lock()
            .ok()
            .and_then(|mut in_flight| in_flight.remove(&id));
        match task {
            Some(task) => {
                info!("Abandoning submission {id}");
                task.abort();
                true
            }
            None => {
                warn!("No submission {id} to abandon");
                false
            }
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.lock().map(|m| m.len()).unwrap_or_default()
    }

    async fn run_submission(&self, id: Uuid, kind: SubmissionKind, request: TransferRequest) {
        self.msg(Some(id), CoreUIMsg::Submitting).await;

        let Some(session) = self.current_session().await else {
            error!("Cannot submit {kind:?}, no wallet connected");
            self.msg(
                Some(id),
                CoreUIMsg::SubmissionFailed(WalletError::new("No wallet connected")),
            )
            .await;
            return;
        };

        let handle = match self.issue(session.as_ref(), kind, &request).await {
            Ok(handle) => handle,
            Err(e) => {
                error!("Error submitting {kind:?}: {e}");
                self.msg(Some(id), CoreUIMsg::SubmissionFailed(e)).await;
                return;
            }
        };

        info!("{kind:?} submitted: {handle}");
        self.msg(Some(id), CoreUIMsg::Submitted(handle)).await;

        match session.wait_for_receipt(handle).await {
            Ok(status) => {
                info!("{kind:?} {handle} final with status {}", status.code());
                self.msg(Some(id), CoreUIMsg::ReceiptReceived(status)).await;
            }
            Err(e) => {
                error!("Error checking transaction {handle}: {e}");
                self.msg(Some(id), CoreUIMsg::ReceiptFailed(e)).await;
            }
        }
    }

    async fn issue(
        &self,
        session: &dyn WalletSession,
        kind: SubmissionKind,
        request: &TransferRequest,
    ) -> Result<TransactionHandle, WalletError> {
        let to = Address::from_str(request.destination.trim())
            .map_err(|e| WalletError::new(format!("Invalid address: {e}")))?;
        let value = parse_amount(&request.amount)?;

        match kind {
            SubmissionKind::Transfer => session.send_value(to, value).await,
            SubmissionKind::Deposit => {
                let call = deposit_call(self.settings.deposit_contract, to, value);
                session.call_contract(call).await
            }
        }
    }
}
