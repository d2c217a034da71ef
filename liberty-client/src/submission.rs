//! The submit → confirm state machine shared by the transfer and deposit forms.
//!
//! A form moves `Idle → Pending → Confirming → {Confirmed, Failed}` driven only
//! by messages from the core. While pending or confirming the form refuses to
//! start another submission. How progress is shown depends on the form kind:
//! the transfer form keeps a single inline message, the deposit form emits
//! notifications.

use std::fmt;

use uuid::Uuid;

use crate::session::{ReceiptStatus, TransactionHandle};
use crate::CoreUIMsg;

pub const SUBMIT_LABEL: &str = "Transfer";
pub const BUSY_LABEL: &str = "Confirming...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionKind {
    /// Plain value transfer to the destination
    Transfer,
    /// `deposit(destination)` on the bridge contract with value attached
    Deposit,
}

/// What the user entered, exists for a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub destination: String,
    pub amount: String,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Pending,
    Confirming,
    Confirmed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationStatus {
    Pending,
    Confirming,
    Success,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    Busy,
    MissingAddress,
    MissingAmount,
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "A transaction is already in progress"),
            Self::MissingAddress => write!(f, "Address is required"),
            Self::MissingAmount => write!(f, "Amount is required"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: Option<String>,
}

impl Notification {
    fn new(level: NotificationLevel, title: &str, body: Option<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            body,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            Some(body) => write!(f, "{}: {body}", self.title),
            None => write!(f, "{}", self.title),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionForm {
    kind: SubmissionKind,
    pub address: String,
    pub value: String,
    phase: SubmissionPhase,
    message: Option<String>,
    current_id: Option<Uuid>,
    handle: Option<TransactionHandle>,
}

impl SubmissionForm {
    pub fn new(kind: SubmissionKind) -> Self {
        Self {
            kind,
            address: String::new(),
            value: String::new(),
            phase: SubmissionPhase::Idle,
            message: None,
            current_id: None,
            handle: None,
        }
    }

    pub fn kind(&self) -> SubmissionKind {
        self.kind
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn confirmation_status(&self) -> Option<ConfirmationStatus> {
        match self.phase {
            SubmissionPhase::Idle => None,
            SubmissionPhase::Pending => Some(ConfirmationStatus::Pending),
            SubmissionPhase::Confirming => Some(ConfirmationStatus::Confirming),
            SubmissionPhase::Confirmed => Some(ConfirmationStatus::Success),
            SubmissionPhase::Failed => Some(ConfirmationStatus::Failed),
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            SubmissionPhase::Pending | SubmissionPhase::Confirming
        )
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_busy() {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Inline status line, only the transfer form keeps one
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn current_id(&self) -> Option<Uuid> {
        self.current_id
    }

    pub fn handle(&self) -> Option<TransactionHandle> {
        self.handle
    }

    /// Starts a new cycle tracked as `id`, unless one is still running
    pub fn begin(&mut self, id: Uuid) -> Result<TransferRequest, SubmitRejected> {
        if self.is_busy() {
            return Err(SubmitRejected::Busy);
        }
        if self.address.trim().is_empty() {
            return Err(SubmitRejected::MissingAddress);
        }
        if self.value.trim().is_empty() {
            return Err(SubmitRejected::MissingAmount);
        }

        self.phase = SubmissionPhase::Pending;
        self.message = None;
        self.handle = None;
        self.current_id = Some(id);

        Ok(TransferRequest {
            destination: self.address.clone(),
            amount: self.value.clone(),
        })
    }

    /// Applies a core message, anything not addressed to the current cycle is ignored
    pub fn apply(&mut self, id: Option<Uuid>, msg: &CoreUIMsg) -> Option<Notification> {
        if id.is_none() || id != self.current_id {
            return None;
        }

        match msg {
            CoreUIMsg::Submitting => {
                self.phase = SubmissionPhase::Pending;
                None
            }
            CoreUIMsg::Submitted(handle) => {
                self.phase = SubmissionPhase::Confirming;
                self.handle = Some(*handle);
                self.address.clear();
                self.value.clear();
                match self.kind {
                    SubmissionKind::Transfer => None,
                    SubmissionKind::Deposit => Some(Notification::new(
                        NotificationLevel::Info,
                        "Transaction submitted",
                        None,
                    )),
                }
            }
            CoreUIMsg::SubmissionFailed(e) => {
                self.finish(SubmissionPhase::Failed);
                match self.kind {
                    SubmissionKind::Transfer => {
                        self.message = Some(format!("Error: {}", e.summary()));
                        None
                    }
                    SubmissionKind::Deposit => Some(Notification::new(
                        NotificationLevel::Error,
                        "Transaction failed",
                        Some(e.to_string()),
                    )),
                }
            }
            CoreUIMsg::ReceiptReceived(status) => {
                let confirmed = *status == ReceiptStatus::Success;
                self.finish(if confirmed {
                    SubmissionPhase::Confirmed
                } else {
                    SubmissionPhase::Failed
                });
                match (self.kind, confirmed) {
                    (SubmissionKind::Transfer, true) => {
                        self.message = Some("Transaction successful!".to_string());
                        None
                    }
                    // A reverted transfer is reported as failed, not as a success
                    (SubmissionKind::Transfer, false) => {
                        self.message = Some("Transaction failed".to_string());
                        None
                    }
                    (SubmissionKind::Deposit, true) => Some(Notification::new(
                        NotificationLevel::Success,
                        "Transaction confirmed!",
                        None,
                    )),
                    (SubmissionKind::Deposit, false) => Some(Notification::new(
                        NotificationLevel::Error,
                        "Transaction failed",
                        None,
                    )),
                }
            }
            CoreUIMsg::ReceiptFailed(e) => {
                self.finish(SubmissionPhase::Failed);
                match self.kind {
                    SubmissionKind::Transfer => {
                        self.message = Some(format!("Error: {}", e.summary()));
                        None
                    }
                    SubmissionKind::Deposit => Some(Notification::new(
                        NotificationLevel::Error,
                        "Error checking transaction",
                        Some(e.to_string()),
                    )),
                }
            }
            _ => None,
        }
    }

    /// Tears the current cycle down, returning the id the core should stop tracking
    pub fn abandon(&mut self) -> Option<Uuid> {
        let id = if self.is_busy() { self.current_id } else { None };
        self.phase = SubmissionPhase::Idle;
        self.current_id = None;
        self.handle = None;
        self.message = None;
        id
    }

    fn finish(&mut self, phase: SubmissionPhase) {
        self.phase = phase;
        self.current_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::WalletError;
    use alloy_primitives::B256;

    fn filled(kind: SubmissionKind) -> SubmissionForm {
        let mut form = SubmissionForm::new(kind);
        form.address = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbb".to_string();
        form.value = "1.5".to_string();
        form
    }

    fn handle() -> TransactionHandle {
        TransactionHandle(B256::repeat_byte(0x11))
    }

    fn provider_error() -> WalletError {
        WalletError {
            short_message: Some("User rejected the request.".to_string()),
            message: "Request rejected by user: code 4001".to_string(),
        }
    }

    #[test]
    fn test_busy_until_terminal() {
        let mut form = filled(SubmissionKind::Transfer);
        assert_eq!(form.button_label(), SUBMIT_LABEL);

        let id = Uuid::new_v4();
        let request = form.begin(id).unwrap();
        assert_eq!(request.amount, "1.5");
        assert!(form.is_busy());
        assert_eq!(form.button_label(), BUSY_LABEL);
        assert_eq!(form.confirmation_status(), Some(ConfirmationStatus::Pending));

        form.apply(Some(id), &CoreUIMsg::Submitting);
        form.apply(Some(id), &CoreUIMsg::Submitted(handle()));
        assert!(form.is_busy());
        assert_eq!(form.confirmation_status(), Some(ConfirmationStatus::Confirming));

        form.apply(Some(id), &CoreUIMsg::ReceiptReceived(ReceiptStatus::Success));
        assert!(!form.is_busy());
        assert_eq!(form.button_label(), SUBMIT_LABEL);
        assert_eq!(form.confirmation_status(), Some(ConfirmationStatus::Success));
    }

    #[test]
    fn test_second_submit_rejected_while_busy() {
        let mut form = filled(SubmissionKind::Deposit);
        let first = Uuid::new_v4();
        form.begin(first).unwrap();

        assert_eq!(form.begin(Uuid::new_v4()), Err(SubmitRejected::Busy));
        assert_eq!(form.current_id(), Some(first));

        form.apply(Some(first), &CoreUIMsg::Submitted(handle()));
        form.address = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEbb".to_string();
        form.value = "2".to_string();
        assert_eq!(form.begin(Uuid::new_v4()), Err(SubmitRejected::Busy));
    }

    #[test]
    fn test_required_fields() {
        let mut form = SubmissionForm::new(SubmissionKind::Transfer);
        assert_eq!(form.begin(Uuid::new_v4()), Err(SubmitRejected::MissingAddress));
        form.address = "0xabc".to_string();
        form.value = "  ".to_string();
        assert_eq!(form.begin(Uuid::new_v4()), Err(SubmitRejected::MissingAmount));
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_transfer_success_clears_fields() {
        let mut form = filled(SubmissionKind::Transfer);
        let id = Uuid::new_v4();
        form.begin(id).unwrap();

        assert!(form.apply(Some(id), &CoreUIMsg::Submitted(handle())).is_none());
        assert!(form.address.is_empty());
        assert!(form.value.is_empty());
        assert_eq!(form.handle(), Some(handle()));

        form.apply(Some(id), &CoreUIMsg::ReceiptReceived(ReceiptStatus::Success));
        assert_eq!(form.message(), Some("Transaction successful!"));
        assert!(form.address.is_empty());
        assert!(form.value.is_empty());
    }

    #[test]
    fn test_transfer_error_message() {
        let mut form = filled(SubmissionKind::Transfer);
        let id = Uuid::new_v4();
        form.begin(id).unwrap();

        form.apply(Some(id), &CoreUIMsg::SubmissionFailed(provider_error()));
        assert_eq!(form.message(), Some("Error: User rejected the request."));
        assert_eq!(form.phase(), SubmissionPhase::Failed);
        // fields are kept so the user can resubmit
        assert!(!form.address.is_empty());

        let id = Uuid::new_v4();
        form.begin(id).unwrap();
        assert_eq!(form.message(), None);
        form.apply(
            Some(id),
            &CoreUIMsg::SubmissionFailed(WalletError::new("connection refused")),
        );
        assert_eq!(form.message(), Some("Error: connection refused"));
    }

    #[test]
    fn test_transfer_status_zero_is_failure() {
        let mut form = filled(SubmissionKind::Transfer);
        let id = Uuid::new_v4();
        form.begin(id).unwrap();
        form.apply(Some(id), &CoreUIMsg::Submitted(handle()));

        let notification = form.apply(
            Some(id),
            &CoreUIMsg::ReceiptReceived(ReceiptStatus::from_code(0)),
        );
        assert!(notification.is_none());
        assert_eq!(form.message(), Some("Transaction failed"));
        assert_eq!(form.confirmation_status(), Some(ConfirmationStatus::Failed));
        assert!(!form.is_busy());
    }

    #[test]
    fn test_deposit_notifications() {
        let mut form = filled(SubmissionKind::Deposit);
        let id = Uuid::new_v4();
        form.begin(id).unwrap();

        let submitted = form.apply(Some(id), &CoreUIMsg::Submitted(handle())).unwrap();
        assert_eq!(submitted.level, NotificationLevel::Info);
        assert_eq!(submitted.title, "Transaction submitted");

        let confirmed = form
            .apply(Some(id), &CoreUIMsg::ReceiptReceived(ReceiptStatus::Success))
            .unwrap();
        assert_eq!(confirmed.level, NotificationLevel::Success);
        assert_eq!(confirmed.title, "Transaction confirmed!");
        assert_eq!(form.message(), None);
    }

    #[test]
    fn test_deposit_status_zero_is_failure() {
        let mut form = filled(SubmissionKind::Deposit);
        let id = Uuid::new_v4();
        form.begin(id).unwrap();
        form.apply(Some(id), &CoreUIMsg::Submitted(handle()));

        let failed = form
            .apply(
                Some(id),
                &CoreUIMsg::ReceiptReceived(ReceiptStatus::from_code(0)),
            )
            .unwrap();
        assert_eq!(failed.level, NotificationLevel::Error);
        assert_eq!(failed.title, "Transaction failed");
        assert_eq!(form.confirmation_status(), Some(ConfirmationStatus::Failed));
    }

    #[test]
    fn test_deposit_errors_carry_provider_text() {
        let mut form = filled(SubmissionKind::Deposit);
        let id = Uuid::new_v4();
        form.begin(id).unwrap();
        let failed = form
            .apply(Some(id), &CoreUIMsg::SubmissionFailed(provider_error()))
            .unwrap();
        assert_eq!(failed.level, NotificationLevel::Error);
        assert!(failed.to_string().contains("Request rejected by user"));

        let id = Uuid::new_v4();
        form.begin(id).unwrap();
        form.apply(Some(id), &CoreUIMsg::Submitted(handle()));
        let failed = form
            .apply(
                Some(id),
                &CoreUIMsg::ReceiptFailed(WalletError::new("header not found")),
            )
            .unwrap();
        assert_eq!(
            failed.to_string(),
            "Error checking transaction: header not found"
        );
    }

    #[test]
    fn test_ignores_other_submissions() {
        let mut form = filled(SubmissionKind::Transfer);
        let id = Uuid::new_v4();
        form.begin(id).unwrap();

        let stale = form.apply(
            Some(Uuid::new_v4()),
            &CoreUIMsg::ReceiptReceived(ReceiptStatus::Success),
        );
        assert!(stale.is_none());
        assert!(form.apply(None, &CoreUIMsg::Submitted(handle())).is_none());
        assert_eq!(form.phase(), SubmissionPhase::Pending);
    }

    #[test]
    fn test_abandon_returns_to_idle() {
        let mut form = filled(SubmissionKind::Deposit);
        let id = Uuid::new_v4();
        form.begin(id).unwrap();
        form.apply(Some(id), &CoreUIMsg::Submitted(handle()));

        assert_eq!(form.abandon(), Some(id));
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert!(!form.is_busy());
        // late messages for the abandoned cycle are dropped
        assert!(form
            .apply(Some(id), &CoreUIMsg::ReceiptReceived(ReceiptStatus::Success))
            .is_none());
        assert_eq!(form.abandon(), None);
    }
}
