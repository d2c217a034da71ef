use std::fmt;

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_transport::TransportError;
use async_trait::async_trait;

use crate::amount::AmountError;

/// Opaque reference to a submitted transaction, only used to look up its receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionHandle(pub B256);

impl fmt::Display for TransactionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Final state of a receipt, 1 on success and 0 on failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    Success,
    Failure,
}

impl ReceiptStatus {
    pub fn from_code(code: u64) -> Self {
        if code == 1 {
            Self::Success
        } else {
            Self::Failure
        }
    }

    pub fn code(&self) -> u64 {
        match self {
            Self::Success => 1,
            Self::Failure => 0,
        }
    }
}

/// An error reported by the wallet or the node behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletError {
    pub short_message: Option<String>,
    pub message: String,
}

impl WalletError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            short_message: None,
            message: message.into(),
        }
    }

    /// The provider's short summary, falling back to the full error text
    pub fn summary(&self) -> &str {
        match self.short_message.as_deref() {
            Some(short) if !short.is_empty() => short,
            _ => &self.message,
        }
    }
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for WalletError {}

impl From<TransportError> for WalletError {
    fn from(error: TransportError) -> Self {
        let short_message = error.as_error_resp().map(|resp| resp.message.to_string());
        Self {
            short_message,
            message: error.to_string(),
        }
    }
}

impl From<AmountError> for WalletError {
    fn from(error: AmountError) -> Self {
        Self::new(error.to_string())
    }
}

/// Account and chain of a connected wallet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletInfo {
    pub address: Address,
    pub chain_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub contract: Address,
    pub function: &'static str,
    pub input: Bytes,
    pub value: U256,
}

/// The capabilities a connected wallet hands to the core.
#[async_trait]
pub trait WalletSession: Send + Sync {
    fn info(&self) -> WalletInfo;

    /// Plain native value transfer
    async fn send_value(&self, to: Address, value: U256) -> Result<TransactionHandle, WalletError>;

    async fn call_contract(&self, call: ContractCall) -> Result<TransactionHandle, WalletError>;

    /// Resolves once the receipt for `handle` is final
    async fn wait_for_receipt(
        &self,
        handle: TransactionHandle,
    ) -> Result<ReceiptStatus, WalletError>;
}
