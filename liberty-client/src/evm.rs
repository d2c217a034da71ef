use std::str::FromStr;
use std::time::Duration;

use alloy_network::{EthereumWallet, ReceiptResponse, TransactionBuilder};
use alloy_primitives::{Address, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_rpc_types_eth::TransactionRequest;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use log::{debug, info, trace};
use url::Url;

use crate::core::ChainSettings;
use crate::session::{
    ContractCall, ReceiptStatus, TransactionHandle, WalletError, WalletInfo, WalletSession,
};

/// A wallet session signing locally and submitting over JSON-RPC
pub struct RpcWalletSession {
    provider: DynProvider,
    info: WalletInfo,
    confirmations: u64,
    poll_interval: Duration,
}

impl RpcWalletSession {
    pub async fn connect(settings: &ChainSettings, private_key: &str) -> anyhow::Result<Self> {
        let signer = PrivateKeySigner::from_str(private_key.trim())?;
        let address = signer.address();

        let url = Url::parse(&settings.rpc_url)?;
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url)
            .erased();

        let chain_id = provider.get_chain_id().await?;
        info!("Connected {address} on chain {chain_id} via {}", settings.rpc_url);

        Ok(Self {
            provider,
            info: WalletInfo { address, chain_id },
            confirmations: settings.confirmations.max(1),
            poll_interval: settings.poll_interval,
        })
    }

    async fn send(&self, tx: TransactionRequest) -> Result<TransactionHandle, WalletError> {
        let pending = self.provider.send_transaction(tx).await?;
        let handle = TransactionHandle(*pending.tx_hash());
        debug!("Transaction sent: {handle}");
        Ok(handle)
    }

    async fn is_deep_enough(&self, mined_in: Option<u64>) -> Result<bool, WalletError> {
        if self.confirmations <= 1 {
            return Ok(true);
        }
        let Some(mined_in) = mined_in else {
            return Ok(false);
        };
        let head = self.provider.get_block_number().await?;
        Ok(receipt_is_final(head, mined_in, self.confirmations))
    }
}

/// A receipt mined in `mined_in` is final once it is `confirmations` deep at `head`,
/// the block it was mined in counting as the first
fn receipt_is_final(head: u64, mined_in: u64, confirmations: u64) -> bool {
    if confirmations <= 1 {
        return true;
    }
    head.saturating_add(1) >= mined_in.saturating_add(confirmations)
}

#[async_trait]
impl WalletSession for RpcWalletSession {
    fn info(&self) -> WalletInfo {
        self.info.clone()
    }

    async fn send_value(&self, to: Address, value: U256) -> Result<TransactionHandle, WalletError> {
        let tx = TransactionRequest::default()
            .with_from(self.info.address)
            .with_to(to)
            .with_value(value);
        self.send(tx).await
    }

    async fn call_contract(&self, call: ContractCall) -> Result<TransactionHandle, WalletError> {
        debug!("Calling {} on {}", call.function, call.contract);
        let tx = TransactionRequest::default()
            .with_from(self.info.address)
            .with_to(call.contract)
            .with_input(call.input)
            .with_value(call.value);
        self.send(tx).await
    }

    async fn wait_for_receipt(
        &self,
        handle: TransactionHandle,
    ) -> Result<ReceiptStatus, WalletError> {
        loop {
            match self.provider.get_transaction_receipt(handle.0).await? {
                Some(receipt) => {
                    if self.is_deep_enough(receipt.block_number()).await? {
                        let status = if receipt.status() {
                            ReceiptStatus::Success
                        } else {
                            ReceiptStatus::Failure
                        };
                        debug!("Receipt for {handle}: status {}", status.code());
                        return Ok(status);
                    }
                    trace!("Receipt for {handle} waiting for confirmations");
                }
                None => trace!("Receipt for {handle} not available yet"),
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_confirmation_is_final_when_mined() {
        assert!(receipt_is_final(100, 100, 0));
        assert!(receipt_is_final(100, 100, 1));
        // A lagging head never holds back a single confirmation
        assert!(receipt_is_final(99, 100, 1));
    }

    #[test]
    fn test_waits_for_confirmations() {
        assert!(!receipt_is_final(100, 100, 2));
        assert!(receipt_is_final(101, 100, 2));

        assert!(!receipt_is_final(100, 100, 3));
        assert!(!receipt_is_final(101, 100, 3));
        assert!(receipt_is_final(102, 100, 3));
        assert!(receipt_is_final(150, 100, 3));
    }
}
