//! Pending-transaction handle and receipt polling.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use blockvote_provider::{methods, Provider};
use blockvote_types::TxHash;

use crate::error::ChainError;

/// Receipt status as reported by the wallet agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Pending,
    Success,
    Reverted,
}

/// A transaction receipt.
#[derive(Clone, Debug, Deserialize)]
pub struct Receipt {
    pub status: ReceiptStatus,
    #[serde(default)]
    pub detail: Option<String>,
}

/// A submitted but not yet confirmed transaction.
///
/// A submitted transaction cannot be withdrawn; the only options are to
/// await its outcome or drop the handle and ignore it.
pub struct PendingTransaction {
    provider: Arc<dyn Provider>,
    hash: TxHash,
    poll_interval: Duration,
}

impl std::fmt::Debug for PendingTransaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingTransaction")
            .field("hash", &self.hash)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

impl PendingTransaction {
    pub fn new(provider: Arc<dyn Provider>, hash: TxHash, poll_interval: Duration) -> Self {
        Self {
            provider,
            hash,
            poll_interval,
        }
    }

    /// The transaction hash assigned by the agent.
    pub fn hash(&self) -> &TxHash {
        &self.hash
    }

    /// Poll until the transaction is confirmed.
    ///
    /// Returns the hash on success and [`ChainError::Reverted`] if the
    /// transaction was mined but reverted. No timeout: confirmation
    /// latency is owned by the underlying network.
    pub async fn wait(self) -> Result<TxHash, ChainError> {
        loop {
            let result = self
                .provider
                .request(
                    methods::TRANSACTION_RECEIPT,
                    json!({ "hash": self.hash }),
                )
                .await?;

            let receipt: Receipt = serde_json::from_value(result)
                .map_err(|e| ChainError::Decode(format!("invalid receipt: {e}")))?;

            match receipt.status {
                ReceiptStatus::Success => return Ok(self.hash),
                ReceiptStatus::Reverted => {
                    return Err(ChainError::Reverted(
                        receipt
                            .detail
                            .unwrap_or_else(|| "transaction reverted".to_string()),
                    ))
                }
                ReceiptStatus::Pending => tokio::time::sleep(self.poll_interval).await,
            }
        }
    }
}
