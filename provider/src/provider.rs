//! The provider trait every transport implements.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::error::ProviderError;
use crate::event::ProviderEvent;

/// JSON-RPC method names understood by the wallet agent.
pub mod methods {
    /// Prompt the user to unlock accounts for this client.
    pub const REQUEST_ACCOUNTS: &str = "request_accounts";
    /// List already-unlocked accounts without prompting.
    pub const ACCOUNTS: &str = "accounts";
    /// The chain the agent is connected to.
    pub const CHAIN_ID: &str = "chain_id";
    /// Read-only contract call: `{to, method, args}`.
    pub const CALL: &str = "call";
    /// Signed contract write: `{from, to, method, args}` → tx hash.
    pub const SEND_TRANSACTION: &str = "send_transaction";
    /// Receipt lookup: `{hash}` → `{status, detail?}`.
    pub const TRANSACTION_RECEIPT: &str = "transaction_receipt";
}

/// A connection to a wallet agent.
///
/// One `request` surface for everything (account access, contract reads,
/// signed writes, receipt lookups) plus a broadcast stream of change
/// events. Implementations must be shareable across tasks.
#[async_trait]
pub trait Provider: Send + Sync + std::fmt::Debug {
    /// Send a request and return the decoded `result` value.
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;

    /// Subscribe to account/chain change events.
    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent>;
}
