//! Provider error types.

use thiserror::Error;

/// JSON-RPC error code the wallet agent uses when the user declines a
/// request (connection or transaction).
pub const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The user declined the request at the wallet agent.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The agent answered with a JSON-RPC error.
    #[error("agent error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The request never produced a well-formed JSON-RPC answer.
    #[error("transport error: {0}")]
    Transport(String),
}
