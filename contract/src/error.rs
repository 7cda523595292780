//! Gateway error types.

use thiserror::Error;

use blockvote_provider::ProviderError;

/// Any failed contract read or write.
///
/// Messages originate at the wallet agent or the chain and are passed
/// through uninterpreted.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The user declined to sign the transaction.
    #[error("rejected by user: {0}")]
    Rejected(String),

    /// RPC or network fault, including execution errors on reads.
    #[error("{0}")]
    Rpc(String),

    /// The transaction was mined but reverted.
    #[error("transaction reverted: {0}")]
    Reverted(String),

    /// The agent answered with something the gateway cannot decode.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl From<ProviderError> for ChainError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::Rejected(message) => ChainError::Rejected(message),
            ProviderError::Rpc { message, .. } => ChainError::Rpc(message),
            ProviderError::Transport(message) => ChainError::Rpc(message),
        }
    }
}
