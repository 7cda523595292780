//! Session error types.

use thiserror::Error;

use blockvote_provider::ProviderError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// No wallet agent is configured; there is nothing to connect to.
    #[error("no wallet agent configured")]
    ProviderMissing,

    /// The user declined the connection request.
    #[error("connection rejected: {0}")]
    Rejected(String),

    /// The agent or the network failed.
    #[error("{0}")]
    Chain(String),
}

impl From<ProviderError> for SessionError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::Rejected(message) => SessionError::Rejected(message),
            ProviderError::Rpc { message, .. } => SessionError::Chain(message),
            ProviderError::Transport(message) => SessionError::Chain(message),
        }
    }
}
