//! Address parsing errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("address must start with 0x")]
    MissingPrefix,

    #[error("address must be 40 hex characters, got {0}")]
    BadLength(usize),

    #[error("address contains non-hex characters")]
    BadHex,
}
