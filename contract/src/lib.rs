//! Typed gateway to the deployed election contract.
//!
//! [`ElectionContract`] wraps the contract's five read and four write
//! operations behind typed async calls. Every write returns a
//! [`PendingTransaction`]; the effect is durable only once `wait()` has
//! confirmed it. The gateway does not interpret revert reasons; failure
//! messages pass through unchanged.

pub mod error;
pub mod gateway;
pub mod pending;

pub use error::ChainError;
pub use gateway::{abi, ElectionContract};
pub use pending::{PendingTransaction, Receipt, ReceiptStatus};
