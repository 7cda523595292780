//! Wallet-agent boundary for the BlockVote client.
//!
//! The wallet agent is a separate process holding the user's keys and a node
//! connection; it owns ABI encoding, transaction signing, and confirmation
//! semantics. This crate defines the [`Provider`] trait the rest of the
//! client programs against, the concrete JSON-RPC-over-HTTP transport
//! ([`HttpProvider`]), and the account/chain change events the session
//! subscribes to.

pub mod error;
pub mod event;
pub mod http;
pub mod provider;

pub use error::ProviderError;
pub use event::ProviderEvent;
pub use http::HttpProvider;
pub use provider::{methods, Provider};
