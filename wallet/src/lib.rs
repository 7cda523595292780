//! Wallet session management for the BlockVote client.
//!
//! A [`WalletSession`] owns the connection lifecycle to the wallet agent:
//! it requests account access, holds the active account and the
//! signer-bound contract handle, and reacts to provider-level account and
//! chain changes. Disconnecting is a local reset only; the agent itself
//! cannot be disconnected programmatically.

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::{establish_session, Connection, SessionEffect, WalletSession};
