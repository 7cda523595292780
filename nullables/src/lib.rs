//! Nullable infrastructure for deterministic testing.
//!
//! The only external collaborator this client has is the wallet agent, so
//! the one nullable provided here is [`NullProvider`]: a scriptable
//! in-memory agent that
//! - records every request for assertions,
//! - replays configured responses (single, sequenced, or failing),
//! - lets tests push account/chain change events,
//! - never touches the network.
//!
//! Usage: swap the real `HttpProvider` for a `NullProvider` in tests.

pub mod provider;

pub use provider::NullProvider;
