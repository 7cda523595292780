//! Provider-level change notifications.

use blockvote_types::{Address, ChainId};

/// A change observed at the wallet agent.
///
/// The session subscribes for its lifetime: an account change updates (or
/// clears) the active account; a chain change invalidates everything read
/// so far and forces a full reload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderEvent {
    /// The unlocked account list changed. Empty means locked/disconnected.
    AccountsChanged(Vec<Address>),
    /// The agent switched chains.
    ChainChanged(ChainId),
}
