//! Fundamental types for the BlockVote election client.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account addresses, chain identifiers, transaction hashes,
//! candidates, the derived election phase, and the winner tuple.

pub mod address;
pub mod candidate;
pub mod chain;
pub mod error;
pub mod hash;
pub mod phase;

pub use address::Address;
pub use candidate::{Candidate, Winner};
pub use chain::ChainId;
pub use error::AddressError;
pub use hash::TxHash;
pub use phase::ElectionPhase;
