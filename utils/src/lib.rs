//! Shared utilities for the BlockVote client.

pub mod fmt;
pub mod logging;

pub use fmt::short_address;
pub use logging::init_tracing;
