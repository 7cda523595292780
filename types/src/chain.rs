//! Chain identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which chain the wallet agent is currently connected to.
///
/// Contract addresses and bytecode may differ per chain, so a chain change
/// invalidates everything the client has read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
