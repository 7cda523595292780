//! The atomically-swapped election snapshot.

use blockvote_types::{Candidate, ElectionPhase, Winner};

/// One consistent picture of on-chain election state.
///
/// Owned by the view-state and replaced wholesale on every successful
/// refresh; renderers never observe a partially-updated snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub phase: ElectionPhase,
    pub candidates: Vec<Candidate>,
    /// Whether the connected account has voted. Always false while
    /// disconnected; never cached across account switches.
    pub has_voted: bool,
    /// The reported winner tuple; present only once the phase is Ended.
    pub winner: Option<Winner>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            phase: ElectionPhase::NotStarted,
            candidates: Vec::new(),
            has_voted: false,
            winner: None,
        }
    }
}
