//! Election phase derived from the contract's two status flags.

use serde::{Deserialize, Serialize};

/// The election lifecycle: Not Started → Active → Ended, monotonic.
///
/// Derived from the `electionStarted` / `electionEnded` flags on every
/// refresh; the contract owns the actual transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectionPhase {
    /// Candidates may be added; voting has not opened.
    NotStarted,
    /// Voting is open.
    Active,
    /// Voting is closed; a winner is reported.
    Ended,
}

impl ElectionPhase {
    /// Derive the phase from the two contract flags.
    ///
    /// `ended` dominates: the contract guarantees ended ⇒ started, but the
    /// client does not assume it. An inconsistent `(started=false,
    /// ended=true)` read is tolerated by treating it as Ended.
    pub fn from_flags(started: bool, ended: bool) -> Self {
        if ended {
            Self::Ended
        } else if started {
            Self::Active
        } else {
            Self::NotStarted
        }
    }

    /// Whether votes can currently be cast.
    pub fn voting_open(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Whether the winner is authoritative.
    pub fn has_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Ordinal used to check forward-only movement across refreshes.
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::NotStarted => 0,
            Self::Active => 1,
            Self::Ended => 2,
        }
    }
}
