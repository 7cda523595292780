//! Candidate and winner records as reported by the election contract.

use serde::{Deserialize, Serialize};

/// A single ballot entry.
///
/// Created only by the contract in response to an admin write; immutable
/// from the client's perspective except for `vote_count`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u64,
    pub name: String,
    pub vote_count: u64,
}

/// The winner tuple reported by the contract once the election has ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    pub name: String,
    pub vote_count: u64,
}

impl Candidate {
    /// Whether this candidate matches the reported winner tuple.
    ///
    /// Matching is by (name, vote_count) equality, not by id: the contract's
    /// winner accessor does not report an id. Tied candidates with the same
    /// name and count all match.
    pub fn matches_winner(&self, winner: &Winner) -> bool {
        self.name == winner.name && self.vote_count == winner.vote_count
    }
}
