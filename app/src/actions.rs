//! User and admin write actions.
//!
//! Actions run off the UI flow: the front-end asks [`crate::App`] to
//! validate and hand out a `(contract, action)` pair, spawns
//! [`run_action`], and feeds the [`ActionOutcome`] back into the app once
//! the transaction is confirmed or has failed.

use blockvote_contract::{ChainError, ElectionContract, PendingTransaction};

/// A contract write requested from the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Vote { candidate_id: u64 },
    AddCandidate { name: String },
    StartElection,
    EndElection,
}

/// The result of submitting and confirming one action.
#[derive(Debug)]
pub struct ActionOutcome {
    pub action: Action,
    pub result: Result<(), ChainError>,
}

/// Submit the action and await its confirmation.
///
/// A submitted transaction cannot be cancelled; this future either
/// resolves with the confirmed outcome or hangs as long as the agent does.
pub async fn run_action(contract: ElectionContract, action: Action) -> ActionOutcome {
    let pending = match &action {
        Action::Vote { candidate_id } => contract.vote(*candidate_id).await,
        Action::AddCandidate { name } => contract.add_candidate(name).await,
        Action::StartElection => contract.start_election().await,
        Action::EndElection => contract.end_election().await,
    };

    let result = confirm(pending).await;
    ActionOutcome { action, result }
}

async fn confirm(pending: Result<PendingTransaction, ChainError>) -> Result<(), ChainError> {
    pending?.wait().await?;
    Ok(())
}
