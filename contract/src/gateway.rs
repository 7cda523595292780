//! The election contract gateway.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use blockvote_provider::{methods, Provider};
use blockvote_types::{Address, Candidate, TxHash, Winner};

use crate::error::ChainError;
use crate::pending::PendingTransaction;

/// ABI method names on the deployed contract.
pub mod abi {
    pub const ELECTION_STARTED: &str = "electionStarted";
    pub const ELECTION_ENDED: &str = "electionEnded";
    pub const GET_ALL_CANDIDATES: &str = "getAllCandidates";
    pub const HAS_VOTED: &str = "hasVoted";
    pub const GET_WINNER: &str = "getWinner";
    pub const ADD_CANDIDATE: &str = "addCandidate";
    pub const START_ELECTION: &str = "startElection";
    pub const END_ELECTION: &str = "endElection";
    pub const VOTE: &str = "vote";
}

const DEFAULT_RECEIPT_POLL: Duration = Duration::from_secs(2);

/// A signer-bound handle to the deployed election contract.
///
/// Reads go through the agent's `call` method; writes through
/// `send_transaction`, signed as `sender`. The handle is cheap to clone
/// and is rebuilt whenever the active account changes.
#[derive(Clone, Debug)]
pub struct ElectionContract {
    provider: Arc<dyn Provider>,
    address: Address,
    sender: Address,
    receipt_poll: Duration,
}

impl ElectionContract {
    pub fn new(provider: Arc<dyn Provider>, address: Address, sender: Address) -> Self {
        Self {
            provider,
            address,
            sender,
            receipt_poll: DEFAULT_RECEIPT_POLL,
        }
    }

    /// Override the receipt polling interval (tests use a short one).
    pub fn with_receipt_poll(mut self, interval: Duration) -> Self {
        self.receipt_poll = interval;
        self
    }

    /// The account this handle signs writes as.
    pub fn sender(&self) -> &Address {
        &self.sender
    }

    // ── Reads ───────────────────────────────────────────────────────────

    pub async fn election_started(&self) -> Result<bool, ChainError> {
        self.call(abi::ELECTION_STARTED, json!([])).await
    }

    pub async fn election_ended(&self) -> Result<bool, ChainError> {
        self.call(abi::ELECTION_ENDED, json!([])).await
    }

    pub async fn get_all_candidates(&self) -> Result<Vec<Candidate>, ChainError> {
        self.call(abi::GET_ALL_CANDIDATES, json!([])).await
    }

    pub async fn has_voted(&self, account: &Address) -> Result<bool, ChainError> {
        self.call(abi::HAS_VOTED, json!([account])).await
    }

    /// The winner tuple. Only meaningful once the election has ended.
    pub async fn get_winner(&self) -> Result<Winner, ChainError> {
        self.call(abi::GET_WINNER, json!([])).await
    }

    // ── Writes ──────────────────────────────────────────────────────────

    pub async fn add_candidate(&self, name: &str) -> Result<PendingTransaction, ChainError> {
        self.send(abi::ADD_CANDIDATE, json!([name])).await
    }

    pub async fn start_election(&self) -> Result<PendingTransaction, ChainError> {
        self.send(abi::START_ELECTION, json!([])).await
    }

    pub async fn end_election(&self) -> Result<PendingTransaction, ChainError> {
        self.send(abi::END_ELECTION, json!([])).await
    }

    pub async fn vote(&self, candidate_id: u64) -> Result<PendingTransaction, ChainError> {
        self.send(abi::VOTE, json!([candidate_id])).await
    }

    // ── Plumbing ────────────────────────────────────────────────────────

    async fn call<T: DeserializeOwned>(&self, method: &str, args: Value) -> Result<T, ChainError> {
        let result = self
            .provider
            .request(
                methods::CALL,
                json!({ "to": self.address, "method": method, "args": args }),
            )
            .await?;

        serde_json::from_value(result)
            .map_err(|e| ChainError::Decode(format!("invalid {method} response: {e}")))
    }

    async fn send(&self, method: &str, args: Value) -> Result<PendingTransaction, ChainError> {
        let result = self
            .provider
            .request(
                methods::SEND_TRANSACTION,
                json!({
                    "from": self.sender,
                    "to": self.address,
                    "method": method,
                    "args": args,
                }),
            )
            .await?;

        let hash: TxHash = serde_json::from_value(result)
            .map_err(|e| ChainError::Decode(format!("invalid {method} tx hash: {e}")))?;

        Ok(PendingTransaction::new(
            Arc::clone(&self.provider),
            hash,
            self.receipt_poll,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockvote_nullables::NullProvider;

    const CONTRACT: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";
    const VOTER: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    fn contract(provider: Arc<NullProvider>) -> ElectionContract {
        ElectionContract::new(
            provider,
            Address::parse(CONTRACT).unwrap(),
            Address::parse(VOTER).unwrap(),
        )
        .with_receipt_poll(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn candidate_list_decodes() {
        let provider = Arc::new(NullProvider::new());
        provider.respond(
            methods::CALL,
            json!([
                { "id": 0, "name": "Alice", "voteCount": 4 },
                { "id": 1, "name": "Bob", "voteCount": 2 },
            ]),
        );

        let candidates = contract(provider).get_all_candidates().await.unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].name, "Bob");
        assert_eq!(candidates[1].vote_count, 2);
    }

    #[tokio::test]
    async fn reads_are_addressed_to_the_contract() {
        let provider = Arc::new(NullProvider::new());
        provider.respond(methods::CALL, json!(true));

        contract(Arc::clone(&provider))
            .election_started()
            .await
            .unwrap();

        let (method, params) = provider.requests().pop().unwrap();
        assert_eq!(method, methods::CALL);
        assert_eq!(params["to"], CONTRACT);
        assert_eq!(params["method"], abi::ELECTION_STARTED);
    }

    #[tokio::test]
    async fn has_voted_passes_the_account() {
        let provider = Arc::new(NullProvider::new());
        provider.respond(methods::CALL, json!(false));

        let gateway = contract(Arc::clone(&provider));
        let voted = gateway.has_voted(gateway.sender()).await.unwrap();
        assert!(!voted);

        let (_, params) = provider.requests().pop().unwrap();
        assert_eq!(params["args"], json!([VOTER]));
    }

    #[tokio::test]
    async fn vote_submits_signed_write_and_confirms() {
        let provider = Arc::new(NullProvider::new());
        provider.respond(methods::SEND_TRANSACTION, json!("0xabc123"));
        provider.respond(
            methods::TRANSACTION_RECEIPT,
            json!({ "status": "success" }),
        );

        let pending = contract(Arc::clone(&provider)).vote(1).await.unwrap();
        assert_eq!(pending.hash().as_str(), "0xabc123");
        pending.wait().await.unwrap();

        let (method, params) = provider.requests()[0].clone();
        assert_eq!(method, methods::SEND_TRANSACTION);
        assert_eq!(params["from"], VOTER);
        assert_eq!(params["method"], abi::VOTE);
        assert_eq!(params["args"], json!([1]));
    }

    #[tokio::test]
    async fn read_failure_passes_message_through() {
        let provider = Arc::new(NullProvider::new());
        provider.fail(methods::CALL, -32000, "execution reverted: No election");

        let err = contract(provider).election_ended().await.unwrap_err();
        assert!(matches!(
            err,
            ChainError::Rpc(msg) if msg == "execution reverted: No election"
        ));
    }

    #[tokio::test]
    async fn declined_signature_is_a_rejection() {
        let provider = Arc::new(NullProvider::new());
        provider.reject(methods::SEND_TRANSACTION, "user denied transaction");

        let err = contract(provider).start_election().await.unwrap_err();
        assert!(matches!(err, ChainError::Rejected(_)));
    }
}
