//! Nullable provider — a scriptable wallet agent that never leaves memory.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::broadcast;

use blockvote_provider::{ProviderError, ProviderEvent, Provider};

/// A scripted answer for one request.
#[derive(Clone, Debug)]
enum Outcome {
    Ok(Value),
    Rejected(String),
    Rpc { code: i64, message: String },
    Transport(String),
}

impl Outcome {
    fn into_result(self) -> Result<Value, ProviderError> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Rejected(message) => Err(ProviderError::Rejected(message)),
            Outcome::Rpc { code, message } => Err(ProviderError::Rpc { code, message }),
            Outcome::Transport(message) => Err(ProviderError::Transport(message)),
        }
    }
}

/// A test provider that records requests and replays scripted responses.
///
/// Responses are configured per method. Contract traffic multiplexes
/// through the agent's `call`/`send_transaction` methods, so those can be
/// scripted per contract method with a composite key like
/// `call:electionStarted`; the plain method key acts as a fallback.
///
/// A sequence drains front-to-back and then repeats its final entry, so a
/// receipt script of `[pending, success]` keeps answering `success` once
/// drained.
#[derive(Debug)]
pub struct NullProvider {
    script: Mutex<HashMap<String, VecDeque<Outcome>>>,
    requests: Mutex<Vec<(String, Value)>>,
    events: broadcast::Sender<ProviderEvent>,
}

impl NullProvider {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(32);
        Self {
            script: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            events,
        }
    }

    /// Script a sticky successful response for `method`.
    pub fn respond(&self, method: &str, value: Value) {
        self.set(method, vec![Outcome::Ok(value)]);
    }

    /// Script a sequence of successful responses; the last one repeats.
    pub fn respond_seq(&self, method: &str, values: Vec<Value>) {
        self.set(method, values.into_iter().map(Outcome::Ok).collect());
    }

    /// Script a user rejection (JSON-RPC code 4001) for `method`.
    pub fn reject(&self, method: &str, message: &str) {
        self.set(method, vec![Outcome::Rejected(message.to_string())]);
    }

    /// Script a JSON-RPC error for `method`.
    pub fn fail(&self, method: &str, code: i64, message: &str) {
        self.set(
            method,
            vec![Outcome::Rpc {
                code,
                message: message.to_string(),
            }],
        );
    }

    /// Script a transport failure for `method`.
    pub fn break_transport(&self, method: &str, message: &str) {
        self.set(method, vec![Outcome::Transport(message.to_string())]);
    }

    /// Push a change event to all subscribers.
    pub fn push_event(&self, event: ProviderEvent) {
        let _ = self.events.send(event);
    }

    /// All requests made so far, in order.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    /// How many times `method` has been requested.
    pub fn request_count(&self, method: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == method)
            .count()
    }

    fn set(&self, method: &str, outcomes: Vec<Outcome>) {
        self.script
            .lock()
            .unwrap()
            .insert(method.to_string(), outcomes.into());
    }
}

impl Default for NullProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for NullProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let composite = params
            .get("method")
            .and_then(|m| m.as_str())
            .map(|m| format!("{method}:{m}"));

        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), params));

        let mut script = self.script.lock().unwrap();
        let key = match composite {
            Some(ref c) if script.contains_key(c) => c.as_str(),
            _ => method,
        };
        let queue = script.get_mut(key).ok_or_else(|| {
            ProviderError::Transport(format!("no scripted response for {key}"))
        })?;

        let outcome = if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue
                .front()
                .cloned()
                .ok_or_else(|| ProviderError::Transport(format!("script for {method} is empty")))?
        };
        outcome.into_result()
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn replays_sticky_response() {
        let provider = NullProvider::new();
        provider.respond("chain_id", json!(1));

        for _ in 0..3 {
            let value = provider.request("chain_id", json!({})).await.unwrap();
            assert_eq!(value, json!(1));
        }
        assert_eq!(provider.request_count("chain_id"), 3);
    }

    #[tokio::test]
    async fn sequence_drains_then_repeats_last() {
        let provider = NullProvider::new();
        provider.respond_seq(
            "transaction_receipt",
            vec![json!({ "status": "pending" }), json!({ "status": "success" })],
        );

        let first = provider.request("transaction_receipt", json!({})).await.unwrap();
        assert_eq!(first["status"], "pending");
        for _ in 0..2 {
            let next = provider.request("transaction_receipt", json!({})).await.unwrap();
            assert_eq!(next["status"], "success");
        }
    }

    #[tokio::test]
    async fn composite_key_wins_over_plain_fallback() {
        let provider = NullProvider::new();
        provider.respond("call", json!(false));
        provider.respond("call:electionStarted", json!(true));

        let started = provider
            .request("call", json!({ "to": "0x0", "method": "electionStarted", "args": [] }))
            .await
            .unwrap();
        assert_eq!(started, json!(true));

        let other = provider
            .request("call", json!({ "to": "0x0", "method": "electionEnded", "args": [] }))
            .await
            .unwrap();
        assert_eq!(other, json!(false));
    }

    #[tokio::test]
    async fn unscripted_method_is_a_transport_error() {
        let provider = NullProvider::new();
        let err = provider.request("accounts", json!({})).await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }

    #[tokio::test]
    async fn events_reach_subscribers() {
        let provider = NullProvider::new();
        let mut rx = provider.subscribe();
        provider.push_event(ProviderEvent::ChainChanged(blockvote_types::ChainId(5)));
        let event = rx.recv().await.unwrap();
        assert_eq!(event, ProviderEvent::ChainChanged(blockvote_types::ChainId(5)));
    }
}
