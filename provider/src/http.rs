//! JSON-RPC-over-HTTP transport to the wallet agent.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use blockvote_types::{Address, ChainId};

use crate::error::{ProviderError, USER_REJECTED_CODE};
use crate::event::ProviderEvent;
use crate::provider::{methods, Provider};

/// HTTP client for a wallet agent speaking JSON-RPC 2.0.
///
/// Wraps `reqwest::Client` with the agent's base URL and an id counter.
/// Change events are synthesized by [`HttpProvider::spawn_watcher`], which
/// polls the agent and diffs the answers.
#[derive(Debug)]
pub struct HttpProvider {
    http: reqwest::Client,
    agent_url: String,
    next_id: AtomicU64,
    events: broadcast::Sender<ProviderEvent>,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

impl HttpProvider {
    /// Create a provider targeting the given base URL
    /// (e.g. `http://127.0.0.1:8645`).
    ///
    /// No request timeout is configured: a hung agent call hangs the
    /// affordance that issued it, never the UI loop.
    pub fn new(agent_url: impl Into<String>) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ProviderError::Transport(format!("failed to create HTTP client: {e}")))?;
        let (events, _) = broadcast::channel(32);
        Ok(Self {
            http,
            agent_url: agent_url.into(),
            next_id: AtomicU64::new(1),
            events,
        })
    }

    /// The configured agent URL.
    pub fn agent_url(&self) -> &str {
        &self.agent_url
    }

    /// Poll the agent for account and chain changes, broadcasting a diff
    /// whenever an answer differs from the last one seen.
    ///
    /// The first answer only establishes the baseline; no event fires for
    /// it. Poll failures are logged and skipped. The task runs until the
    /// returned handle is aborted.
    pub fn spawn_watcher(self: Arc<Self>, period: Duration) -> JoinHandle<()> {
        let provider = self;
        tokio::spawn(async move {
            let mut known_accounts: Option<Vec<Address>> = None;
            let mut known_chain: Option<ChainId> = None;
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                match provider.poll_accounts().await {
                    Ok(accounts) => {
                        if known_accounts.as_ref() != Some(&accounts) {
                            if known_accounts.is_some() {
                                let _ = provider
                                    .events
                                    .send(ProviderEvent::AccountsChanged(accounts.clone()));
                            }
                            known_accounts = Some(accounts);
                        }
                    }
                    Err(e) => tracing::debug!("account poll failed: {e}"),
                }

                match provider.poll_chain_id().await {
                    Ok(chain) => {
                        if known_chain != Some(chain) {
                            if known_chain.is_some() {
                                let _ = provider.events.send(ProviderEvent::ChainChanged(chain));
                            }
                            known_chain = Some(chain);
                        }
                    }
                    Err(e) => tracing::debug!("chain poll failed: {e}"),
                }
            }
        })
    }

    async fn poll_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        let result = self.request(methods::ACCOUNTS, json!({})).await?;
        serde_json::from_value(result)
            .map_err(|e| ProviderError::Transport(format!("invalid accounts response: {e}")))
    }

    async fn poll_chain_id(&self) -> Result<ChainId, ProviderError> {
        let result = self.request(methods::CHAIN_ID, json!({})).await?;
        serde_json::from_value(result)
            .map_err(|e| ProviderError::Transport(format!("invalid chain_id response: {e}")))
    }
}

#[async_trait]
impl Provider for HttpProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(&self.agent_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ProviderError::Transport(format!(
                "agent returned HTTP {}",
                response.status()
            )));
        }

        let parsed: RpcResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(format!("invalid JSON response: {e}")))?;

        decode_response(parsed)
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
        self.events.subscribe()
    }
}

fn decode_response(response: RpcResponse) -> Result<Value, ProviderError> {
    if let Some(err) = response.error {
        if err.code == USER_REJECTED_CODE {
            return Err(ProviderError::Rejected(err.message));
        }
        return Err(ProviderError::Rpc {
            code: err.code,
            message: err.message,
        });
    }

    response
        .result
        .ok_or_else(|| ProviderError::Transport("response carried neither result nor error".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: Value) -> RpcResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn decodes_result_field() {
        let out = decode_response(response(json!({ "result": [1, 2, 3] }))).unwrap();
        assert_eq!(out, json!([1, 2, 3]));
    }

    #[test]
    fn code_4001_maps_to_rejected() {
        let err = decode_response(response(json!({
            "error": { "code": 4001, "message": "user denied account access" }
        })))
        .unwrap_err();
        assert!(matches!(err, ProviderError::Rejected(msg) if msg.contains("denied")));
    }

    #[test]
    fn other_codes_map_to_rpc_error() {
        let err = decode_response(response(json!({
            "error": { "code": -32000, "message": "insufficient gas" }
        })))
        .unwrap_err();
        match err {
            ProviderError::Rpc { code, message } => {
                assert_eq!(code, -32000);
                assert_eq!(message, "insufficient gas");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_response_is_a_transport_error() {
        let err = decode_response(response(json!({}))).unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }

    #[test]
    fn provider_creation() {
        let provider = HttpProvider::new("http://127.0.0.1:8645").unwrap();
        assert_eq!(provider.agent_url(), "http://127.0.0.1:8645");
    }
}
