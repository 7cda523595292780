//! The wallet session: account lifecycle and the signer-bound contract handle.

use std::sync::Arc;

use serde_json::json;

use blockvote_contract::ElectionContract;
use blockvote_provider::{methods, Provider, ProviderEvent};
use blockvote_types::Address;

use crate::error::SessionError;

/// The result of a successful connection: the active account and a
/// contract handle signing as it.
#[derive(Debug)]
pub struct Connection {
    pub account: Address,
    pub contract: ElectionContract,
}

/// What the caller must do after the session processed a provider event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    /// Nothing further.
    Noop,
    /// The active account changed; re-derive account-scoped state.
    AccountSwitched,
    /// The account list emptied; the session disconnected itself.
    Disconnected,
    /// The chain changed; everything read so far is invalid. Tear down
    /// and rebuild.
    ReloadRequired,
}

/// Request account access from the agent and bind a contract handle.
///
/// Fails with [`SessionError::Rejected`] when the user declines or the
/// agent returns no accounts; the caller's session state is untouched
/// either way. Runs as a free function so it can be spawned off the UI
/// flow while the session merely shows "connecting".
pub async fn establish_session(
    provider: Arc<dyn Provider>,
    contract_address: Address,
) -> Result<Connection, SessionError> {
    let result = provider
        .request(methods::REQUEST_ACCOUNTS, json!({}))
        .await?;

    let accounts: Vec<Address> = serde_json::from_value(result)
        .map_err(|e| SessionError::Chain(format!("invalid accounts response: {e}")))?;

    let account = accounts
        .into_iter()
        .next()
        .ok_or_else(|| SessionError::Rejected("agent returned no accounts".to_string()))?;

    let contract = ElectionContract::new(Arc::clone(&provider), contract_address, account.clone());

    Ok(Connection { account, contract })
}

/// Connection state to the wallet agent.
pub struct WalletSession {
    provider: Option<Arc<dyn Provider>>,
    contract_address: Address,
    account: Option<Address>,
    contract: Option<ElectionContract>,
    connecting: bool,
}

impl WalletSession {
    /// `provider` is `None` when no wallet agent is configured; every
    /// connect attempt will then fail with `ProviderMissing`.
    pub fn new(provider: Option<Arc<dyn Provider>>, contract_address: Address) -> Self {
        Self {
            provider,
            contract_address,
            account: None,
            contract: None,
            connecting: false,
        }
    }

    pub fn provider(&self) -> Option<&Arc<dyn Provider>> {
        self.provider.as_ref()
    }

    pub fn account(&self) -> Option<&Address> {
        self.account.as_ref()
    }

    pub fn contract(&self) -> Option<&ElectionContract> {
        self.contract.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    /// Begin a connect attempt.
    ///
    /// Returns the provider and contract address for
    /// [`establish_session`]; the session shows as connecting until
    /// [`WalletSession::attach`] or [`WalletSession::connect_failed`].
    pub fn start_connecting(&mut self) -> Result<(Arc<dyn Provider>, Address), SessionError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(SessionError::ProviderMissing)?;
        self.connecting = true;
        Ok((Arc::clone(provider), self.contract_address.clone()))
    }

    /// Store an established connection.
    pub fn attach(&mut self, connection: Connection) {
        self.account = Some(connection.account);
        self.contract = Some(connection.contract);
        self.connecting = false;
    }

    /// A connect attempt failed; stay disconnected.
    pub fn connect_failed(&mut self) {
        self.connecting = false;
    }

    /// Clear local session state. The agent keeps its own unlock state;
    /// this only resets what the client shows.
    pub fn disconnect(&mut self) {
        self.account = None;
        self.contract = None;
        self.connecting = false;
    }

    /// Process a provider-level change notification.
    pub fn handle_event(&mut self, event: ProviderEvent) -> SessionEffect {
        match event {
            ProviderEvent::AccountsChanged(accounts) => match accounts.into_iter().next() {
                None => {
                    if self.is_connected() {
                        tracing::info!("account list emptied; disconnecting");
                        self.disconnect();
                        SessionEffect::Disconnected
                    } else {
                        SessionEffect::Noop
                    }
                }
                Some(account) => {
                    if !self.is_connected() || self.account.as_ref() == Some(&account) {
                        return SessionEffect::Noop;
                    }
                    tracing::info!(account = %account, "active account switched");
                    let provider = self
                        .provider
                        .as_ref()
                        .expect("connected session always has a provider");
                    self.contract = Some(ElectionContract::new(
                        Arc::clone(provider),
                        self.contract_address.clone(),
                        account.clone(),
                    ));
                    self.account = Some(account);
                    SessionEffect::AccountSwitched
                }
            },
            ProviderEvent::ChainChanged(chain) => {
                tracing::info!(%chain, "chain changed; full reload required");
                SessionEffect::ReloadRequired
            }
        }
    }
}
