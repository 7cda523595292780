//! The application orchestrator: session + view-state + notices.

use std::sync::Arc;

use blockvote_contract::ElectionContract;
use blockvote_provider::{Provider, ProviderEvent};
use blockvote_types::Address;
use blockvote_utils::short_address;
use blockvote_wallet::{Connection, SessionEffect, SessionError, WalletSession};

use crate::actions::{Action, ActionOutcome};
use crate::notify::Notifier;
use crate::snapshot::Snapshot;
use crate::ui::{self, Page};
use crate::view::ElectionView;

/// Owns all mutable client state. One instance per chain connection; a
/// chain change discards the instance and builds a fresh one.
pub struct App {
    session: WalletSession,
    view: ElectionView,
    notices: Notifier,
    admin_address: Address,
    action_in_flight: bool,
}

impl App {
    pub fn new(
        provider: Option<Arc<dyn Provider>>,
        contract_address: Address,
        admin_address: Address,
    ) -> Self {
        Self {
            session: WalletSession::new(provider, contract_address),
            view: ElectionView::new(),
            notices: Notifier::new(),
            admin_address,
            action_in_flight: false,
        }
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.view.snapshot()
    }

    pub fn notices(&self) -> &Notifier {
        &self.notices
    }

    pub fn action_in_flight(&self) -> bool {
        self.action_in_flight
    }

    /// Advisory only: gates which controls are rendered. The contract
    /// enforces actual authorization.
    pub fn is_admin(&self) -> bool {
        self.session.account() == Some(&self.admin_address)
    }

    // ── Connect / disconnect ────────────────────────────────────────────

    /// Validate a connect request and hand back what the caller needs to
    /// spawn [`blockvote_wallet::establish_session`]. `None` means the
    /// request was refused (already connected/connecting, or no agent
    /// configured; the latter raises its notice here).
    pub fn begin_connect(&mut self) -> Option<(Arc<dyn Provider>, Address)> {
        if self.session.is_connected() || self.session.is_connecting() {
            return None;
        }
        match self.session.start_connecting() {
            Ok(request) => Some(request),
            Err(SessionError::ProviderMissing) => {
                self.notices.error(
                    "Wallet Agent Not Found",
                    "Configure a wallet agent endpoint to use this application",
                );
                None
            }
            Err(e) => {
                self.notices.error("Connection Failed", e.to_string());
                None
            }
        }
    }

    /// Feed the result of `establish_session` back in.
    pub async fn finish_connect(&mut self, result: Result<Connection, SessionError>) {
        match result {
            Ok(connection) => {
                let short = short_address(&connection.account);
                self.session.attach(connection);
                self.notices
                    .info("Wallet Connected", format!("Connected to {short}"));
                self.refresh().await;
            }
            Err(e) => {
                tracing::warn!("wallet connect failed: {e}");
                self.session.connect_failed();
                self.notices.error("Connection Failed", e.to_string());
            }
        }
    }

    pub fn disconnect(&mut self) {
        self.session.disconnect();
        self.view.reset();
        self.notices
            .info("Wallet Disconnected", "Your wallet has been disconnected");
    }

    // ── View-state ──────────────────────────────────────────────────────

    /// Best-effort snapshot rebuild. A failure keeps the previous
    /// snapshot and is only logged; the next trigger will try again.
    pub async fn refresh(&mut self) {
        let Some(contract) = self.session.contract() else {
            return;
        };
        if let Err(e) = self.view.refresh(contract, self.session.account()).await {
            tracing::warn!("refresh failed, keeping previous snapshot: {e}");
        }
    }

    // ── Actions ─────────────────────────────────────────────────────────

    /// Validate an action and hand back the pair to spawn
    /// [`crate::actions::run_action`] with. `None` means the action was
    /// refused (not connected, another action in flight, or invalid
    /// input, which raises its notice here).
    pub fn request_action(&mut self, action: Action) -> Option<(ElectionContract, Action)> {
        if self.action_in_flight {
            return None;
        }
        if let Action::AddCandidate { name } = &action {
            if name.trim().is_empty() {
                self.notices
                    .error("Invalid Input", "Please enter a candidate name");
                return None;
            }
        }
        let contract = self.session.contract()?.clone();
        self.action_in_flight = true;
        Some((contract, action))
    }

    /// Feed a completed action back in: raise the matching notice and,
    /// on success, refresh so the view reflects the confirmed write.
    pub async fn apply_action_outcome(&mut self, outcome: ActionOutcome) {
        self.action_in_flight = false;

        if let Err(e) = &outcome.result {
            tracing::warn!(action = ?outcome.action, "action failed: {e}");
        }

        match (&outcome.action, &outcome.result) {
            (Action::Vote { .. }, Ok(())) => self.notices.info(
                "Vote Submitted",
                "Your vote has been recorded on the blockchain",
            ),
            (Action::Vote { .. }, Err(e)) => self.notices.error("Vote Failed", e.to_string()),
            (Action::AddCandidate { name }, Ok(())) => self
                .notices
                .info("Success", format!("Candidate \"{name}\" added successfully")),
            (Action::StartElection, Ok(())) => {
                self.notices.info("Election Started", "Voting is now open")
            }
            (Action::EndElection, Ok(())) => {
                self.notices.info("Election Ended", "Voting is now closed")
            }
            (_, Err(e)) => self.notices.error("Transaction Failed", e.to_string()),
        }

        if outcome.result.is_ok() {
            self.refresh().await;
        }
    }

    // ── Provider events ─────────────────────────────────────────────────

    /// React to an account or chain change. `ReloadRequired` is returned
    /// to the caller, which must discard this `App` and build a fresh one.
    pub async fn handle_provider_event(&mut self, event: ProviderEvent) -> SessionEffect {
        let effect = self.session.handle_event(event);
        match effect {
            SessionEffect::AccountSwitched => {
                // The voter flag must never leak across accounts.
                self.view.reset();
                self.refresh().await;
            }
            SessionEffect::Disconnected => {
                self.view.reset();
                self.notices
                    .info("Wallet Disconnected", "Your wallet has been disconnected");
            }
            SessionEffect::Noop | SessionEffect::ReloadRequired => {}
        }
        effect
    }

    // ── Presentation ────────────────────────────────────────────────────

    /// Derive the full set of view-models for one frame.
    pub fn page(&self) -> Page {
        let snapshot = self.view.snapshot();
        let connected = self.session.is_connected();
        let is_admin = self.is_admin();
        let busy = self.action_in_flight;

        Page {
            connected,
            is_admin,
            wallet: ui::wallet_button(self.session.account(), self.session.is_connecting()),
            status: ui::status_badge(snapshot.phase),
            admin_panel: ui::admin_panel(snapshot.phase, is_admin, busy),
            admin_hint: ui::admin_hint(connected, is_admin, &self.admin_address),
            winner: ui::winner_banner(snapshot),
            heading: ui::results_heading(snapshot.phase),
            candidates: ui::candidate_cards(snapshot, busy),
            empty_state: ui::empty_state(snapshot, is_admin),
            show_onboarding: ui::show_onboarding(snapshot, is_admin),
            notices: self.notices.recent().cloned().collect(),
        }
    }
}
