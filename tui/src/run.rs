//! Terminal event loop.
//!
//! One owner task runs this loop and holds all mutable state. Contract
//! writes and connect attempts are spawned off it and report back over a
//! channel, so the terminal keeps redrawing and accepting input while a
//! transaction (or a user prompt at the agent) is pending.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::{broadcast, mpsc};

use blockvote_app::{run_action, Action, ActionOutcome, App};
use blockvote_provider::{Provider, ProviderEvent};
use blockvote_types::Address;
use blockvote_wallet::{establish_session, Connection, SessionEffect, SessionError};

/// Messages spawned tasks send back to the loop.
enum LoopMsg {
    Connected(Result<Connection, SessionError>),
    ActionDone(ActionOutcome),
}

/// UI-local state: candidate selection and the add-candidate input line.
#[derive(Default)]
pub struct UiState {
    pub selected: usize,
    /// `Some` while the admin is typing a candidate name.
    pub input: Option<String>,
}

pub async fn run(
    app: App,
    provider: Option<Arc<dyn Provider>>,
    contract_address: Address,
    admin_address: Address,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app;
    let result = event_loop(
        &mut terminal,
        &mut app,
        provider,
        contract_address,
        admin_address,
    )
    .await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    provider: Option<Arc<dyn Provider>>,
    contract_address: Address,
    admin_address: Address,
) -> Result<()> {
    let mut input_events = EventStream::new();
    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<LoopMsg>();
    let mut provider_events = provider.as_ref().map(|p| p.subscribe());
    let mut state = UiState::default();

    loop {
        clamp_selection(app, &mut state);
        terminal.draw(|frame| crate::render::draw(frame, &app.page(), &state))?;

        tokio::select! {
            maybe_event = input_events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if handle_key(app, &mut state, &msg_tx, key).await {
                            return Ok(());
                        }
                    }
                    Some(Ok(_)) => {} // resize etc.; redrawn next turn
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }
            Some(msg) = msg_rx.recv() => match msg {
                LoopMsg::Connected(result) => app.finish_connect(result).await,
                LoopMsg::ActionDone(outcome) => app.apply_action_outcome(outcome).await,
            },
            event = next_provider_event(&mut provider_events) => {
                match event {
                    Some(event) => {
                        let effect = app.handle_provider_event(event).await;
                        if effect == SessionEffect::ReloadRequired {
                            // Contract state is chain-scoped: drop everything
                            // and start over disconnected.
                            *app = App::new(
                                provider.clone(),
                                contract_address.clone(),
                                admin_address.clone(),
                            );
                            state = UiState::default();
                        }
                    }
                    None => provider_events = None,
                }
            }
        }
    }
}

/// Await the next provider event, skipping lag gaps. Pends forever when no
/// provider is configured or the stream has closed.
async fn next_provider_event(
    rx: &mut Option<broadcast::Receiver<ProviderEvent>>,
) -> Option<ProviderEvent> {
    match rx {
        Some(rx) => loop {
            match rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        },
        None => std::future::pending().await,
    }
}

/// Returns true when the loop should exit.
async fn handle_key(
    app: &mut App,
    state: &mut UiState,
    msg_tx: &mpsc::UnboundedSender<LoopMsg>,
    key: KeyEvent,
) -> bool {
    if state.input.is_some() {
        match key.code {
            KeyCode::Esc => {
                state.input = None;
            }
            KeyCode::Enter => {
                if let Some(name) = state.input.take() {
                    submit_action(app, msg_tx, Action::AddCandidate { name });
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = state.input.as_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = state.input.as_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') => {
            if let Some((provider, contract_address)) = app.begin_connect() {
                let tx = msg_tx.clone();
                tokio::spawn(async move {
                    let result = establish_session(provider, contract_address).await;
                    let _ = tx.send(LoopMsg::Connected(result));
                });
            }
        }
        KeyCode::Char('d') => {
            if app.session().is_connected() {
                app.disconnect();
            }
        }
        KeyCode::Char('r') => app.refresh().await,
        KeyCode::Up | KeyCode::Char('k') => state.selected = state.selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => state.selected += 1, // clamped next turn
        KeyCode::Enter | KeyCode::Char('v') => vote_selected(app, state, msg_tx),
        KeyCode::Char('a') => {
            let offered = app
                .page()
                .admin_panel
                .is_some_and(|p| p.show_add_candidate && p.controls_enabled);
            if offered {
                state.input = Some(String::new());
            }
        }
        KeyCode::Char('s') => {
            let offered = app
                .page()
                .admin_panel
                .is_some_and(|p| p.show_start && p.controls_enabled);
            if offered {
                submit_action(app, msg_tx, Action::StartElection);
            }
        }
        KeyCode::Char('e') => {
            let offered = app
                .page()
                .admin_panel
                .is_some_and(|p| p.show_end && p.controls_enabled);
            if offered {
                submit_action(app, msg_tx, Action::EndElection);
            }
        }
        _ => {}
    }
    false
}

fn vote_selected(app: &mut App, state: &UiState, msg_tx: &mpsc::UnboundedSender<LoopMsg>) {
    let page = app.page();
    let Some(card) = page.candidates.get(state.selected) else {
        return;
    };
    let enabled = card.vote_control.as_ref().is_some_and(|c| c.enabled);
    if enabled {
        let candidate_id = card.id;
        submit_action(app, msg_tx, Action::Vote { candidate_id });
    }
}

fn submit_action(app: &mut App, msg_tx: &mpsc::UnboundedSender<LoopMsg>, action: Action) {
    if let Some((contract, action)) = app.request_action(action) {
        let tx = msg_tx.clone();
        tokio::spawn(async move {
            let outcome = run_action(contract, action).await;
            let _ = tx.send(LoopMsg::ActionDone(outcome));
        });
    }
}

fn clamp_selection(app: &App, state: &mut UiState) {
    let len = app.snapshot().candidates.len();
    state.selected = if len == 0 {
        0
    } else {
        state.selected.min(len - 1)
    };
}
