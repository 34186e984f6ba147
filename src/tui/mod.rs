//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request Flow
//!
//! `Effect::SpawnRequest` starts one tokio task that runs [`exchange`] and
//! sends the resulting `Action` back over an `mpsc` channel. The loop drains
//! that channel between frames. While the task runs, `App::is_submitting`
//! disables the input and button, so a second request cannot start.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or background actions.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::api::{ConversationClient, HttpConversationClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::avatar::initials;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
    /// Where the Generate button was drawn last frame (for click hit testing)
    pub button_area: Rect,
    pub user_initials: String,
}

impl TuiState {
    pub fn new(user_name: &str) -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            button_area: Rect::default(),
            user_initials: initials(user_name),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBar
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady bar cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Build the endpoint client from resolved config.
pub fn build_client(config: &ResolvedConfig) -> Arc<dyn ConversationClient> {
    Arc::new(HttpConversationClient::new(&config.base_url, &config.endpoint))
}

/// What the loop should do after applying an effect.
#[derive(Debug, PartialEq, Eq)]
enum LoopControl {
    Continue,
    /// Repaint everything from scratch on the next frame.
    Repaint,
    Quit,
}

/// Carry out an effect returned by `update`.
fn apply_effect(
    effect: Effect,
    app: &App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
) -> LoopControl {
    match effect {
        Effect::None => LoopControl::Continue,
        Effect::SpawnRequest { messages } => {
            spawn_request(app.client.clone(), messages, tx.clone());
            LoopControl::Continue
        }
        Effect::Refresh { reset_form } => {
            if reset_form {
                tui.input_box.reset();
            }
            tui.message_list.invalidate();
            LoopControl::Repaint
        }
        Effect::Quit => LoopControl::Quit,
    }
}

/// Route one terminal event. Returns the action to dispatch, if any.
fn route_event(event: &TuiEvent, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Refresh => Some(Action::Refresh),
        TuiEvent::Resize => None,
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.message_list.handle_event(event);
            None
        }
        TuiEvent::MouseClick(col, row) => {
            if tui.button_area.contains(Position::new(*col, *row)) {
                debug!("Generate button clicked");
                match tui.input_box.submit() {
                    Some(InputEvent::Submit(text)) => Some(Action::Submit(text)),
                    _ => None,
                }
            } else {
                None
            }
        }
        _ => match tui.input_box.handle_event(event) {
            Some(InputEvent::Submit(text)) => Some(Action::Submit(text)),
            Some(InputEvent::ContentChanged) | None => None,
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = build_client(&config);
    let mut app = App::from_config(client, &config);
    let mut tui = TuiState::new(&app.user_name);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from the background request task
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        tui.input_box.disabled = app.is_submitting;

        if app.is_submitting {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.is_submitting {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&event, &mut tui) {
                let effect = update(&mut app, action);
                match apply_effect(effect, &app, &mut tui, &tx) {
                    LoopControl::Quit => break 'main,
                    LoopControl::Repaint => terminal.clear()?,
                    LoopControl::Continue => {}
                }
                // Keep the disabled prop current within a burst of events
                tui.input_box.disabled = app.is_submitting;
            }
        }

        // Handle background task actions (exchange results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            match apply_effect(effect, &app, &mut tui, &tx) {
                LoopControl::Quit => break 'main,
                LoopControl::Repaint => {
                    debug!("Refreshing page (refresh_count={})", app.refresh_count);
                    terminal.clear()?;
                }
                LoopControl::Continue => {}
            }
        }
    }

    info!(
        "Converse shutting down ({} messages, {} refreshes)",
        app.conversation.len(),
        app.refresh_count
    );
    ratatui::restore();
    Ok(())
}

/// Run one request/response exchange and turn the outcome into an Action.
/// Every failure collapses into `RequestFailed`.
pub async fn exchange(client: &dyn ConversationClient, messages: Vec<String>) -> Action {
    match client.send(&messages).await {
        Ok(reply) => Action::ResponseReceived { reply },
        Err(e) => Action::RequestFailed(e.to_string()),
    }
}

fn spawn_request(
    client: Arc<dyn ConversationClient>,
    messages: Vec<String>,
    tx: mpsc::Sender<Action>,
) {
    info!(
        "Spawning conversation request via {} ({} messages)",
        client.name(),
        messages.len()
    );
    tokio::spawn(async move {
        let action = exchange(client.as_ref(), messages).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver exchange result: receiver dropped");
        }
    });
}
