//! # Actions
//!
//! Everything that can happen on the page becomes an `Action`.
//! User presses Enter? That's `Action::Submit(prompt)`.
//! Endpoint answers? That's `Action::ResponseReceived { reply }`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter must carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Lifecycle of one exchange:
//!
//! ```text
//! Submit(prompt) ──► SpawnRequest { messages }     (is_submitting = true)
//!                        │
//!          ┌─────────────┴──────────────┐
//!          ▼                            ▼
//! ResponseReceived { reply }     RequestFailed(error)
//!   push user, push bot            log, list untouched
//!   Refresh { reset_form: true }   Refresh { reset_form: false }
//! ```

use log::{debug, info, warn};

use crate::core::form;
use crate::core::message::Message;
use crate::core::state::{App, STATUS_GENERATING, STATUS_READY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// User submitted the form.
    Submit(String),
    /// Endpoint replied with the bot's text.
    ResponseReceived { reply: String },
    /// Any failure in the request/response cycle.
    RequestFailed(String),
    /// Repaint the page from current state.
    Refresh,
    Quit,
}

/// Side effect the adapter must perform after `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start the single outbound request with this payload.
    SpawnRequest { messages: Vec<String> },
    /// Exchange settled (or a refresh was asked for). `reset_form` is set
    /// only after a successful exchange.
    Refresh { reset_form: bool },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(prompt) => {
            if app.is_submitting {
                debug!("Submit ignored: a request is already in flight");
                return Effect::None;
            }
            if let Err(e) = form::validate(&prompt) {
                debug!("Submit rejected: {}", e);
                return Effect::None;
            }

            let messages = app.conversation.outbound_history(&prompt);
            info!(
                "Submitting prompt (len={}, history={})",
                prompt.len(),
                messages.len()
            );
            app.is_submitting = true;
            app.pending_prompt = Some(prompt);
            app.status_message = STATUS_GENERATING.to_string();
            Effect::SpawnRequest { messages }
        }
        Action::ResponseReceived { reply } => {
            app.is_submitting = false;
            app.status_message = STATUS_READY.to_string();
            let Some(prompt) = app.pending_prompt.take() else {
                warn!("Response received with no pending prompt; dropping it");
                return request_refresh(app, false);
            };
            app.conversation.push(Message::user(prompt));
            app.conversation.push(Message::bot(reply));
            info!("Exchange complete: {} messages", app.conversation.len());
            request_refresh(app, true)
        }
        Action::RequestFailed(error) => {
            warn!("Conversation request failed: {}", error);
            app.is_submitting = false;
            app.pending_prompt = None;
            app.status_message = STATUS_READY.to_string();
            request_refresh(app, false)
        }
        Action::Refresh => request_refresh(app, false),
        Action::Quit => {
            if app.is_submitting {
                info!("Quitting with a request still in flight");
            }
            Effect::Quit
        }
    }
}

/// Every settled exchange ends here, success or not.
fn request_refresh(app: &mut App, reset_form: bool) -> Effect {
    app.refresh_count += 1;
    debug!("Refresh requested (count={})", app.refresh_count);
    Effect::Refresh { reset_form }
}
