use serde::Serialize;
use tokio::sync::oneshot;

use crate::brain::Intent;
use crate::models::{ConversationContext, Message};

/// Defines errors that can occur within the actor system.
#[derive(Debug, thiserror::Error, Serialize, Clone)]
pub enum ActorError {
    /// The session actor is gone (shut down or panicked).
    #[error("Session closed: {0}")]
    SessionClosed(String),
    /// A generic internal error within an actor.
    #[error("Internal system error: {0}")]
    Internal(String),
    /// An error indicating that an actor operation timed out.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl From<tokio::time::error::Elapsed> for ActorError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        ActorError::Timeout(format!("Actor operation timed out: {}", err))
    }
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// What a session publishes to its `EventSink`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A user or bot message was appended to the transcript.
    MessageAppended(Message),
    /// The bot started (`true`) or stopped (`false`) "typing".
    TypingChanged(bool),
    /// The widget was opened (`true`) or closed (`false`).
    WidgetToggled(bool),
}

/// Acknowledgement for an accepted user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReceipt {
    pub intent: Intent,
    pub matched_trigger: Option<String>,
    /// Typing delay of this reply, counted from when the previous reply lands.
    pub typing_delay_ms: u64,
    /// Replies still waiting ahead of this one.
    pub queued_behind: usize,
}

/// Snapshot of the widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub is_open: bool,
    pub is_typing: bool,
    pub pending_replies: usize,
    pub message_count: usize,
}

/// Messages that can be sent to the session actor.
#[derive(Debug)]
pub enum SessionMessage {
    /// A user submission. Blank input or a closed widget yields `None`.
    Submit {
        content: String,
        responder: oneshot::Sender<Option<TurnReceipt>>,
    },
    /// Open or close the widget; responds with the new open state.
    Toggle { responder: oneshot::Sender<bool> },
    /// A copy of the transcript in conversation order.
    GetTranscript {
        responder: oneshot::Sender<Vec<Message>>,
    },
    /// A copy of the conversation context.
    GetContext {
        responder: oneshot::Sender<ConversationContext>,
    },
    GetStatus {
        responder: oneshot::Sender<SessionStatus>,
    },
    /// Stop the actor; pending replies are discarded.
    Shutdown,
}
