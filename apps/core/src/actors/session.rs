use crate::actors::messages::{
    ActorError, AppError, SessionEvent, SessionMessage, SessionStatus, TurnReceipt,
};
use crate::actors::traits::EventSink;
use crate::brain::{templates, CourseAssistant};
use crate::config::AssistantConfig;
use crate::models::{ConversationContext, Message};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep_until, timeout, Duration, Instant};
use tracing::{debug, info, instrument};
use uuid::Uuid;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// How long the bot "types" before a reply appears.
///
/// The delay is `length × per_char_ms`, raised to `min_ms` and then capped at
/// `max_ms`. Length is counted in UTF-16 code units, so an emoji counts as two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingPacing {
    pub per_char_ms: u64,
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for TypingPacing {
    fn default() -> Self {
        Self {
            per_char_ms: 5,
            min_ms: 1000,
            max_ms: 3000,
        }
    }
}

impl TypingPacing {
    /// Delay for a response of `units` UTF-16 code units.
    pub fn delay_for_units(&self, units: usize) -> Duration {
        let raw = (units as u64).saturating_mul(self.per_char_ms);
        Duration::from_millis(raw.max(self.min_ms).min(self.max_ms))
    }

    pub fn delay_for(&self, response: &str) -> Duration {
        self.delay_for_units(response.encode_utf16().count())
    }
}

/// A handle to a chat widget session.
///
/// Each session runs as its own actor that owns the transcript and the conversation
/// context. Dropping every handle ends the session.
#[derive(Clone)]
pub struct SessionHandle {
    id: Uuid,
    sender: mpsc::Sender<SessionMessage>,
}

impl SessionHandle {
    /// Spawns a session actor. Must be called inside a tokio runtime.
    pub fn spawn(
        assistant: CourseAssistant,
        pacing: TypingPacing,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let id = Uuid::new_v4();
        let (sender, receiver) = mpsc::channel(32);
        let runner = SessionRunner::new(id, receiver, assistant, pacing, sink);
        tokio::spawn(async move { runner.run().await });
        Self { id, sender }
    }

    /// Spawns a session using the configured match mode and pacing.
    pub fn from_config(config: &AssistantConfig, sink: Arc<dyn EventSink>) -> Result<Self, AppError> {
        let assistant = CourseAssistant::for_mode(config.match_mode)?;
        Ok(Self::spawn(assistant, config.pacing(), sink))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Submits a user message.
    ///
    /// Returns `None` when the message was ignored: blank input, or the widget is
    /// closed. Otherwise the user message is already in the transcript and the
    /// reply is scheduled.
    #[instrument(skip(self, content), fields(session = %self.id))]
    pub async fn submit(&self, content: impl Into<String>) -> Result<Option<TurnReceipt>, AppError> {
        let content = content.into();
        self.request(|responder| SessionMessage::Submit { content, responder })
            .await
    }

    /// Opens or closes the widget, returning the new open state.
    #[instrument(skip(self), fields(session = %self.id))]
    pub async fn toggle(&self) -> Result<bool, AppError> {
        self.request(|responder| SessionMessage::Toggle { responder })
            .await
    }

    pub async fn transcript(&self) -> Result<Vec<Message>, AppError> {
        self.request(|responder| SessionMessage::GetTranscript { responder })
            .await
    }

    pub async fn context(&self) -> Result<ConversationContext, AppError> {
        self.request(|responder| SessionMessage::GetContext { responder })
            .await
    }

    pub async fn status(&self) -> Result<SessionStatus, AppError> {
        self.request(|responder| SessionMessage::GetStatus { responder })
            .await
    }

    /// Stops the session. Replies that have not landed yet are discarded.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender
            .send(SessionMessage::Shutdown)
            .await
            .map_err(|e| ActorError::SessionClosed(e.to_string()))?;
        Ok(())
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> SessionMessage,
    ) -> Result<T, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(build(send))
            .await
            .map_err(|e| ActorError::SessionClosed(e.to_string()))?;
        let reply = timeout(REQUEST_TIMEOUT, recv)
            .await
            .map_err(ActorError::from)?
            .map_err(|e| ActorError::SessionClosed(e.to_string()))?;
        Ok(reply)
    }
}

// --- Actor Runner ---

struct PendingReply {
    content: String,
    due: Instant,
}

struct SessionRunner {
    id: Uuid,
    receiver: mpsc::Receiver<SessionMessage>,
    assistant: CourseAssistant,
    pacing: TypingPacing,
    sink: Arc<dyn EventSink>,
    transcript: Vec<Message>,
    context: ConversationContext,
    is_open: bool,
    pending: VecDeque<PendingReply>,
}

impl SessionRunner {
    fn new(
        id: Uuid,
        receiver: mpsc::Receiver<SessionMessage>,
        assistant: CourseAssistant,
        pacing: TypingPacing,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            id,
            receiver,
            assistant,
            pacing,
            sink,
            transcript: vec![Message::bot(templates::WELCOME)],
            context: ConversationContext::default(),
            is_open: false,
            pending: VecDeque::new(),
        }
    }

    async fn run(mut self) {
        info!(session = %self.id, "Session started");
        for message in self.transcript.clone() {
            self.emit(SessionEvent::MessageAppended(message)).await;
        }

        loop {
            let next_due = self.pending.front().map(|reply| reply.due);

            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(SessionMessage::Shutdown) | None => break,
                    Some(msg) => self.handle_message(msg).await,
                },
                _ = sleep_until(next_due.unwrap_or_else(Instant::now)), if next_due.is_some() => {
                    self.deliver_next().await;
                }
            }
        }

        info!(
            session = %self.id,
            discarded = self.pending.len(),
            "Session stopped"
        );
    }

    async fn handle_message(&mut self, msg: SessionMessage) {
        match msg {
            SessionMessage::Submit { content, responder } => {
                let receipt = self.handle_submit(content).await;
                let _ = responder.send(receipt);
            }
            SessionMessage::Toggle { responder } => {
                self.is_open = !self.is_open;
                debug!(session = %self.id, is_open = self.is_open, "widget toggled");
                self.emit(SessionEvent::WidgetToggled(self.is_open)).await;
                let _ = responder.send(self.is_open);
            }
            SessionMessage::GetTranscript { responder } => {
                let _ = responder.send(self.transcript.clone());
            }
            SessionMessage::GetContext { responder } => {
                let _ = responder.send(self.context.clone());
            }
            SessionMessage::GetStatus { responder } => {
                let _ = responder.send(SessionStatus {
                    is_open: self.is_open,
                    is_typing: !self.pending.is_empty(),
                    pending_replies: self.pending.len(),
                    message_count: self.transcript.len(),
                });
            }
            SessionMessage::Shutdown => {}
        }
    }

    async fn handle_submit(&mut self, content: String) -> Option<TurnReceipt> {
        if content.trim().is_empty() {
            return None;
        }
        if !self.is_open {
            debug!(session = %self.id, "submit while widget closed, ignoring");
            return None;
        }

        self.append(Message::user(content.as_str())).await;

        let reply = self.assistant.reply(&content, &mut self.context);
        let delay = self.pacing.delay_for(&reply.text);

        // Replies land in submission order; each delay runs after the previous reply.
        let now = Instant::now();
        let start = self
            .pending
            .back()
            .map(|pending| pending.due)
            .unwrap_or(now)
            .max(now);
        let queued_behind = self.pending.len();
        self.pending.push_back(PendingReply {
            content: reply.text,
            due: start + delay,
        });

        info!(
            session = %self.id,
            intent = %reply.intent,
            delay_ms = delay.as_millis() as u64,
            queued_behind,
            "Turn accepted"
        );

        if queued_behind == 0 {
            self.emit(SessionEvent::TypingChanged(true)).await;
        }

        Some(TurnReceipt {
            intent: reply.intent,
            matched_trigger: reply.matched_trigger,
            typing_delay_ms: delay.as_millis() as u64,
            queued_behind,
        })
    }

    async fn deliver_next(&mut self) {
        let Some(reply) = self.pending.pop_front() else {
            return;
        };

        if self.pending.is_empty() {
            self.emit(SessionEvent::TypingChanged(false)).await;
        }
        self.append(Message::bot(reply.content)).await;
    }

    async fn append(&mut self, message: Message) {
        self.transcript.push(message.clone());
        self.emit(SessionEvent::MessageAppended(message)).await;
    }

    async fn emit(&self, event: SessionEvent) {
        self.sink.emit(self.id, event).await;
    }
}
