use crate::actors::messages::SessionEvent;
use async_trait::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Receives what a session publishes: appended messages, typing state, widget state.
///
/// This is the seam to whatever renders the widget (a terminal, a web socket, a test).
#[async_trait]
pub trait EventSink: Send + Sync + 'static {
    async fn emit(&self, session_id: Uuid, event: SessionEvent);
}

/// Forwards events into an unbounded channel.
#[derive(Clone)]
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<(Uuid, SessionEvent)>,
}

impl ChannelSink {
    /// Creates a sink and the receiver that drains it.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(Uuid, SessionEvent)>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl EventSink for ChannelSink {
    async fn emit(&self, session_id: Uuid, event: SessionEvent) {
        // A dropped receiver only means nobody is rendering anymore.
        let _ = self.sender.send((session_id, event));
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

#[async_trait]
impl EventSink for NullSink {
    async fn emit(&self, _session_id: Uuid, _event: SessionEvent) {}
}
