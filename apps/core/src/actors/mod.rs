//! Session actors.
//!
//! One actor per open chat widget. It owns the transcript, the conversation context
//! and the queue of replies still "being typed".

pub mod messages;
pub mod session;
pub mod traits;

pub use messages::{ActorError, SessionEvent, SessionStatus, TurnReceipt};
pub use session::{SessionHandle, TypingPacing};
pub use traits::{ChannelSink, EventSink, NullSink};
