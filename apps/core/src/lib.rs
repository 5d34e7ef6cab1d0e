//! Course Assistant core.
//!
//! The scripted FAQ chatbot of the AI Course Generator site: an ordered keyword
//! intent classifier, a canned response selector, and a per-session actor that
//! paces replies like a person typing.

pub mod actors;
pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use actors::{ChannelSink, EventSink, SessionEvent, SessionHandle, TypingPacing};
pub use brain::{CourseAssistant, Intent, IntentClassifier, MatchMode, ResponseSelector};
pub use config::AssistantConfig;
pub use error::AppError;
pub use models::{ConversationContext, Message, MessageKind};
