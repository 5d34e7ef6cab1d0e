use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::brain::Intent;

/// Who authored a message in the chat widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Bot,
}

/// Represents a single message within a conversation.
///
/// Messages are memory-only; the transcript is dropped with its session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The author of the message.
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// The text content of the message.
    pub content: String,
    /// When the message was appended to the transcript.
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::User,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Bot,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Learner traits the widget reserves room for.
///
/// No matching rule writes these today. They are carried so callers that want to
/// enrich a profile have a typed place to do it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub is_educator: bool,
    #[serde(default)]
    pub has_students: bool,
    #[serde(default)]
    pub wants_to_build_business: bool,
    #[serde(default)]
    pub learning_level: Option<String>,
    #[serde(default)]
    pub learning_style: Option<String>,
    #[serde(default)]
    pub time_availability: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

/// Per-session conversational state, mutated once per user turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Intent of the most recent user message, `None` before the first turn.
    pub last_intent: Option<Intent>,
    /// Reserved, never set by the matching rules.
    #[serde(default)]
    pub has_asked_about_pricing: bool,
    /// Reserved, never set by the matching rules.
    #[serde(default)]
    pub has_expressed_interest: bool,
    /// Reserved, never set by the matching rules.
    #[serde(default)]
    pub user_goals: Vec<String>,
    #[serde(default)]
    pub user_profile: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serializes_with_type_tag() {
        let msg = Message::bot("hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "bot");
        assert_eq!(json["content"], "hello");
    }

    #[test]
    fn test_fresh_context_has_no_intent() {
        let ctx = ConversationContext::default();
        assert!(ctx.last_intent.is_none());
        assert!(!ctx.user_profile.is_educator);
        assert!(ctx.user_goals.is_empty());
    }
}
