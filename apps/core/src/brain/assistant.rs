//! Course Assistant - classifier and selector behind one call.
//!
//! Pure and synchronous: the turn controller owns the context and the timing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::intent::{Intent, IntentClassifier};
use super::matcher::MatchMode;
use super::responses::ResponseSelector;
use crate::error::AppError;
use crate::models::ConversationContext;

/// Outcome of one user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub intent: Intent,
    pub matched_trigger: Option<String>,
    pub text: String,
}

#[derive(Clone, Default)]
pub struct CourseAssistant {
    classifier: IntentClassifier,
    selector: ResponseSelector,
}

impl CourseAssistant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an assistant whose classifier and selector share one matcher.
    pub fn for_mode(mode: MatchMode) -> Result<Self, AppError> {
        let classifier = IntentClassifier::for_mode(mode)?;
        let selector = ResponseSelector::with_matcher(classifier.matcher());
        Ok(Self {
            classifier,
            selector,
        })
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Classify `message`, update `context`, and produce the reply text.
    pub fn reply(&self, message: &str, context: &mut ConversationContext) -> Reply {
        let result = self.classifier.analyze(message);
        let text = self.selector.respond(result.intent, message, context);
        debug!(intent = %result.intent, chars = text.len(), "reply selected");

        Reply {
            intent: result.intent,
            matched_trigger: result.matched_trigger,
            text,
        }
    }
}
