//! # Brain Module
//!
//! Scripted FAQ logic for the Course Assistant widget. No model, no network:
//! ordered keyword rules pick an intent, and the intent picks a canned reply.
//!
//! ## Components
//! - `intent`: Intent classification over the ordered rule table
//! - `keywords`: Rule table and trigger types (data only)
//! - `matcher`: Substring or whole-word keyword containment
//! - `responses`: Response selection and the default branch
//! - `templates`: Canned response texts
//! - `assistant`: Classifier and selector behind one call

pub mod assistant;
pub mod intent;
pub mod keywords;
pub mod matcher;
pub mod responses;
pub mod templates;

pub use assistant::{CourseAssistant, Reply};
pub use intent::{Intent, IntentClassifier, IntentResult};
pub use keywords::{IntentRule, Trigger, INTENT_RULES};
pub use matcher::{KeywordMatcher, MatchMode, SubstringMatcher, WholeWordMatcher};
pub use responses::ResponseSelector;
