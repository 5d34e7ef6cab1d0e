//! Intent Classification using ordered keyword rules.
//!
//! The message is lower-cased, then rules are tried in their fixed order and the
//! first rule with a matching trigger wins. There is no scoring: a message that
//! mentions both "syllabus" and "cost" is course creation because that rule
//! comes first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::keywords::{IntentRule, INTENT_RULES};
use super::matcher::{KeywordMatcher, MatchMode, SubstringMatcher};
use crate::error::AppError;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    /// What the platform offers
    ServicesOverview,
    /// Building a course, syllabus or learning path
    CourseCreation,
    /// Frameworks and notebooks (TensorFlow, Colab, ...)
    AiTools,
    /// Conceptual questions (what is, explain, ...)
    AiConcepts,
    /// Programming and project ideas
    ProgrammingProjects,
    /// Third-party courses and certificates
    CoursesCertifications,
    /// Jobs, salaries, skills
    Career,
    /// LLMs, prompts, RAG
    GenerativeAi,
    /// Download, save, edit features of the site
    WebsiteFeatures,
    /// Where the field is heading
    AiTrends,
    /// Plans and prices
    Pricing,
    /// How long learning takes
    TimeRelated,
    /// Asking for suggestions
    Recommendation,
    /// Hello, hi, hey
    Greeting,
    /// Learners without a coding background
    BackgroundCheck,
    /// Nothing matched
    General,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns the label shown to users and written to logs
    pub fn label(&self) -> &'static str {
        match self {
            Intent::ServicesOverview => "services-overview",
            Intent::CourseCreation => "course-creation",
            Intent::AiTools => "ai-tools",
            Intent::AiConcepts => "ai-concepts",
            Intent::ProgrammingProjects => "programming-projects",
            Intent::CoursesCertifications => "courses-certifications",
            Intent::Career => "career",
            Intent::GenerativeAi => "generative-ai",
            Intent::WebsiteFeatures => "website-features",
            Intent::AiTrends => "ai-trends",
            Intent::Pricing => "pricing",
            Intent::TimeRelated => "time-related",
            Intent::Recommendation => "recommendation",
            Intent::Greeting => "greeting",
            Intent::BackgroundCheck => "background-check",
            Intent::General => "general",
        }
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected intent
    pub intent: Intent,
    /// Trigger that decided the intent, `None` for `general`
    pub matched_trigger: Option<String>,
}

/// Intent classifier over the ordered rule table
#[derive(Clone)]
pub struct IntentClassifier {
    rules: &'static [IntentRule],
    matcher: Arc<dyn KeywordMatcher>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a classifier with substring matching
    pub fn new() -> Self {
        Self::with_matcher(Arc::new(SubstringMatcher))
    }

    /// Create a classifier with a custom matcher
    pub fn with_matcher(matcher: Arc<dyn KeywordMatcher>) -> Self {
        Self {
            rules: INTENT_RULES,
            matcher,
        }
    }

    /// Create a classifier for a configured match mode
    pub fn for_mode(mode: MatchMode) -> Result<Self, AppError> {
        Ok(Self::with_matcher(mode.build()?))
    }

    /// The matcher shared with the response selector
    pub fn matcher(&self) -> Arc<dyn KeywordMatcher> {
        Arc::clone(&self.matcher)
    }

    /// Classify a message, returning only the intent
    pub fn classify(&self, text: &str) -> Intent {
        self.analyze(text).intent
    }

    /// Classify a message and report which trigger decided it
    pub fn analyze(&self, text: &str) -> IntentResult {
        let lower = text.to_lowercase();

        for rule in self.rules {
            if let Some(trigger) = rule.find_match(&lower, self.matcher.as_ref()) {
                debug!(intent = %rule.intent, trigger = %trigger.describe(), "intent matched");
                return IntentResult {
                    intent: rule.intent,
                    matched_trigger: Some(trigger.describe()),
                };
            }
        }

        IntentResult {
            intent: Intent::General,
            matched_trigger: None,
        }
    }
}
