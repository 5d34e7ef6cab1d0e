//! Response selection.
//!
//! Each intent with a dedicated case holds an ordered list of variants keyed by
//! secondary keyword checks on the raw message, then a generic text. Intents
//! without a case (including `greeting`) go through the default branch.

use std::sync::Arc;
use tracing::debug;

use super::intent::Intent;
use super::keywords::{first_match, Trigger};
use super::matcher::{KeywordMatcher, SubstringMatcher};
use super::templates;
use crate::models::ConversationContext;

use Trigger::Phrase;

/// A response chosen when any of its triggers matches.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    pub triggers: &'static [Trigger],
    pub text: &'static str,
}

/// All responses for one intent.
#[derive(Debug, Clone, Copy)]
pub struct ResponseEntry {
    pub intent: Intent,
    pub variants: &'static [Variant],
    pub generic: &'static str,
}

/// Messages that, verbatim, get the services summary in the default branch.
pub const EXACT_SERVICE_MESSAGES: &[&str] = &["service", "services"];

pub static RESPONSE_TABLE: &[ResponseEntry] = &[
    ResponseEntry {
        intent: Intent::ServicesOverview,
        variants: &[],
        generic: templates::SERVICES_OVERVIEW,
    },
    ResponseEntry {
        intent: Intent::CourseCreation,
        variants: &[
            Variant {
                triggers: &[Phrase("create an ai course for beginners")],
                text: templates::COURSE_BEGINNER_AI,
            },
            Variant {
                triggers: &[Phrase("syllabus for an ai course in 3 months")],
                text: templates::COURSE_THREE_MONTH_SYLLABUS,
            },
            Variant {
                triggers: &[Phrase("personalized ai learning path")],
                text: templates::COURSE_PERSONALIZED_PATH,
            },
        ],
        generic: templates::COURSE_CREATION_GENERIC,
    },
    ResponseEntry {
        intent: Intent::AiTools,
        variants: &[
            Variant {
                triggers: &[Phrase("difference between tensorflow and pytorch")],
                text: templates::TOOLS_TENSORFLOW_VS_PYTORCH,
            },
            Variant {
                triggers: &[Phrase("jupyter notebook or google colab")],
                text: templates::TOOLS_JUPYTER_VS_COLAB,
            },
        ],
        generic: templates::AI_TOOLS_GENERIC,
    },
    ResponseEntry {
        intent: Intent::AiConcepts,
        variants: &[Variant {
            triggers: &[Phrase("difference between ai, ml, and deep learning")],
            text: templates::CONCEPTS_AI_ML_DL,
        }],
        generic: templates::AI_CONCEPTS_GENERIC,
    },
    ResponseEntry {
        intent: Intent::ProgrammingProjects,
        variants: &[Variant {
            triggers: &[Phrase("beginner-friendly ai projects")],
            text: templates::PROJECTS_BEGINNER,
        }],
        generic: templates::PROGRAMMING_PROJECTS_GENERIC,
    },
    ResponseEntry {
        intent: Intent::Career,
        variants: &[Variant {
            triggers: &[Phrase("ai engineer earn"), Phrase("salary")],
            text: templates::CAREER_SALARY,
        }],
        generic: templates::CAREER_GENERIC,
    },
    ResponseEntry {
        intent: Intent::GenerativeAi,
        variants: &[Variant {
            triggers: &[Phrase("what is generative ai")],
            text: templates::GENAI_WHAT_IS,
        }],
        generic: templates::GENERATIVE_AI_GENERIC,
    },
    ResponseEntry {
        intent: Intent::TimeRelated,
        variants: &[Variant {
            triggers: &[Phrase("how long does it take to learn ai")],
            text: templates::TIME_HOW_LONG,
        }],
        generic: templates::TIME_RELATED_GENERIC,
    },
    ResponseEntry {
        intent: Intent::BackgroundCheck,
        variants: &[Variant {
            triggers: &[Phrase("without coding background")],
            text: templates::BACKGROUND_NO_CODING,
        }],
        generic: templates::BACKGROUND_CHECK_GENERIC,
    },
    ResponseEntry {
        intent: Intent::WebsiteFeatures,
        variants: &[
            Variant {
                triggers: &[Phrase("download"), Phrase("save")],
                text: templates::WEBSITE_DOWNLOAD_SAVE,
            },
            Variant {
                triggers: &[Phrase("edit"), Phrase("customize")],
                text: templates::WEBSITE_EDIT,
            },
        ],
        generic: templates::WEBSITE_FEATURES_GENERIC,
    },
    ResponseEntry {
        intent: Intent::AiTrends,
        variants: &[Variant {
            triggers: &[Phrase("future of ai"), Phrase("2025")],
            text: templates::TRENDS_FUTURE_2025,
        }],
        generic: templates::AI_TRENDS_GENERIC,
    },
    ResponseEntry {
        intent: Intent::Pricing,
        variants: &[Variant {
            triggers: &[Phrase("free")],
            text: templates::PRICING_FREE,
        }],
        generic: templates::PRICING_GENERIC,
    },
];

/// Keywords used by response variants, for matchers that precompile patterns.
pub fn variant_keywords() -> impl Iterator<Item = &'static str> {
    RESPONSE_TABLE
        .iter()
        .flat_map(|entry| entry.variants.iter())
        .flat_map(|variant| variant.triggers.iter())
        .flat_map(|trigger| trigger.keywords())
}

fn entry_for(intent: Intent) -> Option<&'static ResponseEntry> {
    RESPONSE_TABLE.iter().find(|entry| entry.intent == intent)
}

/// Picks the response text for a classified message.
#[derive(Clone)]
pub struct ResponseSelector {
    matcher: Arc<dyn KeywordMatcher>,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector {
    pub fn new() -> Self {
        Self::with_matcher(Arc::new(SubstringMatcher))
    }

    pub fn with_matcher(matcher: Arc<dyn KeywordMatcher>) -> Self {
        Self { matcher }
    }

    /// Choose a response and record `intent` as the context's last intent.
    ///
    /// The default branch echoes the intent from the previous turn, read before
    /// the context is overwritten.
    pub fn respond(
        &self,
        intent: Intent,
        raw_message: &str,
        context: &mut ConversationContext,
    ) -> String {
        let previous = context.last_intent.replace(intent);
        let lower = raw_message.to_lowercase();

        match entry_for(intent) {
            Some(entry) => self.select(entry, &lower).to_string(),
            None => self.fallback(&lower, previous),
        }
    }

    fn select(&self, entry: &ResponseEntry, lower: &str) -> &'static str {
        entry
            .variants
            .iter()
            .find(|variant| first_match(variant.triggers, lower, self.matcher.as_ref()).is_some())
            .map(|variant| variant.text)
            .unwrap_or(entry.generic)
    }

    fn fallback(&self, lower: &str, previous: Option<Intent>) -> String {
        if EXACT_SERVICE_MESSAGES.contains(&lower) {
            return templates::SERVICES_EXACT.to_string();
        }

        if let Some(previous) = previous {
            debug!(previous = %previous, "echoing previous intent");
            return templates::follow_up(previous.label());
        }

        templates::CAPABILITY_MENU.to_string()
    }
}
