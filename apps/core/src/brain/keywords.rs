//! Keyword tables for intent classification.
//!
//! Rules are plain data so a stricter matcher can be swapped in without touching
//! the control flow in `intent`. Order matters: earlier rules shadow later ones
//! on overlapping keywords.

use super::intent::Intent;
use super::matcher::KeywordMatcher;

/// One condition inside a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Matches when the keyword occurs in the message.
    Phrase(&'static str),
    /// Matches when every keyword occurs in the message.
    AllOf(&'static [&'static str]),
}

impl Trigger {
    /// Check the trigger against an already lower-cased message.
    pub fn is_match(&self, text: &str, matcher: &dyn KeywordMatcher) -> bool {
        match self {
            Trigger::Phrase(keyword) => matcher.contains(text, keyword),
            Trigger::AllOf(keywords) => keywords.iter().all(|k| matcher.contains(text, k)),
        }
    }

    /// Every keyword the trigger looks for.
    pub fn keywords(&self) -> Vec<&'static str> {
        match self {
            Trigger::Phrase(keyword) => vec![*keyword],
            Trigger::AllOf(keywords) => keywords.to_vec(),
        }
    }

    /// Short human-readable form, e.g. `create + course`.
    pub fn describe(&self) -> String {
        self.keywords().join(" + ")
    }
}

/// Ordered rule: the intent wins if any trigger matches.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub triggers: &'static [Trigger],
}

impl IntentRule {
    /// First trigger that matches, if any.
    pub fn find_match(&self, text: &str, matcher: &dyn KeywordMatcher) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.is_match(text, matcher))
    }
}

/// Returns the first trigger in `triggers` that matches.
pub fn first_match<'a>(
    triggers: &'a [Trigger],
    text: &str,
    matcher: &dyn KeywordMatcher,
) -> Option<&'a Trigger> {
    triggers.iter().find(|t| t.is_match(text, matcher))
}

use Trigger::{AllOf, Phrase};

const SERVICES_OVERVIEW: &[Trigger] = &[
    Phrase("service"),
    Phrase("offer"),
    Phrase("provide"),
    Phrase("feature"),
    Phrase("what do you do"),
    Phrase("what can you do"),
    Phrase("tell me about"),
];

const COURSE_CREATION: &[Trigger] = &[
    AllOf(&["create", "course"]),
    Phrase("syllabus"),
    Phrase("learning path"),
    Phrase("study plan"),
    Phrase("schedule"),
];

const AI_TOOLS: &[Trigger] = &[
    Phrase("tool"),
    Phrase("tensorflow"),
    Phrase("pytorch"),
    Phrase("jupyter"),
    Phrase("colab"),
    Phrase("hugging face"),
    Phrase("automl"),
];

const AI_CONCEPTS: &[Trigger] = &[
    Phrase("difference between"),
    Phrase("what is"),
    Phrase("explain"),
    Phrase("how does"),
    Phrase("supervised"),
    Phrase("unsupervised"),
    Phrase("neural network"),
    Phrase("machine learning"),
];

const PROGRAMMING_PROJECTS: &[Trigger] = &[
    Phrase("programming"),
    Phrase("python"),
    Phrase("project"),
    Phrase("build"),
    Phrase("chatbot"),
    Phrase("opencv"),
    Phrase("dataset"),
];

const COURSES_CERTIFICATIONS: &[Trigger] = &[
    Phrase("course"),
    Phrase("certification"),
    Phrase("google"),
    Phrase("coursera"),
    Phrase("udemy"),
    Phrase("edx"),
    Phrase("mooc"),
];

const CAREER: &[Trigger] = &[
    Phrase("career"),
    Phrase("job"),
    Phrase("salary"),
    Phrase("engineer"),
    Phrase("skills"),
    Phrase("resume"),
    Phrase("freelancing"),
];

const GENERATIVE_AI: &[Trigger] = &[
    Phrase("generative ai"),
    Phrase("chatgpt"),
    Phrase("llm"),
    Phrase("prompt"),
    Phrase("fine-tuning"),
    Phrase("rag"),
    Phrase("langchain"),
];

const WEBSITE_FEATURES: &[Trigger] = &[
    Phrase("this tool"),
    Phrase("this website"),
    Phrase("download"),
    Phrase("save"),
    Phrase("share"),
    Phrase("edit"),
    Phrase("custom"),
];

const AI_TRENDS: &[Trigger] = &[
    Phrase("future"),
    Phrase("trend"),
    Phrase("2025"),
    Phrase("replacing"),
    Phrase("industry"),
    Phrase("ethics"),
    Phrase("startup"),
];

const PRICING: &[Trigger] = &[
    Phrase("price"),
    Phrase("cost"),
    Phrase("pay"),
    Phrase("subscription"),
    Phrase("plan"),
    Phrase("buy"),
    Phrase("purchase"),
    Phrase("free"),
];

const TIME_RELATED: &[Trigger] = &[
    Phrase("how long"),
    Phrase("time"),
    Phrase("duration"),
    Phrase("months"),
    Phrase("weeks"),
    Phrase("weekend"),
];

const RECOMMENDATION: &[Trigger] = &[
    Phrase("suggest"),
    Phrase("recommend"),
    Phrase("best"),
    Phrase("popular"),
    Phrase("which"),
];

const GREETING: &[Trigger] = &[
    Phrase("hi"),
    Phrase("hello"),
    Phrase("hey"),
    Phrase("buddy"),
];

const BACKGROUND_CHECK: &[Trigger] = &[
    Phrase("without coding"),
    Phrase("without python"),
    Phrase("beginner"),
    Phrase("no experience"),
];

/// The fixed evaluation order. `Intent::General` is the implicit fallback.
pub static INTENT_RULES: &[IntentRule] = &[
    IntentRule { intent: Intent::ServicesOverview, triggers: SERVICES_OVERVIEW },
    IntentRule { intent: Intent::CourseCreation, triggers: COURSE_CREATION },
    IntentRule { intent: Intent::AiTools, triggers: AI_TOOLS },
    IntentRule { intent: Intent::AiConcepts, triggers: AI_CONCEPTS },
    IntentRule { intent: Intent::ProgrammingProjects, triggers: PROGRAMMING_PROJECTS },
    IntentRule { intent: Intent::CoursesCertifications, triggers: COURSES_CERTIFICATIONS },
    IntentRule { intent: Intent::Career, triggers: CAREER },
    IntentRule { intent: Intent::GenerativeAi, triggers: GENERATIVE_AI },
    IntentRule { intent: Intent::WebsiteFeatures, triggers: WEBSITE_FEATURES },
    IntentRule { intent: Intent::AiTrends, triggers: AI_TRENDS },
    IntentRule { intent: Intent::Pricing, triggers: PRICING },
    IntentRule { intent: Intent::TimeRelated, triggers: TIME_RELATED },
    IntentRule { intent: Intent::Recommendation, triggers: RECOMMENDATION },
    IntentRule { intent: Intent::Greeting, triggers: GREETING },
    IntentRule { intent: Intent::BackgroundCheck, triggers: BACKGROUND_CHECK },
];
