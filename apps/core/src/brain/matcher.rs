//! Keyword containment strategies.
//!
//! `Substring` reproduces the widget's behavior, including false positives such as
//! "ai" inside "said". `WholeWord` only accepts keywords bounded by non-word
//! characters.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::keywords::INTENT_RULES;
use super::responses::variant_keywords;
use crate::error::AppError;

/// Decides whether a lower-cased message contains a keyword.
pub trait KeywordMatcher: Send + Sync {
    fn contains(&self, text: &str, keyword: &str) -> bool;
}

/// Plain substring containment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl KeywordMatcher for SubstringMatcher {
    fn contains(&self, text: &str, keyword: &str) -> bool {
        text.contains(keyword)
    }
}

/// Containment on word boundaries, backed by one compiled regex per keyword.
#[derive(Debug, Clone)]
pub struct WholeWordMatcher {
    patterns: HashMap<&'static str, Regex>,
}

impl WholeWordMatcher {
    /// Compile a pattern for every keyword used by the rule and response tables.
    pub fn new() -> Result<Self, AppError> {
        let keywords = INTENT_RULES
            .iter()
            .flat_map(|rule| rule.triggers.iter())
            .flat_map(|trigger| trigger.keywords())
            .chain(variant_keywords());

        let mut patterns = HashMap::new();
        for keyword in keywords {
            if !patterns.contains_key(keyword) {
                patterns.insert(keyword, word_pattern(keyword)?);
            }
        }
        Ok(Self { patterns })
    }
}

fn word_pattern(keyword: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))
}

impl KeywordMatcher for WholeWordMatcher {
    fn contains(&self, text: &str, keyword: &str) -> bool {
        match self.patterns.get(keyword) {
            Some(re) => re.is_match(text),
            None => word_pattern(keyword)
                .map(|re| re.is_match(text))
                .unwrap_or(false),
        }
    }
}

/// Which matcher a classifier is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    #[default]
    Substring,
    WholeWord,
}

impl MatchMode {
    pub fn build(self) -> Result<Arc<dyn KeywordMatcher>, AppError> {
        Ok(match self {
            MatchMode::Substring => Arc::new(SubstringMatcher),
            MatchMode::WholeWord => Arc::new(WholeWordMatcher::new()?),
        })
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Substring => write!(f, "substring"),
            MatchMode::WholeWord => write!(f, "whole-word"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "whole-word" | "whole_word" | "word" => Ok(MatchMode::WholeWord),
            other => Err(AppError::Config(format!("Unknown match mode: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_matches_inside_words() {
        let matcher = SubstringMatcher;
        assert!(matcher.contains("he said so", "ai"));
        assert!(matcher.contains("which one", "hi"));
    }

    #[test]
    fn test_whole_word_rejects_inner_matches() {
        let matcher = WholeWordMatcher::new().unwrap();
        assert!(!matcher.contains("which one", "hi"));
        assert!(matcher.contains("hi there", "hi"));
        assert!(matcher.contains("is fine-tuning hard?", "fine-tuning"));
        assert!(matcher.contains("tell me about the plan", "tell me about"));
    }

    #[test]
    fn test_whole_word_handles_unknown_keyword() {
        let matcher = WholeWordMatcher::new().unwrap();
        assert!(matcher.contains("c++ is fast", "fast"));
        assert!(!matcher.contains("breakfast", "fast"));
    }

    #[test]
    fn test_match_mode_parsing() {
        assert_eq!("substring".parse::<MatchMode>().unwrap(), MatchMode::Substring);
        assert_eq!("Whole-Word".parse::<MatchMode>().unwrap(), MatchMode::WholeWord);
        assert!("fuzzy".parse::<MatchMode>().is_err());
        assert_eq!(MatchMode::WholeWord.to_string(), "whole-word");
    }
}
