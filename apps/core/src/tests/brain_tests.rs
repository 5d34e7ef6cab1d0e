//! Brain Module Tests
//!
//! Rule precedence, case handling, response variants and the default branch,
//! exercised through the public classifier, selector and assistant.

use crate::brain::keywords::Trigger;
use crate::brain::{
    templates, CourseAssistant, Intent, IntentClassifier, MatchMode, ResponseSelector,
    INTENT_RULES,
};
use crate::models::ConversationContext;

#[cfg(test)]
mod intent_classifier_tests {
    use super::*;

    #[test]
    fn test_every_pricing_keyword_alone_is_pricing() {
        let classifier = IntentClassifier::new();
        let pricing = INTENT_RULES
            .iter()
            .find(|rule| rule.intent == Intent::Pricing)
            .unwrap();

        for trigger in pricing.triggers {
            let Trigger::Phrase(keyword) = trigger else {
                panic!("pricing rule only uses single keywords");
            };
            assert_eq!(
                classifier.classify(keyword),
                Intent::Pricing,
                "Expected Pricing for '{}'",
                keyword
            );
        }
    }

    #[test]
    fn test_overlapping_keywords_follow_rule_order() {
        let classifier = IntentClassifier::new();

        let cases = vec![
            // syllabus (course-creation) before cost (pricing)
            ("What's the cost of a syllabus?", Intent::CourseCreation),
            // python (programming-projects) before course, which and best
            ("Which python course is best?", Intent::ProgrammingProjects),
            // tensorflow (ai-tools) before free (pricing)
            ("Is there a free tensorflow tutorial?", Intent::AiTools),
            // career before prompt (generative-ai) and pay (pricing)
            ("How much does a career in prompt engineering pay?", Intent::Career),
            // plan (pricing) before weekend (time-related) and hello (greeting)
            ("hello, what are your weekend plans", Intent::Pricing),
        ];

        for (message, expected) in cases {
            assert_eq!(
                classifier.classify(message),
                expected,
                "Unexpected intent for '{}'",
                message
            );
        }
    }

    #[test]
    fn test_tell_me_about_shadows_later_rules() {
        let classifier = IntentClassifier::new();

        assert_eq!(
            classifier.classify("tell me about pricing"),
            Intent::ServicesOverview
        );
    }

    #[test]
    fn test_case_insensitive_across_rules() {
        let classifier = IntentClassifier::new();

        let messages = vec![
            "What's the price?",
            "Explain neural networks",
            "Hello",
            "Is this a good CAREER move",
            "random words",
        ];

        for message in messages {
            assert_eq!(
                classifier.classify(&message.to_uppercase()),
                classifier.classify(&message.to_lowercase()),
                "Case changed the intent of '{}'",
                message
            );
        }
    }

    #[test]
    fn test_substring_false_positive_is_preserved() {
        let classifier = IntentClassifier::new();

        // "hi" inside "this", nothing earlier matches
        assert_eq!(classifier.classify("this"), Intent::Greeting);

        let strict = IntentClassifier::for_mode(MatchMode::WholeWord).unwrap();
        assert_eq!(strict.classify("this"), Intent::General);
    }
}

#[cfg(test)]
mod response_selector_tests {
    use super::*;

    #[test]
    fn test_specific_variants() {
        let assistant = CourseAssistant::new();

        let cases = vec![
            (
                "Can you create an AI course for beginners?",
                Intent::CourseCreation,
                templates::COURSE_BEGINNER_AI,
            ),
            (
                "How much does an AI engineer earn?",
                Intent::Career,
                templates::CAREER_SALARY,
            ),
            (
                "What is the difference between AI, ML, and deep learning?",
                Intent::AiConcepts,
                templates::CONCEPTS_AI_ML_DL,
            ),
            (
                "Where is AI heading, what about the future of AI?",
                Intent::AiTrends,
                templates::TRENDS_FUTURE_2025,
            ),
        ];

        for (message, intent, text) in cases {
            let mut ctx = ConversationContext::default();
            let reply = assistant.reply(message, &mut ctx);
            assert_eq!(reply.intent, intent, "intent for '{}'", message);
            assert_eq!(reply.text, text, "text for '{}'", message);
        }
    }

    #[test]
    fn test_shadowed_variant_uses_earlier_rule() {
        let assistant = CourseAssistant::new();
        let mut ctx = ConversationContext::default();

        // "what is" belongs to ai-concepts, which is checked before generative-ai
        let reply = assistant.reply("What is generative AI?", &mut ctx);
        assert_eq!(reply.intent, Intent::AiConcepts);
        assert_eq!(reply.text, templates::AI_CONCEPTS_GENERIC);
    }

    #[test]
    fn test_pricing_free_variant() {
        let selector = ResponseSelector::new();
        let mut ctx = ConversationContext::default();

        assert_eq!(
            selector.respond(Intent::Pricing, "Is it FREE?", &mut ctx),
            templates::PRICING_FREE
        );
        assert_eq!(
            selector.respond(Intent::Pricing, "what does it cost", &mut ctx),
            templates::PRICING_GENERIC
        );
    }
}

#[cfg(test)]
mod conversation_tests {
    use super::*;

    #[test]
    fn test_general_turn_echoes_previous_intent() {
        let assistant = CourseAssistant::new();
        let mut ctx = ConversationContext::default();

        let first = assistant.reply("What's the price?", &mut ctx);
        assert_eq!(first.intent, Intent::Pricing);
        assert_eq!(ctx.last_intent, Some(Intent::Pricing));

        let second = assistant.reply("blah unrelated gibberish", &mut ctx);
        assert_eq!(second.intent, Intent::General);
        assert!(second.text.contains("pricing"), "got: {}", second.text);
        assert_eq!(ctx.last_intent, Some(Intent::General));

        let third = assistant.reply("more gibberish", &mut ctx);
        assert!(third.text.contains("interested in general"));
    }

    #[test]
    fn test_first_turn_greeting_gets_capability_menu() {
        let assistant = CourseAssistant::new();
        let mut ctx = ConversationContext::default();

        let reply = assistant.reply("hi", &mut ctx);
        assert_eq!(reply.intent, Intent::Greeting);
        assert_eq!(reply.text, templates::CAPABILITY_MENU);
    }

    #[test]
    fn test_every_intent_yields_text() {
        let assistant = CourseAssistant::new();
        let messages = vec![
            "what do you do",
            "study plan",
            "jupyter",
            "explain",
            "dataset",
            "udemy",
            "resume",
            "langchain",
            "this website",
            "ethics",
            "buy",
            "duration",
            "popular",
            "buddy",
            "beginner",
            "zzz",
        ];

        let mut seen = Vec::new();
        for message in messages {
            let mut ctx = ConversationContext::default();
            let reply = assistant.reply(message, &mut ctx);
            assert!(!reply.text.is_empty());
            assert_eq!(ctx.last_intent, Some(reply.intent));
            seen.push(reply.intent);
        }

        let mut expected: Vec<Intent> = INTENT_RULES.iter().map(|rule| rule.intent).collect();
        expected.push(Intent::General);
        assert_eq!(seen, expected);
    }
}
