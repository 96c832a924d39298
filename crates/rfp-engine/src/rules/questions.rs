// Question detection over sentence segments
use super::{first_match, Rule};
use crate::patterns::{contains_any, IMPLICIT_QUESTION_PHRASES};
use crate::text::{sentences, Sentence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// The sentence carries a question mark
    Explicit,
    /// A declarative request such as "please describe" or "must provide"
    Implicit,
}

fn has_question_mark(text: &str) -> bool {
    text.contains('?')
}

fn has_request_phrase(text_lower: &str) -> bool {
    contains_any(text_lower, IMPLICIT_QUESTION_PHRASES)
}

pub const QUESTION_RULES: &[Rule<QuestionKind>] = &[
    Rule {
        matches: has_question_mark,
        outcome: QuestionKind::Explicit,
    },
    Rule {
        matches: has_request_phrase,
        outcome: QuestionKind::Implicit,
    },
];

/// Classify a single sentence; `None` when it is not a question
pub fn classify(sentence: &Sentence<'_>) -> Option<QuestionKind> {
    first_match(QUESTION_RULES, &sentence.with_closing.to_lowercase())
}

/// Questions posed by the document, in order of appearance
pub fn detect_questions(text: &str) -> Vec<String> {
    sentences(text)
        .iter()
        .filter(|sentence| classify(sentence).is_some())
        .map(|sentence| sentence.text.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detects_explicit_question() {
        let questions = detect_questions("Can vendors provide 24/7 support?");
        assert_eq!(questions, vec!["Can vendors provide 24/7 support"]);
    }

    #[test]
    fn test_detects_implicit_question_from_phrase() {
        let questions = detect_questions("Vendors must provide 24/7 support");
        assert_eq!(questions, vec!["Vendors must provide 24/7 support"]);
    }

    #[test]
    fn test_ignores_plain_statement() {
        assert!(detect_questions("Vendors provide support daily").is_empty());
    }

    #[test]
    fn test_explicit_rule_takes_precedence() {
        let found = sentences("Please describe your process?");
        assert_eq!(classify(&found[0]), Some(QuestionKind::Explicit));
    }

    #[test]
    fn test_phrase_match_is_case_insensitive() {
        let found = sentences("PLEASE EXPLAIN the pricing model.");
        assert_eq!(classify(&found[0]), Some(QuestionKind::Implicit));
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let text = "Intro text. What is the timeline? Insurance is required. \
                    What is the timeline? Closing remarks.";
        assert_eq!(
            detect_questions(text),
            vec![
                "What is the timeline",
                "Insurance is required",
                "What is the timeline",
            ]
        );
    }

    #[test]
    fn test_empty_text_yields_no_questions() {
        assert!(detect_questions("").is_empty());
        assert!(detect_questions("   \n\n ").is_empty());
    }
}
