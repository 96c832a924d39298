//! Plain-language summaries of an analysis
//!
//! `overview` is the one-line description stored on every result. `key_sections` and
//! `executive_summary` build the longer narrative offered to editors: each known RFP topic
//! is located by keyword and its opening characters are stitched into fixed sentences.

use lazy_static::lazy_static;
use regex::Regex;
use rfp_types::DocumentMetadata;

use crate::text::PARAGRAPH_SEPARATOR;

/// Characters of a section quoted in the executive summary
pub const SECTION_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    ScopeOfWork,
    Requirements,
    EvaluationCriteria,
    Timeline,
    Budget,
}

struct TopicPattern {
    topic: Topic,
    detect: Regex,
    heading: Regex,
}

impl TopicPattern {
    fn new(topic: Topic, keyword: &str) -> Self {
        Self {
            topic,
            detect: Regex::new(&format!("(?i){}", keyword)).unwrap(),
            heading: Regex::new(&format!(r"(?i){}[:\s]*", keyword)).unwrap(),
        }
    }
}

lazy_static! {
    /// Search order for key sections
    static ref TOPIC_PATTERNS: Vec<TopicPattern> = vec![
        TopicPattern::new(Topic::ScopeOfWork, r"scope\s+of\s+work"),
        TopicPattern::new(Topic::Requirements, "requirements"),
        TopicPattern::new(Topic::EvaluationCriteria, r"evaluation\s+criteria"),
        TopicPattern::new(Topic::Timeline, "timeline"),
        TopicPattern::new(Topic::Budget, "budget"),
    ];
}

/// A paragraph that introduces a known topic, plus the paragraph after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySection {
    pub topic: Topic,
    pub text: String,
}

/// One-line description of an analysis
pub fn overview(metadata: &DocumentMetadata, questions: usize, requirements: usize) -> String {
    format!(
        "This is an RFP document titled \"{}\" with {} pages. It contains {} questions and {} requirements.",
        metadata.title, metadata.page_count, questions, requirements
    )
}

/// Locate the first paragraph mentioning each topic.
///
/// Paragraphs are split on blank lines without trimming or filtering. A found section also
/// carries the following paragraph when that one is non-empty.
pub fn key_sections(text: &str) -> Vec<KeySection> {
    let paragraphs: Vec<&str> = text.split(PARAGRAPH_SEPARATOR).collect();

    TOPIC_PATTERNS
        .iter()
        .filter_map(|pattern| {
            let index = paragraphs.iter().position(|p| pattern.detect.is_match(p))?;
            let mut section = paragraphs[index].to_string();
            if let Some(next) = paragraphs.get(index + 1).filter(|next| !next.is_empty()) {
                section.push_str(PARAGRAPH_SEPARATOR);
                section.push_str(next);
            }
            Some(KeySection {
                topic: pattern.topic,
                text: section,
            })
        })
        .collect()
}

fn preview(section: &KeySection) -> String {
    let head: String = section.text.chars().take(SECTION_PREVIEW_CHARS).collect();
    TOPIC_PATTERNS
        .iter()
        .find(|pattern| pattern.topic == section.topic)
        .map(|pattern| pattern.heading.replace(&head, "").into_owned())
        .unwrap_or(head)
}

/// Narrative summary assembled from key sections
pub fn executive_summary(sections: &[KeySection]) -> String {
    let find = |topic: Topic| sections.iter().find(|s| s.topic == topic).map(preview);

    let mut summary = String::from("This RFP requests proposals for ");

    match find(Topic::ScopeOfWork) {
        Some(scope) => {
            summary.push_str(&scope);
            summary.push_str(". ");
        }
        None => summary.push_str("services as detailed in the document. "),
    }

    if let Some(requirements) = find(Topic::Requirements) {
        summary.push_str(&format!("Key requirements include {}. ", requirements));
    }

    if let Some(timeline) = find(Topic::Timeline) {
        summary.push_str(&format!("The project timeline indicates {}. ", timeline));
    }

    if let Some(budget) = find(Topic::Budget) {
        summary.push_str(&format!("Budget considerations include {}. ", budget));
    }

    if let Some(criteria) = find(Topic::EvaluationCriteria) {
        summary.push_str(&format!("Proposals will be evaluated based on {}.", criteria));
    }

    summary
}
