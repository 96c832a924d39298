// Requirement extraction and criticality classification
use super::{first_match, Rule};
use crate::extractors::deadline::extract_deadline;
use crate::patterns::{
    contains_any, MANDATORY_KEYWORDS, OPTIONAL_KEYWORDS, RECOMMENDED_KEYWORDS,
    REQUIREMENT_KEYWORDS,
};
use crate::text::paragraphs;
use rfp_types::{Criticality, Requirement, UNRESOLVED_PAGE};

/// Criticality for candidates that match none of the rules (bare "required"/"requirement")
pub const DEFAULT_CRITICALITY: Criticality = Criticality::Optional;

fn is_mandatory(text_lower: &str) -> bool {
    contains_any(text_lower, MANDATORY_KEYWORDS)
}

fn is_recommended(text_lower: &str) -> bool {
    contains_any(text_lower, RECOMMENDED_KEYWORDS)
}

fn is_optional(text_lower: &str) -> bool {
    contains_any(text_lower, OPTIONAL_KEYWORDS)
}

pub const CRITICALITY_RULES: &[Rule<Criticality>] = &[
    Rule {
        matches: is_mandatory,
        outcome: Criticality::Mandatory,
    },
    Rule {
        matches: is_recommended,
        outcome: Criticality::Recommended,
    },
    Rule {
        matches: is_optional,
        outcome: Criticality::Optional,
    },
];

pub fn is_requirement(text_lower: &str) -> bool {
    contains_any(text_lower, REQUIREMENT_KEYWORDS)
}

pub fn classify_criticality(text_lower: &str) -> Criticality {
    first_match(CRITICALITY_RULES, text_lower).unwrap_or(DEFAULT_CRITICALITY)
}

/// Extract requirements from paragraphs of `text`.
///
/// Ids are assigned from `REQ-001` upward and only advance for emitted requirements.
pub fn extract_requirements(text: &str) -> Vec<Requirement> {
    let mut sequence = 0u32;

    paragraphs(text)
        .filter_map(|paragraph| {
            let lower = paragraph.to_lowercase();
            if !is_requirement(&lower) {
                return None;
            }

            sequence += 1;
            Some(Requirement {
                id: Requirement::format_id(sequence),
                description: paragraph.to_string(),
                criticality: classify_criticality(&lower),
                deadline: extract_deadline(paragraph).unwrap_or_default(),
                page_reference: UNRESOLVED_PAGE.to_string(),
            })
        })
        .collect()
}
