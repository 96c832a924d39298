//! Keyword tables and compiled patterns shared by the rule modules

use lazy_static::lazy_static;
use regex::Regex;
use rfp_types::InsightLabel;

/// Any of these marks a paragraph as a requirement candidate
pub const REQUIREMENT_KEYWORDS: &[&str] = &["must", "shall", "required", "mandatory", "requirement"];

/// Obligation words that make a requirement Mandatory
pub const MANDATORY_KEYWORDS: &[&str] = &["must", "shall", "mandatory"];

pub const RECOMMENDED_KEYWORDS: &[&str] = &["should"];

pub const OPTIONAL_KEYWORDS: &[&str] = &["may", "optional"];

/// Phrases that turn a declarative sentence into an implicit question to the vendor
pub const IMPLICIT_QUESTION_PHRASES: &[&str] = &[
    "must provide",
    "shall provide",
    "is required",
    "are required",
    "please describe",
    "please explain",
];

lazy_static! {
    /// "by June 30, 2025" - group 1 is the date phrase
    pub static ref DEADLINE_RE: Regex =
        Regex::new(r"(?i)by\s+((?-u:\w)+\s+[0-9]{1,2},\s+[0-9]{4})").unwrap();

    /// Labeled insight patterns, in emission order. Labels and letter classes fold ASCII
    /// case only, so U+017F and U+212A never stand in for 's' or 'k'.
    pub static ref INSIGHT_PATTERNS: Vec<(InsightLabel, Regex)> = vec![
        (
            InsightLabel::Advertiser,
            Regex::new(r"(?i)(?-u:advertiser)[:\s]+((?:(?-u:[A-Za-z0-9])|[\s&])+)").unwrap(),
        ),
        (
            InsightLabel::Agency,
            Regex::new(r"(?i)(?-u:agency)[:\s]+((?:(?-u:[A-Za-z0-9])|[\s&])+)").unwrap(),
        ),
        (
            InsightLabel::Budget,
            Regex::new(r"(?i)(?-u:budget)[:\s]+([$€£]?[0-9,.]+\s*(?-u:[kKmMbB])?)").unwrap(),
        ),
        (
            InsightLabel::Deadline,
            Regex::new(r"(?i)(?-u:deadline)[:\s]+((?:(?-u:[A-Za-z0-9])|[\s,])+)").unwrap(),
        ),
        (
            InsightLabel::TargetDemographics,
            Regex::new(r"(?i)(?-u:target)\s+(?-u:audience|demographics)[:\s]+([^\.]+)").unwrap(),
        ),
    ];
}

/// Check whether already-lowercased text contains any keyword
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}
