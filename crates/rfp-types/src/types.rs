use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reader::SourceMetadata;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// Page reference assigned at extraction time; page resolution only happens in downstream edits
pub const UNRESOLVED_PAGE: &str = "N/A";

/// Text of a single page as handed over by a document reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    pub page_number: u32, // 1-based
    pub text: String,
}

impl PageText {
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub creation_date: DateTime<Utc>,
    pub page_count: u32,
}

impl DocumentMetadata {
    /// Fill reader-reported metadata with defaults.
    ///
    /// Missing or empty title/author fall back to "Untitled"/"Unknown", a missing creation
    /// date falls back to `now`. The page count is clamped to at least 1.
    pub fn resolve(source: &SourceMetadata, page_count: u32, now: DateTime<Utc>) -> Self {
        Self {
            title: non_empty(source.title.as_deref()).unwrap_or(DEFAULT_TITLE).to_string(),
            author: non_empty(source.author.as_deref()).unwrap_or(DEFAULT_AUTHOR).to_string(),
            creation_date: source.creation_date.unwrap_or(now),
            page_count: page_count.max(1),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// An outline entry opened by a header line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub level: u8, // 1 = all-caps heading, 2 = colon-terminated heading
    pub content: String,
    pub start_page: u32,
}

impl Section {
    pub fn open(title: impl Into<String>, level: u8, start_page: u32) -> Self {
        Self {
            title: title.into(),
            level,
            content: String::new(),
            start_page,
        }
    }
}

/// Obligation strength of a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criticality {
    Mandatory,
    Recommended,
    Optional,
    #[serde(rename = "Nice-to-Have")]
    NiceToHave,
}

impl Criticality {
    pub const ALL: [Criticality; 4] = [
        Criticality::Mandatory,
        Criticality::Recommended,
        Criticality::Optional,
        Criticality::NiceToHave,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criticality::Mandatory => "Mandatory",
            Criticality::Recommended => "Recommended",
            Criticality::Optional => "Optional",
            Criticality::NiceToHave => "Nice-to-Have",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown criticality: {0}")]
pub struct ParseCriticalityError(pub String);

impl FromStr for Criticality {
    type Err = ParseCriticalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criticality::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCriticalityError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: String, // e.g., "REQ-001"
    pub description: String,
    pub criticality: Criticality,
    pub deadline: String, // empty when no deadline was found
    pub page_reference: String,
}

impl Requirement {
    /// Format a 1-based sequence number as a requirement id
    pub fn format_id(sequence: u32) -> String {
        format!("REQ-{:03}", sequence)
    }

    pub fn has_deadline(&self) -> bool {
        !self.deadline.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsightLabel {
    Advertiser,
    Agency,
    Budget,
    Deadline,
    #[serde(rename = "Target Demographics")]
    TargetDemographics,
}

impl InsightLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightLabel::Advertiser => "Advertiser",
            InsightLabel::Agency => "Agency",
            InsightLabel::Budget => "Budget",
            InsightLabel::Deadline => "Deadline",
            InsightLabel::TargetDemographics => "Target Demographics",
        }
    }
}

/// A labeled fact, rendered as `"<Label>: <value>"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub label: InsightLabel,
    pub value: String,
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label.as_str(), self.value)
    }
}

/// Complete analysis of one document.
///
/// Never mutated after it is returned; editors work on copies produced by the `with_*`
/// methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub metadata: DocumentMetadata,
    pub sections: Vec<Section>,
    pub questions: Vec<String>,
    pub requirements: Vec<Requirement>,
    pub insights: Vec<Insight>,
    pub summary: String,
}

impl AnalysisResult {
    /// Copy of this result with the requirement sharing `edited.id` replaced.
    ///
    /// Unknown ids leave the copy identical to `self`.
    pub fn with_requirement(&self, edited: Requirement) -> Self {
        let requirements = self
            .requirements
            .iter()
            .map(|req| {
                if req.id == edited.id {
                    edited.clone()
                } else {
                    req.clone()
                }
            })
            .collect();

        Self {
            requirements,
            ..self.clone()
        }
    }

    pub fn requirement(&self, id: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.id == id)
    }
}
