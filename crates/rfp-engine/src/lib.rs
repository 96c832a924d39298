//! Rule-based RFP analysis
//!
//! Turns page text from a document reader into a section outline, question list,
//! classified requirements and labeled insights. Every pass is a deterministic heuristic
//! over plain text; nothing here inspects binary document formats.

pub mod analyzer;
pub mod error;
pub mod extractors;
pub mod outline;
pub mod patterns;
pub mod rules;
pub mod summary;
pub mod text;

pub use analyzer::{analyze, analyze_at, analyze_document};
pub use error::AnalyzeError;
pub use outline::outline;
pub use rules::insights::extract_insights;
pub use rules::questions::detect_questions;
pub use rules::requirements::extract_requirements;
pub use summary::{executive_summary, key_sections, KeySection, Topic};

use rfp_types::{
    AnalysisResult, DocumentReader, PageText, ReadDocument, ReadError, SourceMetadata,
};

/// RfpEngine entry point
pub struct RfpEngine;

impl RfpEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze<R: DocumentReader + ?Sized>(
        &self,
        reader: &R,
        file_buffer: &[u8],
        file_type: &str,
    ) -> Result<AnalysisResult, AnalyzeError> {
        analyze(reader, file_buffer, file_type)
    }

    /// Analyze text that is already in hand, as a single unpaginated page
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisResult, ReadError> {
        let document = ReadDocument {
            pages: vec![PageText::new(1, text)],
            metadata: SourceMetadata::default(),
        };
        analyze_document(document, chrono::Utc::now())
    }

    /// Narrative summary of an existing result
    pub fn executive_summary(&self, result: &AnalysisResult) -> String {
        executive_summary(&key_sections(&result.text))
    }
}

impl Default for RfpEngine {
    fn default() -> Self {
        Self::new()
    }
}
