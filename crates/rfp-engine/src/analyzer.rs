//! Analysis orchestration
//!
//! Validates the format tag, asks the reader for page text, then runs every pass over the
//! shared text and assembles one `AnalysisResult`. Each call owns its buffers; nothing is
//! cached between calls.

use chrono::{DateTime, Utc};
use rfp_types::{
    AnalysisResult, DocumentMetadata, DocumentReader, FileType, PageText, ReadDocument, ReadError,
};
use tracing::{debug, warn};

use crate::error::AnalyzeError;
use crate::outline::outline;
use crate::rules::insights::extract_insights;
use crate::rules::questions::detect_questions;
use crate::rules::requirements::extract_requirements;
use crate::summary::overview;
use crate::text::PARAGRAPH_SEPARATOR;

/// Characters per page used to estimate page counts for unpaginated formats
pub const CHARS_PER_ESTIMATED_PAGE: usize = 3000;

/// Analyze a source document, stamping defaulted metadata with the current time
pub fn analyze<R: DocumentReader + ?Sized>(
    reader: &R,
    file_buffer: &[u8],
    file_type: &str,
) -> Result<AnalysisResult, AnalyzeError> {
    analyze_at(reader, file_buffer, file_type, Utc::now())
}

/// Analyze a source document with an explicit analysis time.
///
/// The format tag is validated before the reader is invoked; reader failures are wrapped
/// with the attempted format and never retried.
pub fn analyze_at<R: DocumentReader + ?Sized>(
    reader: &R,
    file_buffer: &[u8],
    file_type: &str,
    now: DateTime<Utc>,
) -> Result<AnalysisResult, AnalyzeError> {
    let file_type: FileType = file_type
        .parse()
        .map_err(AnalyzeError::UnsupportedFormat)?;

    debug!(%file_type, bytes = file_buffer.len(), "Reading document");
    let document = reader.read(file_buffer, file_type).map_err(|source| {
        warn!(%file_type, error = %source, "Document reader failed");
        AnalyzeError::DocumentReadFailure { file_type, source }
    })?;

    analyze_document(document, now).map_err(|source| {
        warn!(%file_type, error = %source, "Reader returned invalid pages");
        AnalyzeError::DocumentReadFailure { file_type, source }
    })
}

/// Run every pass over already-decoded pages.
///
/// Fails only when a page is numbered 0; page numbers are 1-based.
pub fn analyze_document(
    document: ReadDocument,
    now: DateTime<Utc>,
) -> Result<AnalysisResult, ReadError> {
    let text = full_text(&document.pages);
    let page_count = resolve_page_count(&document, &text)?;
    let metadata = DocumentMetadata::resolve(&document.metadata, page_count, now);

    let sections = outline(&document.pages);
    let questions = detect_questions(&text);
    let requirements = extract_requirements(&text);
    let insights = extract_insights(&text);
    let summary = overview(&metadata, questions.len(), requirements.len());

    debug!(
        pages = document.pages.len(),
        page_count = metadata.page_count,
        sections = sections.len(),
        questions = questions.len(),
        requirements = requirements.len(),
        insights = insights.len(),
        "Analysis complete"
    );

    Ok(AnalysisResult {
        text,
        metadata,
        sections,
        questions,
        requirements,
        insights,
        summary,
    })
}

/// Page count that covers every returned page.
///
/// The reported count (or the length estimate) is raised to the highest page number so every
/// section's start page stays within `1..=page_count`.
pub fn resolve_page_count(document: &ReadDocument, text: &str) -> Result<u32, ReadError> {
    if document.pages.iter().any(|page| page.page_number == 0) {
        return Err(ReadError::Decode(
            "page numbers start at 1, got page 0".to_string(),
        ));
    }

    let reported = document
        .metadata
        .page_count
        .unwrap_or_else(|| estimate_page_count(text));
    let highest = document
        .pages
        .iter()
        .map(|page| page.page_number)
        .max()
        .unwrap_or(1);

    Ok(reported.max(highest).max(1))
}

/// Page texts joined by blank lines
pub fn full_text(pages: &[PageText]) -> String {
    pages
        .iter()
        .map(|page| page.text.as_str())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

/// `ceil(len / 3000)` in UTF-16 code units, never below one page
pub fn estimate_page_count(text: &str) -> u32 {
    let pages = text.encode_utf16().count().div_ceil(CHARS_PER_ESTIMATED_PAGE);
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}
