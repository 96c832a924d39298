//! PDF reader backed by lopdf
//!
//! Page text comes from the text-showing operators of each page's content stream. Line
//! breaks are inserted where the content stream starts a new text line, so headings and
//! body lines survive as separate lines for outlining.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId};
use rfp_types::{DocumentReader, FileType, PageText, ReadDocument, ReadError, SourceMetadata};
use tracing::{debug, warn};

use crate::date::parse_pdf_date;

/// TJ adjustments below this (in thousandths of an em) are treated as word gaps
const WORD_GAP_ADJUSTMENT: f32 = -100.0;

/// Reads PDF bytes into per-page text and Info metadata
pub struct PdfReader;

impl PdfReader {
    pub fn new() -> Self {
        Self
    }

    fn read_pdf(&self, bytes: &[u8]) -> Result<ReadDocument, ReadError> {
        let doc = Document::load_mem(bytes).map_err(|e| ReadError::Decode(e.to_string()))?;

        let page_ids = doc.get_pages();
        if page_ids.is_empty() {
            return Err(ReadError::Empty);
        }

        let pages: Vec<PageText> = page_ids
            .iter()
            .map(|(&page_number, &page_id)| PageText::new(page_number, page_text(&doc, page_id)))
            .collect();

        let page_count = u32::try_from(pages.len()).unwrap_or(u32::MAX);
        debug!(page_count, "Extracted PDF text");

        Ok(ReadDocument {
            pages,
            metadata: SourceMetadata {
                page_count: Some(page_count),
                ..info_metadata(&doc)
            },
        })
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for PdfReader {
    fn read(&self, bytes: &[u8], _file_type: FileType) -> Result<ReadDocument, ReadError> {
        self.read_pdf(bytes)
    }
}

/// Text of one page; unreadable content streams yield an empty page
fn page_text(doc: &Document, page_id: ObjectId) -> String {
    let operations = match doc
        .get_page_content(page_id)
        .and_then(|content| Content::decode(&content))
    {
        Ok(content) => content.operations,
        Err(e) => {
            warn!(?page_id, error = %e, "Skipping unreadable page content");
            return String::new();
        }
    };

    let mut text = String::new();
    for op in &operations {
        apply_operation(&mut text, op);
    }
    text.trim_end_matches('\n').to_string()
}

fn apply_operation(text: &mut String, op: &Operation) {
    match op.operator.as_str() {
        "Tj" | "TJ" => {
            for operand in &op.operands {
                push_operand_text(text, operand);
            }
        }
        // Move to the next line, then show the last operand
        "'" | "\"" => {
            break_line(text);
            if let Some(operand) = op.operands.last() {
                push_operand_text(text, operand);
            }
        }
        "T*" | "ET" => break_line(text),
        "Td" | "TD" => {
            let moves_vertically = op
                .operands
                .get(1)
                .and_then(|ty| ty.as_float().ok())
                .is_some_and(|ty| ty != 0.0);
            if moves_vertically {
                break_line(text);
            }
        }
        _ => {}
    }
}

fn break_line(text: &mut String) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
}

fn push_operand_text(text: &mut String, operand: &Object) {
    match operand {
        Object::String(bytes, _) => text.push_str(&decode_pdf_string(bytes)),
        Object::Array(items) => {
            for item in items {
                match item {
                    Object::String(bytes, _) => text.push_str(&decode_pdf_string(bytes)),
                    other => {
                        let is_word_gap = other
                            .as_float()
                            .is_ok_and(|adjustment| adjustment < WORD_GAP_ADJUSTMENT);
                        if is_word_gap {
                            text.push(' ');
                        }
                    }
                }
            }
        }
        _ => {}
    }
}

/// Decode a PDF string: UTF-16BE with byte-order mark, then UTF-8, then Latin-1
pub fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(body) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn info_string(info: &Dictionary, key: &[u8]) -> Option<String> {
    match info.get(key).ok()? {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        _ => None,
    }
}

/// Title, author and creation date from the trailer Info dictionary
fn info_metadata(doc: &Document) -> SourceMetadata {
    let Some(info) = info_dictionary(doc) else {
        return SourceMetadata::default();
    };

    SourceMetadata {
        title: info_string(info, b"Title"),
        author: info_string(info, b"Author"),
        creation_date: info_string(info, b"CreationDate").and_then(|raw| parse_pdf_date(&raw)),
        page_count: None,
    }
}
