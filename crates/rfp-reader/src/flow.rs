// Unpaginated text reader
use rfp_types::{DocumentReader, FileType, PageText, ReadDocument, ReadError, SourceMetadata};

/// Local file header signature of a ZIP container (raw .docx)
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads already-extracted UTF-8 text as a single page with no page count.
///
/// Word-processor files have no fixed pagination, so the analyzer estimates their page count
/// from the text length. Raw containers are rejected; their body text must be extracted first.
pub struct FlowTextReader;

impl FlowTextReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FlowTextReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for FlowTextReader {
    fn read(&self, bytes: &[u8], file_type: FileType) -> Result<ReadDocument, ReadError> {
        if bytes.starts_with(ZIP_MAGIC) {
            return Err(ReadError::Decode(format!(
                "{} container must be converted to text before analysis",
                file_type
            )));
        }

        let text = std::str::from_utf8(bytes).map_err(|e| ReadError::Encoding(e.to_string()))?;
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

        Ok(ReadDocument {
            pages: vec![PageText::new(1, text.replace("\r\n", "\n"))],
            metadata: SourceMetadata::default(),
        })
    }
}
