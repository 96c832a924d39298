//! Format dispatch
//!
//! Sends each format tag to the reader that understands it. The analyzer validates tags
//! before reading, so every `FileType` here has a reader.

use rfp_types::{DocumentReader, FileType, ReadDocument, ReadError};
use tracing::debug;

use crate::flow::FlowTextReader;
use crate::pdf::PdfReader;

/// Default reader for the analyzer: lopdf for PDFs, flow text for word-processor bodies
#[derive(Default)]
pub struct ReaderRouter {
    pdf: PdfReader,
    flow: FlowTextReader,
}

impl ReaderRouter {
    pub fn new() -> Self {
        Self::default()
    }

    fn reader_for(&self, file_type: FileType) -> (&'static str, &dyn DocumentReader) {
        match file_type {
            FileType::Pdf => ("pdf", &self.pdf),
            FileType::Docx => ("flow-text", &self.flow),
        }
    }
}

impl DocumentReader for ReaderRouter {
    fn read(&self, bytes: &[u8], file_type: FileType) -> Result<ReadDocument, ReadError> {
        let (name, reader) = self.reader_for(file_type);
        debug!(%file_type, reader = name, "Routing document");
        reader.read(bytes, file_type)
    }
}
