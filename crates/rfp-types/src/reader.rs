//! Boundary between the analysis core and whatever decodes source files
//!
//! Readers turn raw bytes into per-page text plus whatever metadata the container carries.
//! The core never looks at binary structure itself.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::PageText;

/// Source formats accepted at the analysis boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Docx,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = String;

    /// Tags are matched exactly: "PDF" or " pdf" are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(FileType::Pdf),
            "docx" => Ok(FileType::Docx),
            other => Err(other.to_string()),
        }
    }
}

/// Metadata as reported by the container; every field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    /// `None` for formats without real pagination
    pub page_count: Option<u32>,
}

/// Output of a successful read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadDocument {
    pub pages: Vec<PageText>,
    pub metadata: SourceMetadata,
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Failed to decode document: {0}")]
    Decode(String),

    #[error("Unsupported text encoding: {0}")]
    Encoding(String),

    #[error("Document contains no pages")]
    Empty,
}

/// Decodes source bytes into page text
pub trait DocumentReader {
    fn read(&self, bytes: &[u8], file_type: FileType) -> Result<ReadDocument, ReadError>;
}

impl<R: DocumentReader + ?Sized> DocumentReader for &R {
    fn read(&self, bytes: &[u8], file_type: FileType) -> Result<ReadDocument, ReadError> {
        (**self).read(bytes, file_type)
    }
}

impl<R: DocumentReader + ?Sized> DocumentReader for Box<R> {
    fn read(&self, bytes: &[u8], file_type: FileType) -> Result<ReadDocument, ReadError> {
        (**self).read(bytes, file_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_accepts_exact_tags() {
        assert_eq!("pdf".parse::<FileType>(), Ok(FileType::Pdf));
        assert_eq!("docx".parse::<FileType>(), Ok(FileType::Docx));
    }

    #[test]
    fn test_file_type_rejects_other_tags() {
        for tag in ["PDF", "Docx", "xlsx", "", " pdf", "doc"] {
            assert_eq!(tag.parse::<FileType>(), Err(tag.to_string()));
        }
    }

    #[test]
    fn test_file_type_display_matches_tag() {
        assert_eq!(FileType::Pdf.to_string(), "pdf");
        assert_eq!(FileType::Docx.to_string(), "docx");
    }
}
