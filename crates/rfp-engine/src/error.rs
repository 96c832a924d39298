use rfp_types::{FileType, ReadError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to process {file_type} document: {source}")]
    DocumentReadFailure {
        file_type: FileType,
        #[source]
        source: ReadError,
    },
}
