pub mod reader;
pub mod types;

pub use reader::{DocumentReader, FileType, ReadDocument, ReadError, SourceMetadata};
pub use types::{
    AnalysisResult, Criticality, DocumentMetadata, Insight, InsightLabel, PageText,
    ParseCriticalityError, Requirement, Section, DEFAULT_AUTHOR, DEFAULT_TITLE, UNRESOLVED_PAGE,
};
