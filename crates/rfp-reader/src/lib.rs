//! Document readers for the RFP analyzer
//!
//! - `PdfReader`: page text and Info metadata through lopdf
//! - `FlowTextReader`: unpaginated UTF-8 text (word-processor bodies converted upstream)
//! - `ReaderRouter`: picks one of the above by format tag

pub mod date;
pub mod flow;
pub mod pdf;
pub mod router;

pub use flow::FlowTextReader;
pub use pdf::PdfReader;
pub use router::ReaderRouter;
