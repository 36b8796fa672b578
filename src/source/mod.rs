//! Extraction seam between PDF parsing and the structure heuristics.
//!
//! The outline and relevance pipelines only ever see a [`DocumentSource`]:
//! styled spans and plain text per page, plus an optional metadata title.
//! [`PdfSource`] reads real files through lopdf; [`MemoryDocument`] serves
//! pre-extracted content.

mod layout;
mod memory;
mod pdf;

pub use layout::SpanAggregator;
pub use memory::MemoryDocument;
pub use pdf::PdfSource;

use crate::error::Result;
use crate::model::TextSpan;

/// A document whose pages can be read as styled spans or plain text.
///
/// Page numbers are 1-indexed. A failing page must not poison the rest of
/// the document: callers skip pages that return an error.
pub trait DocumentSource {
    /// File name (or other label) identifying the document in results.
    fn name(&self) -> &str;

    /// Title from document metadata, if any.
    fn metadata_title(&self) -> Option<String>;

    /// Total number of pages.
    fn page_count(&self) -> u32;

    /// Styled spans of a page in reading order.
    fn page_spans(&self, page: u32) -> Result<Vec<TextSpan>>;

    /// Plain text of a page: lines separated by newlines, blocks by blank lines.
    fn page_text(&self, page: u32) -> Result<String> {
        let aggregator = SpanAggregator::default();
        let spans = self.page_spans(page)?;
        Ok(aggregator.page_text(&aggregator.lines(&spans)))
    }
}
