//! In-memory document source.

use super::{DocumentSource, SpanAggregator};
use crate::error::{Error, Result};
use crate::model::TextSpan;

/// Font size given to spans synthesized from plain-text pages.
const TEXT_PAGE_FONT_SIZE: f32 = 12.0;

#[derive(Debug, Clone)]
enum MemoryPage {
    Spans(Vec<TextSpan>),
    Text(String),
    Failed(String),
}

/// A document held in memory, page by page.
///
/// Useful for embedding an external extractor and for tests: pages can be
/// styled spans, plain text, or a page that fails to extract.
///
/// # Example
///
/// ```
/// use docsift::model::TextSpan;
/// use docsift::source::{DocumentSource, MemoryDocument};
///
/// let doc = MemoryDocument::new("notes.pdf")
///     .with_spans(vec![TextSpan::new("Chapter 1 Basics", 18.0, 1).at(700.0)])
///     .with_text("Plain second page");
/// assert_eq!(doc.page_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    name: String,
    title: Option<String>,
    pages: Vec<MemoryPage>,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            pages: Vec::new(),
        }
    }

    /// Set the metadata title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a page of styled spans. Span page numbers are rewritten to
    /// the new page's number.
    pub fn with_spans(mut self, spans: Vec<TextSpan>) -> Self {
        let page = self.pages.len() as u32 + 1;
        let spans = spans
            .into_iter()
            .map(|mut span| {
                span.page = page;
                span
            })
            .collect();
        self.pages.push(MemoryPage::Spans(spans));
        self
    }

    /// Append a page of plain text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.pages.push(MemoryPage::Text(text.into()));
        self
    }

    /// Append a page whose extraction fails with the given reason.
    pub fn with_failed_page(mut self, reason: impl Into<String>) -> Self {
        self.pages.push(MemoryPage::Failed(reason.into()));
        self
    }

    fn page(&self, page: u32) -> Result<PageView<'_>> {
        let total = self.page_count();
        if page == 0 || page > total {
            return Err(Error::PageOutOfRange(page, total));
        }
        match &self.pages[(page - 1) as usize] {
            MemoryPage::Spans(spans) => Ok(PageView::Spans(spans)),
            MemoryPage::Text(text) => Ok(PageView::Text(text)),
            MemoryPage::Failed(reason) => {
                Err(Error::TextExtract(format!("Page {}: {}", page, reason)))
            }
        }
    }
}

enum PageView<'a> {
    Spans(&'a [TextSpan]),
    Text(&'a str),
}

/// One uniform span per non-blank line, stepping down the page.
fn text_spans(text: &str, page: u32) -> Vec<TextSpan> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| {
            TextSpan::new(l, TEXT_PAGE_FONT_SIZE, page)
                .at(800.0 - i as f32 * TEXT_PAGE_FONT_SIZE * 1.2)
        })
        .collect()
}

impl DocumentSource for MemoryDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn metadata_title(&self) -> Option<String> {
        self.title.clone()
    }

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_spans(&self, page: u32) -> Result<Vec<TextSpan>> {
        match self.page(page)? {
            PageView::Spans(spans) => Ok(spans.to_vec()),
            PageView::Text(text) => Ok(text_spans(text, page)),
        }
    }

    fn page_text(&self, page: u32) -> Result<String> {
        match self.page(page)? {
            PageView::Text(text) => Ok(text.to_string()),
            PageView::Spans(spans) => {
                let aggregator = SpanAggregator::default();
                Ok(aggregator.page_text(&aggregator.lines(spans)))
            }
        }
    }
}
