//! Splitting page text into titled sections.

use regex::Regex;

use super::RelevanceOptions;
use crate::model::Section;
use crate::source::DocumentSource;

/// Sections of one document, ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSections {
    /// File name used in results
    pub name: String,
    pub title: String,
    pub sections: Vec<Section>,
    pub page_count: u32,
}

impl DocumentSections {
    /// A document that could not be read: listed, but contributes nothing.
    pub fn empty(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: file_stem(&name).to_string(),
            name,
            sections: Vec::new(),
            page_count: 0,
        }
    }
}

/// File name without its last extension.
pub(crate) fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if i > 0 => &name[..i],
        _ => name,
    }
}

/// Opens a section at every heading-like paragraph.
#[derive(Debug, Clone)]
pub struct Sectionizer {
    patterns: Vec<Regex>,
    min_paragraph_len: usize,
    max_title_len: usize,
}

impl Sectionizer {
    pub fn new(options: &RelevanceOptions) -> Self {
        Self::with_patterns(default_patterns(), options)
    }

    /// Sectionizer with a custom heading pattern table.
    pub fn with_patterns(patterns: Vec<Regex>, options: &RelevanceOptions) -> Self {
        Self {
            patterns,
            min_paragraph_len: options.min_paragraph_len,
            max_title_len: options.max_title_len,
        }
    }

    /// Whether a paragraph reads as a heading.
    pub fn is_heading(&self, paragraph: &str) -> bool {
        if self.patterns.iter().any(|p| p.is_match(paragraph)) {
            return true;
        }

        paragraph.chars().count() < 100
            && !paragraph.ends_with('.')
            && paragraph.split_whitespace().count() < 15
            && paragraph.chars().next().is_some_and(char::is_uppercase)
    }

    /// Sections of a document. Pages that fail to extract are skipped.
    pub fn sectionize(&self, source: &dyn DocumentSource) -> Vec<Section> {
        let mut pages = Vec::new();
        for page in 1..=source.page_count() {
            match source.page_text(page) {
                Ok(text) => pages.push((page, text)),
                Err(e) => log::warn!("{}: skipping page {}: {}", source.name(), page, e),
            }
        }

        self.split(
            pages.iter().map(|(page, text)| (*page, text.as_str())),
            source.page_count(),
        )
    }

    /// Split page texts into sections.
    ///
    /// A section is recorded with the page on which the next heading closed
    /// it; the last one with `last_page`. Paragraphs before the first
    /// heading and headings without body paragraphs produce nothing.
    pub fn split<'a, I>(&self, pages: I, last_page: u32) -> Vec<Section>
    where
        I: IntoIterator<Item = (u32, &'a str)>,
    {
        let mut sections = Vec::new();
        let mut title: Option<String> = None;
        let mut body: Vec<&str> = Vec::new();

        for (page, text) in pages {
            for paragraph in paragraphs(text) {
                if self.is_heading(paragraph) {
                    if let Some(done) = title.take() {
                        if !body.is_empty() {
                            sections.push(Section::new(done, body.join(" "), page));
                        }
                    }
                    title = Some(paragraph.chars().take(self.max_title_len).collect());
                    body.clear();
                } else if paragraph.chars().count() > self.min_paragraph_len {
                    body.push(paragraph);
                }
            }
        }

        if let Some(done) = title {
            if !body.is_empty() {
                sections.push(Section::new(done, body.join(" "), last_page));
            }
        }

        sections
    }
}

impl Default for Sectionizer {
    fn default() -> Self {
        Self::new(&RelevanceOptions::default())
    }
}

/// The default heading patterns.
pub fn default_patterns() -> Vec<Regex> {
    [
        r"^\d+\.?\s+[A-Z]",
        r"^[A-Z][A-Z\s]{5,}$",
        r"^Chapter\s+\d+",
        r"^Section\s+\d+",
        r"^\d+\.\d+\.?\s+[A-Z]",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
}

/// Blank-line separated blocks, trimmed, empty ones dropped.
fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
}
